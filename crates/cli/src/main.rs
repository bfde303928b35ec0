use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    eduverse_cli::run().await
}
