pub mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eduverse_core::config::{AppConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "eduverse",
    about = "EduVerse course assistant CLI",
    long_about = "Chat with the EduVerse recommendation engine, inspect the course catalog, \
                  and review effective configuration.",
    after_help = "Examples:\n  eduverse chat\n  eduverse catalog\n  eduverse config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Start an interactive chat session against the recommendation engine")]
    Chat {
        #[arg(
            long,
            default_value = "local-user",
            help = "User identifier the enrollment ledger is keyed by"
        )]
        user: String,
    },
    #[command(about = "List the supported topics and their course content")]
    Catalog,
    #[command(about = "Inspect effective configuration values")]
    Config,
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("config validation failed: {error}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    match cli.command {
        Command::Chat { user } => match commands::chat::run(&config, &user).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("chat session failed: {error}");
                ExitCode::FAILURE
            }
        },
        Command::Catalog => {
            let result = commands::CommandResult { exit_code: 0, output: commands::catalog::run() };
            println!("{}", result.output);
            ExitCode::from(result.exit_code)
        }
        Command::Config => {
            let result =
                commands::CommandResult { exit_code: 0, output: commands::config::run(&config) };
            println!("{}", result.output);
            ExitCode::from(result.exit_code)
        }
    }
}

fn init_logging(config: &AppConfig) {
    use eduverse_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}
