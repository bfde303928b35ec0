use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use eduverse_agent::AgentRuntime;
use eduverse_core::catalog::Catalog;
use eduverse_core::config::AppConfig;
use eduverse_core::ledger::EnrollmentLedger;
use eduverse_core::lms::NoopLms;
use eduverse_core::recommend::{Intent, RecommendationEngine};

/// Interactive front-end adapter: reads utterances from stdin, renders what
/// the engine returns, and exits on EOF or a farewell.
pub async fn run(config: &AppConfig, user_id: &str) -> Result<()> {
    let engine =
        RecommendationEngine::new(Catalog::builtin(), Arc::new(EnrollmentLedger::new()));
    let runtime = if config.lms.enabled {
        AgentRuntime::with_backend(engine, Arc::new(NoopLms))
    } else {
        AgentRuntime::new(engine)
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!(
        "EduVerse course assistant. Ask about web development, data science, mobile apps, or \
         artificial intelligence. Ctrl-D to leave."
    );

    loop {
        write!(stdout, "you> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let response = runtime.handle_utterance(user_id, text).await;
        println!("{}\n", response.text);

        // Same classifier the runtime used for this turn, so the exit check
        // cannot disagree with the reply.
        if runtime.classify(text) == Intent::Farewell {
            break;
        }
    }

    Ok(())
}
