use crate::OutputFormat;
use crate::api::client::DocChatClient;
use crate::catalog;
use crate::config::Config;
use crate::question::QuestionRunner;
use crate::state::{self, DocumentSource, State};
use crate::timer::format_duration;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

/// Submit a question about the loaded document and display the answer,
/// with a live elapsed-time line while the request is in flight.
pub async fn ask(
    config: &Config,
    question: Option<String>,
    example: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let (_, state_path) = state::paths(config.state.state_dir_override.as_ref())?;

    // Read-only access; the ask path never mutates state.
    let state = State::load(&state_path)?;
    let session = state
        .session
        .as_ref()
        .filter(|s| s.document.is_some())
        .context(
            "No document loaded. Run 'docchat upload <PATH>' or \
             'docchat example load <ID>' first.",
        )?;
    let document = session
        .document
        .as_ref()
        .context("No document loaded in the current session")?;

    let question = resolve_question(question, example.as_deref(), &document.source)?;

    let client = DocChatClient::new(&config.backend.base_url, config.backend.timeout_secs)?;
    let mut runner = match format {
        // JSON output carries the raw markdown, not ANSI escapes
        OutputFormat::Json => QuestionRunner::new(client).with_formatter(str::to_string),
        OutputFormat::Text => QuestionRunner::new(client),
    };
    let timer = runner.timer();

    let outcome = {
        let run = runner.run(&question, &session.id);
        tokio::pin!(run);
        let mut display = tokio::time::interval(Duration::from_secs(1));
        display.tick().await;
        loop {
            tokio::select! {
                outcome = &mut run => break outcome,
                _ = display.tick() => {
                    if matches!(format, OutputFormat::Text) {
                        let tracker = timer.lock().await;
                        if tracker.is_running() {
                            eprint!("\rElapsed: {}s", tracker.elapsed_secs());
                            let _ = std::io::stderr().flush();
                        }
                    }
                }
            }
        }
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Text => {
            // End the carriage-returned elapsed line before real output.
            eprint!("\r");
            if let Some(error) = &outcome.error {
                eprintln!("⚠ Request failed: {}", error);
            }
            println!("{}", outcome.answer);
            if !outcome.verification_report.is_empty() {
                println!("\nVerification report:\n{}", outcome.verification_report);
            }
            if let Some(secs) = outcome.final_secs {
                println!("\n✓ Answered in {}", format_duration(secs));
            }
        }
    }

    Ok(())
}

/// Pick the question text: explicit argument, then the named example's
/// suggested question, then the suggested question of the example the
/// session has loaded.
fn resolve_question(
    question: Option<String>,
    example: Option<&str>,
    source: &DocumentSource,
) -> Result<String> {
    if let Some(q) = question {
        return Ok(q);
    }
    if let Some(id) = example {
        let entry = catalog::find(id).with_context(|| format!("Unknown example id: {}", id))?;
        return Ok(entry.question.to_string());
    }
    if let DocumentSource::Example { id } = source
        && let Some(entry) = catalog::find(id)
    {
        return Ok(entry.question.to_string());
    }
    anyhow::bail!("No question given. Pass one, or use --example <ID> for a suggested question.")
}
