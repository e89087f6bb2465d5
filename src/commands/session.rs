use crate::config::Config;
use crate::state::{self, DocumentSource, State, with_state_lock};
use anyhow::Result;

/// Show the current session and loaded document.
pub fn show(config: &Config) -> Result<()> {
    let (_, state_path) = state::paths(config.state.state_dir_override.as_ref())?;

    // Read-only; a plain load is enough here.
    let state = State::load(&state_path)?;

    let Some(session) = state.session else {
        println!("No active session.");
        return Ok(());
    };

    println!("Session:");
    println!("  ID: {}", session.id);
    println!("  Created: {}", session.created_at);
    match session.document {
        Some(document) => {
            println!("  Document: {}", document.filename);
            println!("  Chunks: {}", document.chunks_count);
            match &document.source {
                DocumentSource::Uploaded => println!("  Source: uploaded"),
                DocumentSource::Example { id } => println!("  Source: example '{}'", id),
            }
            println!("  Loaded: {}", document.loaded_at);
        }
        None => println!("  Document: none loaded"),
    }

    Ok(())
}

/// Clear the session; the next command that needs one starts fresh.
pub fn reset(config: &Config) -> Result<()> {
    let (lock_path, state_path) = state::paths(config.state.state_dir_override.as_ref())?;

    with_state_lock(&lock_path, &state_path, |state| {
        if state.session.is_none() {
            println!("No active session to reset.");
        } else {
            state.session = None;
            println!("✓ Session cleared. The next command will start a new one.");
        }
        Ok(())
    })
}
