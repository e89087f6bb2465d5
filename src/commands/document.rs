use crate::api::client::DocChatClient;
use crate::catalog;
use crate::config::Config;
use crate::state::{self, DocumentSource, LoadedDocument, with_state_lock};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Upload a local document into the session.
///
/// Checks the extension and size against the configured limits before
/// shipping anything, mirroring the backend's own enforcement, so a doomed
/// upload fails fast on this side.
pub async fn upload(config: &Config, path: &Path) -> Result<()> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file path: {}", path.display()))?
        .to_string();

    preflight(config, path, &filename)?;

    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let (lock_path, state_path) = state::paths(config.state.state_dir_override.as_ref())?;
    let session_id = with_state_lock(&lock_path, &state_path, |state| {
        Ok(state.ensure_session().id.clone())
    })?;

    let client = DocChatClient::new(&config.backend.base_url, config.backend.timeout_secs)?;

    println!("Uploading {}...", filename);
    let response = client
        .upload_file(&filename, bytes, &session_id)
        .await
        .context("Upload failed")?;

    with_state_lock(&lock_path, &state_path, |state| {
        state.ensure_session().document = Some(LoadedDocument {
            filename: filename.clone(),
            chunks_count: response.chunks_count,
            source: DocumentSource::Uploaded,
            loaded_at: Utc::now(),
        });
        Ok(())
    })?;

    println!("✓ Uploaded {} ({} chunks)", filename, response.chunks_count);
    Ok(())
}

/// Load one of the built-in example documents into the session.
pub async fn load_example(config: &Config, id: &str) -> Result<()> {
    let example = catalog::find(id).with_context(|| {
        format!("Unknown example id: {}. Run 'docchat example list' to see the catalog.", id)
    })?;

    let (lock_path, state_path) = state::paths(config.state.state_dir_override.as_ref())?;
    let session_id = with_state_lock(&lock_path, &state_path, |state| {
        Ok(state.ensure_session().id.clone())
    })?;

    let client = DocChatClient::new(&config.backend.base_url, config.backend.timeout_secs)?;

    println!("Loading {}...", example.title);
    let response = client
        .load_file(example.file_name, &session_id)
        .await
        .with_context(|| format!("Failed to load example '{}'", id))?;

    with_state_lock(&lock_path, &state_path, |state| {
        state.ensure_session().document = Some(LoadedDocument {
            filename: response.filename.clone(),
            chunks_count: response.chunks_count,
            source: DocumentSource::Example { id: id.to_string() },
            loaded_at: Utc::now(),
        });
        Ok(())
    })?;

    println!(
        "✓ Loaded {} ({} chunks)",
        response.filename, response.chunks_count
    );
    println!("Suggested question: {}", example.question);
    Ok(())
}

fn preflight(config: &Config, path: &Path, filename: &str) -> Result<()> {
    let lower = filename.to_lowercase();
    if !config
        .upload
        .allowed_types
        .iter()
        .any(|ext| lower.ends_with(ext.as_str()))
    {
        anyhow::bail!(
            "File type not supported: {}. Allowed types: {}",
            filename,
            config.upload.allowed_types.join(", ")
        );
    }

    let size = fs::metadata(path)
        .with_context(|| format!("File not found: {}", path.display()))?
        .len();
    let limit = config.upload.max_file_size_bytes();
    if size > limit {
        anyhow::bail!(
            "File too large: {} is {} bytes, limit is {} MB",
            filename,
            size,
            config.upload.max_file_size_mb
        );
    }

    Ok(())
}
