use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Resolve the lock and JSON paths for the session store.
///
/// An explicit override (tests, CI) wins; otherwise the store lives in
/// `~/.docchat` next to the config file, with the platform data directory
/// as the no-home fallback. The chosen directory is created and probed
/// for write access before either path is handed out.
pub fn paths(override_dir: Option<&PathBuf>) -> Result<(PathBuf, PathBuf)> {
    let dir = resolve_dir(override_dir)?;
    Ok((dir.join("state.lock"), dir.join("state.json")))
}

fn resolve_dir(override_dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        prepare_dir(dir)?;
        return Ok(dir.clone());
    }

    if let Some(home) = home::home_dir() {
        let dir = home.join(".docchat");
        if prepare_dir(&dir).is_ok() {
            return Ok(dir);
        }
    }

    let dir = dirs::data_local_dir()
        .context(
            "No writable home or data directory for session state. \
             Set state.state_dir_override in config.",
        )?
        .join("docchat");
    prepare_dir(&dir)?;
    Ok(dir)
}

/// A directory only counts once we have proven we can write into it.
fn prepare_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create state directory {}", dir.display()))?;

    let probe = dir.join(".write_probe");
    fs::write(&probe, b"probe")
        .with_context(|| format!("State directory {} is not writable", dir.display()))?;
    let _ = fs::remove_file(&probe);

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct State {
    pub version: String,
    pub session: Option<Session>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            session: None,
        }
    }
}

/// The client side of one backend session: its id and the document most
/// recently loaded into it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub document: Option<LoadedDocument>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoadedDocument {
    pub filename: String,
    pub chunks_count: u32,
    pub source: DocumentSource,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Uploaded,
    Example { id: String },
}

impl State {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).context("Failed to read state file")?;

        // Handle empty file case
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content).context("Failed to parse state JSON")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize state")?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: write to temp file then rename, so a crash mid-write
        // cannot leave a truncated state file behind
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Get the current session, creating one lazily on first use.
    ///
    /// Session ids follow the backend's convention of
    /// `session_<unix-millis>`, so a fresh id is unique per invocation.
    pub fn ensure_session(&mut self) -> &mut Session {
        self.session.get_or_insert_with(|| {
            let now = Utc::now();
            Session {
                id: format!("session_{}", now.timestamp_millis()),
                created_at: now,
                document: None,
            }
        })
    }
}

pub fn with_state_lock<F, R>(lock_path: &Path, state_path: &Path, f: F) -> Result<R>
where
    F: FnOnce(&mut State) -> Result<R>,
{
    if let Some(parent) = lock_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(lock_path)
        .context("Failed to open lock file")?;

    file.lock_exclusive().context("Failed to acquire lock")?;

    // Load state
    let mut state = State::load(state_path)?;

    // Execute closure
    let result = f(&mut state);

    // If success, save state
    if result.is_ok() {
        state.save(state_path)?;
    }

    file.unlock().context("Failed to unlock")?;

    result
}
