//! Session persistence - frontier and score survive restarts.
//!
//! Two scalars (frontier, score) plus a little metadata are stored as JSON
//! in the platform data directory. Writes are atomic (temp file + rename)
//! and best effort: a missing, unreadable, or corrupt file degrades
//! silently to a fresh in-memory session, logged at warn level. Storage
//! failures never surface to the learner.

use crate::catalog::LevelId;
use crate::error::CoreError;
use crate::progress::Progress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const SESSION_FILE: &str = "session.json";

/// On-disk session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub frontier: LevelId,
    pub score: u32,
    /// Timestamp of the last save.
    pub last_run: DateTime<Utc>,
    /// Version that wrote the file, for future migrations.
    pub app_version: String,
}

/// Default data directory (`~/.local/share/tagtrek` on Linux). `None` when
/// the platform offers no data directory.
pub fn default_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("tagtrek"))
}

fn session_path(dir: &Path) -> PathBuf {
    dir.join(SESSION_FILE)
}

/// Restore progress from `dir`, falling back to a fresh session when the
/// file is absent or unreadable.
pub fn load(dir: &Path) -> Progress {
    match try_load(dir) {
        Ok(Some(file)) => Progress::restore(file.frontier, file.score),
        Ok(None) => Progress::new(),
        Err(e) => {
            warn!("could not read saved session, starting fresh: {e}");
            Progress::new()
        }
    }
}

fn try_load(dir: &Path) -> Result<Option<SessionFile>, CoreError> {
    let path = session_path(dir);
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path)?;
    let file: SessionFile = serde_json::from_str(&contents)?;
    Ok(Some(file))
}

/// Persist the durable part of `progress` (frontier and score; the
/// transient visit state stays in memory). Atomic via temp file + rename.
pub fn save(dir: &Path, progress: &Progress) -> Result<(), CoreError> {
    fs::create_dir_all(dir)?;
    let file = SessionFile {
        frontier: progress.frontier(),
        score: progress.score(),
        last_run: Utc::now(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    let tmp = dir.join(format!("{SESSION_FILE}.tmp"));
    fs::write(&tmp, json)?;
    fs::rename(&tmp, session_path(dir))?;
    Ok(())
}

/// Delete saved progress. Missing file is fine.
pub fn reset(dir: &Path) -> Result<(), CoreError> {
    let path = session_path(dir);
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
