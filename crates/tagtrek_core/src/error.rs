//! Error types for TagTrek.

use crate::catalog::LevelId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Mission {requested} is locked. Complete mission {frontier} first.")]
    LockedLevel { requested: LevelId, frontier: LevelId },

    #[error("Unknown mission id {0}")]
    UnknownLevel(LevelId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
