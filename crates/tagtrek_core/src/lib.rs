//! TagTrek core - mission catalog, validator, and progression state machine
//!
//! Everything terminal-independent lives here: the static level catalog,
//! the substring-based validator, the learner's progression state, and
//! session persistence. The `tagtrek` binary crate wires this into a TUI.

pub mod catalog;
pub mod error;
pub mod progress;
pub mod session;
pub mod validator;

pub use catalog::{catalog, level, Level, LevelId, LAST_LEVEL_ID};
pub use error::CoreError;
pub use progress::{Advance, LevelStatus, Progress, SCORE_PER_LEVEL};
pub use validator::{validate, Verdict};
