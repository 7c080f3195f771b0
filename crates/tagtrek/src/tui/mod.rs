//! TUI - the interactive tutorial shell.
//!
//! Organized into focused components:
//! - event_loop: terminal setup, key handling, main loop
//! - render: drawing the roadmap, editor, preview, and overlays
//! - editor: the plain-text editing buffer
//! - state: central TUI state and view transitions

pub mod editor;
mod event_loop;
mod render;
pub mod state;

pub use event_loop::run;
