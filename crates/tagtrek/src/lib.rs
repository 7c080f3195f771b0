//! TagTrek binary crate - CLI surface and terminal UI.
//!
//! Modules are exported for the integration tests; the `tagtrek` binary in
//! `main.rs` is a thin dispatcher over them.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod tui;
