//! CLI - command-line argument parsing.
//!
//! Keeps argument parsing separate from execution logic. Running with no
//! subcommand starts the interactive TUI; the subcommands are local
//! inspections of the same saved session the TUI uses.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tagtrek")]
#[command(about = "TagTrek - learn HTML through terminal missions", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Directory where progress is stored (overrides the platform default)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand (if not provided, starts the interactive tutorial)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all missions with lock and completion markers
    Levels,

    /// Show saved progress (frontier, score, completion)
    Status {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Delete saved progress and start over
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
