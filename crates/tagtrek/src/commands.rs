//! CLI subcommand implementations.
//!
//! These inspect and manage the same saved session the TUI plays against.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tagtrek_core::{catalog, session, LevelStatus, Progress, LAST_LEVEL_ID};
use tracing::info;

/// Resolve the data directory: CLI override first, then the platform
/// default.
pub fn data_dir(cli_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = cli_override {
        return Ok(dir);
    }
    session::default_dir().context("no data directory available on this platform; pass --data-dir")
}

/// `tagtrek levels` - print the mission list with markers.
pub fn levels(dir: &Path) -> Result<()> {
    let progress = session::load(dir);
    for level in catalog() {
        let line = format!("Mission {:02}  {}", level.id, level.mission_name);
        match progress.status_of(level.id) {
            LevelStatus::Completed => println!("  {} {}", "✔".green(), line),
            LevelStatus::Unlocked => println!("  {} {}", "▸".cyan(), line.bold()),
            LevelStatus::Locked => println!("  {} {}", "✖".dimmed(), line.dimmed()),
        }
    }
    println!();
    println!("{}", summary_line(&progress));
    Ok(())
}

/// `tagtrek status` - one-line summary or JSON.
pub fn status(dir: &Path, json: bool) -> Result<()> {
    let progress = session::load(dir);
    if json {
        println!("{}", serde_json::to_string_pretty(&status_json(&progress))?);
    } else {
        println!("{}", summary_line(&progress));
    }
    Ok(())
}

/// `tagtrek reset` - delete saved progress after confirmation.
pub fn reset(dir: &Path, yes: bool) -> Result<()> {
    if !yes {
        print!("Delete saved progress? This cannot be undone. [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }
    session::reset(dir)?;
    info!("saved progress deleted");
    println!("Progress reset. All missions locked except Mission 01.");
    Ok(())
}

pub fn status_json(progress: &Progress) -> serde_json::Value {
    serde_json::json!({
        "frontier": progress.frontier(),
        "score": progress.score(),
        "completed": progress.completed_count(),
        "total": LAST_LEVEL_ID,
    })
}

pub fn summary_line(progress: &Progress) -> String {
    format!(
        "Frontier: Mission {:02}/{}  ·  EXP: {}  ·  Completed: {}/{}",
        progress.frontier(),
        LAST_LEVEL_ID,
        progress.score(),
        progress.completed_count(),
        LAST_LEVEL_ID,
    )
}
