//! TagTrek - learn HTML through terminal missions.

use anyhow::Result;
use clap::Parser;
use tagtrek::cli::{Cli, Commands};
use tagtrek::{commands, logging, tui};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dir = commands::data_dir(cli.data_dir)?;

    match cli.command {
        Some(Commands::Levels) => {
            logging::init_stderr();
            commands::levels(&dir)
        }
        Some(Commands::Status { json }) => {
            logging::init_stderr();
            commands::status(&dir, json)
        }
        Some(Commands::Reset { yes }) => {
            logging::init_stderr();
            commands::reset(&dir, yes)
        }
        None => {
            logging::init_file(&dir.join("tagtrek.log"))?;
            tui::run(&dir)
        }
    }
}
