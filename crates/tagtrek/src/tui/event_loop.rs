//! Event loop - terminal setup, key handling, and the main loop.

use super::render::draw_ui;
use super::state::{TuiState, View};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Duration;

/// Run the interactive tutorial until the user quits.
pub fn run(data_dir: &Path) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!("Failed to enable raw mode: {e}. Run tagtrek in a real terminal (TTY).")
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {e}")
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::new(data_dir.to_path_buf());

    let result = run_event_loop(&mut terminal, &mut state);

    // Always attempt terminal restore, then a final best-effort save.
    let cleanup = restore_terminal(&mut terminal);
    state.persist();

    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, state))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Ctrl+C quits from anywhere.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }

        // Overlays swallow input first.
        if state.show_help {
            state.show_help = false;
            continue;
        }
        if state.show_success {
            match key.code {
                KeyCode::Enter | KeyCode::Char('n') => state.next_mission(),
                KeyCode::Esc | KeyCode::Char('m') => state.return_to_map(),
                _ => {}
            }
            continue;
        }

        match state.view {
            View::Roadmap => match key.code {
                KeyCode::Char('q') => break,
                KeyCode::F(1) | KeyCode::Char('?') => state.show_help = true,
                KeyCode::Up | KeyCode::Char('k') => state.roadmap_up(),
                KeyCode::Down | KeyCode::Char('j') => state.roadmap_down(),
                KeyCode::Enter => state.open_selected(),
                _ => {}
            },
            View::Editor => match (key.code, key.modifiers) {
                (KeyCode::Char('r'), KeyModifiers::CONTROL) => state.run_submission(),
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => state.reset_editor(),
                (KeyCode::F(1), _) => state.show_help = true,
                (KeyCode::Esc, _) => state.return_to_map(),
                (KeyCode::Tab, _) => state.toggle_tab(),
                (KeyCode::Enter, _) => state.editor.newline(),
                (KeyCode::Backspace, _) => state.editor.backspace(),
                (KeyCode::Left, _) => state.editor.move_left(),
                (KeyCode::Right, _) => state.editor.move_right(),
                (KeyCode::Up, _) => state.editor.move_up(),
                (KeyCode::Down, _) => state.editor.move_down(),
                (KeyCode::Home, _) => state.editor.move_home(),
                (KeyCode::End, _) => state.editor.move_end(),
                (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                    state.editor.insert_char(c)
                }
                _ => {}
            },
        }
    }

    Ok(())
}
