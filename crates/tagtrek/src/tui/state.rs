//! Central TUI state - everything rendered on screen comes from this.
//!
//! All transitions are synchronous and run in response to a single key
//! event; persistence happens as a side effect of scoring transitions and
//! on exit. No terminal handles in here, so the whole flow is testable.

use super::editor::EditorBuffer;
use std::path::PathBuf;
use tagtrek_core::{session, Level, LevelId, Progress, Verdict, LAST_LEVEL_ID};
use tracing::{info, warn};

/// Which screen is showing, mirroring the roadmap/editor toggle of the
/// tutorial flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Roadmap,
    Editor,
}

/// Instruction panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionTab {
    Briefing,
    Mission,
}

#[derive(Debug)]
pub struct TuiState {
    pub view: View,
    pub progress: Progress,
    pub editor: EditorBuffer,
    pub tab: InstructionTab,
    /// Roadmap cursor, 0-based index into the catalog.
    pub roadmap_cursor: usize,
    /// Failure reasons and lock notices, shown in the status bar.
    pub status_line: Option<String>,
    pub show_success: bool,
    pub show_help: bool,
    /// Set once the last mission's advance fires; shows the completion
    /// banner on the roadmap.
    pub catalog_complete: bool,
    data_dir: PathBuf,
}

impl TuiState {
    pub fn new(data_dir: PathBuf) -> Self {
        let progress = session::load(&data_dir);
        let editor = EditorBuffer::from_text(progress.current_level().starter_code);
        let roadmap_cursor = (progress.current() - 1) as usize;
        Self {
            view: View::Roadmap,
            progress,
            editor,
            tab: InstructionTab::Briefing,
            roadmap_cursor,
            status_line: None,
            show_success: false,
            show_help: false,
            catalog_complete: false,
            data_dir,
        }
    }

    pub fn current_level(&self) -> &'static Level {
        self.progress.current_level()
    }

    pub fn roadmap_up(&mut self) {
        self.roadmap_cursor = self.roadmap_cursor.saturating_sub(1);
    }

    pub fn roadmap_down(&mut self) {
        if self.roadmap_cursor + 1 < LAST_LEVEL_ID as usize {
            self.roadmap_cursor += 1;
        }
    }

    /// Try to open the mission under the roadmap cursor. Locked missions
    /// are rejected with a notice; the view stays on the roadmap.
    pub fn open_selected(&mut self) {
        let id = (self.roadmap_cursor + 1) as LevelId;
        match self.progress.select(id) {
            Ok(()) => self.enter_editor(),
            Err(e) => self.status_line = Some(e.to_string()),
        }
    }

    fn enter_editor(&mut self) {
        self.editor = EditorBuffer::from_text(self.current_level().starter_code);
        self.tab = InstructionTab::Briefing;
        self.status_line = None;
        self.show_success = false;
        self.view = View::Editor;
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            InstructionTab::Briefing => InstructionTab::Mission,
            InstructionTab::Mission => InstructionTab::Briefing,
        };
    }

    /// Reload the starter code, discarding edits.
    pub fn reset_editor(&mut self) {
        self.editor = EditorBuffer::from_text(self.current_level().starter_code);
        self.status_line = None;
    }

    /// Grade the editor buffer. A pass opens the success modal and saves;
    /// a failure lands in the status bar.
    pub fn run_submission(&mut self) {
        match self.progress.submit(&self.editor.text()) {
            Verdict::Passed => {
                info!(
                    level = self.progress.current(),
                    score = self.progress.score(),
                    "mission passed"
                );
                self.status_line = None;
                self.show_success = true;
                self.persist();
            }
            Verdict::Failed(msg) => {
                self.status_line = Some(format!("Mission failed: {msg}"));
            }
        }
    }

    /// "Next mission" from the success modal. At the last mission this
    /// shows the completion banner and returns to the roadmap instead.
    pub fn next_mission(&mut self) {
        self.show_success = false;
        match self.progress.advance() {
            tagtrek_core::Advance::Moved(_) => self.enter_editor(),
            tagtrek_core::Advance::CatalogComplete => {
                self.catalog_complete = true;
                self.return_to_map();
            }
        }
    }

    pub fn return_to_map(&mut self) {
        self.show_success = false;
        self.view = View::Roadmap;
        self.roadmap_cursor = (self.progress.current() - 1) as usize;
    }

    /// Best-effort save; storage trouble degrades to an in-memory session.
    pub fn persist(&self) {
        if let Err(e) = session::save(&self.data_dir, &self.progress) {
            warn!("could not save progress: {e}");
        }
    }
}
