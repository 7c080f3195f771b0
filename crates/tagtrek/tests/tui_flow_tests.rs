//! End-to-end TUI state flows, driven without a terminal.

use tagtrek::tui::editor::EditorBuffer;
use tagtrek::tui::state::{TuiState, View};
use tagtrek_core::{level, session, Progress, LAST_LEVEL_ID, SCORE_PER_LEVEL};

fn fresh_state(dir: &std::path::Path) -> TuiState {
    TuiState::new(dir.to_path_buf())
}

#[test]
fn opening_a_mission_loads_its_starter_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = fresh_state(dir.path());

    assert_eq!(state.view, View::Roadmap);
    state.open_selected();

    assert_eq!(state.view, View::Editor);
    assert_eq!(state.editor.text(), level(1).unwrap().starter_code);
}

#[test]
fn passing_a_mission_scores_saves_and_shows_the_modal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = fresh_state(dir.path());
    state.open_selected();

    state.editor = EditorBuffer::from_text("<h1>Hello Universe</h1>");
    state.run_submission();

    assert!(state.show_success);
    assert_eq!(state.progress.score(), SCORE_PER_LEVEL);
    assert_eq!(state.progress.frontier(), 2);

    // Saved synchronously as part of the transition.
    let reloaded = session::load(dir.path());
    assert_eq!(reloaded.frontier(), 2);
    assert_eq!(reloaded.score(), SCORE_PER_LEVEL);
}

#[test]
fn failing_surfaces_the_reason_in_the_status_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = fresh_state(dir.path());
    state.open_selected();

    state.editor = EditorBuffer::from_text("<h1>Hello</h1>");
    state.run_submission();

    assert!(!state.show_success);
    let msg = state.status_line.as_deref().expect("failure message");
    assert!(msg.contains("Hello Universe"), "got: {msg}");
    assert_eq!(state.progress.score(), 0);
}

#[test]
fn next_mission_enters_the_following_level() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = fresh_state(dir.path());
    state.open_selected();

    state.editor = EditorBuffer::from_text(level(1).unwrap().solution_example);
    state.run_submission();
    state.next_mission();

    assert_eq!(state.view, View::Editor);
    assert_eq!(state.progress.current(), 2);
    assert!(!state.show_success);
    assert_eq!(state.editor.text(), level(2).unwrap().starter_code);
}

#[test]
fn locked_missions_cannot_be_opened_from_the_roadmap() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = fresh_state(dir.path());

    for _ in 0..4 {
        state.roadmap_down();
    }
    state.open_selected();

    assert_eq!(state.view, View::Roadmap);
    let msg = state.status_line.as_deref().expect("lock notice");
    assert!(msg.contains("locked"), "got: {msg}");
    assert_eq!(state.progress.current(), 1);
}

#[test]
fn finishing_the_last_mission_returns_to_the_map() {
    let dir = tempfile::tempdir().expect("tempdir");
    session::save(dir.path(), &Progress::restore(LAST_LEVEL_ID, 0)).expect("seed save");

    let mut state = fresh_state(dir.path());
    assert_eq!(state.progress.current(), LAST_LEVEL_ID);

    state.open_selected();
    state.editor = EditorBuffer::from_text(level(LAST_LEVEL_ID).unwrap().solution_example);
    state.run_submission();
    assert!(state.show_success);

    state.next_mission();
    assert!(state.catalog_complete);
    assert_eq!(state.view, View::Roadmap);
    assert_eq!(state.progress.current(), LAST_LEVEL_ID);
}

#[test]
fn progress_survives_a_new_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut state = fresh_state(dir.path());
        state.open_selected();
        state.editor = EditorBuffer::from_text(level(1).unwrap().solution_example);
        state.run_submission();
    }

    let state = fresh_state(dir.path());
    assert_eq!(state.progress.frontier(), 2);
    assert_eq!(state.progress.score(), SCORE_PER_LEVEL);
    // A restored session resumes at the frontier.
    assert_eq!(state.progress.current(), 2);
}

#[test]
fn reset_editor_restores_the_starter_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = fresh_state(dir.path());
    state.open_selected();

    state.editor = EditorBuffer::from_text("garbage");
    state.reset_editor();
    assert_eq!(state.editor.text(), level(1).unwrap().starter_code);
}
