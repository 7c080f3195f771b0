//! Session persistence round-trips and degraded-storage behavior.

use tagtrek_core::{session, Progress, LAST_LEVEL_ID};

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut p = Progress::restore(4, 300);
    p.select(2).expect("unlocked");

    session::save(dir.path(), &p).expect("save");
    let restored = session::load(dir.path());

    assert_eq!(restored.frontier(), 4);
    assert_eq!(restored.score(), 300);
    // The session resumes at the frontier; current level is not persisted.
    assert_eq!(restored.current(), 4);
    assert!(!restored.passed_this_visit());
}

#[test]
fn missing_file_yields_a_fresh_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let p = session::load(dir.path());
    assert_eq!(p.frontier(), 1);
    assert_eq!(p.score(), 0);
}

#[test]
fn corrupt_file_degrades_to_a_fresh_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("session.json"), "{not json").expect("write");
    let p = session::load(dir.path());
    assert_eq!(p.frontier(), 1);
    assert_eq!(p.score(), 0);
}

#[test]
fn out_of_range_frontier_in_file_is_clamped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json = format!(
        r#"{{"frontier": 9999, "score": 100, "last_run": "2026-01-01T00:00:00Z", "app_version": "{}"}}"#,
        env!("CARGO_PKG_VERSION")
    );
    std::fs::write(dir.path().join("session.json"), json).expect("write");
    let p = session::load(dir.path());
    assert_eq!(p.frontier(), LAST_LEVEL_ID);
    assert_eq!(p.score(), 100);
}

#[test]
fn reset_removes_saved_progress() {
    let dir = tempfile::tempdir().expect("tempdir");
    let p = Progress::restore(7, 600);
    session::save(dir.path(), &p).expect("save");

    session::reset(dir.path()).expect("reset");
    let fresh = session::load(dir.path());
    assert_eq!(fresh.frontier(), 1);

    // Resetting twice is fine.
    session::reset(dir.path()).expect("second reset");
}
