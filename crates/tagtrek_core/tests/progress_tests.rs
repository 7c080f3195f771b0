//! Progression state machine scenarios: scoring, unlocking, gating,
//! idempotence, and monotonicity.

use tagtrek_core::{
    catalog, level, Advance, CoreError, Progress, Verdict, LAST_LEVEL_ID, SCORE_PER_LEVEL,
};

fn solution(id: u32) -> &'static str {
    level(id).expect("valid id").solution_example
}

#[test]
fn first_pass_scores_and_unlocks_the_next_level() {
    let mut p = Progress::new();
    let verdict = p.submit("<h1>Hello Universe</h1>");
    assert_eq!(verdict, Verdict::Passed);
    assert_eq!(p.score(), SCORE_PER_LEVEL);
    assert_eq!(p.frontier(), 2);
    assert!(p.passed_this_visit());
}

#[test]
fn failure_surfaces_a_reason_and_changes_nothing() {
    let mut p = Progress::new();
    let verdict = p.submit("<h1>Hello</h1>");
    let msg = verdict.error().expect("failure must carry a message");
    assert!(
        msg.contains("Hello Universe"),
        "error should mention the required text, got: {msg}"
    );
    assert_eq!(p.score(), 0);
    assert_eq!(p.frontier(), 1);
    assert!(!p.passed_this_visit());
}

#[test]
fn repeat_pass_in_the_same_visit_does_not_double_score() {
    let mut p = Progress::new();
    assert!(p.submit(solution(1)).passed());
    assert!(p.submit(solution(1)).passed());
    assert_eq!(p.score(), SCORE_PER_LEVEL);
    assert_eq!(p.frontier(), 2);
}

#[test]
fn revisiting_an_old_level_scores_but_leaves_the_frontier_alone() {
    let mut p = Progress::restore(5, 400);
    p.select(3).expect("level 3 is unlocked at frontier 5");
    assert!(p.submit(solution(3)).passed());
    assert_eq!(p.score(), 500);
    assert_eq!(p.frontier(), 5);
}

#[test]
fn selecting_beyond_the_frontier_is_rejected() {
    let mut p = Progress::restore(5, 0);
    let err = p.select(6).unwrap_err();
    assert!(matches!(
        err,
        CoreError::LockedLevel { requested: 6, frontier: 5 }
    ));
    assert_eq!(p.current(), 5);
}

#[test]
fn selecting_resets_the_transient_pass_flag() {
    let mut p = Progress::new();
    assert!(p.submit(solution(1)).passed());
    assert!(p.passed_this_visit());
    p.select(1).expect("level 1 stays unlocked");
    assert!(!p.passed_this_visit());
}

#[test]
fn advance_moves_to_the_next_sequential_level() {
    let mut p = Progress::new();
    assert!(p.submit(solution(1)).passed());
    assert_eq!(p.advance(), Advance::Moved(2));
    assert_eq!(p.current(), 2);
    assert!(!p.passed_this_visit());
}

#[test]
fn advance_at_the_last_level_signals_catalog_complete() {
    let mut p = Progress::restore(LAST_LEVEL_ID, 0);
    assert!(p.submit(solution(LAST_LEVEL_ID)).passed());
    assert_eq!(p.frontier(), LAST_LEVEL_ID);
    assert_eq!(p.advance(), Advance::CatalogComplete);
    assert_eq!(p.current(), LAST_LEVEL_ID);
}

#[test]
fn frontier_and_score_never_decrease_across_a_full_run() {
    let mut p = Progress::new();
    let mut last_frontier = p.frontier();
    let mut last_score = p.score();

    for lvl in catalog() {
        // A failed attempt first, then the real solution.
        let _ = p.submit("not markup at all");
        assert!(p.submit(lvl.solution_example).passed(), "level {}", lvl.id);
        assert!(p.frontier() >= last_frontier);
        assert!(p.score() >= last_score);
        last_frontier = p.frontier();
        last_score = p.score();

        match p.advance() {
            Advance::Moved(next) => assert_eq!(next, lvl.id + 1),
            Advance::CatalogComplete => assert_eq!(lvl.id, LAST_LEVEL_ID),
        }
    }

    assert_eq!(p.score(), SCORE_PER_LEVEL * LAST_LEVEL_ID);
    assert_eq!(p.frontier(), LAST_LEVEL_ID);
}
