//! Catalog self-consistency: every mission's own reference solution must
//! satisfy its checks, and the empty/starter buffers must not.

use tagtrek_core::{catalog, validate};

#[test]
fn reference_solutions_pass_their_own_checks() {
    for level in catalog() {
        let verdict = validate(level, level.solution_example);
        assert!(
            verdict.passed(),
            "level {} solution rejected: {:?}",
            level.id,
            verdict.error()
        );
    }
}

#[test]
fn empty_submission_fails_every_level_with_a_message() {
    for level in catalog() {
        let verdict = validate(level, "");
        assert!(!verdict.passed(), "level {} accepted empty input", level.id);
        let msg = verdict.error().unwrap_or("");
        assert!(!msg.is_empty(), "level {} failed without a message", level.id);
    }
}

#[test]
fn starter_code_never_passes() {
    // Every mission requires an edit; the starter buffer alone must fail.
    for level in catalog() {
        let verdict = validate(level, level.starter_code);
        assert!(
            !verdict.passed(),
            "level {} starter code already passes",
            level.id
        );
    }
}

#[test]
fn grading_is_case_and_whitespace_insensitive() {
    let level = catalog().first().expect("catalog is non-empty");
    let shouty = "<H1>\n\tHELLO    UNIVERSE\n</H1>";
    assert!(validate(level, shouty).passed());
}

#[test]
fn substring_grading_accepts_malformed_but_matching_markup() {
    // Known limitation: checks are substring containment, not parsing.
    // An unclosed h1 whose closing tag appears elsewhere still passes.
    let level = catalog().first().expect("catalog is non-empty");
    let sneaky = "<h1>Hello Universe <p></h1></p>";
    assert!(validate(level, sneaky).passed());
}
