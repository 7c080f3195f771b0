//! Progression state machine.
//!
//! `Progress` is an explicit value passed around by the shell; there are no
//! ambient globals. All transitions are synchronous and happen in response
//! to a discrete user action: select a mission, submit the editor buffer,
//! advance after a pass. Persistence is the caller's concern (see
//! [`crate::session`]) and happens after each mutating transition.
//!
//! Invariants:
//! - `1 <= current <= frontier <= LAST_LEVEL_ID`
//! - `frontier` and `score` never decrease.
//! - Score grows by exactly [`SCORE_PER_LEVEL`] the first time a submission
//!   passes within a visit; repeat passes in the same visit are no-ops.

use crate::catalog::{catalog, Level, LevelId, LAST_LEVEL_ID};
use crate::error::CoreError;
use crate::validator::{validate, Verdict};

/// Points awarded per first-time pass of a visit.
pub const SCORE_PER_LEVEL: u32 = 100;

/// Where a level sits relative to the learner's frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    /// Below the frontier: passed at some point in the past.
    Completed,
    /// The frontier itself, or the level currently open.
    Unlocked,
    /// Above the frontier: not selectable yet.
    Locked,
}

/// Result of an explicit advance after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next mission.
    Moved(LevelId),
    /// The current mission was the last one; the shell should return to
    /// the overview. Not a data-model terminal state.
    CatalogComplete,
}

/// The learner's session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    frontier: LevelId,
    current: LevelId,
    score: u32,
    /// Transient per-visit pass marker; never persisted. Cleared whenever
    /// the current level changes so revisits always start unattempted.
    passed_this_visit: bool,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Fresh session: frontier 1, current 1, score 0.
    pub fn new() -> Self {
        Self {
            frontier: 1,
            current: 1,
            score: 0,
            passed_this_visit: false,
        }
    }

    /// Rebuild state from persisted scalars. Out-of-range frontier values
    /// (from a hand-edited or stale file) are clamped into 1..=LAST so the
    /// invariants hold from the start. The session resumes at the frontier.
    pub fn restore(frontier: LevelId, score: u32) -> Self {
        let frontier = frontier.clamp(1, LAST_LEVEL_ID);
        Self {
            frontier,
            current: frontier,
            score,
            passed_this_visit: false,
        }
    }

    pub fn frontier(&self) -> LevelId {
        self.frontier
    }

    pub fn current(&self) -> LevelId {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn passed_this_visit(&self) -> bool {
        self.passed_this_visit
    }

    /// The level currently open in the editor.
    pub fn current_level(&self) -> &'static Level {
        // current is kept inside 1..=LAST_LEVEL_ID by every transition,
        // and the catalog is dense, so this index is always valid.
        &catalog()[(self.current - 1) as usize]
    }

    pub fn status_of(&self, id: LevelId) -> LevelStatus {
        if id < self.frontier {
            LevelStatus::Completed
        } else if id <= self.frontier {
            LevelStatus::Unlocked
        } else {
            LevelStatus::Locked
        }
    }

    /// Number of missions behind the frontier.
    pub fn completed_count(&self) -> u32 {
        self.frontier - 1
    }

    /// Open a mission. Rejected when the id is unknown or still locked;
    /// on rejection the current level is unchanged.
    pub fn select(&mut self, id: LevelId) -> Result<(), CoreError> {
        if !(1..=LAST_LEVEL_ID).contains(&id) {
            return Err(CoreError::UnknownLevel(id));
        }
        if id > self.frontier {
            return Err(CoreError::LockedLevel {
                requested: id,
                frontier: self.frontier,
            });
        }
        self.current = id;
        self.passed_this_visit = false;
        Ok(())
    }

    /// Grade `text` against the current mission and apply scoring.
    ///
    /// First pass of this visit: score += [`SCORE_PER_LEVEL`], and when the
    /// current mission is the frontier (and not the last), the frontier
    /// moves up by one. Repeat passes and failures change nothing.
    pub fn submit(&mut self, text: &str) -> Verdict {
        let verdict = validate(self.current_level(), text);
        if verdict.passed() && !self.passed_this_visit {
            self.passed_this_visit = true;
            self.score += SCORE_PER_LEVEL;
            if self.current == self.frontier && self.frontier < LAST_LEVEL_ID {
                self.frontier += 1;
            }
        }
        verdict
    }

    /// Move to the next mission after a pass. At the last mission this
    /// signals catalog completion instead of moving. The next mission is
    /// always unlocked at this point because a frontier pass already
    /// bumped the frontier; the min() keeps the invariant even if a shell
    /// calls this without a pass.
    pub fn advance(&mut self) -> Advance {
        if self.current == LAST_LEVEL_ID {
            return Advance::CatalogComplete;
        }
        let next = (self.current + 1).min(self.frontier);
        if next != self.current {
            self.current = next;
            self.passed_this_visit = false;
        }
        Advance::Moved(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_starts_at_level_one() {
        let p = Progress::new();
        assert_eq!(p.frontier(), 1);
        assert_eq!(p.current(), 1);
        assert_eq!(p.score(), 0);
        assert!(!p.passed_this_visit());
    }

    #[test]
    fn restore_clamps_out_of_range_frontier() {
        let p = Progress::restore(0, 0);
        assert_eq!(p.frontier(), 1);
        let p = Progress::restore(999, 500);
        assert_eq!(p.frontier(), LAST_LEVEL_ID);
        assert_eq!(p.score(), 500);
    }

    #[test]
    fn select_rejects_locked_and_unknown_levels() {
        let mut p = Progress::new();
        assert!(matches!(
            p.select(2),
            Err(CoreError::LockedLevel { requested: 2, frontier: 1 })
        ));
        assert!(matches!(p.select(0), Err(CoreError::UnknownLevel(0))));
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn status_of_tracks_the_frontier() {
        let p = Progress::restore(3, 200);
        assert_eq!(p.status_of(1), LevelStatus::Completed);
        assert_eq!(p.status_of(3), LevelStatus::Unlocked);
        assert_eq!(p.status_of(4), LevelStatus::Locked);
        assert_eq!(p.completed_count(), 2);
    }
}
