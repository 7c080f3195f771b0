//! Validator - grades a submission against a level's declarative checks.
//!
//! Grading is intentionally lightweight: the submission is normalized
//! (whitespace runs collapsed, lowercased) and then matched against an
//! ordered list of substring checks. The first failing check's message is
//! surfaced to the learner. There is no structural parsing; a submission
//! can satisfy every check without being well-formed markup. That is an
//! accepted limitation of the grading model, not a bug.

use crate::catalog::Level;

/// One declarative grading rule. Rules are data, not code: every level's
/// rule set is a slice of these, evaluated by [`validate`] in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The normalized submission must contain `needle`.
    Contains {
        needle: &'static str,
        error: &'static str,
    },
    /// At least one of `needles` must be present. Used where the learner
    /// may quote attributes with either single or double quotes.
    ContainsAny {
        needles: &'static [&'static str],
        error: &'static str,
    },
    /// `needle` must occur at least `min` times.
    CountAtLeast {
        needle: &'static str,
        min: usize,
        error: &'static str,
    },
    /// Every needle must appear between the first `open` and the following
    /// `close`. When `close` is absent the enclosed region extends to the
    /// end of the submission, matching how the reference grader sliced.
    Within {
        open: &'static str,
        close: &'static str,
        needles: &'static [&'static str],
        error: &'static str,
    },
}

impl Check {
    /// Evaluate this check against an already-normalized submission.
    fn eval(&self, clean: &str) -> Result<(), &'static str> {
        match *self {
            Check::Contains { needle, error } => {
                if clean.contains(needle) {
                    Ok(())
                } else {
                    Err(error)
                }
            }
            Check::ContainsAny { needles, error } => {
                if needles.iter().any(|n| clean.contains(n)) {
                    Ok(())
                } else {
                    Err(error)
                }
            }
            Check::CountAtLeast { needle, min, error } => {
                if clean.matches(needle).count() >= min {
                    Ok(())
                } else {
                    Err(error)
                }
            }
            Check::Within {
                open,
                close,
                needles,
                error,
            } => {
                let Some(start) = clean.find(open) else {
                    return Err(error);
                };
                let inner = &clean[start + open.len()..];
                let inner = match inner.find(close) {
                    Some(end) => &inner[..end],
                    None => inner,
                };
                if needles.iter().all(|n| inner.contains(n)) {
                    Ok(())
                } else {
                    Err(error)
                }
            }
        }
    }
}

/// Outcome of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed(String),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Verdict::Passed => None,
            Verdict::Failed(msg) => Some(msg),
        }
    }
}

/// Collapse every whitespace run to a single space and lowercase.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Grade `submitted` against `level`. Pure and deterministic: no I/O,
/// no side effects. Returns the first failing check's message.
pub fn validate(level: &Level, submitted: &str) -> Verdict {
    let clean = normalize(submitted);
    for check in level.checks {
        if let Err(msg) = check.eval(&clean) {
            return Verdict::Failed(msg.to_string());
        }
    }
    Verdict::Passed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_lowercases() {
        assert_eq!(normalize("<H1>\n  Hello\tUniverse </H1>"), "<h1> hello universe </h1>");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn contains_check_matches_normalized_text() {
        let check = Check::Contains {
            needle: "hello universe",
            error: "missing",
        };
        assert!(check.eval("<h1>hello universe</h1>").is_ok());
        assert_eq!(check.eval("<h1>hello</h1>"), Err("missing"));
    }

    #[test]
    fn contains_any_accepts_either_quote_style() {
        let check = Check::ContainsAny {
            needles: &["type='checkbox'", "type=\"checkbox\""],
            error: "missing checkbox",
        };
        assert!(check.eval("<input type='checkbox'>").is_ok());
        assert!(check.eval("<input type=\"checkbox\">").is_ok());
        assert_eq!(check.eval("<input type=text>"), Err("missing checkbox"));
    }

    #[test]
    fn count_at_least_counts_occurrences() {
        let check = Check::CountAtLeast {
            needle: "radio",
            min: 2,
            error: "need two",
        };
        assert!(check.eval("type='radio' type='radio'").is_ok());
        assert_eq!(check.eval("type='radio'"), Err("need two"));
    }

    #[test]
    fn within_requires_needles_between_open_and_close() {
        let check = Check::Within {
            open: "<div>",
            close: "</div>",
            needles: &["<h1>", "<p>"],
            error: "must be inside",
        };
        assert!(check.eval("<div><h1>a</h1><p>b</p></div>").is_ok());
        // Children outside the div do not count.
        assert_eq!(check.eval("<div></div><h1>a</h1><p>b</p>"), Err("must be inside"));
        // Missing the open tag fails outright.
        assert_eq!(check.eval("<h1>a</h1><p>b</p>"), Err("must be inside"));
    }

    #[test]
    fn within_extends_to_end_when_close_is_missing() {
        let check = Check::Within {
            open: "<div>",
            close: "</div>",
            needles: &["<h1>"],
            error: "must be inside",
        };
        assert!(check.eval("<div><h1>a</h1>").is_ok());
    }
}
