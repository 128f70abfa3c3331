//! Answer normalization and checking
//!
//! Matching is exact membership against the canonical answer and its
//! alternates after normalization. No substring matching, no fuzzing, no
//! punctuation stripping: "4." only matches if the catalog lists it.

use crate::catalog::RiddleRecord;

/// Normalize an answer string: trim, case-fold, collapse internal
/// whitespace runs to single spaces
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Check a submitted answer against a riddle
///
/// An answer that normalizes to the empty string is always wrong.
pub fn evaluate(riddle: &RiddleRecord, raw_answer: &str) -> bool {
    let submitted = normalize(raw_answer);
    if submitted.is_empty() {
        return false;
    }
    submitted == riddle.canonical_answer
        || riddle.alternate_answers.iter().any(|alt| *alt == submitted)
}
