//! The five checkers.
//!
//! Each checker reads the raw markup and the parsed document, runs a fixed
//! sequence of checks and returns a [`CategoryResult`]. Checkers share no
//! state and can run in any order.

use crate::dom::DocumentHandle;
use crate::result::{CategoryResult, CheckResult, MAX_SCORE};

pub mod content;
pub mod images;
pub mod links;
pub mod performance;
pub mod structure;

/// What every checker reads: raw markup plus its parsed tree.
///
/// Both are borrowed for the length of one analysis and never mutated.
#[derive(Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub html: &'a str,
    pub document: &'a dyn DocumentHandle,
}

impl<'a> AnalysisInput<'a> {
    #[must_use]
    pub fn new(html: &'a str, document: &'a dyn DocumentHandle) -> Self {
        Self { html, document }
    }

    /// Body text content, untrimmed. Empty when the tree has no body.
    pub(crate) fn body_text(&self) -> String {
        self.document.body_text().unwrap_or_default()
    }
}

/// Accumulates check outcomes and points for one category.
///
/// Points are recorded separately from the pass flag because some checks
/// award partial credit while failing.
#[derive(Debug, Default)]
pub(crate) struct CategoryBuilder {
    score: u32,
    checks: Vec<CheckResult>,
}

impl CategoryBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, pass: bool, title: &str, description: String, points: u32) {
        self.score += points;
        self.checks.push(CheckResult::new(pass, title, description));
    }

    pub(crate) fn finish(self) -> CategoryResult {
        debug_assert!(self.score <= MAX_SCORE, "category over-awarded: {}", self.score);
        CategoryResult {
            score: self.score.min(MAX_SCORE),
            max_score: MAX_SCORE,
            checks: self.checks,
        }
    }
}

/// `part / total` as a percentage; an empty population counts as 100%.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
