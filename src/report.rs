//! Presentation-ready view of an analysis.
//!
//! Nothing here renders markup. [`ReportView`] is the data a presentation
//! layer needs: badge percentages and tiers, check rows with their icons,
//! the score gauge angle, and either the recommendation list or the
//! all-clear message.

use serde::Serialize;

use crate::catalog::ALL_CLEAR_MESSAGE;
use crate::result::{AnalysisReport, CategoryResult, CheckResult, Priority, Recommendation, Status};
use crate::Options;

/// Full view of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub overall_score: u32,
    pub status: StatusView,
    /// Angle of the score gauge, `overall_score * 3.6`.
    pub score_degrees: f64,
    pub categories: Vec<CategoryView>,
    pub recommendations: RecommendationsView,
}

/// A tier with its display label and styling class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub label: &'static str,
    pub class: &'static str,
}

impl From<Status> for StatusView {
    fn from(status: Status) -> Self {
        Self {
            label: status.label(),
            class: status.class(),
        }
    }
}

/// One category card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub key: &'static str,
    pub label: &'static str,
    pub percent: u32,
    pub status: StatusView,
    pub checks: Vec<CheckView>,
}

/// One check row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckView {
    /// `"pass"` or `"fail"`.
    pub status: &'static str,
    /// `✓` or `✗`.
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

impl From<&CheckResult> for CheckView {
    fn from(check: &CheckResult) -> Self {
        let (status, icon) = if check.pass { ("pass", "✓") } else { ("fail", "✗") };
        Self {
            status,
            icon,
            title: check.title.clone(),
            description: check.description.clone(),
        }
    }
}

/// Either prioritized advice or a single positive message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationsView {
    Items { items: Vec<RecommendationView> },
    AllClear { message: &'static str },
}

/// One recommendation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationView {
    pub priority: Priority,
    /// Upper-case badge text, e.g. `"HIGH"`.
    pub badge: String,
    pub text: String,
}

impl From<Recommendation> for RecommendationView {
    fn from(rec: Recommendation) -> Self {
        Self {
            priority: rec.priority,
            badge: rec.priority.as_str().to_uppercase(),
            text: rec.text,
        }
    }
}

impl ReportView {
    /// Build the view, keeping at most `options.max_recommendations` items.
    #[must_use]
    pub fn from_report(report: &AnalysisReport, options: &Options) -> Self {
        let overall_score = report.overall_score();

        let categories = report
            .categories()
            .map(|(category, result)| CategoryView {
                key: category.key(),
                label: category.label(),
                percent: result.percent(),
                status: result.status().into(),
                checks: check_rows(result),
            })
            .collect();

        // All-clear depends on failures, not on what survives the limit.
        let all_passed = report
            .categories()
            .all(|(_, result)| result.failures().next().is_none());
        let recommendations = if all_passed {
            RecommendationsView::AllClear {
                message: ALL_CLEAR_MESSAGE,
            }
        } else {
            RecommendationsView::Items {
                items: report
                    .recommendations_with_limit(options.max_recommendations)
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            }
        };

        Self {
            overall_score,
            status: Status::from_score(overall_score).into(),
            score_degrees: f64::from(overall_score) * 3.6,
            categories,
            recommendations,
        }
    }

    /// Pretty-printed JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn check_rows(result: &CategoryResult) -> Vec<CheckView> {
    result.checks.iter().map(CheckView::from).collect()
}

/// Human-readable byte size: `B` below 1 KiB, then `KB` and `MB` with one decimal.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
