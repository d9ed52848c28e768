//! Aggregation of category results into an overall score and a
//! prioritized recommendation list.

use crate::catalog::{HIGH_PRIORITY, MEDIUM_PRIORITY};
use crate::result::{AnalysisReport, Priority, Recommendation};

/// How many recommendations are shown by default.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Mean of the category ratios as a rounded percentage in `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn overall_score(report: &AnalysisReport) -> u32 {
    let ratios: Vec<f64> = report
        .categories()
        .map(|(_, category)| {
            if category.max_score == 0 {
                0.0
            } else {
                f64::from(category.score) / f64::from(category.max_score)
            }
        })
        .collect();
    let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;

    (mean * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Priority for a failing check, by keyword match on its title.
#[must_use]
pub fn determine_priority(title: &str) -> Priority {
    if HIGH_PRIORITY.iter().any(|keyword| title.contains(keyword)) {
        Priority::High
    } else if MEDIUM_PRIORITY.iter().any(|keyword| title.contains(keyword)) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Failing checks as recommendations, most urgent first, at most `limit`.
///
/// Collection follows category order then check order; the sort is stable,
/// so equal priorities keep that order.
#[must_use]
pub fn recommendations(report: &AnalysisReport, limit: usize) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = report
        .categories()
        .flat_map(|(_, category)| category.failures())
        .map(|check| Recommendation {
            text: check.description.clone(),
            priority: determine_priority(&check.title),
        })
        .collect();

    recommendations.sort_by_key(|rec| rec.priority);
    recommendations.truncate(limit);
    recommendations
}
