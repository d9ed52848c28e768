//! Result types for analysis output.
//!
//! A report is an immutable snapshot of one run: five category results,
//! each holding its score and the ordered outcomes of its checks. Overall
//! score, tier and recommendations are derived on demand, never stored.

use serde::{Deserialize, Serialize};

use crate::aggregate;

/// Every category is scored out of this many points.
pub const MAX_SCORE: u32 = 100;

/// Outcome of a single heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the heuristic passed outright.
    pub pass: bool,

    /// Stable identifier, also used for priority lookup.
    pub title: String,

    /// Human-readable outcome or remediation advice.
    pub description: String,
}

impl CheckResult {
    #[must_use]
    pub fn new(pass: bool, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pass,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Score and check outcomes for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Points awarded, between 0 and `max_score`.
    pub score: u32,

    /// Always [`MAX_SCORE`].
    pub max_score: u32,

    /// Check outcomes in execution order.
    pub checks: Vec<CheckResult>,
}

impl CategoryResult {
    /// Score as a rounded percentage of `max_score`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        if self.max_score == 0 {
            return 0;
        }
        (f64::from(self.score) / f64::from(self.max_score) * 100.0).round() as u32
    }

    /// Tier for this category's badge.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::from_score(self.percent())
    }

    /// Checks that did not pass, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|check| !check.pass)
    }
}

/// The five check categories, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Structure,
    Content,
    Images,
    Links,
    Performance,
}

impl Category {
    /// All categories in reporting order.
    pub const ALL: [Category; 5] = [
        Category::Structure,
        Category::Content,
        Category::Images,
        Category::Links,
        Category::Performance,
    ];

    /// Machine key, e.g. `"structure"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::Structure => "structure",
            Category::Content => "content",
            Category::Images => "images",
            Category::Links => "links",
            Category::Performance => "performance",
        }
    }

    /// Display heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Structure => "Structure HTML",
            Category::Content => "Contenu",
            Category::Images => "Images",
            Category::Links => "Liens",
            Category::Performance => "Performance",
        }
    }
}

/// Qualitative tier mapped from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Excellent,
    Good,
    Average,
    Poor,
    Bad,
}

impl Status {
    /// Tier for a score; each bound is inclusive.
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Status::Excellent,
            75..=89 => Status::Good,
            60..=74 => Status::Average,
            40..=59 => Status::Poor,
            _ => Status::Bad,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Excellent => "Excellent",
            Status::Good => "Bon",
            Status::Average => "Moyen",
            Status::Poor => "Faible",
            Status::Bad => "Mauvais",
        }
    }

    /// Styling class, e.g. `"good"`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Status::Excellent => "excellent",
            Status::Good => "good",
            Status::Average => "average",
            Status::Poor => "poor",
            Status::Bad => "bad",
        }
    }
}

/// Urgency of a recommendation. Orders high before medium before low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Remediation advice derived from one failing check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The failing check's description.
    pub text: String,

    pub priority: Priority,
}

/// Results of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub structure: CategoryResult,
    pub content: CategoryResult,
    pub images: CategoryResult,
    pub links: CategoryResult,
    pub performance: CategoryResult,
}

impl AnalysisReport {
    /// Result for one category.
    #[must_use]
    pub fn category(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Structure => &self.structure,
            Category::Content => &self.content,
            Category::Images => &self.images,
            Category::Links => &self.links,
            Category::Performance => &self.performance,
        }
    }

    /// All category results in reporting order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &CategoryResult)> {
        Category::ALL.into_iter().map(move |c| (c, self.category(c)))
    }

    /// Mean category percentage, rounded, in `0..=100`.
    #[must_use]
    pub fn overall_score(&self) -> u32 {
        aggregate::overall_score(self)
    }

    /// Tier for the overall score.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::from_score(self.overall_score())
    }

    /// The five most urgent recommendations.
    #[must_use]
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.recommendations_with_limit(aggregate::DEFAULT_RECOMMENDATION_LIMIT)
    }

    /// The `limit` most urgent recommendations.
    #[must_use]
    pub fn recommendations_with_limit(&self, limit: usize) -> Vec<Recommendation> {
        aggregate::recommendations(self, limit)
    }
}
