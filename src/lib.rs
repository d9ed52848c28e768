//! # rs-mailscore
//!
//! Static deliverability and client-compatibility scoring for HTML emails.
//!
//! An email template is checked against a fixed set of heuristics grouped
//! into five categories (structure, content, images, links, performance).
//! Each category is scored out of 100; the report yields an overall score,
//! a qualitative tier and a prioritized list of recommendations.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_mailscore::analyze_html;
//!
//! let html = r#"<!DOCTYPE html><html><head><title>Promo</title></head>
//! <body><table width="600"><tr><td style="color:#333">Hello!</td></tr></table></body></html>"#;
//!
//! let report = analyze_html(html);
//! assert_eq!(report.structure.score, 100);
//! println!("Score: {} ({})", report.overall_score(), report.status().label());
//! for rec in report.recommendations() {
//!     println!("[{}] {}", rec.priority.as_str(), rec.text);
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Pure**: analysis reads the markup and its parsed tree, nothing else.
//!   The same input always yields the same report.
//! - **Total**: any text, malformed or empty, produces a complete report.
//! - **Offline**: parsing never runs scripts or fetches resources.

mod aggregate;
mod error;
mod options;
mod result;

/// Static rule data: spam vocabulary, priority keywords, check titles.
pub mod catalog;

/// The five category checkers.
pub mod checks;

/// Parsed-document abstraction and its `dom_query` implementation.
pub mod dom;

/// Byte-to-text decoding for uploaded files.
pub mod encoding;

/// File validation and the load/analyze/reset lifecycle.
pub mod input;

/// Presentation-ready view of a report.
pub mod report;

// Public API - re-exports
pub use aggregate::{determine_priority, DEFAULT_RECOMMENDATION_LIMIT};
pub use checks::AnalysisInput;
pub use dom::{DocumentHandle, Element, HtmlDocument};
pub use error::{Error, Result};
pub use input::{validate_file_name, FileInfo, Session};
pub use options::Options;
pub use report::{format_file_size, ReportView};
pub use result::{
    AnalysisReport, Category, CategoryResult, CheckResult, Priority, Recommendation, Status,
    MAX_SCORE,
};

use tracing::debug;

/// Runs every checker over a parsed email.
///
/// Checkers are independent; each only reads `input`.
///
/// # Example
///
/// ```rust
/// use rs_mailscore::{analyze, AnalysisInput, HtmlDocument};
///
/// let html = "<html><body><p>Bonjour</p></body></html>";
/// let document = HtmlDocument::parse(html);
/// let report = analyze(&AnalysisInput::new(html, &document));
/// assert!(report.overall_score() <= 100);
/// ```
#[must_use]
pub fn analyze(input: &AnalysisInput) -> AnalysisReport {
    let report = AnalysisReport {
        structure: checks::structure::check(input),
        content: checks::content::check(input),
        images: checks::images::check(input),
        links: checks::links::check(input),
        performance: checks::performance::check(input),
    };

    for (category, result) in report.categories() {
        debug!(
            category = category.key(),
            score = result.score,
            failed = result.failures().count(),
            "category analyzed"
        );
    }
    debug!(overall = report.overall_score(), "analysis complete");

    report
}

/// Parses markup and analyzes it.
///
/// # Example
///
/// ```rust
/// use rs_mailscore::analyze_html;
///
/// let report = analyze_html("");
/// assert_eq!(report.images.checks[1].description, "Pas d'images");
/// ```
#[must_use]
pub fn analyze_html(html: &str) -> AnalysisReport {
    let document = HtmlDocument::parse(html);
    analyze(&AnalysisInput::new(html, &document))
}

/// Decodes raw bytes (BOM, then declared charset, then UTF-8) and analyzes them.
///
/// # Example
///
/// ```rust
/// use rs_mailscore::analyze_bytes;
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body>Caf\xE9</body></html>";
/// let report = analyze_bytes(html);
/// assert_eq!(report.content.checks.len(), 5);
/// ```
#[must_use]
pub fn analyze_bytes(html: &[u8]) -> AnalysisReport {
    analyze_bytes_with_options(html, &Options::default())
}

/// Like [`analyze_bytes`], with `options.sniff_meta_charset` deciding whether
/// a declared charset is honored.
#[must_use]
pub fn analyze_bytes_with_options(html: &[u8], options: &Options) -> AnalysisReport {
    let (text, encoding) = encoding::decode_html(html, options.sniff_meta_charset);
    debug!(encoding = encoding.name(), "decoded email bytes");
    analyze_html(&text)
}
