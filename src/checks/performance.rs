//! Performance checks: payload size, remote requests, scripts, forms.

use crate::catalog::{
    REMOTE_IMAGE_SELECTOR, REMOTE_RESOURCE_SELECTOR, TITLE_EXTERNAL_REQUESTS, TITLE_FILE_SIZE,
    TITLE_FORMS, TITLE_JAVASCRIPT,
};
use crate::result::CategoryResult;

use super::{AnalysisInput, CategoryBuilder};

/// Run the performance checks.
///
/// Points: size 35/20, external requests 25/12, no script 20, no form 20.
#[must_use]
pub fn check(input: &AnalysisInput) -> CategoryResult {
    let mut category = CategoryBuilder::new();
    let doc = input.document;

    // UTF-8 byte length, not character count.
    let size_kb = input.html.len() as f64 / 1024.0;
    let light = size_kb < 100.0;
    category.record(
        light,
        TITLE_FILE_SIZE,
        if light {
            format!("{size_kb:.1} KB - Optimal")
        } else {
            format!("{size_kb:.1} KB - Réduisez la taille (max recommandé: 100KB)")
        },
        if light {
            35
        } else if size_kb < 200.0 {
            20
        } else {
            0
        },
    );

    let requests = doc.count(REMOTE_IMAGE_SELECTOR) + doc.count(REMOTE_RESOURCE_SELECTOR);
    let few_requests = requests < 20;
    category.record(
        few_requests,
        TITLE_EXTERNAL_REQUESTS,
        format!(
            "{requests} requête(s) externe(s) - {}",
            if few_requests {
                "Acceptable"
            } else {
                "Réduisez le nombre de ressources externes"
            }
        ),
        match requests {
            0..=19 => 25,
            20..=39 => 12,
            _ => 0,
        },
    );

    let has_scripts = doc.exists("script");
    category.record(
        !has_scripts,
        TITLE_JAVASCRIPT,
        if has_scripts {
            "JavaScript détecté - La plupart des clients mail bloquent JS".to_string()
        } else {
            "Pas de JavaScript - Excellent".to_string()
        },
        if has_scripts { 0 } else { 20 },
    );

    let has_forms = doc.exists("form");
    category.record(
        !has_forms,
        TITLE_FORMS,
        if has_forms {
            "Formulaires détectés - Non supportés par beaucoup de clients mail".to_string()
        } else {
            "Pas de formulaires - Bon".to_string()
        },
        if has_forms { 0 } else { 20 },
    );

    category.finish()
}
