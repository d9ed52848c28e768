//! Content checks: text volume, text/markup balance, spam vocabulary, tone.

use crate::catalog::{
    SPAM_WORDS, TITLE_EXCLAMATIONS, TITLE_SPAM_WORDS, TITLE_TEXT_LENGTH, TITLE_TEXT_RATIO,
    TITLE_UPPERCASE, UPPERCASE_LETTER,
};
use crate::result::CategoryResult;

use super::{AnalysisInput, CategoryBuilder};

/// Run the content checks.
///
/// Points: text length 20, text ratio 25, spam words 30/15/0,
/// uppercase 15, exclamation marks 10.
#[must_use]
pub fn check(input: &AnalysisInput) -> CategoryResult {
    let mut category = CategoryBuilder::new();

    let text = input.body_text();
    let text_length = text.trim().chars().count();

    let long_enough = text_length > 50;
    category.record(
        long_enough,
        TITLE_TEXT_LENGTH,
        if long_enough {
            format!("{text_length} caractères - Suffisant")
        } else {
            "Augmentez le contenu textuel (minimum 50 caractères)".to_string()
        },
        if long_enough { 20 } else { 0 },
    );

    let text_ratio = text_ratio(text_length, input.html.chars().count());
    let balanced = text_ratio > 20.0;
    category.record(
        balanced,
        TITLE_TEXT_RATIO,
        format!(
            "{text_ratio:.1}% de texte - {}",
            if balanced {
                "Bon équilibre"
            } else {
                "Trop de code HTML, ajoutez plus de texte"
            }
        ),
        if balanced { 25 } else { 0 },
    );

    let spam_found = find_spam_words(&text);
    category.record(
        spam_found.is_empty(),
        TITLE_SPAM_WORDS,
        if spam_found.is_empty() {
            "Aucun mot spam détecté".to_string()
        } else {
            format!(
                "{} mot(s) spam détecté(s): {}...",
                spam_found.len(),
                spam_found.iter().take(3).copied().collect::<Vec<_>>().join(", ")
            )
        },
        match spam_found.len() {
            0 => 30,
            1 | 2 => 15,
            _ => 0,
        },
    );

    let uppercase = uppercase_ratio(&text);
    let calm_case = uppercase < 30.0;
    category.record(
        calm_case,
        TITLE_UPPERCASE,
        if calm_case {
            format!("{uppercase:.1}% de majuscules - Correct")
        } else {
            "Trop de majuscules - Évitez l'abus de capitales".to_string()
        },
        if calm_case { 15 } else { 0 },
    );

    let exclamations = text.matches('!').count();
    let calm_punctuation = exclamations < 5;
    category.record(
        calm_punctuation,
        TITLE_EXCLAMATIONS,
        if calm_punctuation {
            format!("{exclamations} point(s) d'exclamation - Acceptable")
        } else {
            "Trop de points d'exclamation - Réduisez pour éviter l'aspect spam".to_string()
        },
        if calm_punctuation { 10 } else { 0 },
    );

    category.finish()
}

/// Visible text as a percentage of the raw markup; 0 for empty markup.
fn text_ratio(text_length: usize, html_length: usize) -> f64 {
    if html_length == 0 {
        return 0.0;
    }
    text_length as f64 / html_length as f64 * 100.0
}

/// Catalog entries contained in the text, in catalog order.
///
/// Plain substring search: no word boundaries.
fn find_spam_words(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    SPAM_WORDS
        .iter()
        .copied()
        .filter(|word| lower.contains(word))
        .collect()
}

/// Share of A-Z capitals over all characters of the untrimmed text.
///
/// Empty text has no capitals: 0%.
fn uppercase_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    UPPERCASE_LETTER.find_iter(text).count() as f64 / total as f64 * 100.0
}
