//! Structure checks: DOCTYPE, title, table layout, CSS placement, width.

use crate::catalog::{
    DOCTYPE, EMAIL_WIDTH, EXTERNAL_STYLESHEET_SELECTOR, LAYOUT_TABLE_SELECTOR, TITLE_DOCTYPE,
    TITLE_EXTERNAL_CSS, TITLE_FIXED_WIDTH, TITLE_INLINE_CSS, TITLE_TABLES, TITLE_TITLE_TAG,
};
use crate::dom::Element;
use crate::result::CategoryResult;

use super::{AnalysisInput, CategoryBuilder};

/// Run the structure checks.
///
/// Points: DOCTYPE 15, title 10, tables 20, no external CSS 20,
/// inline CSS 20, 600/650 layout width 15.
#[must_use]
pub fn check(input: &AnalysisInput) -> CategoryResult {
    let mut category = CategoryBuilder::new();
    let doc = input.document;

    let has_doctype = DOCTYPE.is_match(input.html);
    category.record(
        has_doctype,
        TITLE_DOCTYPE,
        if has_doctype {
            "Le DOCTYPE est présent".to_string()
        } else {
            "Ajoutez un DOCTYPE HTML pour une meilleure compatibilité".to_string()
        },
        if has_doctype { 15 } else { 0 },
    );

    let has_title = doc.exists("title");
    category.record(
        has_title,
        TITLE_TITLE_TAG,
        if has_title {
            "La balise title est présente".to_string()
        } else {
            "Ajoutez une balise <title> pour identifier l'email".to_string()
        },
        if has_title { 10 } else { 0 },
    );

    let table_count = doc.count("table");
    let has_tables = table_count > 0;
    category.record(
        has_tables,
        TITLE_TABLES,
        if has_tables {
            format!("{table_count} tableau(x) utilisé(s) - Bonne pratique pour la compatibilité")
        } else {
            "Utilisez des tableaux pour la mise en page (meilleure compatibilité)".to_string()
        },
        if has_tables { 20 } else { 0 },
    );

    // Passing means there is no external stylesheet.
    let has_external_css = doc.exists(EXTERNAL_STYLESHEET_SELECTOR);
    category.record(
        !has_external_css,
        TITLE_EXTERNAL_CSS,
        if has_external_css {
            "CSS externe détecté - Utilisez plutôt du CSS inline".to_string()
        } else {
            "Pas de CSS externe - Excellent".to_string()
        },
        if has_external_css { 0 } else { 20 },
    );

    let inline_styles = doc.count("[style]");
    let has_inline = inline_styles > 0;
    category.record(
        has_inline,
        TITLE_INLINE_CSS,
        if has_inline {
            format!("{inline_styles} éléments avec du style inline - Bonne pratique")
        } else {
            "Ajoutez du CSS inline pour une meilleure compatibilité".to_string()
        },
        if has_inline { 20 } else { 0 },
    );

    let has_fixed_width = doc
        .query_first(LAYOUT_TABLE_SELECTOR)
        .is_some_and(|table| has_email_width(&table));
    category.record(
        has_fixed_width,
        TITLE_FIXED_WIDTH,
        if has_fixed_width {
            "Largeur optimale pour les emails".to_string()
        } else {
            "Recommandé : 600-650px de largeur max pour compatibilité mobile".to_string()
        },
        if has_fixed_width { 15 } else { 0 },
    );

    category.finish()
}

/// Width attribute, or inline `width` when the attribute is missing or empty.
fn has_email_width(table: &Element) -> bool {
    table
        .attr("width")
        .filter(|width| !width.is_empty())
        .or_else(|| table.style_property("width"))
        .is_some_and(|width| EMAIL_WIDTH.is_match(width))
}
