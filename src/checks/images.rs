//! Image checks: volume, alt coverage, explicit dimensions, hosting.
//!
//! Partial-credit thresholds are strict: exactly 50% alt or dimension
//! coverage earns nothing, exactly 80% dimension coverage earns the
//! middle tier.

use crate::catalog::{TITLE_IMAGE_ALT, TITLE_IMAGE_COUNT, TITLE_IMAGE_DIMENSIONS, TITLE_IMAGE_HOSTING};
use crate::dom::Element;
use crate::result::CategoryResult;

use super::{percentage, AnalysisInput, CategoryBuilder};

/// Run the image checks.
///
/// Points: count 25 (10 with no images), alt 30/15, dimensions 25/12,
/// hosting 20.
#[must_use]
pub fn check(input: &AnalysisInput) -> CategoryResult {
    let mut category = CategoryBuilder::new();

    let images = input.document.query_all("img");
    let image_count = images.len();

    let reasonable_count = (1..15).contains(&image_count);
    category.record(
        reasonable_count,
        TITLE_IMAGE_COUNT,
        if image_count == 0 {
            "Aucune image - Ajoutez des visuels".to_string()
        } else if reasonable_count {
            format!("{image_count} image(s) - Quantité appropriée")
        } else {
            "Trop d'images - Réduisez pour améliorer le temps de chargement".to_string()
        },
        match image_count {
            0 => 10,
            1..=14 => 25,
            _ => 0,
        },
    );

    let with_alt = images.iter().filter(|img| img.has_attr("alt")).count();
    let alt_ratio = percentage(with_alt, image_count);
    let full_alt = alt_ratio == 100.0;
    category.record(
        full_alt,
        TITLE_IMAGE_ALT,
        if image_count == 0 {
            "Pas d'images".to_string()
        } else if full_alt {
            "Toutes les images ont un attribut alt - Excellent".to_string()
        } else {
            format!("{with_alt}/{image_count} images avec alt - Ajoutez alt sur toutes les images")
        },
        if full_alt {
            30
        } else if alt_ratio > 50.0 {
            15
        } else {
            0
        },
    );

    let with_dimensions = images.iter().filter(|img| has_dimensions(img)).count();
    let dimensions_ratio = percentage(with_dimensions, image_count);
    let sized = dimensions_ratio > 80.0;
    category.record(
        sized,
        TITLE_IMAGE_DIMENSIONS,
        if image_count == 0 {
            "Pas d'images".to_string()
        } else {
            format!(
                "{with_dimensions}/{image_count} images avec dimensions - {}",
                if sized { "Excellent" } else { "Spécifiez width et height" }
            )
        },
        if sized {
            25
        } else if dimensions_ratio > 50.0 {
            12
        } else {
            0
        },
    );

    let hosted = images.iter().filter(|img| is_hosted(img)).count();
    let all_hosted = hosted == image_count;
    category.record(
        all_hosted,
        TITLE_IMAGE_HOSTING,
        if image_count == 0 {
            "Pas d'images".to_string()
        } else if all_hosted {
            "Toutes les images sont hébergées en ligne - Excellent".to_string()
        } else {
            "Certaines images ne sont pas hébergées - Utilisez des URLs absolues".to_string()
        },
        if all_hosted { 20 } else { 0 },
    );

    category.finish()
}

/// Both width and height as attributes, or both as inline style.
fn has_dimensions(img: &Element) -> bool {
    (img.has_attr("width") && img.has_attr("height"))
        || (img.style_property("width").is_some() && img.style_property("height").is_some())
}

/// `src` is an absolute http(s) URL.
fn is_hosted(img: &Element) -> bool {
    img.attr("src")
        .is_some_and(|src| src.starts_with("http://") || src.starts_with("https://"))
}
