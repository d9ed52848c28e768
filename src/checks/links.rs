//! Link checks: volume, HTTPS, unsubscribe link, descriptive text.

use crate::catalog::{
    GENERIC_LINK_TEXTS, TITLE_HTTPS, TITLE_LINK_COUNT, TITLE_LINK_TEXT, TITLE_UNSUBSCRIBE,
    UNSUBSCRIBE_MARKERS,
};
use crate::dom::Element;
use crate::result::CategoryResult;

use super::{percentage, AnalysisInput, CategoryBuilder};

/// Run the link checks.
///
/// Points: count 25, HTTPS 30/15, unsubscribe 25, descriptive text 20.
#[must_use]
pub fn check(input: &AnalysisInput) -> CategoryResult {
    let mut category = CategoryBuilder::new();

    let links = input.document.query_all("a");
    let link_count = links.len();

    let reasonable_count = (1..30).contains(&link_count);
    category.record(
        reasonable_count,
        TITLE_LINK_COUNT,
        if link_count == 0 {
            "Aucun lien - Ajoutez au moins un CTA".to_string()
        } else if reasonable_count {
            format!("{link_count} lien(s) - Quantité appropriée")
        } else {
            "Trop de liens - Limitez à 30 maximum".to_string()
        },
        if reasonable_count { 25 } else { 0 },
    );

    let insecure = links
        .iter()
        .filter(|link| link.attr("href").is_some_and(|href| href.starts_with("http://")))
        .count();
    category.record(
        insecure == 0,
        TITLE_HTTPS,
        if insecure == 0 {
            "Tous les liens utilisent HTTPS - Sécurisé".to_string()
        } else {
            format!("{insecure} lien(s) en HTTP - Utilisez HTTPS pour tous les liens")
        },
        match insecure {
            0 => 30,
            1 | 2 => 15,
            _ => 0,
        },
    );

    let has_unsubscribe = links.iter().any(is_unsubscribe);
    category.record(
        has_unsubscribe,
        TITLE_UNSUBSCRIBE,
        if has_unsubscribe {
            "Lien de désinscription présent - Excellent".to_string()
        } else {
            "Ajoutez un lien de désinscription visible".to_string()
        },
        if has_unsubscribe { 25 } else { 0 },
    );

    let descriptive = links.iter().filter(|link| has_descriptive_text(link)).count();
    let descriptive_ratio = percentage(descriptive, link_count);
    let well_labelled = descriptive_ratio > 80.0;
    category.record(
        well_labelled,
        TITLE_LINK_TEXT,
        if link_count == 0 {
            "Pas de liens".to_string()
        } else {
            format!(
                "{descriptive_ratio:.0}% de liens avec texte descriptif - {}",
                if well_labelled {
                    "Excellent"
                } else {
                    "Évitez \"Cliquez ici\""
                }
            )
        },
        if well_labelled { 20 } else { 0 },
    );

    category.finish()
}

/// Link text or href mentions unsubscribing.
fn is_unsubscribe(link: &Element) -> bool {
    let text = link.text().trim().to_lowercase();
    let href = link.attr("href").unwrap_or_default().to_lowercase();
    UNSUBSCRIBE_MARKERS
        .iter()
        .any(|marker| text.contains(marker) || href.contains(marker))
}

/// Non-empty text that is not a generic "click here".
fn has_descriptive_text(link: &Element) -> bool {
    let text = link.text().trim().to_lowercase();
    !text.is_empty() && !GENERIC_LINK_TEXTS.iter().any(|generic| text.contains(generic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;

    fn run(html: &str) -> CategoryResult {
        let doc = HtmlDocument::parse(html);
        check(&AnalysisInput::new(html, &doc))
    }

    #[test]
    fn no_links_fails_count_without_partial_credit() {
        let result = run("<body><p>no links</p></body>");
        assert!(!result.checks[0].pass);
        assert_eq!(result.checks[0].description, "Aucun lien - Ajoutez au moins un CTA");
        assert!(result.checks[1].pass);
        assert!(!result.checks[2].pass);
        assert!(result.checks[3].pass);
        assert_eq!(result.checks[3].description, "Pas de liens");
        // https 30 + descriptive 20
        assert_eq!(result.score, 50);
    }

    #[test]
    fn well_formed_links_score_full() {
        let result = run(
            r#"<a href="https://shop.example.com">Voir la boutique</a>
               <a href="https://example.com/unsubscribe">Se désabonner</a>"#,
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.checks[3].description, "100% de liens avec texte descriptif - Excellent");
    }

    #[test]
    fn click_here_over_http_fails_two_checks() {
        let result = run(r#"<a href="http://example.com">Click here</a>"#);
        assert!(!result.checks[1].pass);
        assert_eq!(result.checks[1].description, "1 lien(s) en HTTP - Utilisez HTTPS pour tous les liens");
        assert!(!result.checks[3].pass);
        assert_eq!(
            result.checks[3].description,
            "0% de liens avec texte descriptif - Évitez \"Cliquez ici\""
        );
        // count 25 + https partial 15
        assert_eq!(result.score, 40);
    }

    #[test]
    fn three_insecure_links_earn_nothing() {
        let html: String = (0..3).map(|i| format!(r#"<a href="http://x/{i}">Article {i}</a>"#)).collect();
        let result = run(&html);
        assert_eq!(result.score, 25 + 20);
    }

    #[test]
    fn relative_and_mailto_links_are_not_insecure() {
        let result = run(r#"<a href="/page">Page</a><a href="mailto:a@b.c">Écrire</a><a>Ancre</a>"#);
        assert!(result.checks[1].pass);
    }

    #[test]
    fn unsubscribe_found_in_french_text() {
        let result = run(r#"<a href="https://x/prefs">Se DÉSINSCRIRE</a>"#);
        assert!(result.checks[2].pass);
        let result = run(r#"<a href="https://x/prefs">Lien de désinscription</a>"#);
        assert!(result.checks[2].pass);
    }

    #[test]
    fn unsubscribe_found_in_href() {
        let result = run(r#"<a href="https://x/Unsubscribe?id=1">Gérer</a>"#);
        assert!(result.checks[2].pass);
    }

    #[test]
    fn too_many_links() {
        let html: String = (0..30).map(|i| format!(r#"<a href="https://x/{i}">Article {i}</a>"#)).collect();
        let result = run(&html);
        assert!(!result.checks[0].pass);
        assert_eq!(result.checks[0].description, "Trop de liens - Limitez à 30 maximum");
    }

    #[test]
    fn empty_link_text_is_not_descriptive() {
        let html = r#"<a href="https://x/1">Un</a><a href="https://x/2">Deux</a><a href="https://x/3">Trois</a><a href="https://x/4">Quatre</a><a href="https://x/5"><img src="https://x/i.png"></a>"#;
        let result = run(html);
        // 4 of 5 = 80%, not above the threshold
        assert!(!result.checks[3].pass);
        assert_eq!(result.checks[3].description, "80% de liens avec texte descriptif - Évitez \"Cliquez ici\"");
    }
}
