//! Recommendation derivation: priority assignment, stable ordering, limit.

use rs_mailscore::{analyze_html, determine_priority, AnalysisReport, Priority, Recommendation};

/// Failing checks in collection order, each with its priority.
fn failing_in_order(report: &AnalysisReport) -> Vec<Recommendation> {
    report
        .categories()
        .flat_map(|(_, category)| category.failures())
        .map(|check| Recommendation {
            text: check.description.clone(),
            priority: determine_priority(&check.title),
        })
        .collect()
}

/// Recommendations must equal the high, then medium, then low failures,
/// each group in collection order, cut to the limit.
fn assert_stable_prefix(report: &AnalysisReport, limit: usize) {
    let failing = failing_in_order(report);
    let expected: Vec<_> = [Priority::High, Priority::Medium, Priority::Low]
        .into_iter()
        .flat_map(|p| failing.iter().filter(move |r| r.priority == p).cloned())
        .take(limit)
        .collect();

    assert_eq!(report.recommendations_with_limit(limit), expected);
}

const MESSY: &str = r#"<html><head>
<link rel="stylesheet" href="https://example.com/style.css">
<script src="https://example.com/track.js"></script>
</head><body>
<p>FREE PRIZE!!! WINNER!!! ACT NOW!!!</p>
<img src="banner.png"><img src="footer.png" alt="pied">
<a href="http://example.com/a">Click here</a>
<a href="http://example.com/b">Cliquez ici</a>
<a href="http://example.com/c"></a>
<form><input name="email"></form>
</body></html>"#;

#[test]
fn at_most_five_recommendations() {
    let report = analyze_html(MESSY);
    assert!(failing_in_order(&report).len() > 5);
    assert_eq!(report.recommendations().len(), 5);
}

#[test]
fn high_priority_failures_come_first() {
    let report = analyze_html(MESSY);
    let recs = report.recommendations();

    // spam words, alt attributes, HTTPS and unsubscribe all fail
    assert!(recs[..4].iter().all(|r| r.priority == Priority::High));
    assert!(recs[0].text.contains("mot(s) spam détecté(s)"));
    assert_eq!(recs[1].text, "1/2 images avec alt - Ajoutez alt sur toutes les images");

    // first medium in collection order is the missing DOCTYPE
    assert_eq!(recs[4].priority, Priority::Medium);
    assert_eq!(recs[4].text, "Ajoutez un DOCTYPE HTML pour une meilleure compatibilité");
}

#[test]
fn ordering_is_stable_within_priority() {
    let report = analyze_html(MESSY);
    for limit in [1, 3, 5, 8, 100] {
        assert_stable_prefix(&report, limit);
    }

    let report = analyze_html("");
    assert_stable_prefix(&report, 5);
}

#[test]
fn priorities_never_go_back_up() {
    let report = analyze_html(MESSY);
    let recs = report.recommendations_with_limit(100);
    assert!(recs.windows(2).all(|pair| pair[0].priority <= pair[1].priority));
}

#[test]
fn click_here_over_http_yields_two_separate_entries() {
    let html = r#"<!DOCTYPE html><html><head><title>T</title></head><body>
<table width="600"><tr><td style="color:#333">
<p>Bonjour, voici les nouvelles de notre boutique pour ce mois de mars, bonne lecture.</p>
<img src="https://cdn.example.com/a.png" alt="Logo" width="100" height="40">
<a href="http://example.com">Click here</a>
<a href="https://example.com/unsubscribe">Se désinscrire</a>
</td></tr></table></body></html>"#;
    let report = analyze_html(html);
    let recs = report.recommendations();

    let https = recs
        .iter()
        .find(|r| r.text == "1 lien(s) en HTTP - Utilisez HTTPS pour tous les liens");
    let link_text = recs
        .iter()
        .find(|r| r.text.starts_with("50% de liens avec texte descriptif"));

    assert_eq!(https.map(|r| r.priority), Some(Priority::High));
    assert_eq!(link_text.map(|r| r.priority), Some(Priority::Low));
}

#[test]
fn recommendation_text_is_check_description() {
    let report = analyze_html("<html><body><p>x</p></body></html>");
    let recs = report.recommendations_with_limit(100);

    assert!(recs
        .iter()
        .any(|r| r.text == "Ajoutez un DOCTYPE HTML pour une meilleure compatibilité" && r.priority == Priority::Medium));
    assert!(recs
        .iter()
        .any(|r| r.text == "Ajoutez un lien de désinscription visible" && r.priority == Priority::High));
}
