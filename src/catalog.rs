//! Rule catalog: static data shared by the checkers and the aggregator.
//!
//! Check titles double as identifiers. The aggregator matches them against
//! the priority keyword lists below, so a title must keep containing its
//! keyword verbatim.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Spam Vocabulary
// =============================================================================

/// Words and phrases commonly flagged by spam filters.
///
/// Matching is plain substring containment against lower-cased body text,
/// so `free` also fires inside `freedom`.
pub const SPAM_WORDS: &[&str] = &[
    "gratuit",
    "free",
    "urgent",
    "cliquez ici",
    "click here",
    "garantie",
    "argent facile",
    "gagner",
    "prize",
    "winner",
    "congratulations",
    "act now",
    "limited time",
    "offre limitée",
    "millionaire",
    "casino",
    "100%",
    "satisfaction garantie",
    "risque zéro",
    "viagra",
    "lottery",
];

/// Link texts that say nothing about the destination.
pub const GENERIC_LINK_TEXTS: &[&str] = &["cliquez ici", "click here"];

/// Markers identifying an unsubscribe link, in its text or its href.
pub const UNSUBSCRIBE_MARKERS: &[&str] = &["unsubscribe", "désinscrire", "désinscription"];

// =============================================================================
// Priority Classification
// =============================================================================

/// Title fragments whose failure is reported first.
pub const HIGH_PRIORITY: &[&str] = &[
    "Attributs alt",
    "Protocole HTTPS",
    "Mots déclencheurs",
    "Lien de désinscription",
];

/// Title fragments whose failure is reported after high-priority ones.
pub const MEDIUM_PRIORITY: &[&str] = &["CSS externe", "DOCTYPE", "Ratio texte/HTML", "JavaScript"];

/// Shown in place of a recommendation list when every check passed.
pub const ALL_CLEAR_MESSAGE: &str =
    "Aucune recommandation - Votre email respecte toutes les bonnes pratiques !";

// =============================================================================
// Check Titles
// =============================================================================

pub const TITLE_DOCTYPE: &str = "DOCTYPE déclaré";
pub const TITLE_TITLE_TAG: &str = "Balise <title>";
pub const TITLE_TABLES: &str = "Utilisation de tableaux";
pub const TITLE_EXTERNAL_CSS: &str = "CSS externe";
pub const TITLE_INLINE_CSS: &str = "CSS inline";
pub const TITLE_FIXED_WIDTH: &str = "Largeur recommandée (600-650px)";

pub const TITLE_TEXT_LENGTH: &str = "Longueur du texte";
pub const TITLE_TEXT_RATIO: &str = "Ratio texte/HTML";
pub const TITLE_SPAM_WORDS: &str = "Mots déclencheurs de spam";
pub const TITLE_UPPERCASE: &str = "Utilisation des majuscules";
pub const TITLE_EXCLAMATIONS: &str = "Points d'exclamation";

pub const TITLE_IMAGE_COUNT: &str = "Nombre d'images";
pub const TITLE_IMAGE_ALT: &str = "Attributs alt sur les images";
pub const TITLE_IMAGE_DIMENSIONS: &str = "Dimensions des images";
pub const TITLE_IMAGE_HOSTING: &str = "Hébergement des images";

pub const TITLE_LINK_COUNT: &str = "Nombre de liens";
pub const TITLE_HTTPS: &str = "Protocole HTTPS";
pub const TITLE_UNSUBSCRIBE: &str = "Lien de désinscription";
pub const TITLE_LINK_TEXT: &str = "Texte descriptif des liens";

pub const TITLE_FILE_SIZE: &str = "Taille du fichier";
pub const TITLE_EXTERNAL_REQUESTS: &str = "Requêtes externes";
pub const TITLE_JAVASCRIPT: &str = "JavaScript";
pub const TITLE_FORMS: &str = "Formulaires";

// =============================================================================
// Selectors
// =============================================================================

/// Layout container: a table directly under `body`, or under a wrapper div.
pub const LAYOUT_TABLE_SELECTOR: &str = "body > table, body > div > table";

/// Stylesheets pulled from outside the message.
pub const EXTERNAL_STYLESHEET_SELECTOR: &str = r#"link[rel="stylesheet"]"#;

/// Resources (other than images) a client fetches when opening the message.
pub const REMOTE_RESOURCE_SELECTOR: &str =
    r#"link[rel="stylesheet"][href^="http"], script[src^="http"]"#;

/// Images served over the network.
pub const REMOTE_IMAGE_SELECTOR: &str = r#"img[src^="http"]"#;

// =============================================================================
// Raw-Text Patterns
// =============================================================================

/// Matches a DOCTYPE declaration anywhere in the raw markup.
///
/// The declaration never becomes an element, so it is sniffed from text.
pub static DOCTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!doctype").expect("DOCTYPE regex"));

/// Matches a single ASCII capital letter.
pub static UPPERCASE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("UPPERCASE_LETTER regex"));

/// Matches a layout width of 600 or 650 (pixels implied or explicit).
pub static EMAIL_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"600|650").expect("EMAIL_WIDTH regex"));
