//! Configuration options for input handling and report presentation.
//!
//! The rule set itself is fixed: points, thresholds and the spam catalog
//! cannot be tuned. `Options` only covers the edges around the engine.

/// Configuration options for loading and presenting an analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_mailscore::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     case_insensitive_extension: true,
///     max_recommendations: 3,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of recommendations shown after priority sorting.
    ///
    /// Default: `5`
    pub max_recommendations: usize,

    /// Accept `.HTML` / `.Htm` style extensions.
    ///
    /// The extension check is case-sensitive unless this is enabled, so
    /// `newsletter.HTML` is rejected by default.
    ///
    /// Default: `false`
    pub case_insensitive_extension: bool,

    /// Honor a `<meta charset>` declaration when decoding uploaded bytes.
    ///
    /// A byte-order mark always wins. Without a BOM and with this disabled,
    /// bytes are decoded as UTF-8.
    ///
    /// Default: `true`
    pub sniff_meta_charset: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_recommendations: 5,
            case_insensitive_extension: false,
            sniff_meta_charset: true,
        }
    }
}
