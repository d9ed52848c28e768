//! Document Parser Adapter
//!
//! Checkers never talk to a parser directly. They go through the
//! [`DocumentHandle`] trait, which offers selector queries, text extraction
//! and attribute access over a read-only tree. [`HtmlDocument`] implements it
//! on top of `dom_query` (html5ever underneath): parsing is tolerant, never
//! fails, never runs scripts and never fetches referenced resources.

use dom_query::{Document, NodeRef, Selection};

// Re-export for callers that want the raw text type dom_query hands back.
pub use tendril::StrTendril;

// === Handle Contract ===

/// Read-only view over a parsed document.
///
/// Any tolerant HTML parser can back this, as long as selector queries
/// return elements in document order.
pub trait DocumentHandle {
    /// All elements matching a CSS selector, in document order.
    ///
    /// An invalid selector matches nothing.
    fn query_all(&self, selector: &str) -> Vec<Element>;

    /// Text content of `body`, untrimmed, or `None` when there is no body.
    fn body_text(&self) -> Option<String>;

    /// First element matching a CSS selector.
    fn query_first(&self, selector: &str) -> Option<Element> {
        self.query_all(selector).into_iter().next()
    }

    /// Number of elements matching a CSS selector.
    fn count(&self, selector: &str) -> usize {
        self.query_all(selector).len()
    }

    /// Whether any element matches a CSS selector.
    fn exists(&self, selector: &str) -> bool {
        self.count(selector) > 0
    }
}

// === Element Snapshot ===

/// Owned snapshot of one element: tag, attributes and text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
}

impl Element {
    /// Build a snapshot from its parts. Attribute order is preserved.
    #[must_use]
    pub fn new(tag: impl Into<String>, attributes: Vec<(String, String)>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            text: text.into(),
        }
    }

    /// Lower-case tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value, if the attribute is present (possibly empty).
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the attribute is present, whatever its value.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|(key, _)| key == name)
    }

    /// Text content of the element and its descendants, untrimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value of one property from the inline `style` attribute.
    ///
    /// Property names compare case-insensitively, the last declaration wins,
    /// and `!important` is dropped. Empty values read as absent.
    #[must_use]
    pub fn style_property(&self, property: &str) -> Option<&str> {
        let style = self.attr("style")?;
        style
            .split(';')
            .filter_map(|declaration| declaration.split_once(':'))
            .filter(|(name, _)| name.trim().eq_ignore_ascii_case(property))
            .map(|(_, value)| {
                let value = value.trim();
                value
                    .strip_suffix("!important")
                    .map_or(value, str::trim_end)
            })
            .filter(|value| !value.is_empty())
            .last()
    }
}

// === dom_query Backend ===

/// A parsed HTML document backed by `dom_query`.
pub struct HtmlDocument {
    doc: Document,
}

impl HtmlDocument {
    /// Parse HTML text into a document.
    ///
    /// Malformed input degrades into whatever tree html5ever recovers;
    /// an empty string still yields `html`, `head` and `body`.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Document::from(html),
        }
    }

    /// Run a selector, treating an unparsable one as matching nothing.
    fn select(&self, selector: &str) -> Option<Selection<'_>> {
        self.doc.try_select(selector)
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument").finish_non_exhaustive()
    }
}

impl DocumentHandle for HtmlDocument {
    fn query_all(&self, selector: &str) -> Vec<Element> {
        self.select(selector)
            .map(|sel| sel.nodes().iter().map(element_from_node).collect())
            .unwrap_or_default()
    }

    fn body_text(&self) -> Option<String> {
        let body = self.select("body")?;
        body.nodes()
            .first()
            .map(|node| Selection::from(*node).text().to_string())
    }

    fn query_first(&self, selector: &str) -> Option<Element> {
        let sel = self.select(selector)?;
        sel.nodes().first().map(element_from_node)
    }

    fn count(&self, selector: &str) -> usize {
        self.select(selector).map_or(0, |sel| sel.length())
    }
}

/// Snapshot a dom_query node.
fn element_from_node(node: &NodeRef) -> Element {
    let tag = node
        .node_name()
        .map(|name| name.to_string())
        .unwrap_or_default();
    let attributes = node
        .attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect();
    let text: StrTendril = Selection::from(*node).text();

    Element::new(tag, attributes, text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_query() {
        let doc = HtmlDocument::parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.query_first("div");

        assert!(div.is_some());
        let div = div.unwrap_or_default();
        assert_eq!(div.tag(), "div");
        assert_eq!(div.attr("id"), Some("main"));
        assert_eq!(div.attr("class"), Some("container"));
        assert_eq!(div.text(), "content");
    }

    #[test]
    fn test_empty_input_still_has_body() {
        let doc = HtmlDocument::parse("");
        assert_eq!(doc.body_text(), Some(String::new()));
        assert_eq!(doc.count("img"), 0);
    }

    #[test]
    fn test_attribute_presence_vs_value() {
        let doc = HtmlDocument::parse(r#"<img src="a.png" alt=""><img src="b.png">"#);
        let images = doc.query_all("img");

        assert_eq!(images.len(), 2);
        assert!(images[0].has_attr("alt"));
        assert_eq!(images[0].attr("alt"), Some(""));
        assert!(!images[1].has_attr("alt"));
        assert_eq!(images[1].attr("alt"), None);
    }

    #[test]
    fn test_attribute_prefix_selector() {
        let doc = HtmlDocument::parse(
            r#"<img src="https://cdn.example.com/a.png"><img src="http://x/b.png"><img src="local.png">"#,
        );
        assert_eq!(doc.count(r#"img[src^="http"]"#), 2);
    }

    #[test]
    fn test_child_combinator_selector() {
        let doc = HtmlDocument::parse(
            r#"<body><div><table id="outer"><tr><td><table id="inner"></table></td></tr></table></div></body>"#,
        );
        let table = doc.query_first("body > table, body > div > table");
        assert_eq!(table.and_then(|t| t.attr("id").map(str::to_string)), Some("outer".to_string()));
    }

    #[test]
    fn test_query_all_keeps_document_order() {
        let doc = HtmlDocument::parse(r#"<a href="1">one</a><p><a href="2">two</a></p><a href="3">three</a>"#);
        let hrefs: Vec<_> = doc
            .query_all("a")
            .iter()
            .filter_map(|a| a.attr("href").map(str::to_string))
            .collect();
        assert_eq!(hrefs, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_body_text_includes_nested_text() {
        let doc = HtmlDocument::parse("<body><p>Hello <b>bold</b> world</p></body>");
        assert_eq!(doc.body_text(), Some("Hello bold world".to_string()));
    }

    #[test]
    fn test_scripts_are_not_executed() {
        let doc = HtmlDocument::parse(
            r#"<body><script>document.body.innerHTML = "<img src=x>";</script><p>kept</p></body>"#,
        );
        assert_eq!(doc.count("img"), 0);
        assert_eq!(doc.count("script"), 1);
        assert!(doc.exists("p"));
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = HtmlDocument::parse("<p>text</p>");
        assert!(doc.query_all("p[").is_empty());
        assert!(!doc.exists(":::"));
    }

    #[test]
    fn test_style_property_reads() {
        let el = Element::new(
            "img",
            vec![(
                "style".to_string(),
                "display:block; WIDTH: 600px ; height:200px !important;".to_string(),
            )],
            "",
        );
        assert_eq!(el.style_property("width"), Some("600px"));
        assert_eq!(el.style_property("height"), Some("200px"));
        assert_eq!(el.style_property("border"), None);
    }

    #[test]
    fn test_style_property_last_declaration_wins() {
        let el = Element::new(
            "table",
            vec![("style".to_string(), "width:100%;width:650px".to_string())],
            "",
        );
        assert_eq!(el.style_property("width"), Some("650px"));
    }

    #[test]
    fn test_style_property_empty_value_is_absent() {
        let el = Element::new("img", vec![("style".to_string(), "width: ;height:".to_string())], "");
        assert_eq!(el.style_property("width"), None);
        assert_eq!(el.style_property("height"), None);
    }

    #[test]
    fn test_style_property_without_style_attribute() {
        let el = Element::new("img", vec![("width".to_string(), "600".to_string())], "");
        assert_eq!(el.style_property("width"), None);
    }
}
