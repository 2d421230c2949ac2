//! Readable-text extraction from raw page markup.
//!
//! Strips scripts, navigation and other boilerplate, flattens the rest to
//! plain text and rejects pages that end up too short to be an article
//! (paywalls, JS-only shells, error pages).

use scraper::{Html, Node};

use crate::error::ExtractError;
use crate::types::config::MIN_CONTENT_CHARS;

/// Elements whose text never counts as content.
const STRIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "nav", "footer", "aside", "form", "noscript", "template",
];

/// Turns markup into cleaned plain text.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    min_chars: usize,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self {
            min_chars: MIN_CONTENT_CHARS,
        }
    }

    /// Minimum number of characters cleaned text must exceed.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Extract cleaned text from HTML.
    pub fn extract(&self, markup: &str) -> Result<String, ExtractError> {
        let document = Html::parse_document(markup);

        let fragments: Vec<String> = document
            .root_element()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) => {
                    let stripped = node.ancestors().any(|ancestor| {
                        ancestor
                            .value()
                            .as_element()
                            .is_some_and(|el| STRIPPED_ELEMENTS.contains(&el.name()))
                    });
                    (!stripped).then(|| text.to_string())
                }
                _ => None,
            })
            .collect();

        self.clean_text(&fragments.join("\n"))
    }

    /// Normalize text that was already extracted upstream and apply the
    /// length gate.
    pub fn clean_text(&self, text: &str) -> Result<String, ExtractError> {
        let cleaned = normalize(text);
        let length = cleaned.chars().count();
        if length > self.min_chars {
            Ok(cleaned)
        } else {
            Err(ExtractError::InsufficientContent {
                length,
                minimum: self.min_chars,
            })
        }
    }
}

/// Trim every line, drop blank ones and rejoin with single newlines.
pub fn normalize(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paragraph(words: usize) -> String {
        (0..words).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_strips_boilerplate_elements() {
        let body = paragraph(120);
        let html = format!(
            r#"<html><head><title>Guide</title><style>.a {{ color: red }}</style></head>
            <body>
              <nav><a href="/">Home</a></nav>
              <script>var tracking = 1;</script>
              <article><h1>Heading</h1><p>{body}</p></article>
              <aside>Related links</aside>
              <form><label>Subscribe</label></form>
              <footer>Copyright</footer>
            </body></html>"#
        );

        let text = ContentExtractor::new().extract(&html).unwrap();

        assert!(text.contains("Heading"));
        assert!(text.contains("word119"));
        assert!(!text.contains("tracking"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("Home"));
        assert!(!text.contains("Related links"));
        assert!(!text.contains("Subscribe"));
        assert!(!text.contains("Copyright"));
    }

    #[test]
    fn test_text_order_preserved() {
        let filler = paragraph(100);
        let html = format!("<body><p>alpha</p><div><p>beta</p></div><p>{filler}</p><p>omega</p></body>");

        let text = ContentExtractor::new().extract(&html).unwrap();
        let alpha = text.find("alpha").unwrap();
        let beta = text.find("beta").unwrap();
        let omega = text.find("omega").unwrap();
        assert!(alpha < beta && beta < omega);
    }

    #[test]
    fn test_short_content_rejected() {
        let html = "<html><body><p>Please enable JavaScript.</p></body></html>";
        let err = ContentExtractor::new().extract(html).unwrap_err();
        assert_eq!(
            err,
            ExtractError::InsufficientContent {
                length: 25,
                minimum: MIN_CONTENT_CHARS
            }
        );
    }

    #[test]
    fn test_gate_is_strictly_greater() {
        let extractor = ContentExtractor::new();
        assert!(extractor.clean_text(&"a".repeat(500)).is_err());
        assert!(extractor.clean_text(&"a".repeat(501)).is_ok());
    }

    #[test]
    fn test_gate_counts_characters_not_bytes() {
        // 300 three-byte characters: 900 bytes but only 300 chars
        let text = "字".repeat(300);
        assert!(ContentExtractor::new().clean_text(&text).is_err());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  a \n\n \t\n b\r\n"), "a\nb");
        assert_eq!(normalize(""), "");
    }

    proptest! {
        #[test]
        fn prop_normalized_has_no_blank_lines(input in "[ a-z\t\r\n]{0,300}") {
            let out = normalize(&input);
            for line in out.split('\n') {
                if !out.is_empty() {
                    prop_assert!(!line.trim().is_empty());
                }
            }
        }

        #[test]
        fn prop_extracted_has_no_blank_lines(
            chunks in proptest::collection::vec("[a-z ]{0,40}", 1..30)
        ) {
            let body: String = chunks
                .iter()
                .map(|c| format!("<p>{c}</p>\n   \n<div> </div>"))
                .collect();
            let html = format!("<html><body>{body}<p>{}</p></body></html>", "x ".repeat(300));

            let text = ContentExtractor::new().extract(&html).unwrap();
            for line in text.split('\n') {
                prop_assert!(!line.trim().is_empty());
            }
        }
    }
}
