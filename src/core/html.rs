// src/core/html.rs
use scraper::{Html, Node};

use super::sanitize::normalize_ws;

/// Text rendering of a page, split into what a reader sees and what the
/// page's scripts carry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageText {
    pub text: String,
    pub scripts: Vec<String>,
}

impl PageText {
    /// Text nodes are joined with no separator, the way the profile renders
    /// "Level 14" and "4960 XP" into a single run "Level 144960 XP".
    pub fn from_html(html: &str) -> Self {
        let doc = Html::parse_document(html);
        let mut text = String::with_capacity(html.len() / 4);
        let mut scripts = Vec::new();

        for node in doc.root_element().descendants() {
            let Node::Text(t) = node.value() else { continue };
            let parent = node
                .parent()
                .and_then(|p| p.value().as_element().map(|e| e.name().to_ascii_lowercase()));

            match parent.as_deref() {
                Some("script") => {
                    let body = t.trim();
                    if !body.is_empty() { scripts.push(s!(body)); }
                }
                Some("style") | Some("template") => {}
                _ => text.push_str(t),
            }
        }

        Self { text: normalize_ws(&text), scripts }
    }

    /// Already-rendered text with no script blocks.
    pub fn from_text(text: &str) -> Self {
        Self { text: normalize_ws(text), scripts: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_elements_fuse_like_the_profile_does() {
        let html = r#"<html><body>
            <div><span>Level 14</span><span>4960 XP</span></div>
        </body></html>"#;
        let page = PageText::from_html(html);
        assert!(page.text.contains("Level 144960 XP"), "got {:?}", page.text);
    }

    #[test]
    fn scripts_are_kept_apart_and_styles_dropped() {
        let html = r#"<html><head>
            <style>.lvl { color: red }</style>
            <script>window.__DATA__ = {"level": 12, "xp": 340};</script>
        </head><body><p>Hello</p></body></html>"#;
        let page = PageText::from_html(html);
        assert_eq!(page.text, "Hello");
        assert_eq!(page.scripts.len(), 1);
        assert!(page.scripts[0].contains(r#""level": 12"#));
    }

    #[test]
    fn from_text_normalizes_whitespace() {
        let page = PageText::from_text("  Level 9450\n XP ");
        assert_eq!(page.text, "Level 9450 XP");
        assert!(page.scripts.is_empty());
    }
}
