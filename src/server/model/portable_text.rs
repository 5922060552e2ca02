//! Minimal reader for the content store's rich-text format.
//!
//! Rich text arrives as an array of blocks, each with a `style` and a list of
//! `children` spans. Spans reference their marks by name: decorators such as
//! `strong` directly, annotations such as links through the block's
//! `markDefs` keys.

use serde::Deserialize;
use serde_json::Value;

use crate::{model::blog::TextSpanDto, server::util::serde::nullable};

const SAFE_HREF_PREFIXES: &[&str] = &["https://", "http://", "mailto:", "tel:", "/", "#"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextBlock {
    #[serde(default, rename = "_type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<Span>,
    #[serde(default, rename = "markDefs", deserialize_with = "nullable")]
    pub mark_defs: Vec<MarkDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub marks: Vec<String>,
}

/// Annotation referenced from span marks by `_key`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkDef {
    #[serde(default, rename = "_key")]
    pub key: Option<String>,
    #[serde(default, rename = "_type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

impl TextBlock {
    /// Concatenated span text, trimmed.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|span| span.text.as_deref())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Spans with their marks resolved, outer whitespace trimmed and empty
    /// runs dropped.
    pub fn spans(&self) -> Vec<TextSpanDto> {
        let mut spans: Vec<TextSpanDto> = self
            .children
            .iter()
            .filter_map(|span| {
                let text = span.text.clone()?;
                let has = |mark: &str| span.marks.iter().any(|m| m == mark);
                Some(TextSpanDto {
                    text,
                    href: span.marks.iter().find_map(|mark| self.link_href(mark)),
                    strong: has("strong"),
                    em: has("em"),
                })
            })
            .collect();

        while let Some(first) = spans.first_mut() {
            let trimmed = first.text.trim_start();
            if trimmed.is_empty() {
                spans.remove(0);
            } else {
                first.text = trimmed.to_string();
                break;
            }
        }
        while let Some(last) = spans.last_mut() {
            let trimmed = last.text.trim_end();
            if trimmed.is_empty() {
                spans.pop();
            } else {
                last.text = trimmed.to_string();
                break;
            }
        }
        spans.retain(|span| !span.text.is_empty());

        spans
    }

    pub fn is_text(&self) -> bool {
        self.kind.as_deref().map_or(true, |kind| kind == "block")
    }

    /// Target of the link annotation keyed `mark`. Only web, mail, phone and
    /// same-site targets are kept.
    fn link_href(&self, mark: &str) -> Option<String> {
        let href = self
            .mark_defs
            .iter()
            .find(|def| def.key.as_deref() == Some(mark) && def.kind.as_deref() == Some("link"))?
            .href
            .as_deref()?
            .trim();

        let lower = href.to_ascii_lowercase();
        SAFE_HREF_PREFIXES
            .iter()
            .any(|prefix| lower.starts_with(prefix))
            .then(|| href.to_string())
    }
}

/// Reads a field that may be a plain string or an array of text blocks.
///
/// Blocks are joined with blank lines. Returns `None` when there is no text.
pub fn plain_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Array(blocks) => blocks
            .iter()
            .filter_map(|block| serde_json::from_value::<TextBlock>(block.clone()).ok())
            .filter(TextBlock::is_text)
            .map(|block| block.text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
        _ => String::new(),
    };

    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_plain_strings() {
        assert_eq!(plain_text(&json!("  Smile again ")), Some("Smile again".to_string()));
        assert_eq!(plain_text(&json!("   ")), None);
    }

    #[test]
    fn joins_block_spans() {
        let body = json!([
            {
                "_type": "block",
                "style": "normal",
                "children": [{"_type": "span", "text": "Save up to "}, {"_type": "span", "text": "70%"}]
            },
            {"_type": "block", "children": [{"_type": "span", "text": "Certified clinics"}]},
            {"_type": "image", "asset": {"_ref": "image-abc"}}
        ]);
        assert_eq!(
            plain_text(&body),
            Some("Save up to 70%\n\nCertified clinics".to_string())
        );
    }

    #[test]
    fn resolves_link_and_decorator_marks() {
        let block: TextBlock = serde_json::from_value(json!({
            "_type": "block",
            "markDefs": [
                {"_key": "k1", "_type": "link", "href": "https://kiut.uz/prices"},
                {"_key": "k2", "_type": "link", "href": "javascript:alert(1)"}
            ],
            "children": [
                {"_type": "span", "text": " See our ", "marks": []},
                {"_type": "span", "text": "price list", "marks": ["k1", "strong"]},
                {"_type": "span", "text": " or ", "marks": null},
                {"_type": "span", "text": "this", "marks": ["k2", "em"]},
                {"_type": "span", "text": "  ", "marks": []}
            ]
        }))
        .unwrap();

        let spans = block.spans();
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].text, "See our ");
        assert_eq!(spans[1].href.as_deref(), Some("https://kiut.uz/prices"));
        assert!(spans[1].strong);
        assert!(spans[2].href.is_none());
        assert_eq!(spans[3].text, "this");
        assert!(spans[3].href.is_none());
        assert!(spans[3].em);
        assert_eq!(block.text(), "See our price list or this");
    }

    #[test]
    fn other_values_have_no_text() {
        assert_eq!(plain_text(&json!(null)), None);
        assert_eq!(plain_text(&json!(42)), None);
        assert_eq!(plain_text(&json!([])), None);
    }
}
