//! A parsed SVG document with pending byte-range edits.
//!
//! The template text is never re-serialized from a tree: edits are recorded as splices against
//! the original text and applied in one pass, so every byte outside an edited attribute value
//! or an inserted node is preserved exactly.

use crate::Result;
use std::ops::Range;

#[derive(Debug)]
struct Splice {
    range: Range<usize>,
    text: String,
}

pub struct SvgDocument<'input> {
    text: &'input str,
    doc: roxmltree::Document<'input>,
    splices: Vec<Splice>,
}

impl<'input> SvgDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)?;
        Ok(Self {
            text,
            doc,
            splices: Vec::new(),
        })
    }

    pub fn node_by_id(&self, id: &str) -> Option<roxmltree::Node<'_, 'input>> {
        self.doc
            .descendants()
            .find(|n| n.is_element() && n.attribute("id") == Some(id))
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.node_by_id(id).is_some()
    }

    /// Raw (still escaped) text of attribute `name` on the element with `id`.
    pub fn raw_attribute(&self, id: &str, name: &str) -> Option<&'input str> {
        let node = self.node_by_id(id)?;
        let attr = node
            .attributes()
            .find(|a| a.namespace().is_none() && a.name() == name)?;
        let text = self.text;
        Some(&text[attr.range_value()])
    }

    /// Sets attribute `name` on the element with `id`, adding it when absent.
    ///
    /// Returns `false` when no element carries `id`.
    pub fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        let Some(node) = self.node_by_id(id) else {
            return false;
        };
        let existing = node
            .attributes()
            .find(|a| a.namespace().is_none() && a.name() == name)
            .map(|a| a.range_value());
        let tag_start = node.range().start;

        match existing {
            Some(range) => self.splices.push(Splice {
                range,
                text: escape_attr(value),
            }),
            None => {
                let at = tag_name_end(self.text, tag_start);
                self.splices.push(Splice {
                    range: at..at,
                    text: format!(r#" {name}="{}""#, escape_attr(value)),
                });
            }
        }
        true
    }

    /// Replaces every occurrence of `from` with `to` inside attribute `name` of the element
    /// with `id`.
    ///
    /// Returns `false`, leaving the document untouched, when the element, the attribute or the
    /// substring is missing.
    pub fn replace_in_attribute(&mut self, id: &str, name: &str, from: &str, to: &str) -> bool {
        let Some(node) = self.node_by_id(id) else {
            return false;
        };
        let Some(range) = node
            .attributes()
            .find(|a| a.namespace().is_none() && a.name() == name)
            .map(|a| a.range_value())
        else {
            return false;
        };

        let source = self.text;
        let raw = &source[range.clone()];
        if !raw.contains(from) {
            return false;
        }
        let text = raw.replace(from, &escape_attr(to));
        self.splices.push(Splice { range, text });
        true
    }

    /// Inserts raw markup directly after the element with `id` (after its end tag).
    pub fn insert_after(&mut self, id: &str, markup: String) -> bool {
        let Some(node) = self.node_by_id(id) else {
            return false;
        };
        let at = node.range().end;
        self.splices.push(Splice {
            range: at..at,
            text: markup,
        });
        true
    }

    pub fn serialize(mut self) -> String {
        // Stable sort keeps insertion order for splices at the same offset.
        self.splices.sort_by_key(|s| s.range.start);

        let extra: usize = self.splices.iter().map(|s| s.text.len()).sum();
        let mut out = String::with_capacity(self.text.len() + extra);
        let mut cursor = 0usize;
        for splice in &self.splices {
            debug_assert!(splice.range.start >= cursor, "overlapping splices");
            out.push_str(&self.text[cursor..splice.range.start]);
            out.push_str(&splice.text);
            cursor = splice.range.end;
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

fn tag_name_end(text: &str, tag_start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = tag_start + 1;
    while i < bytes.len() && !matches!(bytes[i], b' ' | b'\t' | b'\r' | b'\n' | b'/' | b'>') {
        i += 1;
    }
    i
}

pub(crate) fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut start = 0usize;
    for (i, &b) in text.as_bytes().iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[start..i]);
        out.push_str(esc);
        start = i + 1;
    }
    out.push_str(&text[start..]);
    out
}
