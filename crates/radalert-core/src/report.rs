//! Report extractor — pulls the report identifier and body text out of a message.
//!
//! The identifier is MSH-10 of the first header segment. The body is the
//! concatenation of every non-blank OBX-5 value, one per line, in segment order.

use crate::splitter::{has_tag, split_fields};
use crate::types::{
    BYTE_ORDER_MARK, HEADER_TAG, OBSERVATION_TAG, OBSERVATION_VALUE_FIELD, REPORT_ID_FIELD,
};
use serde::Serialize;

/// Report body extracted from the observation segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedReport {
    /// Trimmed OBX-5 values joined with `\n`, no trailing newline.
    pub text: String,
    /// `text` escaped for embedding inside a double-quoted literal.
    pub escaped: String,
}

impl ExtractedReport {
    fn from_lines(lines: &[&str]) -> Self {
        let text = lines.join("\n");
        let escaped = escape_report(&text);
        Self { text, escaped }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of body lines.
    pub fn line_count(&self) -> usize {
        if self.text.is_empty() {
            0
        } else {
            self.text.lines().count()
        }
    }
}

/// Report identifier from the first header segment.
///
/// Only the first `MSH|` segment is consulted. A header with fewer than ten
/// fields, or no header at all, yields an empty string.
pub fn extract_report_id(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|seg| trim_value(seg))
        .find(|seg| has_tag(seg, HEADER_TAG))
        .and_then(|header| {
            split_fields(header)
                .get(REPORT_ID_FIELD)
                .map(|id| (*id).to_string())
        })
        .unwrap_or_default()
}

/// Report body from every observation segment.
pub fn extract_report(segments: &[&str]) -> ExtractedReport {
    let lines: Vec<&str> = segments
        .iter()
        .copied()
        .filter(|seg| has_tag(seg, OBSERVATION_TAG))
        .filter_map(|seg| {
            let value = split_fields(seg)
                .get(OBSERVATION_VALUE_FIELD)
                .copied()
                .map(trim_value)?;
            (!value.is_empty()).then_some(value)
        })
        .collect();

    ExtractedReport::from_lines(&lines)
}

/// Trim whitespace and stray byte-order marks from both ends.
fn trim_value(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Escape report text for a double-quoted JSON or string-literal context.
///
/// Backslashes go first so the escapes introduced for line breaks and quotes
/// are not themselves doubled.
pub fn escape_report(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}
