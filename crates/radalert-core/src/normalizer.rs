//! Normalizer — canonicalises line endings of a raw HL7 message.
//!
//! Senders disagree on segment terminators (`\r`, `\r\n`, bare `\n`) and some
//! prepend a UTF-8 BOM. After normalisation every segment ends with
//! [`SEGMENT_SEPARATOR`] and the text never starts with one.

use crate::types::{BYTE_ORDER_MARK, SEGMENT_SEPARATOR};

/// Normalise a raw message. Empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    let body = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                // CRLF collapses to a single separator
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(SEGMENT_SEPARATOR);
            }
            '\n' => out.push(SEGMENT_SEPARATOR),
            other => out.push(other),
        }
    }

    match out.find(|c| c != SEGMENT_SEPARATOR) {
        Some(0) => out,
        Some(start) => out.split_off(start),
        None => String::new(),
    }
}
