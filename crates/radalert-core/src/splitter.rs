//! Splitter — divides normalised text into segments and segments into fields.
//!
//! Pure character splits: no escape decoding, no component handling. Empty
//! segments and empty fields are kept; consumers decide what to skip.

use crate::types::{FIELD_DELIMITER, SEGMENT_SEPARATOR};

/// Split normalised text into segment strings, in message order.
pub fn split_segments(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(SEGMENT_SEPARATOR)
}

/// Split one segment into its fields. Field 0 is the segment tag itself.
pub fn split_fields(segment: &str) -> Vec<&str> {
    segment.split(FIELD_DELIMITER).collect()
}

/// The segment name: the first three characters of the segment text.
///
/// Shorter segments yield their whole text.
pub fn segment_name(segment: &str) -> &str {
    match segment.char_indices().nth(3) {
        Some((end, _)) => &segment[..end],
        None => segment,
    }
}

/// True when `segment` begins with `tag` immediately followed by the field delimiter.
pub fn has_tag(segment: &str, tag: &str) -> bool {
    segment
        .strip_prefix(tag)
        .is_some_and(|rest| rest.starts_with(FIELD_DELIMITER))
}
