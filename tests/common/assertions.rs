//! Domain-specific assertions for radalert harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* document invariant was violated.

use radalert_core::structure::{is_control, FieldRecord};
use radalert_core::StructuralDocument;

// ---------------------------------------------------------------------------
// Document assertions
// ---------------------------------------------------------------------------

/// Assert the segment names of a document, in order.
///
/// ```rust
/// assert_segment_names!(doc, ["MSH", "PID", "OBX"]);
/// ```
#[macro_export]
macro_rules! assert_segment_names {
    ($doc:expr, [$($name:expr),* $(,)?]) => {{
        let doc: &radalert_core::StructuralDocument = &$doc;
        let actual: Vec<&str> = doc.names().collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "segment names (first-occurrence order)");
    }};
}

/// Assert one field of the `n`th (0-based) record of a segment.
///
/// ```rust
/// assert_field!(doc, "OBX", 1, "OBX.6", "Line two");
/// ```
#[macro_export]
macro_rules! assert_field {
    ($doc:expr, $name:expr, $occurrence:expr, $key:expr, $value:expr) => {{
        let doc: &radalert_core::StructuralDocument = &$doc;
        let name: &str = $name;
        let occurrence: usize = $occurrence;
        let key: &str = $key;
        let records = match doc.get(name) {
            Some(records) => records,
            None => panic!(
                "assert_field! failed: segment {:?} not in document.\n  Available: {:?}",
                name,
                doc.names().collect::<Vec<_>>()
            ),
        };
        let record = match records.get(occurrence) {
            Some(record) => record,
            None => panic!(
                "assert_field! failed: {:?} has {} records, wanted index {}",
                name,
                records.len(),
                occurrence
            ),
        };
        match record.get(key) {
            Some(actual) => pretty_assertions::assert_eq!(actual, $value, "{}[{}].{}", name, occurrence, key),
            None => panic!(
                "assert_field! failed: key {:?} not found.\n  Available: {:?}",
                key,
                record.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// Every record under `X` has keys exactly `X.1..X.n`.
pub fn assert_record_keys_well_formed(doc: &StructuralDocument) {
    for (name, records) in doc.iter() {
        for (i, record) in records.iter().enumerate() {
            assert_record_keys(name, i, record);
        }
    }
}

fn assert_record_keys(name: &str, occurrence: usize, record: &FieldRecord) {
    let expected: Vec<String> = (1..=record.len()).map(|i| format!("{name}.{i}")).collect();
    let actual: Vec<&str> = record.keys().collect();
    assert_eq!(actual, expected, "keys of {name}[{occurrence}]");
    assert!(record.len() >= 2, "{name}[{occurrence}] has fewer than two fields");
}

/// No value anywhere in the document carries a control character.
pub fn assert_no_control_chars(doc: &StructuralDocument) {
    for (name, records) in doc.iter() {
        for record in records {
            for value in record.values() {
                assert!(
                    !value.chars().any(is_control),
                    "control character left in {name} value {value:?}"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Escaping helpers
// ---------------------------------------------------------------------------

/// Inverse of the REPORT_ESC escaping: `\"` → `"`, `\n` → newline, `\\` → `\`.
pub fn unescape_report(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
