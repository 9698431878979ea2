//! Structural transformer — groups sanitised segments by name into a JSON-ready document.
//!
//! The output shape mirrors what the downstream channel consumes:
//!
//! ```json
//! {
//!   "MSH": [ { "MSH.1": "MSH", "MSH.2": "^~\\&", ... } ],
//!   "OBX": [ { "OBX.1": "OBX", ... }, { "OBX.1": "OBX", ... } ]
//! }
//! ```
//!
//! Segment names appear in first-occurrence order; records within a name appear
//! in message order. Field keys are 1-based.

use crate::splitter::{segment_name, split_fields};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One segment occurrence: `"<NAME>.<i>" -> field text`, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord(IndexMap<String, String>);

impl FieldRecord {
    fn from_fields(name: &str, fields: &[&str]) -> Self {
        let map = fields
            .iter()
            .enumerate()
            .map(|(i, value)| (format!("{name}.{}", i + 1), (*value).to_string()))
            .collect();
        Self(map)
    }

    /// Field value by its full key, e.g. `"PID.3"`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of fields in the record, the tag field included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }
}

/// Ordered mapping from segment name to every record of that segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuralDocument(IndexMap<String, Vec<FieldRecord>>);

impl StructuralDocument {
    /// Build the document from segment strings in message order.
    ///
    /// Each segment is sanitised first. Segments that are blank once cleaned,
    /// or that split into fewer than two fields, are left out.
    pub fn from_segments<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut doc = Self::default();
        for (index, raw) in segments.into_iter().enumerate() {
            let clean = sanitize_segment(raw);
            if clean.is_empty() {
                if !raw.is_empty() {
                    tracing::debug!(index, "skipping segment blank after sanitisation");
                }
                continue;
            }

            let fields = split_fields(&clean);
            if fields.len() < 2 {
                tracing::debug!(index, segment = %clean, "skipping segment with a single field");
                continue;
            }

            let name = segment_name(&clean);
            let record = FieldRecord::from_fields(name, &fields);
            doc.0.entry(name.to_string()).or_default().push(record);
        }
        doc
    }

    /// Records for a segment name, in message order.
    pub fn get(&self, name: &str) -> Option<&[FieldRecord]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Segment names in first-occurrence order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldRecord])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct segment names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total records across every segment name.
    pub fn record_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Compact JSON text. An empty document renders as `{}`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("string-keyed document always serializes")
    }

    /// Indented JSON text, for humans.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("string-keyed document always serializes")
    }
}

/// True for C0 controls and DEL.
pub fn is_control(c: char) -> bool {
    c <= '\u{1F}' || c == '\u{7F}'
}

/// Remove every control character, then trim surrounding whitespace.
pub fn sanitize_segment(segment: &str) -> String {
    let stripped: String = segment.chars().filter(|c| !is_control(*c)).collect();
    stripped.trim().to_string()
}
