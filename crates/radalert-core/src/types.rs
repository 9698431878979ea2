//! Shared constants and key types for radalert-core.
//!
//! The delimiters here are fixed: the channel never reads MSH-1/MSH-2 to
//! discover alternative encoding characters.

/// Canonical segment separator produced by the normalizer.
pub const SEGMENT_SEPARATOR: char = '\n';

/// Field delimiter within a segment.
pub const FIELD_DELIMITER: char = '|';

/// Byte-order marker stripped from the start of a raw message.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Message header segment tag; carries the report identifier.
pub const HEADER_TAG: &str = "MSH";

/// Observation segment tag; carries the report body lines.
pub const OBSERVATION_TAG: &str = "OBX";

/// 0-based field index of the report identifier inside the header segment.
pub const REPORT_ID_FIELD: usize = 9;

/// 0-based field index of the observation value inside an OBX segment.
pub const OBSERVATION_VALUE_FIELD: usize = 5;

/// Keys written to the shared channel map by the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    ReportId,
    Report,
    ReportEscaped,
}

impl ContextKey {
    /// Every key the transform writes, in write order.
    pub const ALL: [ContextKey; 3] = [
        ContextKey::ReportId,
        ContextKey::Report,
        ContextKey::ReportEscaped,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContextKey::ReportId => "REPORT_ID",
            ContextKey::Report => "REPORT",
            ContextKey::ReportEscaped => "REPORT_ESC",
        }
    }
}

impl std::fmt::Display for ContextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
