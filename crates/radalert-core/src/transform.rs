//! Source transformer — runs every stage over one raw message.
//!
//! [`transform`] normalises and splits the message once. It extracts the report
//! fields, publishes them to the channel map, and builds the structural document
//! whose JSON text becomes the outbound payload.

use crate::context::ChannelMap;
use crate::normalizer::normalize;
use crate::report::{extract_report, extract_report_id, ExtractedReport};
use crate::splitter::split_segments;
use crate::structure::StructuralDocument;
use crate::types::ContextKey;

/// Everything one transform call derives from a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformation {
    pub report_id: String,
    pub report: ExtractedReport,
    pub document: StructuralDocument,
}

impl Transformation {
    /// Derive all outputs without touching a channel map.
    pub fn from_raw(raw: &str) -> Self {
        let normalized = normalize(raw);
        let segments: Vec<&str> = split_segments(&normalized).collect();

        Self {
            report_id: extract_report_id(&segments),
            report: extract_report(&segments),
            document: StructuralDocument::from_segments(segments.iter().copied()),
        }
    }

    /// Write `REPORT_ID`, `REPORT` and `REPORT_ESC`. All three are always
    /// written, empty when nothing qualified.
    pub fn publish(&self, ctx: &mut dyn ChannelMap) {
        ctx.put(ContextKey::ReportId.as_str(), self.report_id.clone());
        ctx.put(ContextKey::Report.as_str(), self.report.text.clone());
        ctx.put(ContextKey::ReportEscaped.as_str(), self.report.escaped.clone());
    }

    /// The outbound payload: the structural document as compact JSON.
    pub fn payload(&self) -> String {
        self.document.to_json()
    }
}

/// Transform one raw message, publishing the report fields to `ctx`.
///
/// Never fails: empty or malformed input produces empty fields and `{}`.
pub fn transform(raw: &str, ctx: &mut dyn ChannelMap) -> Transformation {
    let out = Transformation::from_raw(raw);
    out.publish(ctx);

    tracing::info!(report_id = %out.report_id, "report id extracted");
    tracing::debug!(
        segments = out.document.len(),
        records = out.document.record_count(),
        report_lines = out.report.line_count(),
        "structural document built"
    );

    out
}

/// Convenience wrapper returning only the JSON payload.
pub fn transform_to_json(raw: &str, ctx: &mut dyn ChannelMap) -> String {
    transform(raw, ctx).payload()
}
