//! Report sections — locates the findings and opinion blocks of a radiology report.
//!
//! Reports arrive as free text in Spanish. The findings block starts at the
//! `Hallazgos` heading and runs to the end of the report; the radiologist's
//! conclusion follows an `Opinión:` label. Both are returned flattened to a
//! single line so they can be scored or quoted in an alert.

use crate::types::BYTE_ORDER_MARK;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static FINDINGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(hallazgos.*)$").expect("findings pattern is valid"));

static OPINION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)opini[oó]n\s*[:\-]?\s*(.*)").expect("opinion pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Findings and opinion blocks of one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSections {
    pub findings: Option<String>,
    pub opinion: Option<String>,
}

impl ReportSections {
    pub fn from_report(report: &str) -> Self {
        let cleaned = clean_report(report);
        Self {
            findings: findings(&cleaned),
            opinion: opinion(&cleaned),
        }
    }
}

/// Strip a leading BOM, turn CRLF into LF and trim.
pub fn clean_report(report: &str) -> String {
    let body = report.strip_prefix(BYTE_ORDER_MARK).unwrap_or(report);
    body.replace("\r\n", "\n").trim().to_string()
}

/// Everything from the first `Hallazgos` heading onward, whitespace-collapsed.
pub fn findings(report: &str) -> Option<String> {
    let caps = FINDINGS.captures(report)?;
    flatten(caps.get(1)?.as_str())
}

/// Text after the `Opinión` label, whitespace-collapsed.
pub fn opinion(report: &str) -> Option<String> {
    let caps = OPINION.captures(report)?;
    flatten(caps.get(1)?.as_str())
}

fn flatten(text: &str) -> Option<String> {
    let flat = WHITESPACE.replace_all(text, " ");
    let flat = flat.trim();
    (!flat.is_empty()).then(|| flat.to_string())
}
