//! Test builders — ergonomic constructors for raw HL7 messages.
//!
//! These builders are designed for readability in test setup, not for
//! production use.

/// Segment terminator style used when rendering a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Cr,
    CrLf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Cr => "\r",
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Fluent builder for raw HL7 message text.
///
/// # Example
///
/// ```rust
/// let raw = MessageBuilder::new()
///     .header("RPT-1")
///     .observation("Sin hallazgos.")
///     .line_ending(LineEnding::CrLf)
///     .build();
/// ```
pub struct MessageBuilder {
    segments: Vec<String>,
    ending: LineEnding,
    bom: bool,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            ending: LineEnding::Cr,
            bom: false,
        }
    }

    /// An MSH segment whose tenth field is `report_id`.
    pub fn header(self, report_id: &str) -> Self {
        self.segment(format!(
            "MSH|^~\\&|RIS|HOSP|RADALERT|HOSP|20240115103000||ORU^R01|{report_id}|P|2.5"
        ))
    }

    /// An OBX text segment whose value (OBX-5) is `value`. Set ids count up.
    pub fn observation(self, value: &str) -> Self {
        let set_id = self
            .segments
            .iter()
            .filter(|s| s.starts_with("OBX|"))
            .count()
            + 1;
        self.segment(format!("OBX|{set_id}|TX|||{value}"))
    }

    pub fn segment(mut self, text: impl Into<String>) -> Self {
        self.segments.push(text.into());
        self
    }

    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.ending = ending;
        self
    }

    pub fn with_bom(mut self) -> Self {
        self.bom = true;
        self
    }

    pub fn build(self) -> String {
        let body = self.segments.join(self.ending.as_str());
        if self.bom {
            format!("\u{FEFF}{body}")
        } else {
            body
        }
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
