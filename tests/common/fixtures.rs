//! Static HL7 corpora used across harnesses.
//!
//! Messages are written with `\r` terminators, as they arrive from the RIS,
//! unless a fixture is specifically about another line-ending style.

/// The canonical three-segment example: one header, two observation lines.
pub const MSG_MINIMAL: &str =
    "MSH|^~\\&|A|B|C|D|E|F|G|ID123\rOBX|1|TX|||Line one\rOBX|2|TX|||Line two";

/// A realistic ORU^R01 radiology result.
pub const MSG_ORU_RADIOLOGY: &str = concat!(
    "MSH|^~\\&|RIS|HOSP|RADALERT|HOSP|20240115103000||ORU^R01|RPT-0042|P|2.5\r",
    "PID|1||123456^^^HOSP^MR||Pérez^Ana||19700101|F\r",
    "PV1|1|O|RAD^^^HOSP\r",
    "OBR|1|ORD-9|RPT-0042|71260^CT TORAX^CPT|||20240115101500\r",
    "OBX|1|TX|71260^CT TORAX^CPT||TAC de tórax sin contraste.\r",
    "OBX|2|TX|71260^CT TORAX^CPT||Hallazgos: nódulo de 8 mm en LSD.\r",
    "OBX|3|TX|71260^CT TORAX^CPT||   \r",
    "OBX|4|TX|71260^CT TORAX^CPT||Opinión: nódulo \"indeterminado\" C:\\RAD\r",
);

/// Same shape as [`MSG_MINIMAL`] but with CRLF terminators and a UTF-8 BOM.
pub const MSG_BOM_CRLF: &str =
    "\u{FEFF}MSH|^~\\&|A|B|C|D|E|F|G|ID777\r\nOBX|1|TX|||solo\r\n";

/// Header shorter than ten fields and observations too short to carry a value.
pub const MSG_TRUNCATED: &str = "MSH|^~\\&|A|B\rOBX|1|TX\rPID|1";

/// Segments that must all be dropped from the structural document.
pub const MSG_MALFORMED: &str = "\u{1}\u{2}\u{7F}\rNOPIPE\r   \r\u{0}";

/// Control characters sprinkled through otherwise valid segments.
pub const MSG_CONTROL_NOISE: &str = "MSH|^~\\&|A\u{0B}|B\rOBX|1|TX|||va\u{1C}lue\u{1D}\r";
