//! radalert-core — HL7 v2 transformation core for the Rad-Alert channel.
//!
//! This crate exposes each stage of the source transformer as a public module,
//! plus the shared types the stages pass between them.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► Normalizer ──► Splitter ──┬──► Report extractor ──► ChannelMap
//!                                        │
//!                                        └──► Structural transformer ──► JSON
//! ```
//!
//! Every stage is total: malformed input degrades to empty values, never to an
//! error. [`transform::transform`] runs the whole chain for one message.

pub mod config;
pub mod context;
pub mod normalizer;
pub mod report;
pub mod sections;
pub mod splitter;
pub mod structure;
pub mod transform;
pub mod types;

pub use context::{ChannelMap, MemoryChannelMap};
pub use report::ExtractedReport;
pub use structure::{FieldRecord, StructuralDocument};
pub use transform::{transform, Transformation};
pub use types::ContextKey;
