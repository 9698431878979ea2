//! radalert — Rad-Alert HL7 channel
//!
//! Ingests radiology HL7 v2 messages, turns them into JSON for the backend and
//! clears processed files from the inbound folder. This crate wires the two
//! channel stages together so the binary and integration tests can drive them
//! directly.
//!
//! # Architecture
//!
//! ```text
//! inbound file ──► source transformer ──► JSON payload
//!                        │
//!                        └──► ChannelMap (REPORT_ID, REPORT, REPORT_ESC)
//!
//! backend ok? ──► file relocator ──► processed/
//! ```
//!
//! Neither stage can fail the channel: the transformer is total and relocation
//! errors are logged and dropped.

use radalert_core::config::Config;
use radalert_core::{transform, ChannelMap, Transformation};
use radalert_relocate::{FileRelocator, RelocationOutcome};
use std::path::{Path, PathBuf};

/// An inbound message file, split the way the host reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub directory: PathBuf,
    pub file_name: String,
}

impl SourceFile {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    /// Split a path into directory and file name. Returns `None` for paths
    /// without a UTF-8 final component.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Some(Self { directory, file_name })
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Result of running one file through the channel.
#[derive(Debug, Clone)]
pub struct ChannelOutcome {
    pub transformation: Transformation,
    /// `None` when relocation is disabled or failed.
    pub relocation: Option<RelocationOutcome>,
}

impl ChannelOutcome {
    /// The JSON payload handed to the next stage.
    pub fn payload(&self) -> String {
        self.transformation.payload()
    }
}

/// The two-stage channel: transform, then conditionally relocate.
#[derive(Debug, Clone)]
pub struct Channel {
    relocator: Option<FileRelocator>,
}

impl Channel {
    pub fn new(config: &Config) -> Self {
        let relocator = config
            .relocation
            .enabled
            .then(|| FileRelocator::new(&config.relocation.destination_dir));
        Self { relocator }
    }

    /// A channel that never relocates files.
    pub fn transform_only() -> Self {
        Self { relocator: None }
    }

    /// Run the transformer over the file's contents, publish the report keys
    /// into `ctx`, then relocate the file if the backend is healthy.
    pub fn process(
        &self,
        source: &SourceFile,
        backend_ok: bool,
        ctx: &mut dyn ChannelMap,
    ) -> ChannelOutcome {
        let raw = read_message(&source.path());
        let transformation = transform(&raw, ctx);

        let relocation = self.relocator.as_ref().and_then(|relocator| {
            match relocator.relocate(backend_ok, &source.directory, &source.file_name) {
                Ok(outcome) => Some(outcome),
                Err(err) => {
                    tracing::error!(error = %err, file = %source.file_name, "could not move file");
                    None
                }
            }
        });

        ChannelOutcome {
            transformation,
            relocation,
        }
    }
}

/// Read a message file as lossy UTF-8. Unreadable files become an empty
/// message so the transform still runs and publishes empty keys.
fn read_message(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not read message file");
            String::new()
        }
    }
}
