//! radalert-relocate — moves processed message files out of the inbound folder.
//!
//! The channel only clears a file from its inbound directory once the backend
//! has accepted the report. While the backend is unhealthy the file stays put so
//! the next poll picks it up again.
//!
//! ```text
//! <source_dir>/<file>  ──(backend ok)──►  <destination_root>/<file>
//! ```
//!
//! [`FileRelocator::relocate`] returns a `Result`; callers are expected to log
//! failures and keep going rather than abort message processing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while relocating a file.
#[derive(Debug, thiserror::Error)]
pub enum RelocateError {
    /// The file name is empty or is not a single path component.
    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),

    /// The source file does not exist or is not a regular file.
    #[error("source file not found: {}", .0.display())]
    SourceMissing(PathBuf),

    /// The destination directory could not be created.
    #[error("failed to create destination directory {}: {source}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be moved into place.
    #[error("failed to move {} to {}: {source}", from.display(), to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a relocation attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelocationOutcome {
    /// Backend not healthy; the file was left where it was.
    Skipped { path: PathBuf },
    /// The file now lives at `to`.
    Moved { from: PathBuf, to: PathBuf },
}

/// Moves files into a fixed destination root.
#[derive(Debug, Clone)]
pub struct FileRelocator {
    destination_root: PathBuf,
}

impl FileRelocator {
    pub fn new(destination_root: impl Into<PathBuf>) -> Self {
        Self {
            destination_root: destination_root.into(),
        }
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    /// Where `file_name` ends up once moved.
    pub fn destination_for(&self, file_name: &str) -> Result<PathBuf, RelocateError> {
        validate_file_name(file_name)?;
        Ok(self.destination_root.join(file_name))
    }

    /// Move `<source_dir>/<file_name>` under the destination root when
    /// `backend_ok` is set. An existing file of the same name is replaced.
    pub fn relocate(
        &self,
        backend_ok: bool,
        source_dir: &Path,
        file_name: &str,
    ) -> Result<RelocationOutcome, RelocateError> {
        validate_file_name(file_name)?;
        let from = source_dir.join(file_name);

        if !backend_ok {
            tracing::info!(path = %from.display(), "backend not ok; file stays in inbound directory");
            return Ok(RelocationOutcome::Skipped { path: from });
        }

        if !from.is_file() {
            return Err(RelocateError::SourceMissing(from));
        }

        let to = self.destination_root.join(file_name);
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(|source| RelocateError::CreateDestination {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if same_file(&from, &to) {
            tracing::info!(path = %from.display(), "file already in destination directory");
            return Ok(RelocationOutcome::Moved { from, to });
        }

        move_replacing(&from, &to).map_err(|source| RelocateError::Move {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;

        tracing::info!(from = %from.display(), to = %to.display(), "file relocated");
        Ok(RelocationOutcome::Moved { from, to })
    }
}

fn validate_file_name(file_name: &str) -> Result<(), RelocateError> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(_)), None) => Ok(()),
        _ => Err(RelocateError::InvalidFileName(file_name.to_string())),
    }
}

/// Both paths name the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Rename `from` onto `to`, replacing `to`. Falls back to copy + delete when a
/// plain rename is refused (e.g. across filesystems). `to` is only ever
/// overwritten, never removed up front.
fn move_replacing(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(error = %rename_err, "rename failed; falling back to copy");
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}
