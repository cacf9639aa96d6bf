use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[doc = r#"
An error produced while patching a single file.

Carries the path of the file the patch failed on, so a batch run can
report each failure and move on.
"#]
#[derive(Debug, Error)]
#[error("{}: {}", .path.display(), .kind)]
pub struct PatchError {
    path: PathBuf,
    pub(crate) kind: PatchErrorKind,
}

/// A kind of error that a patch can produce
#[derive(Debug, Error)]
pub enum PatchErrorKind {
    /// The file cannot hold the fixed single-track header.
    #[error("file is {0} bytes, smaller than the 22-byte single-track header")]
    TooShort(u64),
    /// The event data does not fit in the 4-byte length field.
    #[error("{0} bytes of track data do not fit in a 4-byte length field")]
    TooLong(u64),
    /// The path does not name a regular file.
    #[error("not a regular file")]
    NotAFile,
    /// The underlying filesystem operation failed.
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl PatchError {
    /// Create a patch error from a path and kind
    pub fn new(path: impl Into<PathBuf>, kind: PatchErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Returns the error kind of the patch.
    pub fn error_kind(&self) -> &PatchErrorKind {
        &self.kind
    }

    /// Returns the file the error occurred on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if the file failed validation before any byte was written.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self.kind,
            PatchErrorKind::TooShort(_) | PatchErrorKind::TooLong(_) | PatchErrorKind::NotAFile
        )
    }

    pub(crate) fn io(path: &Path, error: io::Error) -> Self {
        Self::new(path, PatchErrorKind::Io(error))
    }
}

/// The patch result type (see [`PatchError`])
pub type PatchResult<T> = Result<T, PatchError>;
