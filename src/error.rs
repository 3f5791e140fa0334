//! File I/O failures surfaced by the generator.

use crate::diagnostics;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    /// Input missing, unreadable or not valid UTF-8.
    Read,
    /// Output (or its temporary sibling) could not be created, written or persisted.
    Write,
}

/// An I/O failure tied to the file it happened on.
///
/// Travels inside `anyhow::Error`; callers that care about the kind use
/// `err.downcast_ref::<FileError>()`. `Display` names the action and path
/// only; the io error is reported through `source()`.
#[derive(Debug)]
pub struct FileError {
    pub kind: FileErrorKind,
    pub path: PathBuf,
    pub source: io::Error,
}

impl FileError {
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self {
            kind: FileErrorKind::Read,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self {
            kind: FileErrorKind::Write,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.kind {
            FileErrorKind::Read => "read script file",
            FileErrorKind::Write => "write page file",
        };
        write!(
            f,
            "{}",
            diagnostics::error_message(format!("{} {}", action, self.path.display()))
        )
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
