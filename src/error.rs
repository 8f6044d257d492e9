//! Error taxonomy for the listing engine.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Which identity database a failed id lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    User,
    Group,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::User => f.write_str("user"),
            IdKind::Group => f.write_str("group"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("{}: No such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: Permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: metadata unavailable: {source}", path.display())]
    MetadataUnavailable { path: PathBuf, source: io::Error },

    #[error("cannot resolve {kind} id {id}")]
    IdentityLookupFailed { kind: IdKind, id: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl ListError {
    /// Classify a filesystem error raised while reading `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => ListError::NotFound { path },
            io::ErrorKind::PermissionDenied => ListError::PermissionDenied { path },
            _ => ListError::Io { path, source: err },
        }
    }

    /// Whether the tree walker may report this inline and keep going.
    pub fn is_recoverable_in_subtree(&self) -> bool {
        matches!(
            self,
            ListError::PermissionDenied { .. }
                | ListError::NotFound { .. }
                | ListError::Io { .. }
        )
    }

    /// The message without the leading path, for inline markers that
    /// already name the entry.
    pub fn reason(&self) -> String {
        match self {
            ListError::NotFound { .. } => "No such file or directory".to_string(),
            ListError::PermissionDenied { .. } => "Permission denied".to_string(),
            ListError::MetadataUnavailable { source, .. } | ListError::Io { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}
