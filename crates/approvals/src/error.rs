use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApprovalError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Test context has no usable description")]
    MissingDescription,

    #[error("{message}")]
    Mismatch { message: String },

    #[error("Approvals config file not found: {path}")]
    ConfigFileNotFound { path: String },

    #[error("Approvals config parsing failed: {message}")]
    ConfigParse { message: String },
}

impl ApprovalError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ApprovalError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True when this is a filesystem error caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApprovalError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
