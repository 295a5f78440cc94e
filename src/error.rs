//! Error type for file hashing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`hash_file`](crate::hash_file).
#[derive(Debug, Error)]
pub enum HashError {
    /// The path does not resolve to an existing file.
    #[error("file not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other read failure, passed through as-is.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl HashError {
    /// Classify an open/read failure for `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.into(),
                source,
            }
        } else {
            Self::Io(source)
        }
    }

    /// True for the missing-path case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_path_maps_to_not_found() {
        let err = HashError::from_io("gone.bin", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "file not found: gone.bin");
        assert!(err.source().is_some());
    }

    #[test]
    fn other_io_errors_pass_through() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "no access");
        let err = HashError::from_io("locked.bin", source);
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "no access");
        match err {
            HashError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
