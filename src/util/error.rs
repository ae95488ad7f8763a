// FileHunt - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; errors keep their io::Error source
// for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that reject a search before any traversal starts.
///
/// Per-entry failures *during* the walk are deliberately not represented
/// here: they are non-fatal, recorded as warnings on the search outcome,
/// and never abort the traversal.
#[derive(Debug)]
pub enum SearchError {
    /// The target file name is empty.
    EmptyFileName,

    /// The start directory string is empty.
    EmptyRoot,

    /// The start directory does not exist.
    RootNotFound { path: PathBuf },

    /// The start path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// Permission denied accessing the start directory.
    PermissionDenied { path: PathBuf, source: io::Error },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFileName => {
                write!(f, "No file name specified")
            }
            Self::EmptyRoot => {
                write!(f, "No start directory specified")
            }
            Self::RootNotFound { path } => {
                write!(f, "Start directory '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Start path '{}' is not a directory", path.display())
            }
            Self::PermissionDenied { path, source } => {
                write!(
                    f,
                    "Permission denied accessing '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_context() {
        let err = SearchError::RootNotFound {
            path: PathBuf::from("/no/such/dir"),
        };
        assert!(err.to_string().contains("/no/such/dir"));

        let err = SearchError::NotADirectory {
            path: PathBuf::from("/etc/hosts"),
        };
        assert!(err.to_string().contains("/etc/hosts"));
    }

    #[test]
    fn test_permission_denied_preserves_source() {
        use std::error::Error;
        let err = SearchError::PermissionDenied {
            path: PathBuf::from("/root/secret"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.source().is_some(), "io::Error source must be preserved");
    }
}
