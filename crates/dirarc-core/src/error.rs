//! Error types for archive creation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Broad failure category of an [`ArchiveError`].
///
/// Every error produced while building an archive belongs to exactly one
/// category. Callers that only care about "the build failed" can ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The source directory or a node inside it could not be archived.
    Source,
    /// The destination file could not be created.
    Destination,
    /// The requested format or compression identifier is not known.
    FormatConfiguration,
    /// Reading a source file or writing the archive failed.
    Io,
    /// The builder was used without a required setting.
    Configuration,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Source => "source",
            Self::Destination => "destination",
            Self::FormatConfiguration => "format configuration",
            Self::Io => "I/O",
            Self::Configuration => "configuration",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while building an archive.
///
/// All failures share this one type so callers handle a single "archive
/// build failed" outcome; the original cause is kept as the error source.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed while reading a source file or writing an entry.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory does not exist.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Source path exists but is not a directory.
    #[error("source is not a directory: {path}")]
    NotADirectory {
        /// The offending source path.
        path: PathBuf,
    },

    /// A node in the source tree is neither a regular file nor a directory.
    #[error("unsupported file type at {path}: only regular files and directories can be archived")]
    UnsupportedNode {
        /// The offending node.
        path: PathBuf,
    },

    /// Source tree could not be read.
    #[error("cannot read source {path}: {reason}")]
    Source {
        /// Path being read when the failure happened.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// Destination file could not be opened for writing.
    #[error("cannot write archive to {path}: {source}")]
    Destination {
        /// The destination path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// Unrecognized or misconfigured format or compression identifier.
    #[error("invalid archive format configuration: {reason}")]
    FormatConfiguration {
        /// Description of the problem.
        reason: String,
    },

    /// A required builder setting (output path, source directory) is missing.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the missing setting.
        reason: String,
    },
}

impl ArchiveError {
    /// Returns the failure category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirarc_core::ArchiveError;
    /// use dirarc_core::ErrorCategory;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::SourceNotFound {
    ///     path: PathBuf::from("/missing"),
    /// };
    /// assert_eq!(err.category(), ErrorCategory::Source);
    /// ```
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceNotFound { .. }
            | Self::NotADirectory { .. }
            | Self::UnsupportedNode { .. }
            | Self::Source { .. } => ErrorCategory::Source,
            Self::Destination { .. } => ErrorCategory::Destination,
            Self::FormatConfiguration { .. } => ErrorCategory::FormatConfiguration,
            Self::Io(_) => ErrorCategory::Io,
            Self::InvalidConfiguration { .. } => ErrorCategory::Configuration,
        }
    }

    /// Returns `true` if the source tree caused this error.
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Source)
    }

    /// Returns `true` if the destination could not be created.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirarc_core::ArchiveError;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::Destination {
    ///     path: PathBuf::from("/readonly/out.zip"),
    ///     source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_destination_error());
    /// assert!(!err.is_source_error());
    /// ```
    #[must_use]
    pub const fn is_destination_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Destination)
    }

    /// Returns `true` if a format or compression identifier was rejected.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::FormatConfiguration)
    }

    /// Returns `true` if the builder was missing a required setting.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Configuration)
    }

    /// Builds a `Source` error for a traversal failure.
    pub(crate) fn source_failure(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Source {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Self::Io(io),
            other => Self::Io(std::io::Error::other(format!("zip container error: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArchiveError = io_err.into();
        assert!(matches!(err, ArchiveError::Io(_)));
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_destination_error_keeps_cause() {
        use std::error::Error as _;

        let err = ArchiveError::Destination {
            path: PathBuf::from("out.zip"),
            source: std::io::Error::new(std::io::ErrorKind::IsADirectory, "is a directory"),
        };
        assert!(err.is_destination_error());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("out.zip"));
    }

    #[test]
    fn test_source_error_categories() {
        let errors = [
            ArchiveError::SourceNotFound {
                path: PathBuf::from("a"),
            },
            ArchiveError::NotADirectory {
                path: PathBuf::from("a"),
            },
            ArchiveError::UnsupportedNode {
                path: PathBuf::from("a"),
            },
            ArchiveError::source_failure("a", "permission denied"),
        ];
        for err in &errors {
            assert!(err.is_source_error(), "{err} should be a source error");
            assert!(!err.is_format_error());
        }
    }

    #[test]
    fn test_format_error_display() {
        let err = ArchiveError::FormatConfiguration {
            reason: "unknown compression identifier 'INVALID'".to_string(),
        };
        assert!(err.is_format_error());
        assert!(err.to_string().contains("INVALID"));
    }

    #[test]
    fn test_invalid_configuration_category() {
        let err = ArchiveError::InvalidConfiguration {
            reason: "output path not set".to_string(),
        };
        assert!(err.is_configuration_error());
        assert!(!err.is_format_error());
        assert_eq!(err.category().to_string(), "configuration");
    }

    #[test]
    fn test_zip_error_folds_into_io() {
        let err: ArchiveError = zip::result::ZipError::FileNotFound.into();
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Source.to_string(), "source");
        assert_eq!(
            ErrorCategory::FormatConfiguration.to_string(),
            "format configuration"
        );
    }
}
