//! Error conversion utilities for CLI.
//!
//! Converts dirarc-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use dirarc_core::ArchiveError;
use std::path::Path;

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, output: &Path, source: &Path) -> anyhow::Error {
    match err {
        ArchiveError::SourceNotFound { path } => {
            anyhow!(
                "Source directory not found: {}\n\
                 HINT: Check the SOURCE_DIR argument.",
                path.display()
            )
        }
        ArchiveError::NotADirectory { path } => {
            anyhow!(
                "Source is not a directory: {}\n\
                 HINT: Only whole directories can be archived; pass the parent directory instead.",
                path.display()
            )
        }
        ArchiveError::UnsupportedNode { path } => {
            anyhow!(
                "Cannot archive '{}': {}\n\
                 HINT: Sockets, FIFOs and device files are not supported. Move them out of the tree.",
                source.display(),
                path.display()
            )
        }
        ArchiveError::Source { path, reason } => {
            anyhow!("Cannot read '{}': {}", path.display(), reason)
        }
        ArchiveError::Destination { path, source } => {
            anyhow!(
                "Cannot write archive '{}': {}\n\
                 HINT: Check that the parent directory exists and is writable.",
                path.display(),
                source
            )
        }
        ArchiveError::FormatConfiguration { reason } => {
            anyhow!(
                "Invalid archive format for '{}': {}\n\
                 HINT: Supported formats: zip, jar, tar, tar.gz. Use --format to choose one explicitly.",
                output.display(),
                reason
            )
        }
        ArchiveError::InvalidConfiguration { reason } => {
            anyhow!("Invalid configuration: {reason}")
        }
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while archiving '{}' into '{}': {}",
                source.display(),
                output.display(),
                io_err
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn convert(err: ArchiveError) -> String {
        let converted = convert_archive_error(err, Path::new("out.jar"), Path::new("classes"));
        format!("{converted:?}")
    }

    #[test]
    fn test_convert_source_not_found() {
        let msg = convert(ArchiveError::SourceNotFound {
            path: PathBuf::from("classes"),
        });
        assert!(msg.contains("not found"));
        assert!(msg.contains("classes"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_unsupported_node() {
        let msg = convert(ArchiveError::UnsupportedNode {
            path: PathBuf::from("classes/pipe"),
        });
        assert!(msg.contains("classes/pipe"));
        assert!(msg.contains("FIFOs"));
    }

    #[test]
    fn test_convert_destination_error() {
        let msg = convert(ArchiveError::Destination {
            path: PathBuf::from("out.jar"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(msg.contains("Cannot write archive"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_convert_format_error_lists_formats() {
        let msg = convert(ArchiveError::FormatConfiguration {
            reason: "unknown archive format".to_string(),
        });
        assert!(msg.contains("zip, jar, tar, tar.gz"));
        assert!(msg.contains("out.jar"));
    }

    #[test]
    fn test_convert_io_error() {
        let msg = convert(ArchiveError::Io(io::Error::other("disk full")));
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_convert_invalid_configuration() {
        let msg = convert(ArchiveError::InvalidConfiguration {
            reason: "output path not set".to_string(),
        });
        assert!(msg.contains("Invalid configuration"));
        assert!(msg.contains("output path not set"));
    }
}
