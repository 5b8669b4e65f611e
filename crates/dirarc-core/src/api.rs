//! High-level public API for archive creation.
//!
//! Every entry point is a stateless function: each call owns its
//! destination stream, container and traversal state.

use std::path::Path;

use crate::ArchiveConfig;
use crate::ArchiveReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::write_archive;
use crate::formats::ArchiveFormat;
use crate::formats::detect_format;

/// Creates a ZIP archive of `source_dir` at `destination`.
///
/// With a `root_prefix`, every entry is nested under that virtual directory
/// and the prefix gets a directory entry of its own.
///
/// # Errors
///
/// Returns an error if the source is missing or not a directory, the
/// destination cannot be created, or any entry fails to be written.
///
/// # Examples
///
/// ```no_run
/// use dirarc_core::create_zip_archive;
///
/// let report = create_zip_archive("out/site.zip", "public", Some("www"))?;
/// println!("{} files", report.files_added);
/// # Ok::<(), dirarc_core::ArchiveError>(())
/// ```
pub fn create_zip_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    destination: P,
    source_dir: Q,
    root_prefix: Option<&str>,
) -> Result<ArchiveReport> {
    create_archive(destination, source_dir, root_prefix, ArchiveFormat::Zip)
}

/// Creates a JAR archive of `source_dir` at `destination`.
///
/// The first entry is always `META-INF/MANIFEST.MF` declaring
/// `Manifest-Version: 1.0`.
///
/// # Errors
///
/// Same as [`create_zip_archive`].
pub fn create_jar_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    destination: P,
    source_dir: Q,
    root_prefix: Option<&str>,
) -> Result<ArchiveReport> {
    create_archive(destination, source_dir, root_prefix, ArchiveFormat::Jar)
}

/// Creates an uncompressed POSIX tar archive of `source_dir` at
/// `destination`.
///
/// # Errors
///
/// Same as [`create_zip_archive`].
pub fn create_tar_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    destination: P,
    source_dir: Q,
    root_prefix: Option<&str>,
) -> Result<ArchiveReport> {
    create_archive(destination, source_dir, root_prefix, ArchiveFormat::Tar)
}

/// Creates a gzip-compressed tar archive of `source_dir` at `destination`.
///
/// # Errors
///
/// Same as [`create_zip_archive`].
pub fn create_gzipped_tar_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    destination: P,
    source_dir: Q,
    root_prefix: Option<&str>,
) -> Result<ArchiveReport> {
    create_archive(destination, source_dir, root_prefix, ArchiveFormat::TarGz)
}

/// Creates an archive of an explicit format.
///
/// # Errors
///
/// Same as [`create_zip_archive`].
///
/// # Examples
///
/// ```no_run
/// use dirarc_core::ArchiveFormat;
/// use dirarc_core::create_archive;
///
/// let format: ArchiveFormat = "tar.gz".parse()?;
/// create_archive("backup.tgz", "/srv/data", None, format)?;
/// # Ok::<(), dirarc_core::ArchiveError>(())
/// ```
pub fn create_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    destination: P,
    source_dir: Q,
    root_prefix: Option<&str>,
    format: ArchiveFormat,
) -> Result<ArchiveReport> {
    write_archive(
        destination.as_ref(),
        source_dir.as_ref(),
        root_prefix,
        format,
        &mut NoopProgress,
    )
}

/// Creates an archive as described by `config`, reporting progress.
///
/// The format is taken from `config.format`, or detected from the
/// destination extension when unset.
///
/// # Errors
///
/// Returns a format configuration error if no format is configured and the
/// extension is not recognized; otherwise same as [`create_zip_archive`].
pub fn create_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    destination: P,
    source_dir: Q,
    config: &ArchiveConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveReport> {
    let destination = destination.as_ref();
    let format = determine_format(destination, config)?;
    write_archive(
        destination,
        source_dir.as_ref(),
        config.root_prefix.as_deref(),
        format,
        progress,
    )
}

/// Determines archive format from config or output path.
fn determine_format(destination: &Path, config: &ArchiveConfig) -> Result<ArchiveFormat> {
    match config.format {
        Some(format) => Ok(format),
        None => detect_format(destination),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_determine_format_from_extension() {
        let config = ArchiveConfig::default();
        let format = determine_format(&PathBuf::from("lib.jar"), &config).unwrap();
        assert_eq!(format, ArchiveFormat::Jar);
    }

    #[test]
    fn test_determine_format_explicit_wins() {
        let config = ArchiveConfig::default().with_format(ArchiveFormat::TarGz);
        let format = determine_format(&PathBuf::from("archive.xyz"), &config).unwrap();
        assert_eq!(format, ArchiveFormat::TarGz);
    }

    #[test]
    fn test_determine_format_unknown() {
        let config = ArchiveConfig::default();
        let err = determine_format(&PathBuf::from("archive.xyz"), &config).unwrap_err();
        assert!(err.is_format_error());
    }
}
