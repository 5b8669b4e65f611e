//! Archive writer: owns the destination stream for one build.

use std::fs;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::ArchiveError;
use crate::ArchiveReport;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::walker;
use crate::formats::ArchiveFormat;
use crate::formats::ContainerWriter;
use crate::formats::TarContainer;
use crate::formats::ZipContainer;
use crate::formats::ZipFlavor;
use crate::types::RootPrefix;

/// Builds one archive of `format` at `destination` from `source`.
///
/// The source is validated before the destination is touched, so a bad
/// source never truncates an existing file. Once the destination is open,
/// the container is finished and the stream closed on every exit path; if
/// the build failed, that failure is returned even when closing also fails.
///
/// # Errors
///
/// Returns an error if the source is missing or not a directory, the
/// destination cannot be created, or any entry fails to be written.
pub fn write_archive(
    destination: &Path,
    source: &Path,
    prefix: Option<&str>,
    format: ArchiveFormat,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveReport> {
    let start = Instant::now();
    validate_source(source)?;

    debug!(
        destination = %destination.display(),
        source = %source.display(),
        %format,
        "creating archive"
    );

    let file = File::create(destination).map_err(|e| ArchiveError::Destination {
        path: destination.to_path_buf(),
        source: e,
    })?;
    let stream = format.compression().wrap(file)?;
    let prefix = RootPrefix::new(prefix);
    let exclude = destination_within(source, destination);

    let mut report = ArchiveReport::new();
    match format {
        ArchiveFormat::Zip => run(
            ZipContainer::new(stream, ZipFlavor::Zip),
            source,
            &prefix,
            exclude.as_deref(),
            &mut report,
            progress,
        )?,
        ArchiveFormat::Jar => run(
            ZipContainer::new(stream, ZipFlavor::Jar),
            source,
            &prefix,
            exclude.as_deref(),
            &mut report,
            progress,
        )?,
        ArchiveFormat::Tar | ArchiveFormat::TarGz => run(
            TarContainer::new(stream),
            source,
            &prefix,
            exclude.as_deref(),
            &mut report,
            progress,
        )?,
    }

    report.duration = start.elapsed();
    progress.on_complete();

    debug!(
        files = report.files_added,
        directories = report.directories_added,
        bytes = report.bytes_written,
        "archive complete"
    );
    Ok(report)
}

fn run<C: ContainerWriter>(
    mut container: C,
    source: &Path,
    prefix: &RootPrefix,
    exclude: Option<&Path>,
    report: &mut ArchiveReport,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    let format_name = container.format_name();
    let outcome = fill(&mut container, source, prefix, exclude, report, progress);
    let closed = container.finish();

    match (outcome, closed) {
        (Ok(()), Ok(size)) => {
            report.bytes_written = size;
            Ok(())
        }
        (Ok(()), Err(err)) | (Err(err), Ok(_)) => Err(err),
        (Err(err), Err(close_err)) => {
            debug!(format = format_name, error = %close_err, "closing failed archive also failed");
            Err(err)
        }
    }
}

fn fill<C: ContainerWriter>(
    container: &mut C,
    source: &Path,
    prefix: &RootPrefix,
    exclude: Option<&Path>,
    report: &mut ArchiveReport,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    container.post_open()?;
    walker::serialize(source, prefix, exclude, container, report, progress)
}

/// Path of the destination relative to the source root, when the
/// destination lies inside the source tree.
fn destination_within(source: &Path, destination: &Path) -> Option<PathBuf> {
    let source = fs::canonicalize(source).ok()?;
    let destination = fs::canonicalize(destination).ok()?;
    destination
        .strip_prefix(&source)
        .ok()
        .map(Path::to_path_buf)
}

fn validate_source(source: &Path) -> Result<()> {
    let metadata = fs::metadata(source).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ArchiveError::SourceNotFound {
            path: source.to_path_buf(),
        },
        _ => ArchiveError::source_failure(source, e),
    })?;

    if !metadata.is_dir() {
        return Err(ArchiveError::NotADirectory {
            path: source.to_path_buf(),
        });
    }
    Ok(())
}
