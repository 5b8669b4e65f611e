//! Builder for creating archives with fluent API.

use std::path::Path;
use std::path::PathBuf;

use crate::ArchiveError;
use crate::ArchiveReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::config::ArchiveConfig;
use crate::formats::ArchiveFormat;

/// Builder for creating archives with fluent API.
///
/// # Examples
///
/// ```no_run
/// use dirarc_core::ArchiveCreator;
///
/// // Format detected from the extension
/// let report = ArchiveCreator::new()
///     .output("site.tar.gz")
///     .source("public/")
///     .root_prefix("www")
///     .create()?;
/// println!("Archived {} files", report.files_added);
/// # Ok::<(), dirarc_core::ArchiveError>(())
/// ```
#[derive(Debug, Default)]
pub struct ArchiveCreator {
    output_path: Option<PathBuf>,
    source: Option<PathBuf>,
    config: ArchiveConfig,
}

impl ArchiveCreator {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output archive path (required).
    #[must_use]
    pub fn output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the source directory (required).
    #[must_use]
    pub fn source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: ArchiveConfig) -> Self {
        self.config = config;
        self
    }

    /// Nests the tree under `prefix` inside the archive.
    #[must_use]
    pub fn root_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.config.root_prefix = Some(prefix.into());
        self
    }

    /// Sets the archive format explicitly.
    ///
    /// When unset, the format is detected from the output extension.
    #[must_use]
    pub fn format(mut self, format: ArchiveFormat) -> Self {
        self.config.format = Some(format);
        self
    }

    /// Creates the archive.
    ///
    /// # Errors
    ///
    /// Returns an error if the output or source path is not set, the format
    /// cannot be determined, or the build fails.
    pub fn create(self) -> Result<ArchiveReport> {
        self.create_with_progress(&mut NoopProgress)
    }

    /// Creates the archive, reporting progress to `progress`.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_with_progress(
        self,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ArchiveReport> {
        let output_path = self
            .output_path
            .ok_or_else(|| ArchiveError::InvalidConfiguration {
                reason: "output path not set".to_string(),
            })?;
        let source = self
            .source
            .ok_or_else(|| ArchiveError::InvalidConfiguration {
                reason: "source directory not set".to_string(),
            })?;

        crate::api::create_archive_with_progress(&output_path, &source, &self.config, progress)
    }
}
