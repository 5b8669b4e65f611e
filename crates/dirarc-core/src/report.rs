//! Archive creation reporting and progress hooks.

use std::time::Duration;

/// Report of an archive creation operation.
///
/// # Examples
///
/// ```
/// use dirarc_core::ArchiveReport;
///
/// let mut report = ArchiveReport::new();
/// report.bytes_read = 1024;
/// report.bytes_written = 512;
///
/// assert_eq!(report.compression_ratio(), 2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// Number of regular files added to the archive.
    pub files_added: usize,

    /// Number of directory entries added, including the prefix entry.
    pub directories_added: usize,

    /// Number of symbolic links that were not archived.
    pub symlinks_skipped: usize,

    /// Total bytes read from source files.
    pub bytes_read: u64,

    /// Size of the finished archive file.
    pub bytes_written: u64,

    /// Duration of the creation operation.
    pub duration: Duration,

    /// Warnings generated during creation.
    pub warnings: Vec<String>,
}

impl ArchiveReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the number of entries written from the source tree.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files_added + self.directories_added
    }

    /// Ratio of source bytes to archive bytes.
    ///
    /// Returns 0.0 for an empty archive.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_read as f64 / self.bytes_written as f64
    }
}

/// Callback trait for progress reporting during archive creation.
///
/// The trait requires `Send` so a callback can be moved to the thread that
/// runs the build. All methods are invoked on that thread.
///
/// # Examples
///
/// ```
/// use dirarc_core::ProgressCallback;
///
/// struct SimpleProgress;
///
/// impl ProgressCallback for SimpleProgress {
///     fn on_entry_start(&mut self, path: &str, current: usize) {
///         println!("[{current}] {path}");
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &str) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before an entry is written.
    ///
    /// # Arguments
    ///
    /// * `path` - Archive path of the entry
    /// * `current` - Entry number (1-indexed); the total is not known in
    ///   advance because the tree is walked once
    fn on_entry_start(&mut self, path: &str, current: usize);

    /// Called as file contents are copied into the archive.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Number of source bytes copied since the last update
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been completely written.
    fn on_entry_complete(&mut self, path: &str);

    /// Called once when the archive has been finished successfully.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &str, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &str) {}

    fn on_complete(&mut self) {}
}
