//! Progress tracking for file contents copied into an archive.

use crate::ProgressCallback;
use std::io::Read;

/// Default number of bytes accumulated before a progress update (1 MB).
pub const DEFAULT_BATCH_THRESHOLD: u64 = 1024 * 1024;

/// Reader wrapper that counts bytes and reports them to a progress callback.
///
/// Updates are batched: the callback fires once the accumulated byte count
/// reaches the threshold, and once more when the reader is dropped.
///
/// # Examples
///
/// ```
/// use dirarc_core::NoopProgress;
/// use dirarc_core::creation::progress::ProgressReader;
/// use std::io::Read;
///
/// let mut progress = NoopProgress;
/// let mut reader = ProgressReader::new(&b"hello"[..], &mut progress);
/// let mut out = Vec::new();
/// reader.read_to_end(&mut out)?;
/// assert_eq!(reader.total_bytes(), 5);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct ProgressReader<'a, R> {
    inner: R,
    progress: &'a mut dyn ProgressCallback,
    total_bytes: u64,
    bytes_since_last_update: u64,
    batch_threshold: u64,
}

impl<'a, R> ProgressReader<'a, R> {
    /// Creates a progress-tracking reader with the default batch threshold.
    #[must_use]
    pub fn new(inner: R, progress: &'a mut dyn ProgressCallback) -> Self {
        Self::with_batch_threshold(inner, progress, DEFAULT_BATCH_THRESHOLD)
    }

    /// Creates a progress-tracking reader with a custom batch threshold.
    #[must_use]
    pub fn with_batch_threshold(
        inner: R,
        progress: &'a mut dyn ProgressCallback,
        batch_threshold: u64,
    ) -> Self {
        Self {
            inner,
            progress,
            total_bytes: 0,
            bytes_since_last_update: 0,
            batch_threshold,
        }
    }

    /// Total bytes read through this wrapper.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    fn flush_progress(&mut self) {
        if self.bytes_since_last_update > 0 {
            self.progress.on_bytes_written(self.bytes_since_last_update);
            self.bytes_since_last_update = 0;
        }
    }
}

impl<R: Read> Read for ProgressReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        let n64 = n as u64;
        self.total_bytes += n64;
        self.bytes_since_last_update += n64;
        if self.bytes_since_last_update >= self.batch_threshold {
            self.flush_progress();
        }
        Ok(n)
    }
}

impl<R> Drop for ProgressReader<'_, R> {
    fn drop(&mut self) {
        self.flush_progress();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        updates: Vec<u64>,
    }

    impl ProgressCallback for Recorder {
        fn on_entry_start(&mut self, _: &str, _: usize) {}

        fn on_bytes_written(&mut self, bytes: u64) {
            self.updates.push(bytes);
        }

        fn on_entry_complete(&mut self, _: &str) {}

        fn on_complete(&mut self) {}
    }

    #[test]
    fn test_counts_bytes_and_flushes_on_drop() {
        let data = vec![7u8; 1000];
        let mut recorder = Recorder::default();
        {
            let mut reader = ProgressReader::new(&data[..], &mut recorder);
            std::io::copy(&mut reader, &mut std::io::sink()).unwrap();
            assert_eq!(reader.total_bytes(), 1000);
        }
        assert_eq!(recorder.updates, vec![1000]);
    }

    #[test]
    fn test_batches_at_threshold() {
        let data = vec![0u8; 300];
        let mut recorder = Recorder::default();
        {
            let mut reader = ProgressReader::with_batch_threshold(&data[..], &mut recorder, 100);
            let mut buf = [0u8; 50];
            while reader.read(&mut buf).unwrap() > 0 {}
        }
        assert_eq!(recorder.updates.iter().sum::<u64>(), 300);
        assert!(recorder.updates.iter().all(|&b| b >= 100));
    }

    #[test]
    fn test_empty_input_reports_nothing() {
        let mut recorder = Recorder::default();
        {
            let mut reader = ProgressReader::new(std::io::empty(), &mut recorder);
            let mut out = Vec::new();
            reader.read_to_end(&mut out).unwrap();
        }
        assert!(recorder.updates.is_empty());
    }
}
