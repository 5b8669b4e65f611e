//! Progress spinner for CLI operations.

use console::Term;
use dirarc_core::ProgressCallback;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::time::Duration;

/// CLI spinner implementing `ProgressCallback`.
///
/// The tree is walked once, so the entry total is unknown up front. The
/// spinner position counts entries; bytes archived, throughput and the
/// current entry path are rendered into the message. Cleared on drop.
pub struct CliProgress {
    bar: ProgressBar,
    bytes_read: u64,
    current_path: String,
}

impl CliProgress {
    /// Creates a spinner labelled with `message` (e.g. "Archiving").
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();

        // Template: "⠋ Archiving 42 entries (15.2 MB, 5.1 MB/s) com/example/Hello.class"
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {prefix} {pos} entries {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );

        bar.set_prefix(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self {
            bar,
            bytes_read: 0,
            current_path: String::new(),
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    fn refresh(&self) {
        self.bar.set_message(render_message(
            self.bytes_read,
            self.bar.elapsed(),
            &self.current_path,
        ));
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, path: &str, current: usize) {
        self.bar.set_position(current as u64);
        path.clone_into(&mut self.current_path);
        self.refresh();
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_read += bytes;
        self.refresh();
    }

    fn on_entry_complete(&mut self, _path: &str) {}

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Formats "(bytes, rate) path" for the spinner message.
fn render_message(bytes: u64, elapsed: Duration, path: &str) -> String {
    let secs = elapsed.as_secs_f64();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let per_sec = if secs > 0.0 {
        (bytes as f64 / secs) as u64
    } else {
        0
    };
    format!(
        "({}, {}/s) {path}",
        humanize_bytes(bytes),
        humanize_bytes(per_sec)
    )
}

/// Converts bytes to human-readable format (KB, MB, GB, TB).
pub fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_bytes() {
        assert_eq!(humanize_bytes(0), "0 B");
        assert_eq!(humanize_bytes(512), "512 B");
        assert_eq!(humanize_bytes(1024), "1.0 KB");
        assert_eq!(humanize_bytes(1536), "1.5 KB");
        assert_eq!(humanize_bytes(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(humanize_bytes(1536 * 1024 * 1024), "1.5 GB");
        assert_eq!(humanize_bytes(1024_u64.pow(4)), "1.0 TB");
    }

    #[test]
    fn test_render_message() {
        assert_eq!(
            render_message(2048, Duration::from_secs(2), "a/b.txt"),
            "(2.0 KB, 1.0 KB/s) a/b.txt"
        );
        assert_eq!(render_message(0, Duration::ZERO, "x"), "(0 B, 0 B/s) x");
    }

    #[test]
    fn test_progress_callback_tracks_entries_and_bytes() {
        let mut progress = CliProgress::new("Testing");

        progress.on_entry_start("classes/", 1);
        progress.on_entry_start("classes/A.class", 2);
        progress.on_bytes_written(1024);
        progress.on_bytes_written(512);
        progress.on_entry_complete("classes/A.class");

        assert_eq!(progress.bytes_read, 1536);
        assert_eq!(progress.current_path, "classes/A.class");
        assert_eq!(progress.bar.position(), 2);
        assert_eq!(progress.bar.length(), None);

        progress.on_complete();
        assert_eq!(progress.bytes_read, 1536);
    }
}
