//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use dirarc_core::ArchiveFormat;
use dirarc_core::ArchiveReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

/// Payload of a successful `create`.
#[derive(Debug, Serialize)]
struct CreationOutput {
    output_path: String,
    format: String,
    files_added: usize,
    directories_added: usize,
    symlinks_skipped: usize,
    bytes_read: u64,
    bytes_written: u64,
    compression_ratio: f64,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl CreationOutput {
    fn new(output_path: &Path, format: ArchiveFormat, report: &ArchiveReport) -> Self {
        Self {
            output_path: output_path.display().to_string(),
            format: format.to_string(),
            files_added: report.files_added,
            directories_added: report.directories_added,
            symlinks_skipped: report.symlinks_skipped,
            bytes_read: report.bytes_read,
            bytes_written: report.bytes_written,
            compression_ratio: report.compression_ratio(),
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_creation_result(
        &self,
        output_path: &Path,
        format: ArchiveFormat,
        report: &ArchiveReport,
    ) -> Result<()> {
        let data = CreationOutput::new(output_path, format, report);
        Self::output(&JsonOutput::success("create", data))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("create", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_creation_output_fields() {
        let mut report = ArchiveReport::new();
        report.files_added = 3;
        report.directories_added = 2;
        report.symlinks_skipped = 1;
        report.bytes_read = 300;
        report.bytes_written = 150;
        report.duration = Duration::from_millis(42);
        report.add_warning("skipped symlink: link");

        let data = CreationOutput::new(Path::new("out.tar.gz"), ArchiveFormat::TarGz, &report);
        let value = serde_json::to_value(JsonOutput::success("create", data)).unwrap();

        assert_eq!(value["operation"], "create");
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["format"], "tar.gz");
        assert_eq!(value["data"]["files_added"], 3);
        assert_eq!(value["data"]["symlinks_skipped"], 1);
        assert_eq!(value["data"]["compression_ratio"], 2.0);
        assert_eq!(value["data"]["duration_ms"], 42);
        assert_eq!(value["data"]["warnings"][0], "skipped symlink: link");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_output_structure() {
        let value = serde_json::to_value(JsonOutput::error("create", "boom")).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "boom");
        assert!(value.get("data").is_none());
    }
}
