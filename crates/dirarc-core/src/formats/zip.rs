//! ZIP and JAR container writer.

use std::io::Read;
use std::io::Write;
use std::time::SystemTime;

use chrono::Datelike;
use chrono::Local;
use chrono::Timelike;
use zip::CompressionMethod;
use zip::DateTime;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::Result;
use crate::formats::OutputStream;
use crate::formats::traits::ContainerWriter;
use crate::types::ArchivePath;
use crate::types::SourceNode;

/// Name of the JAR manifest entry.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Manifest body written into every JAR, as the JDK manifest writer renders
/// a manifest holding only the version attribute.
pub const MANIFEST_CONTENT: &str = "Manifest-Version: 1.0\r\n\r\n";

/// Largest size stored without Zip64 extensions.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// Which ZIP-based format is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipFlavor {
    /// Plain ZIP.
    Zip,
    /// JAR: ZIP with a manifest first entry.
    Jar,
}

/// Entry record for ZIP containers.
#[derive(Debug, Clone)]
pub struct ZipEntry {
    path: ArchivePath,
    options: SimpleFileOptions,
}

/// Writes ZIP or JAR containers.
pub struct ZipContainer {
    zip: ZipWriter<OutputStream>,
    flavor: ZipFlavor,
}

impl ZipContainer {
    /// Opens a ZIP container over the (already decorated) output stream.
    #[must_use]
    pub fn new(output: OutputStream, flavor: ZipFlavor) -> Self {
        Self {
            zip: ZipWriter::new(output),
            flavor,
        }
    }

    fn base_options() -> SimpleFileOptions {
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
    }
}

impl ContainerWriter for ZipContainer {
    type Entry = ZipEntry;

    fn post_open(&mut self) -> Result<()> {
        if self.flavor == ZipFlavor::Jar {
            self.zip.start_file(MANIFEST_PATH, Self::base_options())?;
            self.zip.write_all(MANIFEST_CONTENT.as_bytes())?;
        }
        Ok(())
    }

    fn reserved_path(&self) -> Option<&'static str> {
        (self.flavor == ZipFlavor::Jar).then_some(MANIFEST_PATH)
    }

    fn make_entry(&self, node: &SourceNode, path: ArchivePath) -> ZipEntry {
        let mut options = Self::base_options()
            .last_modified_time(node.modified.map_or_else(DateTime::default, dos_timestamp))
            .large_file(node.len >= ZIP64_THRESHOLD);
        if let Some(mode) = node.mode {
            options = options.unix_permissions(mode);
        }
        ZipEntry { path, options }
    }

    fn put_directory(&mut self, entry: ZipEntry) -> Result<()> {
        self.zip.add_directory(entry.path.as_str(), entry.options)?;
        Ok(())
    }

    fn put_file(&mut self, entry: ZipEntry, contents: &mut dyn Read) -> Result<()> {
        self.zip.start_file(entry.path.as_str(), entry.options)?;
        std::io::copy(contents, &mut self.zip)?;
        Ok(())
    }

    fn finish(self) -> Result<u64> {
        let output = self.zip.finish()?;
        output.finish()
    }

    fn format_name(&self) -> &'static str {
        match self.flavor {
            ZipFlavor::Zip => "zip",
            ZipFlavor::Jar => "jar",
        }
    }
}

/// Converts a modification time to a ZIP DOS timestamp in local time.
///
/// Times outside the DOS range (1980..=2107) fall back to the container
/// default.
fn dos_timestamp(time: SystemTime) -> DateTime {
    let local: chrono::DateTime<Local> = time.into();
    let (Ok(year), Ok(month), Ok(day), Ok(hour), Ok(minute), Ok(second)) = (
        u16::try_from(local.year()),
        u8::try_from(local.month()),
        u8::try_from(local.day()),
        u8::try_from(local.hour()),
        u8::try_from(local.minute()),
        u8::try_from(local.second()),
    ) else {
        return DateTime::default();
    };
    DateTime::from_date_and_time(year, month, day, hour, minute, second).unwrap_or_default()
}
