//! Common trait for container writers.

use std::io::Read;

use crate::Result;
use crate::types::ArchivePath;
use crate::types::SourceNode;

/// Per-format capability set used by the tree serializer.
///
/// One traversal algorithm drives every container through this trait. An
/// entry is built with [`make_entry`](Self::make_entry) and consumed by value
/// when written, so it cannot be reopened once sealed.
pub trait ContainerWriter {
    /// Format-native entry record (name, kind, timestamp, size).
    type Entry;

    /// Injects format-specific entries before the tree is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the injected entry cannot be written.
    fn post_open(&mut self) -> Result<()> {
        Ok(())
    }

    /// Archive path this container writes itself, if any. A source file
    /// mapping to it is skipped.
    fn reserved_path(&self) -> Option<&'static str> {
        None
    }

    /// Builds the entry record for a node at the given archive path.
    fn make_entry(&self, node: &SourceNode, path: ArchivePath) -> Self::Entry;

    /// Writes a directory entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    fn put_directory(&mut self, entry: Self::Entry) -> Result<()>;

    /// Writes a file entry, streaming its full contents from `contents`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the contents or writing the entry fails.
    fn put_file(&mut self, entry: Self::Entry, contents: &mut dyn Read) -> Result<()>;

    /// Writes trailing container structures, flushes and closes the output.
    ///
    /// Returns the size of the destination file in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the trailer or the buffered output cannot be
    /// written.
    fn finish(self) -> Result<u64>;

    /// Short format name used in logs.
    fn format_name(&self) -> &'static str;
}
