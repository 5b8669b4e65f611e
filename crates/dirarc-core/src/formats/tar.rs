//! POSIX tar container writer.
//!
//! Headers are ustar. Names that do not fit the 100-byte classic name field,
//! or that contain non-ASCII bytes, are carried by a PAX extended header
//! (`path` record) preceding the entry; the classic field then holds a
//! truncated ASCII fallback for readers without PAX support.

use std::io::Read;

use tar::Builder;
use tar::EntryType;
use tar::Header;

use crate::Result;
use crate::formats::OutputStream;
use crate::formats::traits::ContainerWriter;
use crate::types::ArchivePath;
use crate::types::SourceNode;

/// Size of the classic ustar name field.
const NAME_FIELD_LEN: usize = 100;

const DEFAULT_DIR_MODE: u32 = 0o755;
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Entry record for tar containers.
pub struct TarEntry {
    path: ArchivePath,
    header: Header,
}

/// Writes tar containers, optionally through a compressing stream.
pub struct TarContainer {
    builder: Builder<OutputStream>,
    compressed: bool,
}

impl TarContainer {
    /// Opens a tar container over the (already decorated) output stream.
    #[must_use]
    pub fn new(output: OutputStream) -> Self {
        let compressed = matches!(output, OutputStream::Gzip(_));
        Self {
            builder: Builder::new(output),
            compressed,
        }
    }

    fn append(&mut self, entry: TarEntry, data: &mut dyn Read) -> Result<()> {
        let TarEntry { path, mut header } = entry;
        let name = path.as_str();

        if needs_pax_path(name) {
            self.builder
                .append_pax_extensions([("path", name.as_bytes())])?;
        }
        set_name_field(&mut header, name);
        header.set_cksum();

        self.builder.append(&header, data)?;
        Ok(())
    }
}

impl ContainerWriter for TarContainer {
    type Entry = TarEntry;

    fn make_entry(&self, node: &SourceNode, path: ArchivePath) -> TarEntry {
        let mut header = Header::new_ustar();
        if node.is_directory() {
            header.set_entry_type(EntryType::Directory);
            header.set_size(0);
            header.set_mode(node.mode.unwrap_or(DEFAULT_DIR_MODE));
        } else {
            header.set_entry_type(EntryType::Regular);
            header.set_size(node.len);
            header.set_mode(node.mode.unwrap_or(DEFAULT_FILE_MODE));
        }
        header.set_mtime(node.modified_secs());
        TarEntry { path, header }
    }

    fn put_directory(&mut self, entry: TarEntry) -> Result<()> {
        self.append(entry, &mut std::io::empty())
    }

    fn put_file(&mut self, entry: TarEntry, contents: &mut dyn Read) -> Result<()> {
        // Header size comes from metadata; entry data must match it exactly.
        let expected = entry.header.entry_size()?;
        let mut limited = contents.take(expected);
        self.append(entry, &mut limited)?;
        if limited.limit() > 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "file shrank while being archived",
            )
            .into());
        }
        Ok(())
    }

    fn finish(self) -> Result<u64> {
        let output = self.builder.into_inner()?;
        output.finish()
    }

    fn format_name(&self) -> &'static str {
        if self.compressed { "tar.gz" } else { "tar" }
    }
}

fn needs_pax_path(name: &str) -> bool {
    name.len() > NAME_FIELD_LEN || !name.is_ascii()
}

/// Writes `name` into the classic name field, truncated to the field size
/// with non-ASCII bytes replaced by `_`.
fn set_name_field(header: &mut Header, name: &str) {
    let field = &mut header.as_old_mut().name;
    field.fill(0);
    for (slot, byte) in field.iter_mut().zip(name.bytes()) {
        *slot = if byte.is_ascii() { byte } else { b'_' };
    }
}
