//! Filesystem nodes visited during traversal.

use std::fs::Metadata;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;

/// Kind of a node that can be archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Directory; archived as an entry without payload.
    Directory,
    /// Regular file; archived with its full contents.
    File,
}

/// A directory or regular file found under the source root.
///
/// Owned by the filesystem; the serializer only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNode {
    /// Absolute (or caller-relative) filesystem path.
    pub path: PathBuf,

    /// Path relative to the traversal root. Empty for the root itself.
    pub relative: PathBuf,

    /// Directory or regular file.
    pub kind: NodeKind,

    /// Last modification time, if the platform reports one.
    pub modified: Option<SystemTime>,

    /// Size in bytes (0 for directories).
    pub len: u64,

    /// Unix permission bits, if the platform exposes them.
    pub mode: Option<u32>,
}

impl SourceNode {
    /// Builds a node from already-read metadata.
    ///
    /// Returns `None` if the metadata describes something other than a
    /// directory or regular file.
    #[must_use]
    pub fn from_metadata(path: &Path, relative: &Path, metadata: &Metadata) -> Option<Self> {
        let kind = if metadata.is_dir() {
            NodeKind::Directory
        } else if metadata.is_file() {
            NodeKind::File
        } else {
            return None;
        };

        Some(Self {
            path: path.to_path_buf(),
            relative: relative.to_path_buf(),
            kind,
            modified: metadata.modified().ok(),
            len: if kind == NodeKind::File {
                metadata.len()
            } else {
                0
            },
            mode: permission_bits(metadata),
        })
    }

    /// Returns `true` for directory nodes.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Modification time in whole seconds since the Unix epoch, clamped at 0.
    #[must_use]
    pub fn modified_secs(&self) -> u64 {
        self.modified
            .and_then(|t| t.duration_since(SystemTime::UNIX_EPOCH).ok())
            .map_or(0, |d| d.as_secs())
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn permission_bits(_metadata: &Metadata) -> Option<u32> {
    None
}
