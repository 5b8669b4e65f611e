//! Archive path normalization.
//!
//! Archive entry names always use `/` as separator, and directory entries
//! always end with `/`. Paths coming from the host filesystem or from caller
//! input may use either separator convention; [`normalize`] reconciles them.

use std::fmt;
use std::path::Component;
use std::path::Path;

use crate::ArchiveError;
use crate::Result;

/// Separator used inside every archive format produced by this crate.
pub const ARCHIVE_SEPARATOR: char = '/';

const WINDOWS_SEPARATOR: char = '\\';

/// Normalizes a relative path into the archive path convention.
///
/// Every backslash becomes a forward slash, and directory paths get a
/// trailing `/` if they lack one. Nothing else changes: no case folding,
/// no `..` resolution, no percent-encoding.
///
/// # Examples
///
/// ```
/// use dirarc_core::types::normalize;
///
/// assert_eq!(normalize("a\\b\\c.txt", false), "a/b/c.txt");
/// assert_eq!(normalize("a/b", true), "a/b/");
/// assert_eq!(normalize("a/b/", true), "a/b/");
/// ```
#[must_use]
pub fn normalize(path: &str, is_directory: bool) -> String {
    let mut normalized = path.replace(WINDOWS_SEPARATOR, "/");
    if is_directory && !normalized.ends_with(ARCHIVE_SEPARATOR) {
        normalized.push(ARCHIVE_SEPARATOR);
    }
    normalized
}

/// A normalized name under which a node appears in the archive.
///
/// Only constructed through [`ArchivePath::for_node`] or
/// [`RootPrefix::entry_path`], which guarantees the separator and
/// trailing-slash invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArchivePath(String);

impl ArchivePath {
    /// Computes the archive path of a node from its path relative to the
    /// traversal root.
    ///
    /// # Errors
    ///
    /// Returns a source error if the relative path is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirarc_core::types::ArchivePath;
    /// use dirarc_core::types::RootPrefix;
    /// use std::path::Path;
    ///
    /// let prefix = RootPrefix::new(Some("prefix\\path"));
    /// let path = ArchivePath::for_node(&prefix, Path::new("test1/file1.txt"), false)?;
    /// assert_eq!(path.as_str(), "prefix/path/test1/file1.txt");
    /// # Ok::<(), dirarc_core::ArchiveError>(())
    /// ```
    pub fn for_node(prefix: &RootPrefix, relative: &Path, is_directory: bool) -> Result<Self> {
        let relative = relative_to_str(relative)?;
        let joined = format!("{}{relative}", prefix.as_str());
        Ok(Self(normalize(&joined, is_directory)))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this path names a directory entry.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.0.ends_with(ARCHIVE_SEPARATOR)
    }
}

impl fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArchivePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Optional virtual directory under which the whole source tree is nested.
///
/// Normalized once per build. An absent or empty prefix places the source
/// root's children at the root of the archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootPrefix(String);

impl RootPrefix {
    /// Normalizes a caller-supplied prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirarc_core::types::RootPrefix;
    ///
    /// assert!(RootPrefix::new(None).is_empty());
    /// assert!(RootPrefix::new(Some("")).is_empty());
    /// assert_eq!(RootPrefix::new(Some("a\\b")).as_str(), "a/b/");
    /// ```
    #[must_use]
    pub fn new(prefix: Option<&str>) -> Self {
        match prefix {
            None | Some("") => Self::default(),
            Some(raw) => Self(normalize(raw, true)),
        }
    }

    /// Returns the normalized prefix, ending in `/` unless empty.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if no prefix was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Archive path of the synthetic directory entry for the prefix itself.
    ///
    /// Returns `None` for an empty prefix, which has no entry of its own.
    #[must_use]
    pub fn entry_path(&self) -> Option<ArchivePath> {
        (!self.is_empty()).then(|| ArchivePath(self.0.clone()))
    }
}

/// Renders a relative filesystem path with `/` separators.
fn relative_to_str(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    ArchiveError::source_failure(relative, "path is not valid UTF-8")
                })?;
                parts.push(part);
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ArchiveError::source_failure(
                    relative,
                    "path is not relative to the source root",
                ));
            }
        }
    }
    Ok(parts.join("/"))
}
