//! Tree serialization.
//!
//! Walks the source directory once in pre-order and emits one archive entry
//! per directory and regular file, directories before their descendants.
//! Sibling order is whatever the filesystem yields. Symbolic links are never
//! followed; they are reported and skipped.

use std::fs;
use std::fs::File;
use std::path::Path;

use tracing::trace;
use tracing::warn;
use walkdir::WalkDir;

use crate::ArchiveError;
use crate::ArchiveReport;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::progress::ProgressReader;
use crate::formats::ContainerWriter;
use crate::types::ArchivePath;
use crate::types::RootPrefix;
use crate::types::SourceNode;

/// Serializes the tree under `root` into `container`.
///
/// With a non-empty `prefix`, a directory entry for the prefix itself is
/// written first, stamped with the modification time of `root`. The root
/// directory never gets an entry of its own.
///
/// `exclude` names a path relative to `root` that is never archived; the
/// writer passes the destination here when it lies inside the source tree.
/// A file landing on the container's reserved path (the JAR manifest) is
/// skipped as well. Both skips are recorded as report warnings.
///
/// Aborts on the first error. Entries already written stay in the container.
///
/// # Errors
///
/// Returns an error if a node cannot be read, is neither a directory,
/// regular file nor symbolic link, or if the container rejects an entry.
pub fn serialize<C: ContainerWriter>(
    root: &Path,
    prefix: &RootPrefix,
    exclude: Option<&Path>,
    container: &mut C,
    report: &mut ArchiveReport,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    let mut serializer = Serializer {
        container,
        report,
        progress,
        current: 0,
    };

    if let Some(prefix_path) = prefix.entry_path() {
        let metadata =
            fs::metadata(root).map_err(|e| ArchiveError::source_failure(root, e))?;
        let node = SourceNode::from_metadata(root, Path::new(""), &metadata).ok_or_else(|| {
            ArchiveError::NotADirectory {
                path: root.to_path_buf(),
            }
        })?;
        serializer.put_directory(&node, prefix_path)?;
    }

    for entry in WalkDir::new(root).follow_links(false).min_depth(1) {
        let entry = entry.map_err(|e| walk_error(root, &e))?;
        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map_err(|e| ArchiveError::source_failure(path, e))?;

        if exclude == Some(relative) {
            serializer.skip(path, "archive destination is inside the source tree");
            continue;
        }

        if entry.path_is_symlink() {
            serializer.skip_symlink(path);
            continue;
        }

        let metadata = entry.metadata().map_err(|e| walk_error(root, &e))?;
        let node = SourceNode::from_metadata(path, relative, &metadata).ok_or_else(|| {
            ArchiveError::UnsupportedNode {
                path: path.to_path_buf(),
            }
        })?;

        let archive_path = ArchivePath::for_node(prefix, relative, node.is_directory())?;
        if node.is_directory() {
            serializer.put_directory(&node, archive_path)?;
        } else if serializer.container.reserved_path() == Some(archive_path.as_str()) {
            serializer.skip(path, "replaced by the generated entry of the same name");
        } else {
            serializer.put_file(&node, archive_path)?;
        }
    }

    Ok(())
}

struct Serializer<'a, C> {
    container: &'a mut C,
    report: &'a mut ArchiveReport,
    progress: &'a mut dyn ProgressCallback,
    current: usize,
}

impl<C: ContainerWriter> Serializer<'_, C> {
    fn put_directory(&mut self, node: &SourceNode, path: ArchivePath) -> Result<()> {
        trace!(path = %path, "adding directory");
        let name = path.as_str().to_owned();
        self.start(&name);

        let entry = self.container.make_entry(node, path);
        self.container.put_directory(entry)?;

        self.report.directories_added += 1;
        self.progress.on_entry_complete(&name);
        Ok(())
    }

    fn put_file(&mut self, node: &SourceNode, path: ArchivePath) -> Result<()> {
        trace!(path = %path, size = node.len, "adding file");
        let name = path.as_str().to_owned();
        self.start(&name);

        let file = File::open(&node.path).map_err(|e| ArchiveError::source_failure(&node.path, e))?;
        let entry = self.container.make_entry(node, path);
        let mut reader = ProgressReader::new(file, &mut *self.progress);
        self.container.put_file(entry, &mut reader)?;
        let copied = reader.total_bytes();
        drop(reader);

        self.report.files_added += 1;
        self.report.bytes_read += copied;
        self.progress.on_entry_complete(&name);
        Ok(())
    }

    fn skip_symlink(&mut self, path: &Path) {
        let target = fs::read_link(path)
            .map(|t| t.display().to_string())
            .unwrap_or_else(|_| "?".to_string());
        warn!(path = %path.display(), target = %target, "skipping symbolic link");
        self.report.symlinks_skipped += 1;
        self.report
            .add_warning(format!("skipped symlink: {} -> {target}", path.display()));
    }

    fn skip(&mut self, path: &Path, reason: &str) {
        warn!(path = %path.display(), reason, "skipping source node");
        self.report
            .add_warning(format!("skipped {}: {reason}", path.display()));
    }

    fn start(&mut self, name: &str) {
        self.current += 1;
        self.progress.on_entry_start(name, self.current);
    }
}

fn walk_error(root: &Path, err: &walkdir::Error) -> ArchiveError {
    let path = err.path().unwrap_or(root);
    ArchiveError::source_failure(path, err)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::NoopProgress;
    use crate::types::NodeKind;
    use std::io::Read;
    use tempfile::TempDir;

    /// Container that records what the serializer asked it to write.
    #[derive(Default)]
    struct RecordingContainer {
        entries: Vec<(String, NodeKind, Vec<u8>)>,
        reserved: Option<&'static str>,
    }

    impl ContainerWriter for RecordingContainer {
        type Entry = (ArchivePath, NodeKind);

        fn reserved_path(&self) -> Option<&'static str> {
            self.reserved
        }

        fn make_entry(&self, node: &SourceNode, path: ArchivePath) -> Self::Entry {
            (path, node.kind)
        }

        fn put_directory(&mut self, entry: Self::Entry) -> Result<()> {
            self.entries
                .push((entry.0.to_string(), entry.1, Vec::new()));
            Ok(())
        }

        fn put_file(&mut self, entry: Self::Entry, contents: &mut dyn Read) -> Result<()> {
            let mut data = Vec::new();
            contents.read_to_end(&mut data)?;
            self.entries.push((entry.0.to_string(), entry.1, data));
            Ok(())
        }

        fn finish(self) -> Result<u64> {
            Ok(0)
        }

        fn format_name(&self) -> &'static str {
            "recording"
        }
    }

    fn run(root: &Path, prefix: Option<&str>) -> (RecordingContainer, ArchiveReport) {
        let mut container = RecordingContainer::default();
        let mut report = ArchiveReport::new();
        serialize(
            root,
            &RootPrefix::new(prefix),
            None,
            &mut container,
            &mut report,
            &mut NoopProgress,
        )
        .unwrap();
        (container, report)
    }

    fn names(container: &RecordingContainer) -> Vec<&str> {
        container.entries.iter().map(|e| e.0.as_str()).collect()
    }

    #[test]
    fn test_directories_precede_descendants() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b")).unwrap();
        fs::write(temp.path().join("a/b/f.txt"), "data").unwrap();

        let (container, report) = run(temp.path(), None);
        assert_eq!(names(&container), vec!["a/", "a/b/", "a/b/f.txt"]);
        assert_eq!(container.entries[2].2, b"data");
        assert_eq!(report.files_added, 1);
        assert_eq!(report.directories_added, 2);
        assert_eq!(report.bytes_read, 4);
    }

    #[test]
    fn test_prefix_entry_comes_first() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("f.txt"), "x").unwrap();

        let (container, report) = run(temp.path(), Some("prefix\\path"));
        assert_eq!(names(&container), vec!["prefix/path/", "prefix/path/f.txt"]);
        assert_eq!(container.entries[0].1, NodeKind::Directory);
        assert_eq!(report.directories_added, 1);
    }

    #[test]
    fn test_empty_root_without_prefix_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let (container, report) = run(temp.path(), Some(""));
        assert!(container.entries.is_empty());
        assert_eq!(report.total_entries(), 0);
    }

    #[test]
    fn test_empty_file_is_archived() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("empty"), "").unwrap();
        let (container, _) = run(temp.path(), None);
        assert_eq!(names(&container), vec!["empty"]);
        assert!(container.entries[0].2.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped_with_warning() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        fs::write(temp.path().join("real/f.txt"), "x").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link_dir"))
            .unwrap();
        std::os::unix::fs::symlink("real/f.txt", temp.path().join("link_file")).unwrap();

        let (container, report) = run(temp.path(), None);
        let mut got = names(&container);
        got.sort_unstable();
        assert_eq!(got, vec!["real/", "real/f.txt"]);
        assert_eq!(report.symlinks_skipped, 2);
        assert_eq!(report.warnings.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_fifo_is_unsupported() {
        let temp = TempDir::new().unwrap();
        let fifo = temp.path().join("pipe");
        let Ok(status) = std::process::Command::new("mkfifo").arg(&fifo).status() else {
            return;
        };
        if !status.success() {
            return;
        }

        let mut container = RecordingContainer::default();
        let err = serialize(
            temp.path(),
            &RootPrefix::default(),
            None,
            &mut container,
            &mut ArchiveReport::new(),
            &mut NoopProgress,
        )
        .unwrap_err();
        assert!(matches!(err, ArchiveError::UnsupportedNode { .. }));
    }

    #[test]
    fn test_excluded_path_is_skipped_with_warning() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("out")).unwrap();
        fs::write(temp.path().join("out/self.zip"), "partial").unwrap();
        fs::write(temp.path().join("keep.txt"), "x").unwrap();

        let mut container = RecordingContainer::default();
        let mut report = ArchiveReport::new();
        serialize(
            temp.path(),
            &RootPrefix::default(),
            Some(Path::new("out/self.zip")),
            &mut container,
            &mut report,
            &mut NoopProgress,
        )
        .unwrap();

        let mut got = names(&container);
        got.sort_unstable();
        assert_eq!(got, vec!["keep.txt", "out/"]);
        assert_eq!(report.files_added, 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("self.zip"));
    }

    #[test]
    fn test_reserved_path_is_skipped_with_warning() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("META-INF")).unwrap();
        fs::write(temp.path().join("META-INF/MANIFEST.MF"), "Main-Class: A\n").unwrap();

        let mut container = RecordingContainer {
            reserved: Some("META-INF/MANIFEST.MF"),
            ..RecordingContainer::default()
        };
        let mut report = ArchiveReport::new();
        serialize(
            temp.path(),
            &RootPrefix::default(),
            None,
            &mut container,
            &mut report,
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(names(&container), vec!["META-INF/"]);
        assert_eq!(report.files_added, 0);
        assert_eq!(report.warnings.len(), 1);
    }
}
