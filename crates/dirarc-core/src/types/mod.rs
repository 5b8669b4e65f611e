//! Core types for archive creation.
//!
//! - [`ArchivePath`]: normalized entry name inside an archive
//! - [`RootPrefix`]: optional virtual directory the tree is nested under
//! - [`SourceNode`]: a directory or regular file found during traversal

mod archive_path;
mod source_node;

pub use archive_path::ARCHIVE_SEPARATOR;
pub use archive_path::ArchivePath;
pub use archive_path::RootPrefix;
pub use archive_path::normalize;
pub use source_node::NodeKind;
pub use source_node::SourceNode;
