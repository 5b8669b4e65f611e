//! Directory-to-archive serialization.
//!
//! `dirarc-core` turns an on-disk directory tree into a single archive
//! (ZIP, JAR, tar or gzip-compressed tar). One traversal algorithm serves
//! every format: the tree is walked once in pre-order and each directory and
//! regular file becomes one entry, optionally nested under a virtual root
//! prefix. Symbolic links are never followed.
//!
//! # Examples
//!
//! ```no_run
//! use dirarc_core::create_jar_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = create_jar_archive("app.jar", "target/classes", None)?;
//! println!("Archived {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod creation;
pub mod error;
pub mod formats;
pub mod report;
pub mod types;

// Re-export main API types
pub use api::create_archive;
pub use api::create_archive_with_progress;
pub use api::create_gzipped_tar_archive;
pub use api::create_jar_archive;
pub use api::create_tar_archive;
pub use api::create_zip_archive;
pub use creation::ArchiveConfig;
pub use creation::ArchiveCreator;
pub use error::ArchiveError;
pub use error::ErrorCategory;
pub use error::Result;
pub use formats::ArchiveFormat;
pub use report::ArchiveReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
