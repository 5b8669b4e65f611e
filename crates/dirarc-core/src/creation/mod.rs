//! Archive creation module.
//!
//! The [`writer`] opens the destination and drives a format's container
//! writer; the [`walker`] serializes the source tree into it.

pub mod config;
pub mod creator;
pub mod progress;
pub mod walker;
pub mod writer;

// Re-exports for public API
pub use config::ArchiveConfig;
pub use creator::ArchiveCreator;
pub use walker::serialize;
pub use writer::write_archive;
