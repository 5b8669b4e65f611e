//! Archive format implementations.

pub mod compression;
pub mod detect;
pub mod tar;
pub mod traits;
pub mod zip;

// Re-export main types for convenience
pub use compression::Compression;
pub use compression::OutputStream;
pub use detect::ArchiveFormat;
pub use detect::detect_format;
pub use tar::TarContainer;
pub use traits::ContainerWriter;
pub use zip::ZipContainer;
pub use zip::ZipFlavor;
