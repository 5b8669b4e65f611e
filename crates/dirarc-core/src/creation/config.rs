//! Configuration for archive creation operations.

use crate::formats::ArchiveFormat;

/// Configuration for archive creation operations.
///
/// # Examples
///
/// ```
/// use dirarc_core::ArchiveConfig;
/// use dirarc_core::ArchiveFormat;
///
/// let config = ArchiveConfig::default()
///     .with_root_prefix("app/lib")
///     .with_format(ArchiveFormat::Jar);
/// assert_eq!(config.root_prefix.as_deref(), Some("app/lib"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Virtual directory the whole tree is nested under inside the archive.
    ///
    /// Either separator convention is accepted. `None` or an empty string
    /// places the source root's children at the archive root.
    ///
    /// Default: `None`.
    pub root_prefix: Option<String>,

    /// Archive format to create.
    ///
    /// `None` detects the format from the output file extension.
    ///
    /// Default: `None`.
    pub format: Option<ArchiveFormat>,
}

impl ArchiveConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root prefix.
    #[must_use]
    pub fn with_root_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.root_prefix = Some(prefix.into());
        self
    }

    /// Sets the archive format explicitly.
    #[must_use]
    pub fn with_format(mut self, format: ArchiveFormat) -> Self {
        self.format = Some(format);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArchiveConfig::default();
        assert!(config.root_prefix.is_none());
        assert!(config.format.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = ArchiveConfig::new()
            .with_root_prefix("prefix\\path")
            .with_format(ArchiveFormat::TarGz);
        assert_eq!(config.root_prefix.as_deref(), Some("prefix\\path"));
        assert_eq!(config.format, Some(ArchiveFormat::TarGz));
    }
}
