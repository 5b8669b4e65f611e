//! Archive format selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::ArchiveError;
use crate::Result;
use crate::formats::Compression;

/// Container formats this crate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    /// ZIP archive.
    Zip,
    /// JAR archive: ZIP with a `META-INF/MANIFEST.MF` first entry.
    Jar,
    /// Uncompressed POSIX tar archive.
    Tar,
    /// Gzip-compressed POSIX tar archive.
    TarGz,
}

impl ArchiveFormat {
    /// All supported formats.
    pub const ALL: [Self; 4] = [Self::Zip, Self::Jar, Self::Tar, Self::TarGz];

    /// Whole-stream compression wrapped around the container.
    #[must_use]
    pub const fn compression(self) -> Compression {
        match self {
            Self::TarGz => Compression::Gzip,
            Self::Zip | Self::Jar | Self::Tar => Compression::None,
        }
    }

    /// Conventional file extension, without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Jar => "jar",
            Self::Tar => "tar",
            Self::TarGz => "tar.gz",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ArchiveFormat {
    type Err = ArchiveError;

    /// Parses a format identifier.
    ///
    /// `tar.<compression>` accepts any compression identifier understood by
    /// [`Compression`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dirarc_core::ArchiveFormat;
    ///
    /// assert_eq!("jar".parse::<ArchiveFormat>()?, ArchiveFormat::Jar);
    /// assert_eq!("tgz".parse::<ArchiveFormat>()?, ArchiveFormat::TarGz);
    /// assert_eq!("tar.none".parse::<ArchiveFormat>()?, ArchiveFormat::Tar);
    /// assert!("tar.INVALID".parse::<ArchiveFormat>().is_err());
    /// # Ok::<(), dirarc_core::ArchiveError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "zip" => Ok(Self::Zip),
            "jar" => Ok(Self::Jar),
            "tar" => Ok(Self::Tar),
            "tgz" | "tar+gzip" => Ok(Self::TarGz),
            _ => {
                if !lower.starts_with("tar.") {
                    return Err(ArchiveError::FormatConfiguration {
                        reason: format!("unknown archive format '{s}'"),
                    });
                }
                let id = &s["tar.".len()..];
                Ok(match id.parse::<Compression>()? {
                    Compression::None => Self::Tar,
                    Compression::Gzip => Self::TarGz,
                })
            }
        }
    }
}

/// Detects the archive format from a destination file name.
///
/// # Errors
///
/// Returns a format configuration error if the extension is not recognized.
///
/// # Examples
///
/// ```
/// use dirarc_core::ArchiveFormat;
/// use dirarc_core::formats::detect_format;
/// use std::path::Path;
///
/// assert_eq!(detect_format(Path::new("out/app.JAR"))?, ArchiveFormat::Jar);
/// assert_eq!(detect_format(Path::new("backup.tar.gz"))?, ArchiveFormat::TarGz);
/// # Ok::<(), dirarc_core::ArchiveError>(())
/// ```
pub fn detect_format(path: &Path) -> Result<ArchiveFormat> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        Ok(ArchiveFormat::TarGz)
    } else if name.ends_with(".tar") {
        Ok(ArchiveFormat::Tar)
    } else if name.ends_with(".zip") {
        Ok(ArchiveFormat::Zip)
    } else if name.ends_with(".jar") {
        Ok(ArchiveFormat::Jar)
    } else {
        Err(ArchiveError::FormatConfiguration {
            reason: format!(
                "cannot determine archive format from file name '{}'",
                path.display()
            ),
        })
    }
}
