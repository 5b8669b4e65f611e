//! Output stream decoration.
//!
//! Formats that compress the whole container (tar.gz) wrap the destination
//! file before the container writer sees it; all others write to the file
//! directly.

use std::fs::File;
use std::io::BufWriter;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::str::FromStr;

use flate2::write::GzEncoder;

use crate::ArchiveError;
use crate::Result;

/// Whole-stream compression applied around a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Container bytes are written as-is.
    #[default]
    None,
    /// Container bytes are wrapped in gzip framing.
    Gzip,
}

impl Compression {
    /// Canonical identifier, as accepted by [`FromStr`].
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
        }
    }

    /// Wraps the destination file in the matching encoder.
    ///
    /// # Errors
    ///
    /// Stream decoration failures surface as [`ArchiveError`] like every
    /// other build failure.
    pub fn wrap(self, file: File) -> Result<OutputStream> {
        let buffered = BufWriter::new(file);
        Ok(match self {
            Self::None => OutputStream::Plain(buffered),
            Self::Gzip => {
                OutputStream::Gzip(GzEncoder::new(buffered, flate2::Compression::default()))
            }
        })
    }
}

impl FromStr for Compression {
    type Err = ArchiveError;

    /// Parses a compression identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirarc_core::formats::Compression;
    ///
    /// assert_eq!("gz".parse::<Compression>()?, Compression::Gzip);
    /// assert!("INVALID".parse::<Compression>().is_err());
    /// # Ok::<(), dirarc_core::ArchiveError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "gz" | "gzip" => Ok(Self::Gzip),
            _ => Err(ArchiveError::FormatConfiguration {
                reason: format!("unknown compression identifier '{s}'"),
            }),
        }
    }
}

/// Destination stream handed to a container writer.
///
/// Implements [`Seek`] so seekable containers (zip) can rewrite headers.
/// Seeking through a compressor is not possible and fails with
/// [`std::io::ErrorKind::Unsupported`].
pub enum OutputStream {
    /// Buffered destination file.
    Plain(BufWriter<File>),
    /// Gzip encoder over the buffered destination file.
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputStream {
    /// Finishes compression framing and flushes buffered bytes to the file.
    /// Returns the final size of the destination file.
    ///
    /// # Errors
    ///
    /// Returns an error if the trailing compressed bytes or the buffered
    /// data cannot be written.
    pub fn finish(self) -> Result<u64> {
        let buffered = match self {
            Self::Plain(buffered) => buffered,
            Self::Gzip(encoder) => encoder.finish()?,
        };
        let file = buffered.into_inner().map_err(std::io::IntoInnerError::into_error)?;
        Ok(file.metadata()?.len())
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::Plain(w) => w.write(buf),
            Self::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Plain(w) => w.flush(),
            Self::Gzip(w) => w.flush(),
        }
    }
}

impl Seek for OutputStream {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        match self {
            Self::Plain(w) => w.seek(pos),
            Self::Gzip(_) => Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "cannot seek in a compressed output stream",
            )),
        }
    }
}
