//! Configuration constants and options for the codecs.

use std::fmt;
use std::str::FromStr;

use crate::encoding::ByteEncoding;
use crate::error::ConfigError;

/// Package version, reported by the binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Codec name for byte mode: LaTeX bytes <-> Unicode text.
pub const LATEX_CODEC: &str = "latex";

/// Codec name for text mode: LaTeX text <-> Unicode text.
pub const ULATEX_CODEC: &str = "ulatex";

/// Separates the codec name from the fallback encoding, as in `latex+latin1`.
pub const CODEC_SEP: char = '+';

/// Chunk size used when streaming files through a codec.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// What to do with input that cannot be transcoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Fail with an error.
    #[default]
    Strict,
    /// Drop the offending input.
    Ignore,
    /// Substitute a placeholder: `?` when decoding, `{\char<n>}` when encoding.
    Replace,
    /// Pass the offending input through unchanged. Text mode only.
    Keep,
}

impl ErrorPolicy {
    pub fn name(self) -> &'static str {
        match self {
            ErrorPolicy::Strict => "strict",
            ErrorPolicy::Ignore => "ignore",
            ErrorPolicy::Replace => "replace",
            ErrorPolicy::Keep => "keep",
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "strict" => Ok(ErrorPolicy::Strict),
            "ignore" => Ok(ErrorPolicy::Ignore),
            "replace" => Ok(ErrorPolicy::Replace),
            "keep" => Ok(ErrorPolicy::Keep),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-instance encoder/decoder options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Error policy
    pub errors: ErrorPolicy,
    /// Fallback encoding for characters without a LaTeX form
    pub encoding: ByteEncoding,
    /// Work on bytes (true) or on already decoded text (false)
    pub binary_mode: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            errors: ErrorPolicy::Strict,
            encoding: ByteEncoding::Ascii,
            binary_mode: true,
        }
    }
}

impl Options {
    /// Options for a codec name: `latex`, `latex+<encoding>`, `ulatex` or
    /// `ulatex+<encoding>`.
    pub fn for_codec(name: &str) -> Result<Self, ConfigError> {
        let (codec, encoding) = match name.split_once(CODEC_SEP) {
            Some((codec, encoding)) => (codec, Some(encoding)),
            None => (name, None),
        };
        let binary_mode = match codec {
            LATEX_CODEC => true,
            ULATEX_CODEC => false,
            _ => return Err(ConfigError::UnknownCodec(name.to_string())),
        };
        let encoding = match encoding {
            Some(label) if !label.is_empty() => ByteEncoding::for_label(label)?,
            _ => ByteEncoding::Ascii,
        };
        Ok(Self {
            encoding,
            binary_mode,
            ..Self::default()
        })
    }

    pub fn with_errors(mut self, errors: ErrorPolicy) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_encoding(mut self, encoding: ByteEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Switch to text mode: LaTeX is handled as `str` rather than bytes.
    pub fn text_mode(mut self) -> Self {
        self.binary_mode = false;
        self
    }

    /// Reject option combinations that cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.errors == ErrorPolicy::Keep && self.binary_mode {
            return Err(ConfigError::UnsupportedPolicy {
                policy: ErrorPolicy::Keep.name(),
                reason: "in binary mode",
            });
        }
        Ok(())
    }

    /// The encoding that token text is actually stored in: the configured
    /// encoding in binary mode, UTF-8 in text mode.
    pub(crate) fn token_encoding(&self) -> ByteEncoding {
        if self.binary_mode {
            self.encoding
        } else {
            ByteEncoding::UTF_8
        }
    }
}
