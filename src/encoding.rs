//! Fallback byte encodings for text that has no LaTeX-specific form.
//!
//! LaTeX control sequences are plain 7-bit ASCII, so only encodings that
//! extend ASCII can be combined with them.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::Encoding;

use crate::error::{ConfigError, Error, Result};

/// An ASCII-superset byte encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteEncoding {
    /// Strict 7-bit ASCII.
    #[default]
    Ascii,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
    /// Any ASCII-compatible encoding from the WHATWG encoding standard.
    Whatwg(&'static Encoding),
}

impl ByteEncoding {
    pub const UTF_8: ByteEncoding = ByteEncoding::Whatwg(encoding_rs::UTF_8);

    /// Look up an encoding by label, e.g. `ascii`, `latin1`, `utf8`, `gb2312`.
    pub fn for_label(label: &str) -> Result<Self, ConfigError> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("ascii") || label.eq_ignore_ascii_case("us-ascii") {
            return Ok(ByteEncoding::Ascii);
        }
        // WHATWG maps these labels to windows-1252
        if ["latin1", "latin-1", "iso-8859-1", "iso8859-1", "l1"]
            .iter()
            .any(|name| label.eq_ignore_ascii_case(name))
        {
            return Ok(ByteEncoding::Latin1);
        }
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| ConfigError::UnknownEncoding(label.to_string()))?;
        if !encoding.is_ascii_compatible() {
            return Err(ConfigError::IncompatibleEncoding(encoding.name()));
        }
        Ok(ByteEncoding::Whatwg(encoding))
    }

    pub fn name(self) -> &'static str {
        match self {
            ByteEncoding::Ascii => "ascii",
            ByteEncoding::Latin1 => "ISO-8859-1",
            ByteEncoding::Whatwg(encoding) => encoding.name(),
        }
    }

    /// Decode `bytes`, failing on anything malformed or unmappable.
    pub fn decode(self, bytes: &[u8]) -> Result<Cow<'_, str>> {
        let decoded = match self {
            ByteEncoding::Ascii if bytes.is_ascii() => {
                std::str::from_utf8(bytes).ok().map(Cow::Borrowed)
            }
            ByteEncoding::Ascii => None,
            ByteEncoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes)),
            ByteEncoding::Whatwg(encoding) => {
                encoding.decode_without_bom_handling_and_without_replacement(bytes)
            }
        };
        decoded.ok_or_else(|| Error::Decode {
            encoding: self.name(),
            bytes: bytes.to_vec(),
        })
    }

    /// Encode a single character, or `None` if the encoding cannot represent it.
    pub fn encode_char(self, c: char) -> Option<Vec<u8>> {
        match self {
            ByteEncoding::Ascii => c.is_ascii().then(|| vec![c as u8]),
            ByteEncoding::Latin1 => u8::try_from(u32::from(c)).ok().map(|b| vec![b]),
            ByteEncoding::Whatwg(encoding) => {
                let mut buf = [0; 4];
                let (bytes, _, unmappable) = encoding.encode(c.encode_utf8(&mut buf));
                (!unmappable).then(|| bytes.into_owned())
            }
        }
    }

    pub fn can_encode(self, c: char) -> bool {
        match self {
            ByteEncoding::Ascii => c.is_ascii(),
            ByteEncoding::Latin1 => u32::from(c) <= 0xff,
            ByteEncoding::Whatwg(_) => self.encode_char(c).is_some(),
        }
    }

    /// Whether the second byte of a multibyte character can fall in the
    /// ASCII range, as in Shift_JIS, GBK, GB18030, Big5 and EUC-KR.
    pub fn has_ascii_trail_bytes(self) -> bool {
        match self {
            ByteEncoding::Whatwg(encoding) => [
                encoding_rs::SHIFT_JIS,
                encoding_rs::GBK,
                encoding_rs::GB18030,
                encoding_rs::BIG5,
                encoding_rs::EUC_KR,
            ]
            .contains(&encoding),
            _ => false,
        }
    }
}

impl FromStr for ByteEncoding {
    type Err = ConfigError;

    fn from_str(label: &str) -> Result<Self, ConfigError> {
        ByteEncoding::for_label(label)
    }
}

impl fmt::Display for ByteEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
