//! Incremental Unicode -> LaTeX encoding.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::debug;

use crate::config::{ErrorPolicy, Options};
use crate::error::{ConfigError, Error, Result};
use crate::table::{Translate, TranslationTable};

/// Encoder output: bytes in binary mode, text in text mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    Bytes(Vec<u8>),
    Text(String),
}

impl Encoded {
    fn empty(binary_mode: bool) -> Self {
        if binary_mode {
            Encoded::Bytes(Vec::new())
        } else {
            Encoded::Text(String::new())
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Encoded::Bytes(bytes) => bytes,
            Encoded::Text(text) => text.as_bytes(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Encoded::Bytes(bytes) => bytes,
            Encoded::Text(text) => text.into_bytes(),
        }
    }

    /// The text, for text mode output.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Encoded::Bytes(_) => None,
            Encoded::Text(text) => Some(text),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Append `bytes`, which are valid UTF-8 whenever this is text.
    fn push(&mut self, bytes: &[u8]) {
        match self {
            Encoded::Bytes(out) => out.extend_from_slice(bytes),
            Encoded::Text(out) => out.push_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// The output for a single input character.
struct Piece<'t> {
    latex: Cow<'t, [u8]>,
    /// LaTeX will eat the spaces that follow.
    eats_spaces: bool,
}

impl<'t> Piece<'t> {
    fn plain(latex: impl Into<Cow<'t, [u8]>>) -> Self {
        Self {
            latex: latex.into(),
            eats_spaces: false,
        }
    }
}

/// Translating incremental encoder.
///
/// Characters are encoded one at a time. A character goes out as itself
/// when the fallback encoding can represent it, and through the table
/// otherwise; ASCII characters with a table entry, like `#` or `~`, always
/// go through the table.
///
/// After a translation that ends in a control word, like `\ae`, a
/// following space is written as `\ ` and anything else is separated by a
/// single space.
#[derive(Debug, Clone)]
pub struct IncrementalEncoder<T = TranslationTable> {
    table: Arc<T>,
    options: Options,
    eating_spaces: bool,
}

impl<T: Translate> IncrementalEncoder<T> {
    pub fn new(table: Arc<T>, options: Options) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::from_parts(table, options))
    }

    pub(crate) fn from_parts(table: Arc<T>, options: Options) -> Self {
        Self {
            table,
            options,
            eating_spaces: false,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn reset(&mut self) {
        self.eating_spaces = false;
    }

    /// Encode the next chunk of text.
    ///
    /// Nothing is held back between calls, so `is_final` makes no
    /// difference; it is accepted for symmetry with the decoder.
    pub fn encode(&mut self, text: &str, _is_final: bool) -> Result<Encoded> {
        let mut encoded = Encoded::empty(self.options.binary_mode);
        for c in text.chars() {
            let Some(piece) = translate(&*self.table, &self.options, c)? else {
                continue;
            };
            let mut latex: &[u8] = &piece.latex;
            if self.eating_spaces {
                match latex.strip_prefix(b" ") {
                    Some(rest) => {
                        encoded.push(b"\\ ");
                        latex = rest;
                    }
                    None => encoded.push(b" "),
                }
            }
            encoded.push(latex);
            self.eating_spaces = piece.eats_spaces;
        }
        Ok(encoded)
    }
}

fn translate<'t, T: Translate>(table: &'t T, options: &Options, c: char) -> Result<Option<Piece<'t>>> {
    let translation = table.to_latex(c);
    if let Some(translation) = translation.filter(|_| c.is_ascii()) {
        return Ok(Some(Piece {
            latex: Cow::Borrowed(translation.latex().as_bytes()),
            eats_spaces: translation.ends_with_control_word(),
        }));
    }
    if options.binary_mode {
        if let Some(bytes) = options.encoding.encode_char(c) {
            return Ok(Some(Piece::plain(bytes)));
        }
    } else if options.encoding.can_encode(c) {
        return Ok(Some(Piece::plain(c.to_string().into_bytes())));
    }
    if let Some(translation) = translation {
        return Ok(Some(Piece {
            latex: Cow::Borrowed(translation.latex().as_bytes()),
            eats_spaces: translation.ends_with_control_word(),
        }));
    }
    match options.errors {
        ErrorPolicy::Strict => Err(Error::untranslatable(c)),
        ErrorPolicy::Ignore => {
            debug!(?c, "ignoring untranslatable character");
            Ok(None)
        }
        ErrorPolicy::Replace => {
            debug!(?c, "replacing untranslatable character");
            Ok(Some(Piece::plain(format!("{{\\char{}}}", c as u32).into_bytes())))
        }
        // only valid in text mode
        ErrorPolicy::Keep => {
            debug!(?c, "keeping untranslatable character");
            Ok(Some(Piece::plain(c.to_string().into_bytes())))
        }
    }
}
