//! Incremental LaTeX -> Unicode decoding.

use std::sync::Arc;

use tracing::trace;

use crate::config::Options;
use crate::encoding::ByteEncoding;
use crate::error::{ConfigError, Error, Result};
use crate::lexer::LatexTokenizer;
use crate::lexer::incremental::IncrementalLexer;
use crate::table::{Translate, TranslationTable};
use crate::token::Token;

/// Decoder input: raw bytes in binary mode, text in text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> Input<'a> {
    fn kind_name(&self) -> &'static str {
        match self {
            Input::Bytes(_) => "bytes",
            Input::Text(_) => "text",
        }
    }

    /// Length in bytes for byte input, in characters for text input.
    pub fn len(&self) -> usize {
        match self {
            Input::Bytes(bytes) => bytes.len(),
            Input::Text(text) => text.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Input::Bytes(bytes) => bytes.is_empty(),
            Input::Text(text) => text.is_empty(),
        }
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

/// Translating incremental decoder.
///
/// Lexed tokens are collected in a window of at most `max_length` tokens,
/// and the longest registered sequence at the end of the window is replaced
/// by its Unicode translation. Tokens that fall off the front of the window
/// are decoded as they are.
///
/// Unlike [`IncrementalLexer`], the decoder offers no state snapshot: its
/// state is the lexer state plus the token window. Feed a single instance
/// chunk by chunk instead.
#[derive(Debug, Clone)]
pub struct IncrementalDecoder<T = TranslationTable> {
    lexer: IncrementalLexer,
    table: Arc<T>,
    options: Options,
    window: Vec<Token>,
}

impl<T: Translate> IncrementalDecoder<T> {
    pub fn new(table: Arc<T>, options: Options) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::from_parts(table, options))
    }

    pub(crate) fn from_parts(table: Arc<T>, options: Options) -> Self {
        Self {
            lexer: IncrementalLexer::new(
                LatexTokenizer::new(!options.binary_mode).with_encoding(options.token_encoding()),
                options.errors,
            ),
            table,
            options,
            window: Vec::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn reset(&mut self) {
        self.lexer.reset();
        self.window.clear();
    }

    /// Decode the next chunk of LaTeX.
    ///
    /// Concatenating the results of any sequence of calls, the last one with
    /// `is_final` set, gives the same text as decoding everything at once.
    pub fn decode<'a>(&mut self, input: impl Into<Input<'a>>, is_final: bool) -> Result<String> {
        let chunk = check_input(input.into(), self.options.binary_mode)?;
        let encoding = self.options.token_encoding();
        let mut decoded = String::new();
        for token in self.lexer.tokens(chunk, is_final)? {
            self.push(token, encoding, &mut decoded)?;
        }
        if is_final {
            for token in self.window.drain(..) {
                decoded.push_str(&token.decode(encoding)?);
            }
        }
        Ok(decoded)
    }

    fn push(&mut self, token: Token, encoding: ByteEncoding, decoded: &mut String) -> Result<()> {
        self.window.push(token);
        // only the newest token can complete a match: every shorter window
        // was already tried when its last token came in
        for len in (1..=self.window.len()).rev() {
            let split = self.window.len() - len;
            if let Some(unicode) = self.table.to_unicode(&self.window[split..]) {
                trace!(len, unicode, "translated tokens");
                for token in &self.window[..split] {
                    decoded.push_str(&token.decode(encoding)?);
                }
                decoded.push_str(unicode);
                self.window.clear();
                return Ok(());
            }
        }
        // the oldest token cannot start a match anymore
        while !self.window.is_empty() && self.window.len() >= self.table.max_length() {
            let token = self.window.remove(0);
            trace!(?token, "untranslated token");
            decoded.push_str(&token.decode(encoding)?);
        }
        Ok(())
    }
}

fn check_input(input: Input<'_>, binary_mode: bool) -> Result<&[u8]> {
    match (input, binary_mode) {
        (Input::Bytes(bytes), true) => Ok(bytes),
        (Input::Text(text), false) => Ok(text.as_bytes()),
        (input, binary_mode) => Err(Error::Type {
            expected: if binary_mode { "bytes" } else { "text" },
            found: input.kind_name(),
        }),
    }
}
