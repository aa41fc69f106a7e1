//! Stateless one-shot codecs and codec lookup by name.

use std::sync::Arc;

use crate::config::{ErrorPolicy, Options};
use crate::decoder::{IncrementalDecoder, Input};
use crate::encoder::{Encoded, IncrementalEncoder};
use crate::error::{ConfigError, Result};
use crate::table::{Translate, TranslationTable};

/// A codec: validated options plus a shared translation table.
///
/// Every call to [`decode`](Self::decode) and [`encode`](Self::encode)
/// runs a fresh incremental coder over the whole input, so a single
/// `Codec` can be shared freely. The incremental coders come from
/// [`decoder`](Self::decoder) and [`encoder`](Self::encoder).
#[derive(Debug)]
pub struct Codec<T = TranslationTable> {
    table: Arc<T>,
    options: Options,
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            options: self.options,
        }
    }
}

impl<T: Translate> Codec<T> {
    pub fn new(table: Arc<T>, options: Options) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { table, options })
    }

    /// Codec for a name such as `latex`, `latex+latin1` or `ulatex+utf8`.
    pub fn for_name(name: &str, table: Arc<T>) -> Result<Self, ConfigError> {
        Self::new(table, Options::for_codec(name)?)
    }

    pub fn with_errors(self, errors: ErrorPolicy) -> Result<Self, ConfigError> {
        Self::new(self.table, self.options.with_errors(errors))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn table(&self) -> &Arc<T> {
        &self.table
    }

    pub fn decoder(&self) -> IncrementalDecoder<T> {
        IncrementalDecoder::from_parts(Arc::clone(&self.table), self.options)
    }

    pub fn encoder(&self) -> IncrementalEncoder<T> {
        IncrementalEncoder::from_parts(Arc::clone(&self.table), self.options)
    }

    /// Decode all of `input`. Also returns the input length: bytes for byte
    /// input, characters for text.
    pub fn decode<'a>(&self, input: impl Into<Input<'a>>) -> Result<(String, usize)> {
        let input = input.into();
        let decoded = self.decoder().decode(input, true)?;
        Ok((decoded, input.len()))
    }

    /// Encode all of `text`. Also returns the number of characters consumed.
    pub fn encode(&self, text: &str) -> Result<(Encoded, usize)> {
        let encoded = self.encoder().encode(text, true)?;
        Ok((encoded, text.chars().count()))
    }
}
