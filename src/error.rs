//! Error types shared by the lexer, the translation table and the codecs.

use thiserror::Error;

/// Everything that can go wrong while transcoding.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A token that matches nothing LaTeX knows about, under the `strict` policy.
    #[error("unknown token {text:?} at position {position}")]
    Lex { position: usize, text: String },

    /// A token could not be decoded in the configured input encoding.
    #[error("cannot decode {bytes:?} as {encoding}")]
    Decode {
        encoding: &'static str,
        bytes: Vec<u8>,
    },

    /// A character has no LaTeX or encoded form, under the `strict` policy.
    #[error("{message}")]
    Encode { character: char, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Byte input given to a text-mode decoder or the other way round.
    #[error("expected {expected} for decode input, but got {found} instead")]
    Type {
        expected: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn untranslatable(character: char) -> Self {
        Error::Encode {
            character,
            message: format!("don't know how to translate {:?} into latex", character),
        }
    }
}

/// Invalid configuration: bad option values, snapshots or table entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("latex codec does not support {0:?} errors")]
    UnknownPolicy(String),

    #[error("the {policy} error policy cannot be used {reason}")]
    UnsupportedPolicy {
        policy: &'static str,
        reason: &'static str,
    },

    #[error("unknown encoding {0:?}")]
    UnknownEncoding(String),

    #[error("encoding {0} does not extend ascii")]
    IncompatibleEncoding(&'static str),

    #[error("unknown codec {0:?}")]
    UnknownCodec(String),

    #[error("invalid lexer state flags {0:#x}")]
    InvalidState(u8),

    #[error("invalid translation entry {latex:?}: {reason}")]
    InvalidEntry { latex: String, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
