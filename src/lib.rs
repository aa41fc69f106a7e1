//! latexcodec - Translate between LaTeX and Unicode text
//!
//! Decoding turns LaTeX such as `\'e` or `\ae` into Unicode, following
//! LaTeX's rules for spaces, line ends and comments. Encoding goes the
//! other way, escaping only what the fallback encoding cannot represent.
//! Both directions work incrementally: input may be split into chunks at
//! any point without changing the output.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use latexcodec::{Codec, Options, TranslationTable};
//!
//! let table = Arc::new(TranslationTable::standard()?);
//! let codec = Codec::new(table, Options::default())?;
//! let (text, _) = codec.decode(br#"m\ae lstr\"om"#.as_slice())?;
//! assert_eq!(text, "mælström");
//! let (latex, _) = codec.encode("mælström")?;
//! assert_eq!(latex.as_bytes(), br#"m\ae lstr\"om"#);
//! # Ok::<(), latexcodec::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod encoding;
pub mod error;
pub mod file_handler;
pub mod lexer;
pub mod table;
pub mod token;

pub use codec::Codec;
pub use config::{ErrorPolicy, Options, VERSION};
pub use decoder::{IncrementalDecoder, Input};
pub use encoder::{Encoded, IncrementalEncoder};
pub use encoding::ByteEncoding;
pub use error::{ConfigError, Error, Result};
pub use lexer::incremental::{IncrementalLexer, LexerState, Mode};
pub use table::{Entry, TexMode, Translate, Translation, TranslationTable};
pub use token::{Token, TokenKind};
