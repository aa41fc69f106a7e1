//! Translation between Unicode text and LaTeX token sequences.

mod data;

use std::collections::HashMap;

use tracing::debug;

use crate::config::ErrorPolicy;
use crate::error::ConfigError;
use crate::lexer::incremental::{IncrementalLexer, LexerState, Mode};
use crate::token::{Token, TokenKind};

pub use data::STANDARD_ENTRIES;

/// Delimiters used to turn a math mode translation into text mode ones.
const MATH_DELIMITERS: [(&str, &str); 2] = [("$", "$"), ("\\(", "\\)")];

/// Longest-match lookup in both directions.
///
/// [`TranslationTable`] is the usual implementation; anything else that
/// answers these questions can be handed to the codecs instead.
pub trait Translate {
    /// Length of the longest token sequence that [`to_unicode`](Self::to_unicode)
    /// can match.
    fn max_length(&self) -> usize;

    /// Unicode text for exactly this token sequence.
    fn to_unicode(&self, tokens: &[Token]) -> Option<&str>;

    /// LaTeX for a single character.
    fn to_latex(&self, c: char) -> Option<&Translation>;
}

/// The LaTeX mode a translation applies in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TexMode {
    #[default]
    Text,
    Math,
}

/// One correspondence between Unicode and LaTeX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub unicode: &'a str,
    pub latex: &'a str,
    pub mode: TexMode,
    /// Use when translating LaTeX to Unicode.
    pub decode: bool,
    /// Use when translating Unicode to LaTeX.
    pub encode: bool,
}

impl<'a> Entry<'a> {
    pub const fn text(unicode: &'a str, latex: &'a str) -> Self {
        Self {
            unicode,
            latex,
            mode: TexMode::Text,
            decode: true,
            encode: true,
        }
    }

    pub const fn math(unicode: &'a str, latex: &'a str) -> Self {
        Self {
            unicode,
            latex,
            mode: TexMode::Math,
            decode: true,
            encode: true,
        }
    }

    pub const fn decode_only(mut self) -> Self {
        self.encode = false;
        self
    }

    pub const fn encode_only(mut self) -> Self {
        self.decode = false;
        self
    }
}

/// The LaTeX side of an encode translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    latex: String,
    tokens: Vec<Token>,
}

impl Translation {
    pub fn latex(&self) -> &str {
        &self.latex
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether the translation leaves LaTeX eating spaces.
    pub fn ends_with_control_word(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|token| token.kind() == TokenKind::ControlWord)
    }
}

/// Bidirectional Unicode <-> LaTeX table.
///
/// Registration order matters: for each token sequence and for each
/// character, the first registration wins.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    unicode_map: HashMap<Vec<Token>, String>,
    latex_map: HashMap<char, Translation>,
    max_length: usize,
}

impl TranslationTable {
    /// An empty table, which makes the decoder fall back to plain token
    /// decoding and the encoder to the byte encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table built from [`STANDARD_ENTRIES`].
    pub fn standard() -> Result<Self, ConfigError> {
        Self::from_entries(STANDARD_ENTRIES)
    }

    pub fn from_entries(entries: &[Entry<'_>]) -> Result<Self, ConfigError> {
        let mut table = Self::new();
        for entry in entries {
            table.register(*entry)?;
        }
        debug!(
            entries = entries.len(),
            decode_keys = table.unicode_map.len(),
            encode_keys = table.latex_map.len(),
            max_length = table.max_length,
            "built translation table"
        );
        Ok(table)
    }

    /// Register a correspondence.
    ///
    /// A math mode entry is registered as two text mode entries, wrapped in
    /// `$...$` and in `\(...\)`; no substitution happens inside math.
    /// A decode entry of the form control sequence + characters, like
    /// `\'e`, also registers its braced form `\'{e}`, which maps to the
    /// braced Unicode text.
    pub fn register(&mut self, entry: Entry<'_>) -> Result<(), ConfigError> {
        if entry.mode == TexMode::Math {
            for (open, close) in MATH_DELIMITERS {
                let latex = format!("{}{}{}", open, entry.latex, close);
                self.register(Entry {
                    unicode: entry.unicode,
                    latex: &latex,
                    mode: TexMode::Text,
                    decode: entry.decode,
                    encode: entry.encode,
                })?;
            }
            return Ok(());
        }

        let tokens = tokenize(entry.latex)?;
        if entry.decode {
            if let [control, chars] = tokens.as_slice() {
                if control.kind().is_control() && chars.kind() == TokenKind::Chars {
                    let braced = vec![
                        control.clone(),
                        Token::chars("{"),
                        chars.clone(),
                        Token::chars("}"),
                    ];
                    self.insert_unicode(braced, format!("{{{}}}", entry.unicode));
                }
            }
            self.insert_unicode(tokens.clone(), entry.unicode.to_string());
        }
        if entry.encode {
            let mut chars = entry.unicode.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(invalid(entry.latex, "encoding needs exactly one character"));
            };
            self.latex_map.entry(c).or_insert_with(|| Translation {
                latex: entry.latex.to_string(),
                tokens,
            });
        }
        Ok(())
    }

    fn insert_unicode(&mut self, tokens: Vec<Token>, unicode: String) {
        if !self.unicode_map.contains_key(&tokens) {
            self.max_length = self.max_length.max(tokens.len());
            self.unicode_map.insert(tokens, unicode);
        }
    }

    /// Number of token sequences known to the decoder.
    pub fn decode_len(&self) -> usize {
        self.unicode_map.len()
    }

    /// Number of characters known to the encoder.
    pub fn encode_len(&self) -> usize {
        self.latex_map.len()
    }
}

impl Translate for TranslationTable {
    fn max_length(&self) -> usize {
        self.max_length
    }

    fn to_unicode(&self, tokens: &[Token]) -> Option<&str> {
        self.unicode_map.get(tokens).map(String::as_str)
    }

    fn to_latex(&self, c: char) -> Option<&Translation> {
        self.latex_map.get(&c)
    }
}

/// Lex a complete LaTeX fragment as if it occurred in the middle of a line.
fn tokenize(latex: &str) -> Result<Vec<Token>, ConfigError> {
    if latex.is_empty() {
        return Err(invalid(latex, "empty latex"));
    }
    let mut lexer = IncrementalLexer::latex(true, ErrorPolicy::Strict);
    lexer.set_state(LexerState {
        mode: Mode::Middle,
        ..LexerState::default()
    });
    let tokens = lexer
        .tokens(latex.as_bytes(), true)
        .map_err(|err| invalid(latex, &err.to_string()))?;
    if tokens.is_empty() {
        return Err(invalid(latex, "no tokens"));
    }
    Ok(tokens)
}

fn invalid(latex: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEntry {
        latex: latex.to_string(),
        reason: reason.to_string(),
    }
}
