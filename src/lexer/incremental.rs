//! The contextual lexer: LaTeX's whitespace rules as a state machine.
//!
//! Roughly follows the input processor described in TeX by Topic, chapter 2.
//! The tokens it produces satisfy:
//!
//! - there are no newline tokens: a line end becomes a space and a blank
//!   line becomes `\par`;
//! - spaces after control words and space-eating control symbols are gone;
//! - comments are gone.

use tracing::debug;

use super::{LatexTokenizer, RawLexer, Tokenizer};
use crate::config::ErrorPolicy;
use crate::error::{ConfigError, Error, Result};
use crate::token::{Token, TokenKind};

/// Where on the line the lexer is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Start of a line (N).
    #[default]
    Newline,
    /// Skipping spaces (S), e.g. after a control word.
    SkipSpace,
    /// Middle of a line (M).
    Middle,
}

/// A snapshot of everything an [`IncrementalLexer`] carries between chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexerState {
    pub raw_buffer: Vec<u8>,
    pub mode: Mode,
    pub inline_math: bool,
}

const INLINE_MATH_FLAG: u8 = 4;

impl LexerState {
    /// The compact `(buffer, flags)` form: the low two bits hold the mode
    /// (M = 0, N = 1, S = 2) and bit 2 is set in inline math.
    pub fn pack(&self) -> (Vec<u8>, u8) {
        let mode = match self.mode {
            Mode::Middle => 0,
            Mode::Newline => 1,
            Mode::SkipSpace => 2,
        };
        let math = if self.inline_math { INLINE_MATH_FLAG } else { 0 };
        (self.raw_buffer.clone(), mode | math)
    }
}

impl TryFrom<(Vec<u8>, u8)> for LexerState {
    type Error = ConfigError;

    fn try_from((raw_buffer, flags): (Vec<u8>, u8)) -> Result<Self, ConfigError> {
        let mode = match flags & !INLINE_MATH_FLAG {
            0 => Mode::Middle,
            1 => Mode::Newline,
            2 => Mode::SkipSpace,
            _ => return Err(ConfigError::InvalidState(flags)),
        };
        Ok(Self {
            raw_buffer,
            mode,
            inline_math: flags & INLINE_MATH_FLAG != 0,
        })
    }
}

/// Lexer that applies LaTeX's whitespace and comment rules on top of a
/// [`RawLexer`], and resolves unknown tokens according to an [`ErrorPolicy`].
#[derive(Debug, Clone)]
pub struct IncrementalLexer<T = LatexTokenizer> {
    raw: RawLexer<T>,
    mode: Mode,
    inline_math: bool,
    errors: ErrorPolicy,
}

impl IncrementalLexer {
    /// Lexer with the standard LaTeX tokenizer.
    pub fn latex(text_mode: bool, errors: ErrorPolicy) -> Self {
        Self::new(LatexTokenizer::new(text_mode), errors)
    }
}

impl<T: Tokenizer> IncrementalLexer<T> {
    pub fn new(tokenizer: T, errors: ErrorPolicy) -> Self {
        Self {
            raw: RawLexer::new(tokenizer),
            mode: Mode::Newline,
            inline_math: false,
            errors,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn inline_math(&self) -> bool {
        self.inline_math
    }

    pub fn state(&self) -> LexerState {
        LexerState {
            raw_buffer: self.raw.pending().to_vec(),
            mode: self.mode,
            inline_math: self.inline_math,
        }
    }

    /// Resume from `state`. Error positions are then counted from the start
    /// of the restored buffer.
    pub fn set_state(&mut self, state: LexerState) {
        self.raw.set_pending(state.raw_buffer);
        self.mode = state.mode;
        self.inline_math = state.inline_math;
    }

    pub fn reset(&mut self) {
        self.raw.reset();
        self.mode = Mode::Newline;
        self.inline_math = false;
    }

    /// Lex `chunk` into cleaned up tokens.
    pub fn tokens(&mut self, chunk: &[u8], is_final: bool) -> Result<Vec<Token>> {
        let mut position = self.raw.offset();
        let mut tokens = Vec::new();
        for token in self.raw.tokens(chunk, is_final) {
            let start = position;
            position += token.len();
            if let Some(token) = self.step(token, start)? {
                tokens.push(token);
            }
        }
        Ok(tokens)
    }

    /// Feed one raw token through the state machine.
    fn step(&mut self, token: Token, position: usize) -> Result<Option<Token>> {
        let emitted = match token.kind() {
            TokenKind::Newline => match self.mode {
                Mode::Newline => Some(Token::new(TokenKind::ControlWord, b"\\par".to_vec())),
                Mode::SkipSpace => {
                    self.mode = Mode::Newline;
                    None
                }
                Mode::Middle => {
                    self.mode = Mode::Newline;
                    Some(Token::new(TokenKind::Space, b" ".to_vec()))
                }
            },
            TokenKind::Space => match self.mode {
                Mode::Newline | Mode::SkipSpace => None,
                Mode::Middle => {
                    self.mode = Mode::SkipSpace;
                    Some(token)
                }
            },
            TokenKind::MathShift => {
                self.inline_math = !self.inline_math;
                self.mode = Mode::Middle;
                Some(token)
            }
            TokenKind::ControlWord | TokenKind::ControlSymbol => {
                self.mode = Mode::SkipSpace;
                Some(token)
            }
            TokenKind::Parameter | TokenKind::ControlSymbolX | TokenKind::Chars => {
                self.mode = Mode::Middle;
                Some(token)
            }
            // the comment token includes its newline
            TokenKind::Comment => {
                self.mode = Mode::Newline;
                None
            }
            TokenKind::Unknown => self.unknown(token, position)?,
        };
        Ok(emitted)
    }

    fn unknown(&self, token: Token, position: usize) -> Result<Option<Token>> {
        match self.errors {
            ErrorPolicy::Strict => Err(Error::Lex {
                position,
                text: String::from_utf8_lossy(token.text()).into_owned(),
            }),
            ErrorPolicy::Ignore => {
                debug!(position, ?token, "ignoring unknown token");
                Ok(None)
            }
            ErrorPolicy::Replace => {
                debug!(position, ?token, "replacing unknown token");
                Ok(Some(Token::chars(vec![b'?'; token.len()])))
            }
            ErrorPolicy::Keep => Ok(Some(Token::chars(token.text()))),
        }
    }
}
