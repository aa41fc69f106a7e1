//! Tokens: the unit of exchange between the lexers and the translation table.

use std::fmt;

use crate::encoding::ByteEncoding;
use crate::error::Result;

/// What a [`Token`] is, as decided by the raw lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `%` up to and including the end of the line.
    Comment,
    /// `\` followed by letters, e.g. `\alpha`. Eats following spaces.
    ControlWord,
    /// `\` followed by one of ``~'"` =^!``. Eats following spaces.
    ControlSymbol,
    /// `\` followed by any other character. Does not eat spaces.
    ControlSymbolX,
    /// `#1` .. `#9`, or a lone `#`.
    Parameter,
    /// A single space or tab.
    Space,
    Newline,
    /// `$` or `$$`.
    MathShift,
    Chars,
    /// Anything else, typically a lone `\` at the end of input.
    Unknown,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::ControlWord => "control_word",
            TokenKind::ControlSymbol => "control_symbol",
            TokenKind::ControlSymbolX => "control_symbol_x",
            TokenKind::Parameter => "parameter",
            TokenKind::Space => "space",
            TokenKind::Newline => "newline",
            TokenKind::MathShift => "mathshift",
            TokenKind::Chars => "chars",
            TokenKind::Unknown => "unknown",
        }
    }

    /// Control words and both kinds of control symbols.
    pub fn is_control(self) -> bool {
        matches!(
            self,
            TokenKind::ControlWord | TokenKind::ControlSymbol | TokenKind::ControlSymbolX
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable (kind, text) pair.
///
/// The text is kept as raw bytes in both binary and text mode; in text mode
/// it is always valid UTF-8.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: Vec<u8>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn chars(text: impl Into<Vec<u8>>) -> Self {
        Self::new(TokenKind::Chars, text)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Decode the token text in `encoding`.
    ///
    /// Control words get an extra space at the back so that decoded tokens
    /// can simply be concatenated: `\hello` followed by `world` must come
    /// out as `\hello world`, not `\helloworld`, since LaTeX eats the space
    /// after a control word.
    pub fn decode(&self, encoding: ByteEncoding) -> Result<String> {
        let mut decoded = encoding.decode(&self.text)?.into_owned();
        if self.kind == TokenKind::ControlWord {
            decoded.push(' ');
        }
        Ok(decoded)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?})",
            self.kind,
            String::from_utf8_lossy(&self.text)
        )
    }
}
