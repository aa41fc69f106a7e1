//! Raw lexing of LaTeX source into tokens.
//!
//! The raw lexer only segments its input; LaTeX's rules about spaces,
//! newlines and comments are applied on top of it by
//! [`IncrementalLexer`](incremental::IncrementalLexer).

pub mod incremental;

use crate::encoding::ByteEncoding;
use crate::token::{Token, TokenKind};

/// Characters that form a space-eating control symbol after a backslash.
const CONTROL_SYMBOLS: &[u8] = b"~'\"` =^!";

/// Bytes that always start a token of their own.
const SPECIAL_BYTES: &[u8] = b" \t%#$\n\\";

/// Something that can recognize the token at the start of a piece of text.
pub trait Tokenizer {
    /// Kind and byte length of the token starting at `text[0]`.
    ///
    /// `text` is never empty. Tokens have a length of at least one byte;
    /// a token that runs up to the end of `text` may grow once more input
    /// arrives, so callers hold such tokens back until the input is final.
    fn scan(&self, text: &[u8]) -> (TokenKind, usize);
}

/// The standard LaTeX tokenizer.
///
/// Patterns are tried in order: comment, control word, control symbol,
/// other control symbol, parameter, space, newline, math shift, chars and
/// finally a one-byte unknown token.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexTokenizer {
    /// Input is UTF-8 text rather than bytes in some encoding.
    text_mode: bool,
    /// Encoding of the input bytes, used to keep multibyte characters whole.
    encoding: ByteEncoding,
}

impl LatexTokenizer {
    pub fn new(text_mode: bool) -> Self {
        Self {
            text_mode,
            encoding: ByteEncoding::default(),
        }
    }

    /// Tokenizer for bytes in `encoding`.
    pub fn with_encoding(mut self, encoding: ByteEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Width of the character starting at `text[0]`.
    fn char_width(&self, text: &[u8]) -> usize {
        if !self.text_mode || text[0].is_ascii() {
            return 1;
        }
        1 + text[1..]
            .iter()
            .take_while(|&&b| (0x80..0xc0).contains(&b))
            .count()
    }

    fn scan_chars(&self, text: &[u8]) -> usize {
        const GROUPS: [&[u8]; 7] = [b"---", b"--", b"-", b"``", b"''", b"?`", b"!`"];
        if let Some(group) = GROUPS.iter().find(|group| text.starts_with(group)) {
            return group.len();
        }
        if text[0].is_ascii() {
            return 1;
        }
        // a whole run of non-ascii bytes, so that multibyte characters
        // stay inside one token and can be decoded on their own
        let mut len = non_ascii_run(text);
        if self.text_mode || !self.encoding.has_ascii_trail_bytes() {
            return len;
        }
        // the last character may continue with an ascii trail byte
        while len < text.len()
            && !SPECIAL_BYTES.contains(&text[len])
            && self.encoding.decode(&text[..len]).is_err()
        {
            len += 1;
            len += non_ascii_run(&text[len..]);
        }
        len
    }
}

fn non_ascii_run(text: &[u8]) -> usize {
    text.iter().take_while(|b| !b.is_ascii()).count()
}

impl Tokenizer for LatexTokenizer {
    fn scan(&self, text: &[u8]) -> (TokenKind, usize) {
        match text[0] {
            b'%' => {
                let len = text
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(text.len(), |newline| newline + 1);
                (TokenKind::Comment, len)
            }
            b'\\' => match text.get(1) {
                None => (TokenKind::Unknown, 1),
                Some(b) if b.is_ascii_alphabetic() => {
                    let letters = text[1..]
                        .iter()
                        .take_while(|b| b.is_ascii_alphabetic())
                        .count();
                    (TokenKind::ControlWord, 1 + letters)
                }
                Some(b) if CONTROL_SYMBOLS.contains(b) => (TokenKind::ControlSymbol, 2),
                Some(_) => (TokenKind::ControlSymbolX, 1 + self.char_width(&text[1..])),
            },
            b'#' => match text.get(1) {
                Some(b) if b.is_ascii_digit() => (TokenKind::Parameter, 2),
                _ => (TokenKind::Parameter, 1),
            },
            b' ' | b'\t' => (TokenKind::Space, 1),
            b'\n' => (TokenKind::Newline, 1),
            b'$' if text.get(1) == Some(&b'$') => (TokenKind::MathShift, 2),
            b'$' => (TokenKind::MathShift, 1),
            _ => (TokenKind::Chars, self.scan_chars(text)),
        }
    }
}

/// Splits chunks of input into tokens, holding back the last token of every
/// non-final chunk since more input could still extend it.
#[derive(Debug, Clone, Default)]
pub struct RawLexer<T = LatexTokenizer> {
    tokenizer: T,
    /// Unconsumed text: at most one, possibly incomplete, token.
    pending: Vec<u8>,
    /// Stream offset of the first pending byte.
    offset: usize,
}

impl<T: Tokenizer> RawLexer<T> {
    pub fn new(tokenizer: T) -> Self {
        Self {
            tokenizer,
            pending: Vec::new(),
            offset: 0,
        }
    }

    /// Tokenize `chunk`, prefixed by whatever was held back last time.
    ///
    /// When `is_final` is set nothing is held back.
    pub fn tokens(&mut self, chunk: &[u8], is_final: bool) -> Vec<Token> {
        let mut text = std::mem::take(&mut self.pending);
        text.extend_from_slice(chunk);

        let mut tokens = Vec::new();
        let mut start = 0;
        while start < text.len() {
            let rest = &text[start..];
            let (kind, len) = self.tokenizer.scan(rest);
            let len = len.clamp(1, rest.len());
            if len == rest.len() && !is_final {
                break;
            }
            tokens.push(Token::new(kind, &rest[..len]));
            start += len;
        }

        self.offset += start;
        self.pending = text.split_off(start);
        tokens
    }

    /// The held back text.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Replace the held back text, e.g. from an earlier [`pending`](Self::pending).
    ///
    /// Stream offsets count from the start of the new pending text.
    pub fn set_pending(&mut self, pending: Vec<u8>) {
        self.pending = pending;
        self.offset = 0;
    }

    /// Stream offset of the next byte that will be tokenized.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset(&mut self) {
        self.pending.clear();
        self.offset = 0;
    }
}
