use std::sync::Arc;

use latexcodec::table::STANDARD_ENTRIES;
use latexcodec::{
    Codec, ConfigError, Entry, Options, Token, TokenKind, Translate, Translation, TranslationTable,
};

fn control_word(text: &str) -> Token {
    Token::new(TokenKind::ControlWord, text)
}

fn control_symbol(text: &str) -> Token {
    Token::new(TokenKind::ControlSymbol, text)
}

#[test]
fn standard_table() {
    let table = TranslationTable::standard().unwrap();
    assert_eq!(table.max_length(), 7);
    assert!(table.decode_len() > STANDARD_ENTRIES.len());
    assert!(table.encode_len() > 0);

    assert_eq!(table.to_unicode(&[control_word("\\ae")]), Some("æ"));
    assert_eq!(table.to_latex('æ').map(Translation::latex), Some("\\ae"));
    assert_eq!(
        table.to_unicode(&[Token::new(TokenKind::Space, " "), control_word("\\par")]),
        Some("\n\n")
    );
    assert_eq!(table.to_unicode(&[Token::chars("--")]), Some("–"));
}

#[test]
fn math_entries() {
    let table = TranslationTable::from_entries(&[Entry::math("∞", r"\infty")]).unwrap();
    let dollar = [
        Token::new(TokenKind::MathShift, "$"),
        control_word("\\infty"),
        Token::new(TokenKind::MathShift, "$"),
    ];
    let paren = [
        Token::new(TokenKind::ControlSymbolX, "\\("),
        control_word("\\infty"),
        Token::new(TokenKind::ControlSymbolX, "\\)"),
    ];
    assert_eq!(table.to_unicode(&dollar), Some("∞"));
    assert_eq!(table.to_unicode(&paren), Some("∞"));
    // no substitution inside math
    assert_eq!(table.to_unicode(&[control_word("\\infty")]), None);
    assert_eq!(table.to_latex('∞').map(Translation::latex), Some("$\\infty$"));
    assert_eq!(table.max_length(), 3);
}

#[test]
fn braced_variant() {
    let table = TranslationTable::from_entries(&[Entry::text("é", r"\'e")]).unwrap();
    let braced = [
        control_symbol("\\'"),
        Token::chars("{"),
        Token::chars("e"),
        Token::chars("}"),
    ];
    assert_eq!(table.to_unicode(&braced), Some("{é}"));
    assert_eq!(table.decode_len(), 2);
    assert_eq!(table.max_length(), 4);
}

#[test]
fn braced_variant_not_for_control_words_alone() {
    let table = TranslationTable::from_entries(&[Entry::text("æ", r"\ae")]).unwrap();
    assert_eq!(table.decode_len(), 1);
}

#[test]
fn first_registration_wins() {
    let table = TranslationTable::from_entries(&[
        Entry::text("a", r"\x"),
        Entry::text("b", r"\x"),
        Entry::text("é", r"\'e"),
        Entry::text("é", r"\'{e}"),
    ])
    .unwrap();
    assert_eq!(table.to_unicode(&[control_word("\\x")]), Some("a"));
    assert_eq!(table.to_latex('é').map(Translation::latex), Some("\\'e"));
    // the explicit braced spelling lost to the derived one
    let braced = [
        control_symbol("\\'"),
        Token::chars("{"),
        Token::chars("e"),
        Token::chars("}"),
    ];
    assert_eq!(table.to_unicode(&braced), Some("{é}"));
}

#[test]
fn derived_variant_does_not_overwrite() {
    let table = TranslationTable::from_entries(&[
        Entry::text("X", r"\'{e}").decode_only(),
        Entry::text("é", r"\'e"),
    ])
    .unwrap();
    let braced = [
        control_symbol("\\'"),
        Token::chars("{"),
        Token::chars("e"),
        Token::chars("}"),
    ];
    assert_eq!(table.to_unicode(&braced), Some("X"));
    assert_eq!(table.to_unicode(&[control_symbol("\\'"), Token::chars("e")]), Some("é"));
}

#[test]
fn one_way_entries() {
    let table = TranslationTable::from_entries(&[
        Entry::text("\\", r"\textbackslash").decode_only(),
        Entry::text("Ǳ", "DZ").encode_only(),
    ])
    .unwrap();
    assert_eq!(table.to_unicode(&[control_word("\\textbackslash")]), Some("\\"));
    assert!(table.to_latex('\\').is_none());
    assert_eq!(table.to_latex('Ǳ').map(Translation::latex), Some("DZ"));
    assert_eq!(table.to_unicode(&[Token::chars("D"), Token::chars("Z")]), None);
}

#[test]
fn translation_tokens() {
    let table = TranslationTable::standard().unwrap();
    let ae = table.to_latex('æ').unwrap();
    assert_eq!(ae.tokens(), &[control_word("\\ae")]);
    assert!(ae.ends_with_control_word());

    let cedilla = table.to_latex('ç').unwrap();
    assert_eq!(cedilla.latex(), "\\c c");
    assert_eq!(cedilla.tokens(), &[control_word("\\c"), Token::chars("c")]);
    assert!(!cedilla.ends_with_control_word());
}

#[test]
fn invalid_entries() {
    let err = TranslationTable::from_entries(&[Entry::text("ab", r"\ab")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEntry { .. }));

    let err = TranslationTable::from_entries(&[Entry::text("x", "")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEntry { .. }));

    let err = TranslationTable::from_entries(&[Entry::text("x", "x\\")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEntry { latex, .. } if latex == "x\\"));

    // decode only entries may map to longer text
    let table = TranslationTable::from_entries(&[Entry::text("ab", r"\ab").decode_only()]);
    assert!(table.is_ok());
}

/// Turns `\shout` into an exclamation mark and knows nothing else.
struct Shout;

impl Translate for Shout {
    fn max_length(&self) -> usize {
        1
    }

    fn to_unicode(&self, tokens: &[Token]) -> Option<&str> {
        (tokens == [control_word("\\shout")]).then_some("!")
    }

    fn to_latex(&self, _: char) -> Option<&Translation> {
        None
    }
}

#[test]
fn custom_table() {
    let codec = Codec::new(Arc::new(Shout), Options::default()).unwrap();
    assert_eq!(codec.decode(br"hey\shout \ae").unwrap().0, "hey!\\ae ");
    assert_eq!(codec.encode("hey!").unwrap().0.as_bytes(), b"hey!");
    assert!(codec.encode("æ").is_err());
}
