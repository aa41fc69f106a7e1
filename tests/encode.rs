use std::sync::Arc;

use latexcodec::{ByteEncoding, Codec, Encoded, Error, ErrorPolicy, TranslationTable};
use rstest::rstest;

fn codec(name: &str, errors: ErrorPolicy) -> Codec {
    let table = Arc::new(TranslationTable::standard().unwrap());
    Codec::for_name(name, table)
        .unwrap()
        .with_errors(errors)
        .unwrap()
}

/// Encode `text` in one go and character by character.
fn check_encode(name: &str, errors: ErrorPolicy, text: &str, expected: &[u8]) {
    let codec = codec(name, errors);
    let (encoded, consumed) = codec.encode(text).unwrap();
    assert_eq!(encoded.as_bytes(), expected);
    assert_eq!(consumed, text.chars().count());

    let mut encoder = codec.encoder();
    let mut pieces = Vec::new();
    let mut buf = [0; 4];
    for c in text.chars() {
        pieces.extend(encoder.encode(c.encode_utf8(&mut buf), false).unwrap().into_bytes());
    }
    pieces.extend(encoder.encode("", true).unwrap().into_bytes());
    assert_eq!(pieces, expected, "char by char");
}

#[rstest]
#[case::null("", b"")]
#[case::hello("hello", b"hello")]
#[case::maelstrom("mælström", br#"m\ae lstr\"om"#)]
#[case::laren("© låren av björn", br#"\copyright\ l\aa ren av bj\"orn"#)]
#[case::oeuf(
    "D'un point de vue diététique, l'œuf apaise la faim.",
    br"D'un point de vue di\'et\'etique, l'\oe uf apaise la faim."
)]
#[case::alpha("α", b"$\\alpha$")]
#[case::serafin("Seraf{í}n", br"Seraf{\'\i }n")]
#[case::space_1("ææ", br"\ae \ae")]
#[case::space_2("æ æ", br"\ae\ \ae")]
#[case::number_sign("# hello", br"\# hello")]
#[case::underscore("_", br"\_")]
#[case::dz1("DZ", b"DZ")]
#[case::dz2("Ǳ", b"DZ")]
#[case::newline("hello\nworld", b"hello\nworld")]
#[case::par1("hello\n\nworld", b"hello\n\nworld")]
#[case::par2("hello\\par world", b"hello\\par world")]
#[case::ogonek1("ĄąĘęĮįǪǫŲų", br"\k A\k a\k E\k e\k I\k i\k O\k o\k U\k u")]
#[case::ogonek2("Ǭǭ", br"\textogonekcentered{\=O}\textogonekcentered{\=o}")]
#[case::math_spacing("This is a ψ test.", br"This is a $\psi$ test.")]
#[case::double_math("This is a $$\\psi$$ test.", br"This is a $$\psi$$ test.")]
#[case::tilde(
    "This is a \u{2dc}, \u{2f7}, ∼ and ~test.",
    br"This is a \~{}, \texttildelow , $\sim$ and \textasciitilde test."
)]
#[case::percent("This is a % test.", br"This is a \% test.")]
#[case::reals("ℝ", br"$\mathbb{R}$")]
fn encode(#[case] text: &str, #[case] expected: &[u8]) {
    check_encode("latex", ErrorPolicy::Strict, text, expected);
}

#[test]
fn encode_droitcivil() {
    check_encode(
        "latex",
        ErrorPolicy::Strict,
        "Même s'il a fait l'objet d'adaptations suite à l'évolution, \n\
         la transformation sociale, économique et politique du pays, \n\
         le code civil fran{ç}ais est aujourd'hui encore le texte fondateur \n\
         du droit civil français mais aussi du droit civil belge ainsi que \n\
         de plusieurs autres droits civils.",
        b"M\\^eme s'il a fait l'objet d'adaptations suite \
          \\`a l'\\'evolution, \nla transformation sociale, \
          \\'economique et politique du pays, \nle code civil \
          fran{\\c c}ais est aujourd'hui encore le texte fondateur \n\
          du droit civil fran\\c cais mais aussi du droit civil \
          belge ainsi que \nde plusieurs autres droits civils.",
    );
}

#[rstest]
#[case::maelstrom("mælström", b"m\xe6lstr\xf6m")]
#[case::laren("© låren av björn", b"\xa9 l\xe5ren av bj\xf6rn")]
#[case::oeuf(
    "D'un point de vue diététique, l'œuf apaise la faim.",
    b"D'un point de vue di\xe9t\xe9tique, l'\\oe uf apaise la faim."
)]
#[case::special("#_%", br"\#\_\%")]
fn encode_latin1(#[case] text: &str, #[case] expected: &[u8]) {
    check_encode("latex+latin1", ErrorPolicy::Strict, text, expected);
}

#[test]
fn latin1_labels() {
    for label in ["latin1", "latin-1", "ISO-8859-1", "l1"] {
        assert_eq!(ByteEncoding::for_label(label).unwrap(), ByteEncoding::Latin1);
    }
    assert_eq!(ByteEncoding::for_label("cp1252").unwrap().name(), "windows-1252");
    assert!(ByteEncoding::Latin1.can_encode('ÿ'));
    assert!(!ByteEncoding::Latin1.can_encode('€'));
}

#[test]
fn invalid_code_strict() {
    let err = codec("latex", ErrorPolicy::Strict).encode("\u{2328}").unwrap_err();
    match err {
        Error::Encode { character, message } => {
            assert_eq!(character, '\u{2328}');
            assert_eq!(message, "don't know how to translate '⌨' into latex");
        }
        other => panic!("expected an encode error, got {:?}", other),
    }
}

#[rstest]
#[case::ignore(ErrorPolicy::Ignore, b"")]
#[case::replace(ErrorPolicy::Replace, b"{\\char9000}")]
fn invalid_code(#[case] errors: ErrorPolicy, #[case] expected: &[u8]) {
    check_encode("latex", errors, "\u{2328}", expected);
}

#[test]
fn ignore_keeps_pending_space() {
    check_encode("latex", ErrorPolicy::Ignore, "æ\u{2328}x", br"\ae x");
    check_encode("latex", ErrorPolicy::Ignore, "æ\u{2328} x", br"\ae\ x");
}

#[test]
fn replace_after_control_word() {
    check_encode("latex", ErrorPolicy::Replace, "æ\u{2328}", br"\ae {\char9000}");
}

#[rstest]
#[case::ascii("ulatex", ErrorPolicy::Strict, "mælström", r#"m\ae lstr\"om"#)]
#[case::utf8("ulatex+utf8", ErrorPolicy::Strict, "mælström #", "mælström \\#")]
#[case::keep("ulatex", ErrorPolicy::Keep, "\u{2328} æ", "\u{2328} \\ae")]
#[case::replace("ulatex", ErrorPolicy::Replace, "\u{2328}", "{\\char9000}")]
fn encode_text_mode(
    #[case] name: &str,
    #[case] errors: ErrorPolicy,
    #[case] text: &str,
    #[case] expected: &str,
) {
    let codec = codec(name, errors);
    let (encoded, _) = codec.encode(text).unwrap();
    assert_eq!(encoded, Encoded::Text(expected.to_string()));
    assert_eq!(encoded.as_str(), Some(expected));
    check_encode(name, errors, text, expected.as_bytes());
}

#[test]
fn binary_output_is_bytes() {
    let (encoded, _) = codec("latex", ErrorPolicy::Strict).encode("æ").unwrap();
    assert_eq!(encoded, Encoded::Bytes(br"\ae".to_vec()));
    assert_eq!(encoded.as_str(), None);
}

#[test]
fn encoder_reset() {
    let codec = codec("latex", ErrorPolicy::Strict);
    let mut encoder = codec.encoder();
    assert_eq!(encoder.encode("æ", false).unwrap().as_bytes(), br"\ae");
    assert_eq!(encoder.encode(" ", false).unwrap().as_bytes(), br"\ ");
    assert_eq!(encoder.encode("æ", false).unwrap().as_bytes(), br"\ae");
    encoder.reset();
    assert_eq!(encoder.encode("x", true).unwrap().as_bytes(), b"x");
}
