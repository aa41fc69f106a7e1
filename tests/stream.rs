use std::io::{self, Cursor};
use std::sync::Arc;

use latexcodec::file_handler::{decode_stream, encode_stream, open_input};
use latexcodec::{Codec, Error, TranslationTable};

fn codec(name: &str) -> Codec {
    let table = Arc::new(TranslationTable::standard().unwrap());
    Codec::for_name(name, table).unwrap()
}

fn decode_with(name: &str, input: &[u8], chunk_size: usize) -> Result<String, Error> {
    let mut output = Vec::new();
    decode_stream(&mut codec(name).decoder(), Cursor::new(input), &mut output, chunk_size)?;
    Ok(String::from_utf8(output).unwrap())
}

fn encode_with(name: &str, input: &[u8], chunk_size: usize) -> Result<Vec<u8>, Error> {
    let mut output = Vec::new();
    encode_stream(&mut codec(name).encoder(), Cursor::new(input), &mut output, chunk_size)?;
    Ok(output)
}

#[test]
fn decode_stream_any_chunk_size() {
    let latex = "\\copyright\\ l\\aa ren av bj\\\"orn, Ǭ and $\\psi$\n\nfin".as_bytes();
    let expected = "© låren av björn, Ǭ and ψ\n\nfin";
    for name in ["latex+utf8", "ulatex"] {
        for chunk_size in 1..=9 {
            assert_eq!(
                decode_with(name, latex, chunk_size).unwrap(),
                expected,
                "{} in chunks of {}",
                name,
                chunk_size
            );
        }
    }
}

#[test]
fn encode_stream_any_chunk_size() {
    let text = "Ǭ, mælström # 你好".as_bytes();
    for chunk_size in 1..=9 {
        assert_eq!(
            encode_with("latex+utf8", text, chunk_size).unwrap(),
            "Ǭ, mælström \\# 你好".as_bytes()
        );
        assert_eq!(
            encode_with("ulatex", "Ǭ, mælström #".as_bytes(), chunk_size).unwrap(),
            b"\\textogonekcentered{\\=O}, m\\ae lstr\\\"om \\#"
        );
        assert_eq!(
            encode_with("ulatex", text, chunk_size).unwrap_err().to_string(),
            "don't know how to translate '你' into latex"
        );
    }
}

#[test]
fn invalid_utf8_in_text_mode() {
    let err = decode_with("ulatex", b"ok \xff ok", 4).unwrap_err();
    assert!(matches!(err, Error::Decode { encoding: "UTF-8", bytes } if bytes == b"\xff"));

    let err = encode_with("latex", b"ok \xff ok", 2).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn truncated_utf8_at_end() {
    let truncated = &"é".as_bytes()[..1];
    let err = decode_with("ulatex", truncated, 8).unwrap_err();
    assert!(matches!(err, Error::Decode { bytes, .. } if bytes == truncated));
}

#[test]
fn binary_mode_passes_bytes_through() {
    // latin1 bytes are no valid UTF-8, but fine in binary mode
    assert_eq!(
        decode_with("latex+latin1", b"bj\xf6rn \\ae", 3).unwrap(),
        "björn æ"
    );
}

#[test]
fn open_missing_input() {
    let err = open_input("/nonexistent/latexcodec/input").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
