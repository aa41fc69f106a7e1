use std::fs;
use std::io::Seek;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use latexcodec::file_handler::{decode_stream, open_input};
use latexcodec::{Codec, TranslationTable};
use walkdir::WalkDir;

/// Get all .tex files in a directory (recursively)
fn get_tex_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("tex"))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn codec() -> Codec {
    let table = Arc::new(TranslationTable::standard().unwrap());
    Codec::for_name("latex+utf8", table).unwrap()
}

#[test]
fn test_fixture_files() {
    let test_files = get_tex_files(&fixtures_dir());
    assert!(!test_files.is_empty(), "No test files found in tests/fixtures");

    let codec = codec();
    for test_file in test_files {
        let test_name = test_file.display().to_string();
        eprintln!("\nTesting: {}", test_name);

        let latex = fs::read(&test_file).unwrap();
        let expected = fs::read_to_string(test_file.with_extension("txt")).unwrap();

        let (decoded, consumed) = codec.decode(&latex).unwrap();
        assert_eq!(consumed, latex.len());
        assert_eq!(
            expected, decoded,
            "Output mismatch for {}\n\nExpected:\n{}\n\nDecoded:\n{}",
            test_name, expected, decoded
        );

        eprintln!("  ✓ Passed");
    }
}

#[test]
fn test_fixture_files_streamed() {
    let codec = codec();
    for test_file in get_tex_files(&fixtures_dir()) {
        // the .tex extension is optional
        let stem = test_file.with_extension("");
        let (mut input, path) = open_input(stem.to_str().unwrap()).unwrap();
        assert_eq!(path, test_file);

        let expected = fs::read_to_string(test_file.with_extension("txt")).unwrap();
        for chunk_size in [1, 2, 7, 4096] {
            let mut output = Vec::new();
            decode_stream(&mut codec.decoder(), &mut input, &mut output, chunk_size).unwrap();
            assert_eq!(
                String::from_utf8(output).unwrap(),
                expected,
                "{} with chunk size {}",
                test_file.display(),
                chunk_size
            );
            input.rewind().unwrap();
        }
    }
}
