//! File handling: opening inputs and streaming them through a codec.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::decoder::IncrementalDecoder;
use crate::encoder::IncrementalEncoder;
use crate::error::{Error, Result};
use crate::table::Translate;

/// Open an input file.
///
/// The name is tried as is first. If there is no such file and the name
/// has no `.tex` extension, `.tex` is added and tried too.
pub fn open_input(filename: &str) -> io::Result<(File, PathBuf)> {
    let path = Path::new(filename);
    match File::open(path) {
        Ok(file) => Ok((file, path.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound && !has_tex_extension(path) => {
            let tex_path = path.with_extension("tex");
            File::open(&tex_path).map(|file| (file, tex_path))
        }
        Err(err) => Err(err),
    }
}

fn has_tex_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "tex")
}

/// Decode everything `reader` produces and write it to `writer`.
///
/// Input is read `chunk_size` bytes at a time. In text mode the input must
/// be UTF-8; chunks are re-split so that no character straddles two calls.
pub fn decode_stream<T: Translate>(
    decoder: &mut IncrementalDecoder<T>,
    mut reader: impl Read,
    mut writer: impl Write,
    chunk_size: usize,
) -> Result<()> {
    let binary_mode = decoder.options().binary_mode;
    let mut text = Utf8Splitter::default();
    let mut buf = vec![0; chunk_size.max(1)];
    while let Some(chunk) = read_chunk(&mut reader, &mut buf)? {
        let decoded = if binary_mode {
            decoder.decode(chunk, false)?
        } else {
            decoder.decode(text.split(chunk)?.as_str(), false)?
        };
        writer.write_all(decoded.as_bytes())?;
    }
    let decoded = if binary_mode {
        decoder.decode(b"".as_slice(), true)?
    } else {
        text.finish()?;
        decoder.decode("", true)?
    };
    writer.write_all(decoded.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Encode the UTF-8 text `reader` produces and write it to `writer`.
pub fn encode_stream<T: Translate>(
    encoder: &mut IncrementalEncoder<T>,
    mut reader: impl Read,
    mut writer: impl Write,
    chunk_size: usize,
) -> Result<()> {
    let mut text = Utf8Splitter::default();
    let mut buf = vec![0; chunk_size.max(1)];
    while let Some(chunk) = read_chunk(&mut reader, &mut buf)? {
        let encoded = encoder.encode(&text.split(chunk)?, false)?;
        writer.write_all(encoded.as_bytes())?;
    }
    text.finish()?;
    let encoded = encoder.encode("", true)?;
    writer.write_all(encoded.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Fill `buf` with the next chunk, or `None` at end of input.
fn read_chunk<'b>(reader: &mut impl Read, buf: &'b mut [u8]) -> io::Result<Option<&'b [u8]>> {
    loop {
        match reader.read(buf) {
            Ok(0) => return Ok(None),
            Ok(n) => return Ok(Some(&buf[..n])),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}

/// Cuts a byte stream into UTF-8 strings at character boundaries.
#[derive(Debug, Default)]
struct Utf8Splitter {
    /// Start of a character whose remaining bytes are still to come.
    carry: Vec<u8>,
}

impl Utf8Splitter {
    fn split(&mut self, chunk: &[u8]) -> Result<String> {
        let mut bytes = std::mem::take(&mut self.carry);
        bytes.extend_from_slice(chunk);
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                let utf8_error = err.utf8_error();
                let mut bytes = err.into_bytes();
                if let Some(len) = utf8_error.error_len() {
                    let start = utf8_error.valid_up_to();
                    return Err(invalid_utf8(&bytes[start..start + len]));
                }
                self.carry = bytes.split_off(utf8_error.valid_up_to());
                // the prefix was just validated
                String::from_utf8(bytes).map_err(|err| invalid_utf8(err.as_bytes()))
            }
        }
    }

    fn finish(self) -> Result<()> {
        if self.carry.is_empty() {
            Ok(())
        } else {
            Err(invalid_utf8(&self.carry))
        }
    }
}

fn invalid_utf8(bytes: &[u8]) -> Error {
    Error::Decode {
        encoding: "UTF-8",
        bytes: bytes.to_vec(),
    }
}
