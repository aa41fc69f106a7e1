//! latexcodec - Translate between LaTeX and Unicode text

use std::io::{self, BufWriter, Read, Write};
use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use latexcodec::config::{DEFAULT_CHUNK_SIZE, ULATEX_CODEC};
use latexcodec::file_handler::{decode_stream, encode_stream, open_input};
use latexcodec::{Codec, ErrorPolicy, Result, TranslationTable};

/// Decode LaTeX to Unicode text, or encode Unicode text as LaTeX.
///
/// Reads the named files, or standard input when there are none, and
/// writes the result to standard output.
#[derive(Parser)]
#[clap(version)]
struct Cli {
    /// Encode Unicode text as LaTeX instead of decoding
    #[arg(short, long)]
    encode: bool,

    /// Codec: latex, latex+<encoding>, ulatex or ulatex+<encoding>
    #[arg(short, long, default_value = ULATEX_CODEC)]
    codec: String,

    /// What to do with untranslatable input: strict, ignore, replace or keep
    #[arg(long, default_value_t = ErrorPolicy::Strict)]
    errors: ErrorPolicy,

    /// Bytes to read per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Input files; `.tex` is added when a name is not found as is
    files: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("latexcodec: error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let table = Arc::new(TranslationTable::standard()?);
    let codec = Codec::for_name(&cli.codec, table)?.with_errors(cli.errors)?;

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    if cli.files.is_empty() {
        transcode(&codec, cli, io::stdin().lock(), &mut output)?;
    } else {
        for file in &cli.files {
            let (input, path) = open_input(file)?;
            info!(path = %path.display(), "transcoding");
            transcode(&codec, cli, input, &mut output)?;
        }
    }
    output.flush()?;
    Ok(())
}

/// Run one input through a fresh incremental coder.
fn transcode(codec: &Codec, cli: &Cli, input: impl Read, output: impl Write) -> Result<()> {
    if cli.encode {
        encode_stream(&mut codec.encoder(), input, output, cli.chunk_size)
    } else {
        decode_stream(&mut codec.decoder(), input, output, cli.chunk_size)
    }
}
