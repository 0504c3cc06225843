//! crock32 - Encode or decode Crockford-style Base32 text
//!
//! Reads the positional TEXT argument, or all of stdin when it is absent,
//! and writes the encoded symbols (or decoded bytes) to stdout.

use clap::{ArgAction, ArgGroup, Parser};
use crock32_core::{Decoder, encode};
use log::debug;
use std::io::{self, BufWriter, Read, Write};

/// Encode data as Base32 symbols or decode symbols back to bytes.
#[derive(Parser, Debug)]
#[command(name = "crock32")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(group(
    ArgGroup::new("mode")
        .args(["encode", "decode"])
))]
struct Args {
    /// Input text; stdin is read when omitted
    text: Option<String>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Encode input bytes to symbols (default)
    #[arg(short = 'e', long, action = ArgAction::SetTrue)]
    encode: bool,

    /// Decode symbols to bytes
    #[arg(short = 'D', long, action = ArgAction::SetTrue)]
    decode: bool,

    // === Decode options ===
    /// Accept only canonical uppercase symbols when decoding
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Skip '-' separators when decoding
    #[arg(long = "ignore-hyphens", action = ArgAction::SetTrue)]
    ignore_hyphens: bool,

    // === Output options ===
    /// Do not print a trailing newline after encoded output
    #[arg(short = 'n', long = "no-newline", action = ArgAction::SetTrue)]
    no_newline: bool,
}

impl Args {
    fn decoder(&self) -> Decoder {
        Decoder::new()
            .strict(self.strict)
            .ignore_hyphens(self.ignore_hyphens)
    }
}

fn init_logger(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

fn read_input(args: &Args) -> io::Result<Vec<u8>> {
    match &args.text {
        Some(text) => Ok(text.as_bytes().to_vec()),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.debug);

    let input = read_input(&args)?;
    debug!("read {} input bytes", input.len());

    let mut output = BufWriter::new(io::stdout().lock());

    if args.decode {
        let decoder = args.decoder();
        debug!(
            "decoding with strict={} ignore_hyphens={}",
            decoder.is_strict(),
            decoder.ignores_hyphens()
        );

        let text = input.trim_ascii_end();
        match decoder.decode(text) {
            Ok(bytes) => {
                debug!("decoded {} symbols to {} bytes", text.len(), bytes.len());
                output.write_all(&bytes)?;
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        let symbols = encode(&input);
        debug!("encoded {} bytes to {} symbols", input.len(), symbols.len());
        output.write_all(&symbols)?;
        if !args.no_newline {
            writeln!(output)?;
        }
    }

    output.flush()?;
    Ok(())
}
