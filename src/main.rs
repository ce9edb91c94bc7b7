//! A command-line front-end for the BWT/MTF codec.
//!
//! Example invocations:
//! echo -n "abracadabra" | bwtc -c | xxd
//! echo -n "abracadabra" | bwtc -c -m | bwtc -d -m

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Block-sorting (Burrows-Wheeler) transform codec with optional move-to-front coding.
#[derive(Debug, Parser)]
#[command(name = "bwtc", author, version, about, long_about = None)]
struct Cli {
    /// Compress (forward-transform) the input. This is the default when `-d` is
    /// absent; the flag exists so it can be passed explicitly.
    #[arg(short = 'c', long = "encode")]
    encode: bool,

    /// Decompress (reverse-transform) the input instead of compressing it.
    #[arg(short = 'd', long = "decode")]
    decode: bool,

    /// Enable move-to-front post-coding of the BWT output. Must match between the
    /// encode and decode invocations: this is not signaled in-band.
    #[arg(short = 'm', long = "mtf")]
    mtf: bool,

    /// Print help. An alias for `-h`/`--help`, which clap binds automatically.
    #[arg(short = '?', action = clap::ArgAction::Help, help = "Print help")]
    help: Option<bool>,

    /// Input path. Reads from stdin when absent.
    #[arg(short = 'i', long = "input", value_name = "path")]
    input: Option<PathBuf>,

    /// Output path. Writes to stdout when absent.
    #[arg(short = 'o', long = "output", value_name = "path")]
    output: Option<PathBuf>,
}

fn open_input(path: &Option<PathBuf>) -> io::Result<Box<dyn Read>> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(io::stdin())),
    }
}

fn open_output(path: &Option<PathBuf>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stdout())),
    }
}

fn run(cli: &Cli) -> bwtc::Result<()> {
    let mut input = open_input(&cli.input)?;
    let mut output = open_output(&cli.output)?;

    if cli.decode {
        bwtc::inverse_transform(&mut input, &mut output, cli.mtf)?;
    } else {
        bwtc::forward_transform(&mut input, &mut output, cli.mtf)?;
    }
    output.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bwtc: {e}");
            ExitCode::FAILURE
        }
    }
}
