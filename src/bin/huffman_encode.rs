use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use greedy_huffman::files::encode_file;
use greedy_huffman::{DICTIONARY_FILE, ENCODED_FILE};

#[derive(Parser, Debug)]
#[command(about = "Compresses a text file with a Huffman code", long_about = None)]
struct Args {
    /// The text file to encode.
    input: PathBuf,

    /// Where to store the dictionary needed to decode.
    #[clap(short, long, default_value = DICTIONARY_FILE)]
    dictionary: PathBuf,

    /// Where to store the encoded text.
    #[clap(short, long, default_value = ENCODED_FILE)]
    output: PathBuf,

    /// Raises the log verbosity, can be repeated.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let encoded = encode_file(&args.input, &args.dictionary, &args.output)?;
    print!("{}", encoded.dictionary);

    Ok(())
}
