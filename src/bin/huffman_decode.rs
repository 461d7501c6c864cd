use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use greedy_huffman::files::decode_file;
use greedy_huffman::{LiteralPolicy, DECODED_FILE, DICTIONARY_FILE};

#[derive(Parser, Debug)]
#[command(about = "Decompresses a text file encoded with a Huffman code", long_about = None)]
struct Args {
    /// The encoded file.
    input: PathBuf,

    /// The dictionary written when encoding.
    #[clap(short, long, default_value = DICTIONARY_FILE)]
    dictionary: PathBuf,

    /// Where to store the decoded text.
    #[clap(short, long, default_value = DECODED_FILE)]
    output: PathBuf,

    /// Drop the pending bits whenever a character other than 0 or 1 is met.
    #[clap(long)]
    reset_on_literal: bool,

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

    let policy = match args.reset_on_literal {
        true => LiteralPolicy::ResetBits,
        false => LiteralPolicy::KeepBits,
    };
    decode_file(&args.input, &args.dictionary, &args.output, policy)?;

    Ok(())
}
