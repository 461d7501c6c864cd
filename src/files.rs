//! Reading and writing the artifacts of the codec on disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;

use crate::codec::decoder::{HuffmanDecoder, LiteralPolicy};
use crate::codec::encoder::{encode, Encoded};
use crate::dictionary::Dictionary;

/// Reads the text stored at `path`.
///
/// Lines are joined with `\n`, whatever terminator they had, and the terminator of the last line
/// is dropped.
pub fn read_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read text from {}", path.display()))?;

    Ok(content.lines().join("\n"))
}

pub fn write_dictionary(dictionary: &Dictionary, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create dictionary {}", path.display()))?;

    dictionary
        .write_to(BufWriter::new(file))
        .with_context(|| format!("Cannot write dictionary {}", path.display()))
}

pub fn read_dictionary(path: &Path) -> Result<Dictionary> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open dictionary {}", path.display()))?;

    Dictionary::read_from(BufReader::new(file))
        .with_context(|| format!("Cannot read dictionary {}", path.display()))
}

/// Encodes the text at `input`, storing the dictionary at `dictionary` and the encoded text,
/// without a trailing line terminator, at `output`.
pub fn encode_file(input: &Path, dictionary: &Path, output: &Path) -> Result<Encoded> {
    let text = read_text(input)?;
    let encoded = encode(&text);

    write_dictionary(&encoded.dictionary, dictionary)?;
    fs::write(output, &encoded.bits)
        .with_context(|| format!("Cannot write encoded text {}", output.display()))?;

    info!(
        "Encoded {} into {} with dictionary {}",
        input.display(),
        output.display(),
        dictionary.display()
    );
    Ok(encoded)
}

/// Decodes the text at `input` with the dictionary at `dictionary`, storing the decoded text
/// followed by a line terminator at `output`.
pub fn decode_file(
    input: &Path,
    dictionary: &Path,
    output: &Path,
    policy: LiteralPolicy,
) -> Result<String> {
    // the encoded text is taken verbatim, line terminators are literals of the original text
    let encoded = fs::read_to_string(input)
        .with_context(|| format!("Cannot read encoded text from {}", input.display()))?;
    let decoder = HuffmanDecoder::from_dictionary(&read_dictionary(dictionary)?).with_policy(policy);
    let decoded = decoder.decode(&encoded);

    let file = File::create(output)
        .with_context(|| format!("Cannot create decoded text {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", decoded)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Cannot write decoded text {}", output.display()))?;

    info!("Decoded {} into {}", input.display(), output.display());
    Ok(decoded)
}
