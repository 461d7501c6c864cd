pub mod codec;
pub mod dictionary;
pub mod files;
pub mod huffman;
pub mod utils;

pub use codec::decoder::{HuffmanDecoder, LiteralPolicy};
pub use codec::encoder::{encode, Encoded, HuffmanEncoder};
pub use dictionary::{Dictionary, DictionaryEntry};
pub use huffman::code_table::{Code, CodeTable};
pub use huffman::frequency::FrequencyTable;
pub use huffman::symbol_weight::SymbolWeight;
pub use huffman::tree::HuffmanTree;

/// The type representing a symbol of the input alphabet, i.e. a single character of the text.
pub type Symbol = char;

/// The type representing the weight of a symbol.
///
/// Weights are normalized probabilities rounded to 4 decimal digits. They are kept as exact
/// multiples of `1 / WEIGHT_SCALE` so that merging two trees never accumulates floating point
/// error and equal weights always compare equal.
pub type Weight = u32;

/// How many weight units make up a probability of 1.0.
pub const WEIGHT_SCALE: Weight = 10_000;

/// Number of decimal digits the probabilities are written with in the dictionary.
pub const PROBABILITY_DIGITS: usize = 4;

/// Default name of the dictionary artifact.
pub const DICTIONARY_FILE: &str = "Huffman.txt";

/// Default name of the encoded artifact.
pub const ENCODED_FILE: &str = "Encoded.txt";

/// Default name of the decoded artifact.
pub const DECODED_FILE: &str = "Decoded.txt";

/// Returns `true` if the character is removed from the text before frequency analysis.
///
/// The set is the `\s` class of regular expressions, `[ \t\n\x0B\f\r]`, that is ASCII whitespace
/// plus the vertical tab. These characters never receive a code and are passed through literally.
/// Every other character, non-ASCII spaces included, is a symbol.
#[inline(always)]
pub fn is_stripped(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}
