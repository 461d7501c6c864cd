use log::info;

use crate::dictionary::Dictionary;
use crate::huffman::builder::TreeBuilder;
use crate::huffman::code_table::CodeTable;
use crate::huffman::frequency::FrequencyTable;
use crate::utils::CompressionReport;

/// The outcome of encoding a text: the dictionary needed to decode it and the encoded text.
#[derive(Clone, Debug, PartialEq)]
pub struct Encoded {
    pub dictionary: Dictionary,
    pub bits: String,
}

/// Encodes text with the Huffman code learnt from the text itself.
#[derive(Clone, Debug)]
pub struct HuffmanEncoder {
    frequencies: FrequencyTable,
    table: CodeTable,
    dictionary: Dictionary,
}

impl HuffmanEncoder {
    /// Creates the encoder for `text`: whitespace is stripped, the remaining symbols are counted,
    /// and the code is built from their weights.
    pub fn from_text(text: &str) -> Self {
        Self::from_frequencies(FrequencyTable::from_text(text))
    }

    /// Creates the encoder for the symbols counted in `frequencies`.
    pub fn from_frequencies(frequencies: FrequencyTable) -> Self {
        let weights = frequencies.to_sorted_weights();
        let table = TreeBuilder::new(weights.clone())
            .build()
            .map(|tree| CodeTable::from_tree(&tree))
            .unwrap_or_default();
        let dictionary = Dictionary::new(&weights, &table);

        info!("{}", CompressionReport::new(&frequencies, &table));

        Self {
            frequencies,
            table,
            dictionary,
        }
    }

    /// Encodes `text` by replacing every symbol with its code.
    ///
    /// Characters without a code, that is the whitespace stripped before counting, are copied
    /// unchanged.
    pub fn encode(&self, text: &str) -> String {
        let mut encoded = String::with_capacity(self.table.encoded_len(&self.frequencies) + text.len());

        for c in text.chars() {
            match self.table.get(c) {
                Some(code) => encoded.extend(code.chars()),
                None => encoded.push(c),
            }
        }
        encoded
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn report(&self) -> CompressionReport {
        CompressionReport::new(&self.frequencies, &self.table)
    }
}

/// Learns the Huffman code of `text` and encodes the text with it.
pub fn encode(text: &str) -> Encoded {
    let encoder = HuffmanEncoder::from_text(text);
    let bits = encoder.encode(text);

    Encoded {
        dictionary: encoder.dictionary,
        bits,
    }
}
