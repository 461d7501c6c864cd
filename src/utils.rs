use std::fmt;
use std::ops::Neg;

use crate::huffman::code_table::CodeTable;
use crate::huffman::frequency::FrequencyTable;

/// Bits used by an uncompressed symbol.
pub const RAW_SYMBOL_BITS: usize = 8;

/// Calculates the entropy, in bits per symbol, of the distribution of the symbols counted in
/// `frequencies`:
/// ```text
/// H = - ∑ p(x) * log2(p(x))
/// ```
pub fn entropy(frequencies: &FrequencyTable) -> f64 {
    let total = frequencies.total() as f64;

    frequencies
        .iter()
        .map(|(_, count)| {
            let pr = count as f64 / total;
            pr * f64::log2(pr)
        })
        .sum::<f64>()
        .neg()
}

/// The average number of bits used by `table` to encode a symbol distributed as in `frequencies`.
pub fn average_code_length(frequencies: &FrequencyTable, table: &CodeTable) -> f64 {
    match frequencies.total() {
        0 => 0.0,
        total => table.encoded_len(frequencies) as f64 / total as f64,
    }
}

/// Summary of how well a text has been compressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompressionReport {
    /// Number of encoded symbols, whitespace excluded.
    pub symbols: usize,
    /// Number of distinct symbols.
    pub distinct_symbols: usize,
    /// Number of bits produced for the encoded symbols.
    pub encoded_bits: usize,
    pub average_code_length: f64,
    pub entropy: f64,
}

impl CompressionReport {
    pub fn new(frequencies: &FrequencyTable, table: &CodeTable) -> Self {
        Self {
            symbols: frequencies.total(),
            distinct_symbols: frequencies.len(),
            encoded_bits: table.encoded_len(frequencies),
            average_code_length: average_code_length(frequencies, table),
            entropy: match frequencies.is_empty() {
                true => 0.0,
                false => entropy(frequencies),
            },
        }
    }

    /// Size of the encoded symbols w.r.t. their raw size, as a percentage.
    pub fn ratio(&self) -> f64 {
        match self.symbols {
            0 => 0.0,
            symbols => self.encoded_bits as f64 / (symbols * RAW_SYMBOL_BITS) as f64 * 100.0,
        }
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} symbols ({} distinct) encoded in {} bits | {:.3} bits/symbol (entropy {:.3}) | {:.2}% of raw size",
            self.symbols,
            self.distinct_symbols,
            self.encoded_bits,
            self.average_code_length,
            self.entropy,
            self.ratio()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::tree::HuffmanTree;

    #[test]
    fn test_entropy() {
        let frequencies = FrequencyTable::from_text("aaabbbcccc");
        assert_eq!("1.57", format!("{:.2}", entropy(&frequencies)));
    }

    #[test]
    fn test_average_code_length_is_bounded_by_entropy() {
        let frequencies = FrequencyTable::from_text("abracadabra");
        let table = CodeTable::from_tree(&HuffmanTree::from_frequencies(&frequencies).unwrap());
        let report = CompressionReport::new(&frequencies, &table);

        assert_eq!(report.encoded_bits, 23);
        assert!(report.entropy <= report.average_code_length);
        assert!(report.average_code_length < report.entropy + 1.0);
        assert_eq!("26.14", format!("{:.2}", report.ratio()));
    }

    #[test]
    fn test_empty_report() {
        let report = CompressionReport::new(&FrequencyTable::new(), &CodeTable::default());

        assert_eq!(report.encoded_bits, 0);
        assert_eq!(report.ratio(), 0.0);
        assert_eq!(report.entropy, 0.0);
    }
}
