//! The dictionary artifact: the table listing every symbol of the alphabet with its probability
//! and its code, which is all a decoder needs.
//!
//! The format is textual and tab separated:
//! ```text
//! Symbol	Probability	Code
//! c	0.0909	100
//! d	0.0909	101
//! ...
//! ```
//! Readers skip the first line and then expect exactly three tokens per line, separated by the
//! same characters that are stripped from the text before encoding (see [is_stripped](crate::is_stripped)), so that
//! any symbol can be read back. Blank lines are ignored.

use std::collections::HashSet;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::huffman::code_table::{Code, CodeTable};
use crate::huffman::symbol_weight::SymbolWeight;
use crate::{is_stripped, Symbol, PROBABILITY_DIGITS};

/// Column labels of the first line.
pub const HEADER: [&str; 3] = ["Symbol", "Probability", "Code"];

#[derive(Clone, Debug, PartialEq)]
pub struct DictionaryEntry {
    pub symbol_weight: SymbolWeight,
    pub code: Code,
}

impl DictionaryEntry {
    pub fn symbol(&self) -> Symbol {
        self.symbol_weight.symbol()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Creates the dictionary of the given symbols, listed in the same order as `weights`.
    ///
    /// Symbols without a code in `table` are left out.
    pub fn new(weights: &[SymbolWeight], table: &CodeTable) -> Self {
        let entries = weights
            .iter()
            .filter_map(|symbol_weight| {
                table.get(symbol_weight.symbol()).map(|code| DictionaryEntry {
                    symbol_weight: *symbol_weight,
                    code: code.clone(),
                })
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The code table described by this dictionary.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::default();

        for entry in &self.entries {
            table.insert(entry.symbol(), entry.code.clone());
        }
        table
    }

    /// Writes the dictionary, header included, to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a dictionary previously written with [write_to](Self::write_to).
    ///
    /// Returns an error naming the offending line if a line does not hold exactly a one-character
    /// symbol, a probability in `[0, 1]` and a non-empty binary code, or if a symbol or a code
    /// appears twice.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        match lines.next() {
            Some(header) => {
                header.context("Cannot read the dictionary header")?;
            }
            None => bail!("The dictionary is empty, expected at least its header"),
        }

        let mut entries = Vec::new();
        let mut symbols = HashSet::new();
        let mut codes = HashSet::new();

        for (index, line) in lines.enumerate() {
            // the header is line 1
            let line_number = index + 2;
            let line = line.with_context(|| format!("Cannot read dictionary line {}", line_number))?;

            if line.chars().all(is_stripped) {
                continue;
            }

            let entry = Self::parse_entry(&line)
                .with_context(|| format!("Malformed dictionary line {}: {:?}", line_number, line))?;

            if !symbols.insert(entry.symbol()) {
                bail!("Symbol {:?} is listed twice (line {})", entry.symbol(), line_number);
            }
            if !codes.insert(entry.code.clone()) {
                bail!("Code {} is listed twice (line {})", entry.code, line_number);
            }
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    fn parse_entry(line: &str) -> Result<DictionaryEntry> {
        let tokens = line.split(is_stripped).filter(|token| !token.is_empty()).collect::<Vec<_>>();

        let &[symbol, probability, code] = tokens.as_slice() else {
            bail!("Expected 3 tokens, found {}", tokens.len());
        };

        let mut chars = symbol.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(symbol), None) => symbol,
            _ => bail!("Symbol {:?} is not a single character", symbol),
        };

        let probability = probability
            .parse::<f64>()
            .with_context(|| format!("Probability {:?} is not a number", probability))?;
        if !(0.0..=1.0).contains(&probability) {
            bail!("Probability {} is not within [0, 1]", probability);
        }

        let code = code.parse::<Code>()?;
        if code.is_empty() {
            bail!("Empty code for symbol {:?}", symbol);
        }

        Ok(DictionaryEntry {
            symbol_weight: SymbolWeight::from_probability(symbol, probability),
            code,
        })
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER.join("\t"))?;

        for entry in &self.entries {
            writeln!(
                f,
                "{}\t{:.*}\t{}",
                entry.symbol(),
                PROBABILITY_DIGITS,
                entry.symbol_weight.probability(),
                entry.code
            )?;
        }
        Ok(())
    }
}

impl FromStr for Dictionary {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::read_from(s.as_bytes())
    }
}
