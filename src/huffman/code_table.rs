use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Write};
use std::str::FromStr;

use anyhow::{bail, Result};
use bitvec::prelude::*;

use crate::huffman::frequency::FrequencyTable;
use crate::huffman::tree::HuffmanTree;
use crate::Symbol;

/// A codeword: the sequence of branches, `0` for left and `1` for right, from the root of a
/// Huffman tree down to a leaf.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code(BitVec<u8, Msb0>);

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<bool> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        self.0.as_bitslice()
    }

    /// Iterates over the bits of the code as `'0'` and `'1'` characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().by_vals().map(|bit| if bit { '1' } else { '0' })
    }

    /// Returns `true` if `prefix` is a prefix of this code. Every code is a prefix of itself.
    pub fn starts_with(&self, prefix: &Code) -> bool {
        prefix.len() <= self.len() && self.0[..prefix.len()] == prefix.0[..]
    }
}

impl FromIterator<bool> for Code {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|c| f.write_char(c))
    }
}

impl FromStr for Code {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => bail!("Invalid character {:?} in code {:?}", other, s),
            })
            .collect()
    }
}

/// Maps each symbol of an alphabet to its code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    /// Extracts the codes of all the symbols in the leaves of `tree`.
    ///
    /// Codes are assigned while walking the tree: going left appends a `0` and going right a `1`.
    /// Placeholders get no code.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::default();
        let mut code = Code::new();

        table.extract(tree, &mut code);
        table
    }

    fn extract(&mut self, node: &HuffmanTree, code: &mut Code) {
        match node {
            HuffmanTree::Leaf(symbol_weight) => {
                self.codes.insert(symbol_weight.symbol(), code.clone());
            }
            HuffmanTree::Placeholder => {}
            HuffmanTree::Internal { left, right, .. } => {
                code.push(false);
                self.extract(left, code);
                code.pop();

                code.push(true);
                self.extract(right, code);
                code.pop();
            }
        }
    }

    /// Adds a symbol with its code, returning the code previously associated with the symbol.
    pub fn insert(&mut self, symbol: Symbol, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Iterates over the `(symbol, code)` pairs by ascending symbol.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns `true` if no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let codes = self.codes.values().collect::<Vec<_>>();

        codes.iter().enumerate().all(|(i, code)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, other)| i == j || !other.starts_with(code))
        })
    }

    /// Returns the mapping from codes back to symbols, as needed to decode.
    pub fn inverse(&self) -> HashMap<Code, Symbol> {
        self.codes
            .iter()
            .map(|(symbol, code)| (code.clone(), *symbol))
            .collect()
    }

    /// The number of bits needed to encode all the symbols counted in `frequencies`, that is the
    /// sum of the code length of every symbol times its count.
    ///
    /// Symbols without a code are not accounted for.
    pub fn encoded_len(&self, frequencies: &FrequencyTable) -> usize {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() * count))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_through_text() {
        let code = "0110".parse::<Code>().unwrap();

        assert_eq!(code.len(), 4);
        assert_eq!(code.to_string(), "0110");
        assert!(code.starts_with(&"01".parse().unwrap()));
        assert!(!code.starts_with(&"1".parse().unwrap()));
        assert!(!code.starts_with(&"01101".parse().unwrap()));
    }

    #[test]
    fn code_rejects_non_binary_characters() {
        assert!("01a".parse::<Code>().is_err());
    }

    #[test]
    fn prefix_detection() {
        let mut table = CodeTable::default();
        table.insert('a', "0".parse().unwrap());
        table.insert('b', "10".parse().unwrap());
        assert!(table.is_prefix_free());

        table.insert('c', "101".parse().unwrap());
        assert!(!table.is_prefix_free());
    }
}
