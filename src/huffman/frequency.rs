use std::collections::HashMap;

use itertools::Itertools;

use crate::huffman::symbol_weight::SymbolWeight;
use crate::{is_stripped, Symbol};

/// Occurrence counts of the symbols of a text.
///
/// Besides the counts, the table remembers the order in which every symbol has been seen for the
/// first time. This discovery order is the one used to break ties between symbols of equal weight.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    /// The symbols with their counts, in discovery order.
    counts: Vec<(Symbol, usize)>,

    /// Position of each symbol within `counts`.
    positions: HashMap<Symbol, usize>,

    /// The sum of all symbols' counts.
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the symbols of the given sequence.
    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        let mut table = Self::new();

        for symbol in symbols {
            table.push_symbol(symbol);
        }
        table
    }

    /// Counts the symbols of the given text once whitespace, tabs and line terminators have been
    /// stripped (see [is_stripped]).
    pub fn from_text(text: &str) -> Self {
        Self::from_symbols(text.chars().filter(|c| !is_stripped(*c)))
    }

    /// Pushes a new occurrence of `symbol` into the table.
    pub fn push_symbol(&mut self, symbol: Symbol) {
        self.total += 1;

        match self.positions.get(&symbol) {
            Some(&position) => self.counts[position].1 += 1,
            None => {
                self.positions.insert(symbol, self.counts.len());
                self.counts.push((symbol, 1));
            }
        }
    }

    /// Returns how many times `symbol` has been pushed, if ever.
    pub fn count(&self, symbol: Symbol) -> Option<usize> {
        self.positions
            .get(&symbol)
            .map(|&position| self.counts[position].1)
    }

    /// Total number of symbols pushed.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(symbol, count)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Turns every count into a [SymbolWeight] and returns them sorted by ascending weight.
    ///
    /// The sort is stable: symbols with the same weight keep their discovery order.
    pub fn to_sorted_weights(&self) -> Vec<SymbolWeight> {
        self.iter()
            .map(|(symbol, count)| SymbolWeight::from_count(symbol, count, self.total))
            .sorted_by(SymbolWeight::cmp_weight)
            .collect()
    }
}
