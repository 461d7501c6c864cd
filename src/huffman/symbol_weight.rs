use std::cmp::Ordering;
use std::fmt;

use crate::{Symbol, Weight, PROBABILITY_DIGITS, WEIGHT_SCALE};

/// A symbol together with its weight, i.e. its probability within the text rounded to 4 decimal
/// digits.
///
/// Symbols weights are ordered by weight only. Two symbols with the same weight are considered in
/// the order they have been produced, so every sort applied to them must be stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolWeight {
    symbol: Symbol,
    weight: Weight,
}

impl SymbolWeight {
    pub fn new(symbol: Symbol, weight: Weight) -> Self {
        Self { symbol, weight }
    }

    /// Creates the weight of a symbol seen `count` times among `total` symbols.
    ///
    /// The probability is rounded half up to the closest multiple of `1 / WEIGHT_SCALE`, with
    /// integer arithmetic only.
    pub fn from_count(symbol: Symbol, count: usize, total: usize) -> Self {
        let weight = match total {
            0 => 0,
            total => {
                let scaled = count as u64 * 2 * WEIGHT_SCALE as u64 + total as u64;
                (scaled / (2 * total as u64)) as Weight
            }
        };

        Self { symbol, weight }
    }

    /// Creates the weight of a symbol from its probability, rounded to 4 decimal digits.
    pub fn from_probability(symbol: Symbol, probability: f64) -> Self {
        Self {
            symbol,
            weight: (probability * WEIGHT_SCALE as f64).round() as Weight,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The weight in units of `1 / WEIGHT_SCALE`.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The weight as a probability in `[0, 1]`.
    pub fn probability(&self) -> f64 {
        self.weight as f64 / WEIGHT_SCALE as f64
    }

    /// Compares two symbol weights by weight only.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl fmt::Display for SymbolWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Char: ({}), Prob: {:.*}",
            self.symbol,
            PROBABILITY_DIGITS,
            self.probability()
        )
    }
}
