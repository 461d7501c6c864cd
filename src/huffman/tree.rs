use std::fmt;

use crate::huffman::builder::TreeBuilder;
use crate::huffman::frequency::FrequencyTable;
use crate::huffman::symbol_weight::SymbolWeight;
use crate::{Symbol, Weight, PROBABILITY_DIGITS, WEIGHT_SCALE};

/// A Huffman tree.
///
/// Leaves represent the symbols of the alphabet while internal nodes only carry the sum of the
/// weights of their children. An internal node always has both children.
#[derive(Clone, Debug, PartialEq)]
pub enum HuffmanTree {
    Leaf(SymbolWeight),

    /// Zero-weight leaf without a symbol, paired with the only symbol of a one-symbol alphabet so
    /// that the symbol gets a non-empty code.
    Placeholder,

    Internal {
        weight: Weight,
        left: Box<HuffmanTree>,
        right: Box<HuffmanTree>,
    },
}

impl HuffmanTree {
    /// Builds the Huffman tree of the symbols counted in `frequencies`. Returns `None` if the
    /// table is empty.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Option<Self> {
        TreeBuilder::new(frequencies.to_sorted_weights()).build()
    }

    /// Joins two trees under a new internal node, `left` being the one extracted first.
    pub fn merge(left: Self, right: Self) -> Self {
        Self::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The weight of the root, in units of `1 / WEIGHT_SCALE`.
    pub fn weight(&self) -> Weight {
        match self {
            Self::Leaf(symbol_weight) => symbol_weight.weight(),
            Self::Placeholder => 0,
            Self::Internal { weight, .. } => *weight,
        }
    }

    pub fn probability(&self) -> f64 {
        self.weight() as f64 / WEIGHT_SCALE as f64
    }

    /// The symbol held by the root, if the root is a real leaf.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Self::Leaf(symbol_weight) => Some(symbol_weight.symbol()),
            _ => None,
        }
    }

    /// Returns `true` if the root holds a symbol. A [placeholder](Self::Placeholder) is not a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the children of an internal node.
    pub fn children(&self) -> Option<(&HuffmanTree, &HuffmanTree)> {
        match self {
            Self::Internal { left, right, .. } => Some((left, right)),
            _ => None,
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.height().max(right.height()),
            None => 0,
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);

        match self {
            Self::Leaf(symbol_weight) => writeln!(f, "{indent}{label}: {symbol_weight}"),
            Self::Placeholder => writeln!(f, "{indent}{label}: placeholder"),
            Self::Internal { left, right, .. } => {
                writeln!(
                    f,
                    "{indent}{label}: internal, Prob: {:.*}",
                    PROBABILITY_DIGITS,
                    self.probability()
                )?;
                left.fmt_node(f, depth + 1, "0")?;
                right.fmt_node(f, depth + 1, "1")
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, 0, "root")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_weights() {
        let tree = HuffmanTree::merge(
            HuffmanTree::Leaf(SymbolWeight::new('a', 2500)),
            HuffmanTree::Leaf(SymbolWeight::new('b', 7500)),
        );

        assert_eq!(tree.weight(), WEIGHT_SCALE);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.symbol(), None);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn placeholder_is_not_a_leaf() {
        assert!(HuffmanTree::Leaf(SymbolWeight::new('a', 1)).is_leaf());
        assert!(!HuffmanTree::Placeholder.is_leaf());
        assert_eq!(HuffmanTree::Placeholder.children(), None);
    }

    #[test]
    fn display_shows_the_structure() {
        let tree = HuffmanTree::merge(
            HuffmanTree::Leaf(SymbolWeight::new('a', WEIGHT_SCALE)),
            HuffmanTree::Placeholder,
        );

        assert_eq!(
            tree.to_string(),
            "root: internal, Prob: 1.0000\n  0: Char: (a), Prob: 1.0000\n  1: placeholder\n"
        );
    }
}
