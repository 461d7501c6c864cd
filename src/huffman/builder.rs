use std::collections::VecDeque;

use log::debug;

use crate::huffman::symbol_weight::SymbolWeight;
use crate::huffman::tree::HuffmanTree;

/// Builds a Huffman tree with the two-queue method.
///
/// The builder keeps two worklists, both sorted by ascending weight:
/// - `primary` holds one leaf for every symbol of the alphabet;
/// - `secondary` holds the trees produced by merging. Merged weights never decrease, so pushing to
///   its back keeps it sorted.
///
/// At each step the two lightest trees among the fronts of the worklists are joined, until a
/// single tree is left.
pub struct TreeBuilder {
    primary: VecDeque<HuffmanTree>,
    secondary: VecDeque<HuffmanTree>,
}

impl TreeBuilder {
    /// Creates a new builder loaded with one leaf for each of the given symbols.
    ///
    /// The weights are (stably) sorted first, thus the relative order of symbols with the same
    /// weight is the one of `weights`.
    pub fn new(mut weights: Vec<SymbolWeight>) -> Self {
        weights.sort_by(SymbolWeight::cmp_weight);

        Self {
            primary: weights.into_iter().map(HuffmanTree::Leaf).collect(),
            secondary: VecDeque::new(),
        }
    }

    /// Removes and returns the lightest tree among the fronts of the two worklists.
    ///
    /// The front of `primary` is taken only if strictly lighter: on equal weights the merged tree
    /// wins.
    pub fn extract_minimum(&mut self) -> Option<HuffmanTree> {
        match (self.primary.front(), self.secondary.front()) {
            (Some(leaf), Some(merged)) if leaf.weight() < merged.weight() => {
                self.primary.pop_front()
            }
            (Some(_), None) => self.primary.pop_front(),
            (_, _) => self.secondary.pop_front(),
        }
    }

    /// Consumes the builder and returns the final tree, or `None` if there are no symbols.
    ///
    /// An alphabet of a single symbol yields an internal root whose left child is the symbol and
    /// whose right child is a [placeholder](HuffmanTree::Placeholder), so that the symbol is
    /// encoded with `0`.
    pub fn build(mut self) -> Option<HuffmanTree> {
        if self.primary.len() == 1 && self.secondary.is_empty() {
            let leaf = self.primary.pop_front()?;
            debug!("Single symbol alphabet, pairing {:?} with a placeholder", leaf.symbol());
            return Some(HuffmanTree::merge(leaf, HuffmanTree::Placeholder));
        }

        while !(self.primary.is_empty() && self.secondary.len() == 1) {
            let first = self.extract_minimum()?;
            let second = self.extract_minimum()?;

            debug!(
                "Merging trees of weight {} and {} into {}",
                first.weight(),
                second.weight(),
                first.weight() + second.weight()
            );
            self.secondary.push_back(HuffmanTree::merge(first, second));
        }

        self.secondary.pop_front()
    }
}
