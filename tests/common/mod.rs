/*
 * Utility functions and consts used by the tests.
 *
 */
#![allow(dead_code)]

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use greedy_huffman::{CodeTable, FrequencyTable, HuffmanTree};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Zipf;

/// The symbols the random texts are made of: every printable ASCII character but the space.
pub const ALPHABET: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Length of the random texts.
pub const TEXT_LENGTH: usize = 20_000;

/// Creates a text of `length` characters sampled from a Zipfian distribution over [`ALPHABET`],
/// with a space or a line feed inserted every now and then.
pub fn get_zipfian_text(seed: u64, length: usize, exponent: f64) -> String {
    let symbols = ALPHABET.chars().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Zipf::new(symbols.len() as u64, exponent).unwrap();
    let mut text = String::with_capacity(length);

    for _ in 0..length {
        match rng.gen_range(0..20) {
            0 => text.push(' '),
            1 => text.push('\n'),
            _ => text.push(symbols[distribution.sample(&mut rng) as usize - 1]),
        }
    }
    text
}

/// The cost, in weight units times bits, of the optimal prefix code for the weights of
/// `frequencies`, computed with a binary heap: every merge adds the merged weight once for each
/// level it pushes its leaves down.
pub fn reference_cost(frequencies: &FrequencyTable) -> u64 {
    let weights = frequencies.to_sorted_weights();

    if weights.len() == 1 {
        return weights[0].weight() as u64;
    }

    let mut heap = weights
        .iter()
        .map(|w| Reverse(w.weight() as u64))
        .collect::<BinaryHeap<_>>();
    let mut cost = 0;

    while heap.len() > 1 {
        let Reverse(first) = heap.pop().unwrap();
        let Reverse(second) = heap.pop().unwrap();
        cost += first + second;
        heap.push(Reverse(first + second));
    }
    cost
}

/// The cost, in weight units times bits, of `table` for the weights of `frequencies`.
pub fn table_cost(frequencies: &FrequencyTable, table: &CodeTable) -> u64 {
    frequencies
        .to_sorted_weights()
        .iter()
        .map(|w| w.weight() as u64 * table.get(w.symbol()).unwrap().len() as u64)
        .sum()
}

/// Checks that every internal node weighs as much as its children, returning the number of leaves.
pub fn check_weights(tree: &HuffmanTree) -> usize {
    match tree.children() {
        Some((left, right)) => {
            assert_eq!(tree.weight(), left.weight() + right.weight());
            check_weights(left) + check_weights(right)
        }
        None => 1,
    }
}
