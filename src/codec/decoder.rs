use std::collections::HashMap;

use log::debug;

use crate::dictionary::Dictionary;
use crate::huffman::code_table::{Code, CodeTable};
use crate::Symbol;

/// What the decoder does with the bits read so far when it meets a character that is neither `0`
/// nor `1`.
///
/// The two policies only differ on streams where a literal interrupts a code, which never happens
/// with the output of the encoder since literals always sit between two codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LiteralPolicy {
    /// The pending bits are kept, and the code they start may be completed after the literal.
    #[default]
    KeepBits,
    /// The pending bits are dropped.
    ResetBits,
}

/// Decodes text encoded with a known code table.
#[derive(Clone, Debug)]
pub struct HuffmanDecoder {
    symbols: HashMap<Code, Symbol>,
    policy: LiteralPolicy,
}

impl HuffmanDecoder {
    pub fn new(table: &CodeTable) -> Self {
        Self {
            symbols: table.inverse(),
            policy: LiteralPolicy::default(),
        }
    }

    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        Self::new(&dictionary.code_table())
    }

    pub fn with_policy(mut self, policy: LiteralPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> LiteralPolicy {
        self.policy
    }

    /// Decodes `encoded`, scanning it from left to right.
    ///
    /// `0` and `1` are accumulated until they spell a known code, then the symbol of that code is
    /// emitted. Every other character is copied as is. Bits left over at the end of the input are
    /// discarded.
    pub fn decode(&self, encoded: &str) -> String {
        let mut decoded = String::with_capacity(encoded.len());
        let mut bits = Code::new();

        for c in encoded.chars() {
            match c {
                '0' | '1' => {
                    bits.push(c == '1');

                    if let Some(symbol) = self.symbols.get(&bits) {
                        decoded.push(*symbol);
                        bits.clear();
                    }
                }
                literal => {
                    decoded.push(literal);

                    if self.policy == LiteralPolicy::ResetBits && !bits.is_empty() {
                        debug!("Dropping bits {} interrupted by {:?}", bits, literal);
                        bits.clear();
                    }
                }
            }
        }

        if !bits.is_empty() {
            debug!("Discarding {} trailing bits that match no code: {}", bits.len(), bits);
        }
        decoded
    }
}
