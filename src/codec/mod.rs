//! Text compression with a Huffman code: the [encoder](encoder::HuffmanEncoder) learns the code
//! of a text and turns the text into a string of `0` and `1`, while the
//! [decoder](decoder::HuffmanDecoder) turns such a string back into text by using the code table
//! stored in the dictionary.

pub mod decoder;
pub mod encoder;
