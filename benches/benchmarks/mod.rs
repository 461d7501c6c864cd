use rand::prelude::{Distribution, StdRng};
use rand::{Rng, SeedableRng};
use rand_distr::Zipf;

pub mod builder;
pub mod decoder;
pub mod encoder;

/// Length of the text used to bench.
const TEXT_LENGTH: usize = 1_000_000;

/// Symbols the bench text is sampled from.
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,;:!?'\"()-";

/// Creates a text of [`TEXT_LENGTH`] characters sampled from a Zipfian distribution over
/// [`ALPHABET`], with a space every now and then.
fn get_zipfian_text(seed: u64, exponent: f64) -> String {
    let symbols = ALPHABET.chars().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Zipf::new(symbols.len() as u64, exponent).unwrap();
    let mut text = String::with_capacity(TEXT_LENGTH);

    for _ in 0..TEXT_LENGTH {
        if rng.gen_range(0..8) == 0 {
            text.push(' ');
        } else {
            text.push(symbols[distribution.sample(&mut rng) as usize - 1]);
        }
    }
    text
}
