use criterion::{black_box, criterion_group, Criterion};
use greedy_huffman::{HuffmanDecoder, HuffmanEncoder, LiteralPolicy};

use crate::benchmarks::get_zipfian_text;

fn decoding_benchmark(c: &mut Criterion) {
    let text = get_zipfian_text(2, 1.0);
    let encoder = HuffmanEncoder::from_text(&text);
    let encoded = encoder.encode(&text);
    let mut group = c.benchmark_group("decoder benchmark");

    group.sample_size(20);
    for policy in [LiteralPolicy::KeepBits, LiteralPolicy::ResetBits] {
        let decoder = HuffmanDecoder::new(encoder.code_table()).with_policy(policy);
        group.bench_function(format!("decoding {:?}", policy), |b| {
            b.iter(|| decoder.decode(black_box(&encoded)))
        });
    }
    group.finish();
}

criterion_group!(decoder_benches, decoding_benchmark);
