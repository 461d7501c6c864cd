use criterion::{black_box, criterion_group, Criterion};
use greedy_huffman::HuffmanEncoder;

use crate::benchmarks::get_zipfian_text;

fn encoding_benchmark(c: &mut Criterion) {
    let text = get_zipfian_text(1, 1.0);
    let encoder = HuffmanEncoder::from_text(&text);
    let mut group = c.benchmark_group("encoder benchmark");

    // a sample takes a while on a text this long
    group.sample_size(20);
    group.bench_function("encoding", |b| b.iter(|| encoder.encode(black_box(&text))));
    group.finish();
}

criterion_group!(encoder_benches, encoding_benchmark);
