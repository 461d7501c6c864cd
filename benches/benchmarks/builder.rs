use criterion::{black_box, criterion_group, Criterion};
use greedy_huffman::{CodeTable, FrequencyTable, HuffmanTree};

use crate::benchmarks::get_zipfian_text;

fn building_benchmark(c: &mut Criterion) {
    let text = get_zipfian_text(0, 1.0);
    let frequencies = FrequencyTable::from_text(&text);
    let mut group = c.benchmark_group("builder benchmark");

    group.bench_function("frequencies", |b| b.iter(|| FrequencyTable::from_text(black_box(&text))));
    group.bench_function("tree and codes", |b| {
        b.iter(|| {
            HuffmanTree::from_frequencies(black_box(&frequencies))
                .map(|tree| CodeTable::from_tree(&tree))
        })
    });
    group.finish();
}

criterion_group!(builder_benches, building_benchmark);
