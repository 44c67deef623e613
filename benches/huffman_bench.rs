use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use huffpack::{compress, decompress, FrequencyTable, HuffmanTree};

fn sample_text(len: usize) -> Vec<u8> {
    b"Huffman encoding is a greedy algorithm that builds optimal prefix codes. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let input = sample_text(64 * 1024);
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("compress", |b| b.iter(|| compress(black_box(&input)).unwrap()));

    let packed = compress(&input).unwrap();
    group.bench_function("decompress", |b| {
        b.iter(|| decompress(black_box(&packed)).unwrap())
    });
    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    // Every byte value present: the largest tree the format allows.
    let input: Vec<u8> = (0..=255u8)
        .flat_map(|s| std::iter::repeat(s).take(s as usize + 1))
        .collect();
    let table = FrequencyTable::from_bytes(&input);

    group.bench_function("build_256", |b| {
        b.iter(|| HuffmanTree::build(black_box(&table)))
    });
    group.finish();
}

criterion_group!(benches, bench_codec, bench_tree);
criterion_main!(benches);
