//! Benchmarks for table construction and the two transforms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tabula::alphabet::LATIN;
use tabula::{Alphabet, CaseMode, Options, SubstitutionTable, Vigenere};

const KEYWORD: &str = "FEAST";

fn bench_table_build(c: &mut Criterion) {
    let latin = Alphabet::new(LATIN, CaseMode::Fold).unwrap();
    let wide: String = (0x3b1u32..0x3b1 + 200).filter_map(char::from_u32).collect();
    let wide = Alphabet::new(&wide, CaseMode::Sensitive).unwrap();

    let mut group = c.benchmark_group("table_build");
    for (name, alphabet) in [("latin", &latin), ("wide", &wide)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), alphabet, |b, a| {
            b.iter(|| SubstitutionTable::build(black_box(a)))
        });
    }
    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let v = Vigenere::new(LATIN, Options::default()).unwrap();
    let mut group = c.benchmark_group("transform");
    for len in [64usize, 4096] {
        let text = "attackatdawn".repeat(len / 12 + 1)[..len].to_string();
        let cipher = v.encode(KEYWORD, &text).unwrap();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("encode", len), &text, |b, t| {
            b.iter(|| v.encode(KEYWORD, black_box(t)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", len), &cipher, |b, t| {
            b.iter(|| v.decode(KEYWORD, black_box(t)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_table_build, bench_transforms);
criterion_main!(benches);
