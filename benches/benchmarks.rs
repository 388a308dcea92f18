use criterion::{black_box, criterion_group, criterion_main, Criterion};

use alphabet_rust::alphabet::{Alphabet, Dna15, Dna5, Phred63, Phred68Legacy};
use alphabet_rust::convert::{self, ConversionTable};
use alphabet_rust::util::seq;

fn make_seq(len: usize) -> Vec<Dna15> {
    let mut x: u32 = 42;
    let mut v = Vec::with_capacity(len);
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        v.push(Dna15::from_rank(((x >> 16) % 15) as u8));
    }
    v
}

fn bench_build_char_table(c: &mut Criterion) {
    c.bench_function("build_char_table_dna5_dna15", |b| {
        b.iter(|| {
            black_box(ConversionTable::<Dna5, Dna15>::through_char());
        })
    });
}

fn bench_build_phred_table(c: &mut Criterion) {
    c.bench_function("build_phred_table_phred63_phred68", |b| {
        b.iter(|| {
            black_box(ConversionTable::<Phred63, Phred68Legacy>::through_phred());
        })
    });
}

fn bench_table_lookup(c: &mut Criterion) {
    let table = ConversionTable::<Dna5, Dna15>::through_char();
    c.bench_function("table_lookup_single", |b| {
        b.iter(|| {
            black_box(table.convert(black_box(Dna15::R)));
        })
    });
}

fn bench_cached_lookup(c: &mut Criterion) {
    // 含缓存查找开销的便捷入口
    c.bench_function("cached_lookup_single", |b| {
        b.iter(|| {
            black_box(convert::convert_through_char::<Dna5, Dna15>(black_box(Dna15::R)));
        })
    });
}

fn bench_convert_seq(c: &mut Criterion) {
    let table = ConversionTable::<Dna5, Dna15>::through_char();
    let input = make_seq(10_000);

    c.bench_function("convert_seq_10k", |b| {
        b.iter(|| {
            black_box(seq::convert_seq(black_box(&table), black_box(&input)));
        })
    });

    c.bench_function("convert_seq_par_10k", |b| {
        b.iter(|| {
            black_box(seq::convert_seq_par(black_box(&table), black_box(&input)));
        })
    });
}

criterion_group!(
    benches,
    bench_build_char_table,
    bench_build_phred_table,
    bench_table_lookup,
    bench_cached_lookup,
    bench_convert_seq
);
criterion_main!(benches);
