use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use bytenorm::{case, diacritic, percent, utf8};

fn bench_codecs(c: &mut Criterion) {
    let ascii = "the quick brown fox jumps over the lazy dog ".repeat(20);
    let latin1 = "Crème brûlée à gogo, Ångström, naïveté. ".repeat(20);

    c.bench_function("lower_utf8/ascii", |b| {
        b.iter(|| case::lower_utf8(black_box(ascii.as_bytes())))
    });
    c.bench_function("lower_utf8/latin1", |b| {
        b.iter(|| case::lower_utf8(black_box(latin1.as_bytes())))
    });
    c.bench_function("fold_diacritics/latin1", |b| {
        b.iter(|| diacritic::fold_utf8(black_box(latin1.as_bytes())))
    });
    c.bench_function("percent/encode", |b| {
        b.iter(|| percent::encode(black_box(latin1.as_bytes())))
    });
    c.bench_function("utf8/decode", |b| {
        b.iter(|| utf8::decode(black_box(latin1.as_bytes())))
    });
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
