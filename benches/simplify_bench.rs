use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use bytenorm::han;

fn bench_simplify(c: &mut Criterion) {
    let traditional = "中華民國的歷史與臺灣鐵路管理局的發展紀錄 ".repeat(20);
    let simplified = "中华民国的历史与台湾铁路管理局的发展纪录 ".repeat(20);
    let ascii = "no ideographs in this line at all, just bytes ".repeat(20);

    c.bench_function("simplify/traditional", |b| {
        b.iter(|| han::convert(black_box(traditional.as_bytes())))
    });
    c.bench_function("simplify/already-simplified", |b| {
        b.iter(|| han::convert(black_box(simplified.as_bytes())))
    });
    c.bench_function("simplify/ascii-passthrough", |b| {
        b.iter(|| han::convert(black_box(ascii.as_bytes())))
    });
}

criterion_group!(benches, bench_simplify);
criterion_main!(benches);
