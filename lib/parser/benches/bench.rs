use criterion::{criterion_group, criterion_main, Criterion};
use scanner::tokenize;

pub fn criterion_benchmark(c: &mut Criterion) {
    let source = r#"
        var width = 12.5;
        var height = (width - 2) * 3 / 4;
        var area = width * height + 1 - 2 * 3 / 4;
        area * (width + height) - (1 + 2) * (3 + 4);
    "#
    .repeat(50);

    c.bench_function("scan", |b| b.iter(|| tokenize(&source).unwrap()));

    let tokens = tokenize(&source).unwrap();
    c.bench_function("parse", |b| b.iter(|| parser::parse(&tokens).into_result().unwrap()));

    c.bench_function("scan and parse", |b| {
        b.iter(|| parser::parse(&tokenize(&source).unwrap()).into_result().unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
