use criterion::{criterion_group, criterion_main};

fn median_blur_benchmarks(c: &mut criterion::Criterion) {
    median_blur::bench::median_blur::benchmarks(c);
}

criterion_group!(benches, median_blur_benchmarks);
criterion_main!(benches);
