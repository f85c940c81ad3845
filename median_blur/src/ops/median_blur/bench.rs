//! Benchmark module for the percentile neighborhood filter.
//! Run with: cargo bench -p median_blur --features bench --bench median_blur

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};

use super::{BorderMode, MedianBlur, Neighborhood};
use crate::common::ChannelCount;
use crate::image::{Image, ImageDesc};

/// Register median blur benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    benchmark_radius(c);
    benchmark_shape(c);
    benchmark_layout(c);
}

/// Deterministic noise so runs are comparable without pulling in an RNG.
fn noise_image(width: u32, height: u32, layout: ChannelCount) -> Image {
    let desc = ImageDesc::new(width, height, layout);
    let samples = (0..desc.sample_count() as u64)
        .map(|i| {
            let h = i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 40;
            (h % 1000) as f32 / 999.0
        })
        .collect();
    Image::new_with_data(desc, samples).expect("benchmark image")
}

/// Cost per pixel should grow linearly with the radius, not quadratically.
fn benchmark_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_blur_radius");
    let input = noise_image(512, 512, ChannelCount::Rgba);
    group.throughput(Throughput::Elements(512 * 512));

    for radius in [1, 4, 16, 64] {
        let params = MedianBlur::new(radius);
        group.bench_with_input(BenchmarkId::from_parameter(radius), &params, |b, params| {
            b.iter(|| black_box(params.apply(black_box(&input)).expect("median blur")))
        });
    }

    group.finish();
}

fn benchmark_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_blur_shape");
    let input = noise_image(512, 512, ChannelCount::Rgba);
    group.throughput(Throughput::Elements(512 * 512));

    for shape in [Neighborhood::Square, Neighborhood::Circle, Neighborhood::Diamond] {
        let params = MedianBlur::new(8).shape(shape).border(BorderMode::Loop);
        group.bench_with_input(BenchmarkId::from_parameter(shape), &params, |b, params| {
            b.iter(|| black_box(params.apply(black_box(&input)).expect("median blur")))
        });
    }

    group.finish();
}

fn benchmark_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_blur_layout");

    for layout in [ChannelCount::L, ChannelCount::Rgb, ChannelCount::Rgba] {
        let input = noise_image(1024, 256, layout);
        group.throughput(Throughput::Elements(1024 * 256));
        group.bench_function(BenchmarkId::from_parameter(layout), |b| {
            b.iter(|| black_box(MedianBlur::new(5).apply(black_box(&input)).expect("median blur")))
        });
    }

    group.finish();
}
