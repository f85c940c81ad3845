//! Example: remove salt-and-pepper noise from a synthetic gradient
//!
//! Builds a smooth RGBA gradient, corrupts a fraction of its pixels with pure
//! black or white, filters it and reports how far the noisy and filtered
//! images are from the clean one.
//!
//! Filter settings are read from an optional YAML or JSON file whose fields
//! default to the library defaults:
//!
//! ```yaml
//! radius: 2
//! shape: circle
//! percentile: 50.0
//! border: clamp
//! ```
//!
//! # Usage
//!
//! ```bash
//! cargo run -p median_blur --example median_blur -- [settings.yaml]
//! MEDIAN_BLUR_LOG_DIR=logs RUST_LOG=median_blur=debug cargo run -p median_blur --example median_blur
//! ```

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use common::FileFormat;
use median_blur::{ChannelCount, Color, Image, ImageDesc, MedianBlur};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// One pixel in this many is replaced by noise.
const NOISE_PERIOD: u64 = 12;

fn main() -> anyhow::Result<()> {
    let log_dir = env::var("MEDIAN_BLUR_LOG_DIR").ok().map(PathBuf::from);
    common::log_setup::setup_logging("info", log_dir.as_deref())?;

    let params = match env::args().nth(1) {
        Some(path) => load_settings(&path)?,
        None => MedianBlur {
            radius: 2,
            ..MedianBlur::default()
        },
    };
    params.validate()?;
    tracing::info!(
        "settings:\n{}",
        common::serialize(&params, FileFormat::Yaml)?.trim_end()
    );

    let clean = gradient()?;
    let noisy = add_noise(&clean);

    let start = Instant::now();
    let filtered = params.apply(&noisy)?;
    let elapsed = start.elapsed();

    tracing::info!(
        "filtered {}x{} in {:.1} ms",
        WIDTH,
        HEIGHT,
        elapsed.as_secs_f64() * 1000.0
    );
    tracing::info!("mean error noisy:    {:.5}", mean_abs_error(&clean, &noisy));
    tracing::info!("mean error filtered: {:.5}", mean_abs_error(&clean, &filtered));

    Ok(())
}

fn load_settings(path: &str) -> anyhow::Result<MedianBlur> {
    let format = FileFormat::from_file_name(path)?;
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let params = common::deserialize(&text, format).with_context(|| format!("parsing {}", path))?;
    Ok(params)
}

fn gradient() -> anyhow::Result<Image> {
    let desc = ImageDesc::new(WIDTH, HEIGHT, ChannelCount::Rgba);
    let samples = (0..HEIGHT)
        .flat_map(|y| {
            (0..WIDTH).flat_map(move |x| {
                let u = x as f32 / (WIDTH - 1) as f32;
                let v = y as f32 / (HEIGHT - 1) as f32;
                [u, v, 1.0 - 0.5 * (u + v), 1.0]
            })
        })
        .collect();
    Ok(Image::new_with_data(desc, samples)?)
}

fn add_noise(clean: &Image) -> Image {
    let mut noisy = clean.clone();
    let mut corrupted = 0usize;

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let i = (y * WIDTH + x) as u64;
            let h = i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 32;
            if h % NOISE_PERIOD != 0 {
                continue;
            }
            let color = if (h / NOISE_PERIOD) % 2 == 0 {
                Color::BLACK
            } else {
                Color::WHITE
            };
            color.write_pixel(noisy.desc().channel_count, noisy.pixel_mut(x, y));
            corrupted += 1;
        }
    }

    tracing::info!("corrupted {} pixels", corrupted);
    noisy
}

fn mean_abs_error(a: &Image, b: &Image) -> f64 {
    let sum: f64 = a
        .samples()
        .iter()
        .zip(b.samples())
        .map(|(&x, &y)| (x - y).abs() as f64)
        .sum();
    sum / a.samples().len() as f64
}
