//! Seeded synthetic datasets shaped like the binary MNIST data.
//!
//! Every image is binary (0 or 255). Label `k` lights a horizontal bar on
//! rows `2 + 2k` and `3 + 2k`, columns 4 to 23; `noise` is the probability
//! that any single pixel is flipped afterwards.

use dectree_core::{DecTreeError, Image, ImageDataset, NUM_LABELS, NUM_PIXELS, WIDTH};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BAR_FIRST_COLUMN: usize = 4;
const BAR_LAST_COLUMN: usize = 23;

/// Parameters of a synthetic dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticConfig {
    pub num_items: usize,
    /// Per-pixel flip probability, clamped to `[0, 1]`.
    pub noise: f64,
    pub seed: u64,
}

impl SyntheticConfig {
    pub fn new(num_items: usize) -> Self {
        Self {
            num_items,
            noise: 0.0,
            seed: 0,
        }
    }

    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Whether `pixel` belongs to the bar of `label`.
pub fn in_bar(label: u8, pixel: usize) -> bool {
    let (row, col) = (pixel / WIDTH, pixel % WIDTH);
    let first_row = 2 + 2 * label as usize;
    (first_row..first_row + 2).contains(&row) && (BAR_FIRST_COLUMN..=BAR_LAST_COLUMN).contains(&col)
}

/// Generates a dataset from `config`; the same config always yields the
/// same dataset.
pub fn generate(config: &SyntheticConfig) -> Result<ImageDataset, DecTreeError> {
    let noise = if config.noise.is_nan() { 0.0 } else { config.noise.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut dataset = ImageDataset::with_capacity(config.num_items);
    for _ in 0..config.num_items {
        let label: u8 = rng.gen_range(0..NUM_LABELS as u8);
        let pixels: Vec<u8> = (0..NUM_PIXELS)
            .map(|p| {
                let lit = in_bar(label, p) ^ rng.gen_bool(noise);
                if lit {
                    255
                } else {
                    0
                }
            })
            .collect();
        dataset.push(Image::new(pixels)?, label)?;
    }
    debug!(
        "Generated {} synthetic items (noise {}, seed {})",
        config.num_items, config.noise, config.seed
    );
    Ok(dataset)
}

#[cfg(test)]
#[path = "synthetic_test.rs"]
mod tests;
