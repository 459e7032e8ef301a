use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_INPUT_LEN: usize = 2048;
const RNG_SEED: u64 = 0x5EED_2026;

/// Upper bound (inclusive) of generated keys; inputs are positive `i32`s.
pub const KEY_MAX: i32 = i32::MAX;

#[derive(Clone, Copy, Debug)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    Reversed,
}

impl Distribution {
    pub const ALL: [Distribution; 3] = [
        Distribution::RandomUniform,
        Distribution::NearlySorted1pctSwaps,
        Distribution::Reversed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Reversed => "reversed",
        }
    }
}

/// Picks sampling settings by input length; insertion into the chain is
/// linear, so large inputs get flat sampling and fewer samples.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len < LARGE_INPUT_LEN {
        group.sampling_mode(SamplingMode::Auto);
        group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    }
}

pub fn seeded_rng(salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ salt))
}

pub fn generate_dataset<R: Rng + ?Sized>(rng: &mut R, dist: Distribution, len: usize) -> Vec<i32> {
    match dist {
        Distribution::RandomUniform => (0..len).map(|_| rng.random_range(1..=KEY_MAX)).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<i32> = (1..=len as i32).collect();
            if len > 1 {
                for _ in 0..(len / 100).max(1) {
                    let a = rng.random_range(0..len);
                    let b = rng.random_range(0..len);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::Reversed => (1..=len as i32).rev().collect(),
    }
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_have_requested_len_and_positive_keys() {
        let mut rng = seeded_rng(0);
        for dist in Distribution::ALL {
            for len in [0_usize, 1, 2, 100, 3000] {
                let data = generate_dataset(&mut rng, dist, len);
                assert_eq!(data.len(), len, "{}", dist.label());
                assert!(data.iter().all(|&v| v >= 1), "{}", dist.label());
            }
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = generate_dataset(&mut seeded_rng(7), Distribution::RandomUniform, 64);
        let b = generate_dataset(&mut seeded_rng(7), Distribution::RandomUniform, 64);
        assert_eq!(a, b);
    }
}
