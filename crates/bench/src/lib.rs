//! Shared helpers for the criterion benchmarks of the workspace.

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::SeedableRng;

const RNG_SEED: u64 = 0x5EED_2026;
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Sampling settings for a benchmark group, chosen by how long one iteration
/// of the measured workload runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeProfile {
    Small,
    Medium,
    Large,
}

impl RuntimeProfile {
    pub fn sample_size(self) -> usize {
        match self {
            Self::Small | Self::Medium => 15,
            Self::Large => 10,
        }
    }

    pub fn warm_up(self) -> Duration {
        Duration::from_millis(match self {
            Self::Small => 100,
            Self::Medium => 500,
            Self::Large => 800,
        })
    }

    pub fn measurement(self) -> Duration {
        Duration::from_millis(match self {
            Self::Small => 200,
            Self::Medium => 1000,
            Self::Large => 1500,
        })
    }

    /// Picks a profile from the number of keys a workload touches.
    pub fn for_size(size: usize) -> Self {
        match size {
            0..=16_000 => Self::Small,
            16_001..=64_000 => Self::Medium,
            _ => Self::Large,
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size());
        group.warm_up_time(self.warm_up());
        group.measurement_time(self.measurement());
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// splitmix64 finalizer.
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn seed_base(workload_id: u64, size: u64) -> u64 {
    mix_seed(0x0DDB_A11A_2026_0000_u64 ^ (workload_id << 48) ^ size)
}

pub fn seed_for_iter(base: u64, iter: u64) -> u64 {
    mix_seed(base ^ iter.wrapping_mul(SEED_MIX))
}

/// `size` pairwise distinct keys in pseudo-random order.
///
/// `mix_seed` is a bijection, so distinct inputs never collide.
pub fn distinct_keys(size: usize, base_seed: u64) -> Vec<u64> {
    (0..size as u64).map(|i| mix_seed(base_seed ^ i)).collect()
}
