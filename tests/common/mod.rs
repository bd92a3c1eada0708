//! Shared test fixtures for integration tests.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fleet_storage::devices::{Capability, ScheduledConsumer, StorageResource};

/// Seed shared by the randomised invariant checks.
pub const SEED: u64 = 42;

/// Number of random cases per invariant.
pub const CASES: usize = 2_000;

/// Seeded RNG so failures reproduce.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// 100 kWh cell with symmetric 20 kWh limits holding `stored` kWh.
pub fn small_cell(stored: f32) -> StorageResource {
    let cap = Capability::new(100.0, 20.0, 20.0).expect("valid capability");
    StorageResource::new(cap, stored).expect("valid storage")
}

/// Random cell with whole-kWh parameters so sums stay exact in `f32`.
pub fn random_cell(rng: &mut StdRng) -> StorageResource {
    let capacity = rng.random_range(1..=1_000) as f32;
    let charge = rng.random_range(1..=300) as f32;
    let discharge = rng.random_range(1..=300) as f32;
    let stored = rng.random_range(0..=capacity as u32) as f32;
    let cap = Capability::new(capacity, charge, discharge).expect("valid capability");
    StorageResource::new(cap, stored).expect("valid storage")
}

/// Random request in whole kWh, sometimes negative.
pub fn random_amount(rng: &mut StdRng) -> f32 {
    rng.random_range(-50..=500) as f32
}

/// Default workday truck.
pub fn workday_truck() -> ScheduledConsumer {
    ScheduledConsumer::new("workday", None).expect("valid truck")
}
