use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use backend_domain::ports::RandomSource;

use crate::utils::current_nanos;

/// Seeds a fresh generator from the wall clock on every call.
/// Not suitable for anything adversarial.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeSeededRandom;

impl TimeSeededRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for TimeSeededRandom {
    fn next_index(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        StdRng::seed_from_u64(current_nanos()).gen_range(0..len)
    }
}
