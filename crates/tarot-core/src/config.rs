//! Configuration for drawing cards.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a draw.
#[derive(Debug, Clone, Default)]
pub struct DrawConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl DrawConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a fresh generator for one draw.
    ///
    /// Each call returns an independent generator, so concurrent draws never
    /// share RNG state.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
