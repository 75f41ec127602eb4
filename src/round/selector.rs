//! Root word selection
//!
//! Randomness is injected so a seeded selector can pin the root word in tests.

use rand::Rng;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Picks a root word from a pool
pub trait RandomSelector {
    /// Choose one entry uniformly at random, or `None` if the pool is empty
    fn pick(&mut self, pool: &[String]) -> Option<String>;
}

impl<S: RandomSelector + ?Sized> RandomSelector for &mut S {
    fn pick(&mut self, pool: &[String]) -> Option<String> {
        (**self).pick(pool)
    }
}

/// Uniform selection driven by any [`Rng`]
#[derive(Debug, Clone)]
pub struct RngSelector<R> {
    rng: R,
}

impl<R: Rng> RngSelector<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSelector<StdRng> {
    /// Reproducible selection from a fixed seed
    ///
    /// # Examples
    /// ```
    /// use word_scramble::round::{RandomSelector, RngSelector};
    ///
    /// let pool = vec!["teacup".to_string(), "scramble".to_string()];
    /// let first = RngSelector::seeded(7).pick(&pool);
    /// let second = RngSelector::seeded(7).pick(&pool);
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Selection seeded from operating system entropy
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSelector for RngSelector<R> {
    fn pick(&mut self, pool: &[String]) -> Option<String> {
        pool.choose(&mut self.rng).cloned()
    }
}
