use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random source for every stochastic choice the solver makes
///
/// Passed explicitly so a fixed seed reproduces a run exactly.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uniform column in `[0, n)`, or `None` on an empty board
    pub fn column(&mut self, n: usize) -> Option<usize> {
        (n > 0).then(|| self.rng.random_range(0..n))
    }

    /// Uniform choice among `candidates`
    pub fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        candidates.choose(&mut self.rng)
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}
