use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws for the periodic tasks.
pub trait Entropy: Send {
    /// Returns a uniformly distributed value in `[0, bound)`. Callers
    /// guarantee `bound >= 1`.
    fn pick(&mut self, bound: usize) -> usize;
}

/// OS-seeded generator used outside of tests.
pub struct OsEntropy {
    rng: StdRng,
}

impl OsEntropy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for OsEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for OsEntropy {
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Always returns the same draw (clamped to the requested bound).
#[cfg(test)]
pub struct PinnedEntropy(pub usize);

#[cfg(test)]
impl Entropy for PinnedEntropy {
    fn pick(&mut self, bound: usize) -> usize {
        self.0.min(bound - 1)
    }
}

/// Replays a fixed sequence of draws, then panics.
#[cfg(test)]
pub struct ScriptedEntropy {
    values: std::vec::IntoIter<usize>,
}

#[cfg(test)]
impl ScriptedEntropy {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }
}

#[cfg(test)]
impl Entropy for ScriptedEntropy {
    fn pick(&mut self, bound: usize) -> usize {
        let value = self.values.next().expect("entropy script exhausted");
        assert!(value < bound, "scripted draw {} out of bound {}", value, bound);
        value
    }
}
