//! RNG module - deterministic piece selection
//!
//! Pieces are drawn uniformly from the catalog. A small LCG keeps games
//! reproducible from a seed, which the tests and the `--seed` flag rely on.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits, which have a longer period than the low bits of an
    /// LCG. Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Random index into a collection of `len` items
    pub fn next_index(&mut self, len: usize) -> usize {
        let max = u32::try_from(len).unwrap_or(u32::MAX);
        self.next_range(max) as usize
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
