//! RNG module - seeded fill for random universes
//!
//! A small LCG is enough here: the grid only needs a coin flip per cell, and
//! a fixed seed must reproduce the same board for tests and replays.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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

    /// Seed from the wall clock, for non-reproducible runs.
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Fair coin flip.
    ///
    /// Uses the high bit: the low bits of an LCG with a power-of-two modulus
    /// have short periods.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::from_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut a = SimpleRng::new(1);
        let mut b = SimpleRng::new(2);
        let same = (0..100).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 100);
    }

    #[test]
    fn test_zero_seed_is_not_degenerate() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_coin_flip_is_roughly_fair() {
        let mut rng = SimpleRng::new(7);
        let heads = (0..10_000).filter(|_| rng.next_bool()).count();
        assert!((4_000..6_000).contains(&heads), "heads = {heads}");
    }
}
