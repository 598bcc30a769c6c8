//! Random source threaded through every generation call

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seedable stream all styles draw from
pub type RandomSource = StdRng;

/// Deterministic stream for `Some(seed)`, entropy-seeded otherwise.
pub fn random_source(seed: Option<u64>) -> RandomSource {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_streams_repeat() {
        let mut first = random_source(Some(42));
        let mut second = random_source(Some(42));
        let a: Vec<u32> = (0..16).map(|_| first.gen_range(0..1000)).collect();
        let b: Vec<u32> = (0..16).map(|_| second.gen_range(0..1000)).collect();
        assert_eq!(a, b);
    }
}
