use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Number of values in the permutation domain
pub const TABLE_SIZE: usize = 256;

/// Largest valid permutation seed (31-bit, non-negative)
pub const MAX_SEED: u32 = i32::MAX as u32;

/// A bijection over the 256 byte values, derived deterministically from a seed.
///
/// The same seed always yields the same table: the ordered sequence 0..=255
/// shuffled by a Fisher-Yates pass over an RNG seeded with the 31-bit seed.
/// The seed is stored in the container in cleartext, so the table carries no
/// secrecy - it only has to be reproducible at unpack time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    table: [u8; TABLE_SIZE],
}

impl Permutation {
    /// Generate the permutation for a seed
    pub fn generate(seed: u32) -> Self {
        let mut table = [0u8; TABLE_SIZE];
        for (i, v) in table.iter_mut().enumerate() {
            *v = i as u8;
        }

        let mut rng = StdRng::seed_from_u64(seed as u64);
        table.shuffle(&mut rng);

        Self { table }
    }

    /// Build the inverse permutation by swapping domain and codomain
    pub fn invert(&self) -> Self {
        let mut inverse = [0u8; TABLE_SIZE];
        for (i, &v) in self.table.iter().enumerate() {
            inverse[v as usize] = i as u8;
        }
        Self { table: inverse }
    }

    /// Remap a single byte
    pub fn map(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    /// Remap every byte of a buffer
    pub fn apply(&self, data: &[u8]) -> Vec<u8> {
        data.iter().map(|&b| self.map(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = Permutation::generate(42);
        let b = Permutation::generate(42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Permutation::generate(1);
        let b = Permutation::generate(2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_bijection() {
        for seed in [0, 1, 7, 1000, MAX_SEED] {
            let perm = Permutation::generate(seed);
            let mut seen = [false; TABLE_SIZE];
            for v in 0..TABLE_SIZE {
                let mapped = perm.map(v as u8) as usize;
                assert!(!seen[mapped], "seed {} maps two values to {}", seed, mapped);
                seen[mapped] = true;
            }
        }
    }

    #[test]
    fn test_invert_roundtrip() {
        let perm = Permutation::generate(12345);
        let inverse = perm.invert();
        for v in 0..=255u8 {
            assert_eq!(inverse.map(perm.map(v)), v);
            assert_eq!(perm.map(inverse.map(v)), v);
        }
    }

    #[test]
    fn test_apply_then_inverse_is_identity() {
        let perm = Permutation::generate(777);
        let inverse = perm.invert();
        let data: Vec<u8> = (0..1024).map(|i| (i % 256) as u8).collect();
        let mapped = perm.apply(&data);
        assert_ne!(data, mapped);
        assert_eq!(data, inverse.apply(&mapped));
    }

    #[test]
    fn test_apply_empty() {
        let perm = Permutation::generate(5);
        assert!(perm.apply(&[]).is_empty());
    }
}
