//! Unbiased index selection over a cryptographically secure source.

use rand::{CryptoRng, RngCore};

/// Width of a single draw from the source (`next_u64`).
const DRAW_SPAN: u128 = 1 << 64;

/// Draws a uniformly distributed index in `0..bound`.
///
/// Draws falling at or above the largest multiple of `bound` that fits in the
/// 64-bit draw are discarded and redrawn, so the result carries no modulo bias.
/// A `bound` of 0 or 1 always yields 0 without consuming randomness.
pub fn secure_index<R>(rng: &mut R, bound: usize) -> usize
where
    R: RngCore + CryptoRng + ?Sized,
{
    if bound <= 1 {
        return 0;
    }
    let bound = bound as u128;
    let limit = (DRAW_SPAN / bound) * bound;
    loop {
        let value = rng.next_u64() as u128;
        if value < limit {
            return (value % bound) as usize;
        }
    }
}

/// Shuffles `items` in place with Fisher-Yates, drawing every swap index
/// through [`secure_index`].
pub fn shuffle<R, T>(rng: &mut R, items: &mut [T])
where
    R: RngCore + CryptoRng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = secure_index(rng, i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::VecDeque;

    /// Replays a fixed sequence of 64-bit draws.
    pub(crate) struct ScriptedRng(pub VecDeque<u64>);

    impl ScriptedRng {
        pub(crate) fn new(values: &[u64]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0.pop_front().expect("scripted rng exhausted")
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ScriptedRng {}

    #[test]
    fn test_secure_index_trivial_bounds() {
        let mut rng = ScriptedRng::new(&[]);
        assert_eq!(secure_index(&mut rng, 0), 0);
        assert_eq!(secure_index(&mut rng, 1), 0);
    }

    #[test]
    fn test_secure_index_rejects_top_of_range() {
        // 2^64 mod 3 == 1, so only u64::MAX falls outside the accepted zone.
        let mut rng = ScriptedRng::new(&[u64::MAX, 5]);
        assert_eq!(secure_index(&mut rng, 3), 2);
        assert!(rng.0.is_empty());
    }

    #[test]
    fn test_secure_index_rejection_boundary() {
        // 2^64 mod 10 == 6: the last six values are rejected, the seventh accepted.
        let mut rng = ScriptedRng::new(&[u64::MAX - 5, u64::MAX - 6]);
        assert_eq!(secure_index(&mut rng, 10), 9);
        assert!(rng.0.is_empty());
    }

    #[test]
    fn test_secure_index_power_of_two_never_rejects() {
        let mut rng = ScriptedRng::new(&[u64::MAX]);
        assert_eq!(secure_index(&mut rng, 16), 15);
    }

    #[test]
    fn test_secure_index_stays_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for bound in [2usize, 3, 7, 26, 31, 95] {
            for _ in 0..500 {
                assert!(secure_index(&mut rng, bound) < bound);
            }
        }
    }

    #[test]
    fn test_secure_index_covers_every_value() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut seen = [false; 10];
        for _ in 0..2_000 {
            seen[secure_index(&mut rng, 10)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn test_shuffle_draws_descending_bounds() {
        // Three elements: draws with bounds 3 then 2.
        let mut rng = ScriptedRng::new(&[0, 0]);
        let mut items = ['a', 'b', 'c'];
        shuffle(&mut rng, &mut items);
        // i=2 swaps with 0 -> c b a; i=1 swaps with 0 -> b c a
        assert_eq!(items, ['b', 'c', 'a']);
    }

    #[test]
    fn test_shuffle_handles_short_slices() {
        let mut rng = ScriptedRng::new(&[]);
        let mut empty: [u8; 0] = [];
        shuffle(&mut rng, &mut empty);
        let mut single = [9u8];
        shuffle(&mut rng, &mut single);
        assert_eq!(single, [9]);
    }
}
