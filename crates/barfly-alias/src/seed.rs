//! Seed derivation and the seeded shuffle.
//!
//! The shuffle must be bit-for-bit reproducible for a given seed string,
//! so all arithmetic is explicit 32-bit wrapping arithmetic.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over raw bytes.
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// 32-bit xorshift generator (13, 17, 5).
///
/// A zero seed stays zero forever; every draw is then `0.0`.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns the new state.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// A draw in `[0, 1)`: the new state divided by 2^32.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Fisher-Yates shuffle driven by `XorShift32` seeded with the FNV-1a
/// hash of `seed`.
///
/// Walks from the last index down to 1, swapping `i` with
/// `floor(draw * (i + 1))`.
pub fn shuffle_seeded<T>(items: &mut [T], seed: &str) {
    let mut rng = XorShift32::new(fnv1a32(seed.as_bytes()));
    for i in (1..items.len()).rev() {
        let j = (rng.next_f64() * (i + 1) as f64).floor() as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a32_known_vectors() {
        assert_eq!(fnv1a32(b""), 0x811c_9dc5);
        assert_eq!(fnv1a32(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a32(b"alias_R__S__dating"), 0x66e0_ba90);
    }

    #[test]
    fn test_xorshift32_sequence_from_seed_one() {
        let mut rng = XorShift32::new(1);
        assert_eq!(rng.next_u32(), 270_369);
        assert_eq!(rng.next_u32(), 67_634_689);
        assert_eq!(rng.next_u32(), 2_647_435_461);
    }

    #[test]
    fn test_xorshift32_draws_stay_in_unit_interval() {
        let mut rng = XorShift32::new(0xdead_beef);
        for _ in 0..10_000 {
            let draw = rng.next_f64();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn test_xorshift32_zero_seed_is_stuck() {
        let mut rng = XorShift32::new(0);
        assert_eq!(rng.next_u32(), 0);
        assert_eq!(rng.next_f64(), 0.0);
    }

    #[test]
    fn test_shuffle_seeded_is_a_permutation() {
        let mut items: Vec<u32> = (0..500).collect();
        shuffle_seeded(&mut items, "alias_R__S__dating");
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..500).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn test_shuffle_seeded_handles_tiny_inputs() {
        let mut empty: [u8; 0] = [];
        shuffle_seeded(&mut empty, "x");
        let mut one = [7];
        shuffle_seeded(&mut one, "x");
        assert_eq!(one, [7]);
    }
}
