use std::cell::Cell;

/// A pseudo-random number generator based on Wang Yi's Wyrand, used to
/// drive randomized queue tests reproducibly.
///
/// See: https://github.com/wangyi-fudan/wyhash
#[derive(Clone, Debug)]
pub(crate) struct Rng {
    state: Cell<u64>,
}

impl Rng {
    /// Creates a new RNG with the provided seed.
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            state: Cell::new(seed),
        }
    }

    /// Generates a pseudo-random number within the range `0..2⁶⁴`.
    pub(crate) fn next_u64(&self) -> u64 {
        let state = self.state.get().wrapping_add(0xA0761D6478BD642F);
        self.state.set(state);
        let t = state as u128 * (state ^ 0xE7037ED1A0B428DB) as u128;

        (t as u64) ^ (t >> 64) as u64
    }

    /// Generates a pseudo-random number within the range `0..upper_bound`
    /// with the multiply-shift method.
    ///
    /// The result is slightly biased unless the bound is a power of 2, which
    /// is irrelevant for the small bounds used in tests.
    pub(crate) fn gen_bounded(&self, upper_bound: u64) -> u64 {
        ((self.next_u64() as u128 * upper_bound as u128) >> 64) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_reproducible() {
        let a = Rng::new(7);
        let b = Rng::new(7);

        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn rng_gen_bounded_chi2() {
        const SEED: u64 = 12345;
        const ROLLS: u64 = 1_000_000;
        const FACES: u64 = 6;
        // Critical chi² values for p = 0.001 and p = 0.999 with 5 degrees of
        // freedom; they only hold for 6 faces.
        const CHI2_LOWER: f64 = 0.210;
        const CHI2_UPPER: f64 = 20.515;

        let rng = Rng::new(SEED);
        let mut tally = [0u64; FACES as usize];

        for _ in 0..ROLLS {
            tally[rng.gen_bounded(FACES) as usize] += 1;
        }

        let expected = ROLLS as f64 / FACES as f64;
        let chi2: f64 = tally
            .iter()
            .map(|&count| {
                let deviation = count as f64 - expected;
                deviation * deviation / expected
            })
            .sum();

        assert!(chi2 > CHI2_LOWER, "tally = {tally:?}, chi2 = {chi2}");
        assert!(chi2 < CHI2_UPPER, "tally = {tally:?}, chi2 = {chi2}");
    }
}
