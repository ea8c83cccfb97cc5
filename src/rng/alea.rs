//! Alea seeded PRNG (Johannes Baagøe's generator).
//!
//! The generator is seeded through a string-hash mixing function ("mash") and
//! advanced with a multiply-with-carry style update. All arithmetic is done in
//! IEEE-754 double precision with explicit 32-bit unsigned wraparound, so a
//! given seed yields a bit-identical sequence on every platform.

/// Truncate toward zero and reduce modulo 2^32, the `>>> 0` / `| 0` coercion
/// of the reference arithmetic. Inputs here are always non-negative.
#[inline]
fn to_u32(x: f64) -> f64 {
    (x.trunc() as i64 as u64 & 0xffff_ffff) as u32 as f64
}

/// The "mash" string hash. Stateful: each call folds more data into `n`.
struct Mash {
    n: f64,
}

impl Mash {
    fn new() -> Self {
        Self { n: 0xefc8_249d_u32 as f64 }
    }

    /// Hashes `data` into the running state and returns a float in [0, 1).
    ///
    /// Iterates UTF-16 code units, matching the reference character indexing.
    fn mash(&mut self, data: &str) -> f64 {
        for unit in data.encode_utf16() {
            self.n += unit as f64;
            let mut h = 0.02519603282416938 * self.n;
            self.n = to_u32(h);
            h -= self.n;
            h *= self.n;
            self.n = to_u32(h);
            h -= self.n;
            self.n += h * 4_294_967_296.0;
        }
        to_u32(self.n) * 2.328_306_436_538_696_3e-10 // 2^-32
    }
}

/// Deterministic float generator seeded from an arbitrary string.
///
/// Integer seeds are expected to be formatted to their decimal string form by
/// the caller before construction.
#[derive(Debug, Clone)]
pub struct Alea {
    s0: f64,
    s1: f64,
    s2: f64,
    c: f64,
}

impl Alea {
    /// Creates a generator from a seed string.
    pub fn new(seed: &str) -> Self {
        let mut mash = Mash::new();
        // Warm-up: the state registers are initialized from a constant input
        // before the seed is folded in.
        let mut s0 = mash.mash(" ");
        let mut s1 = mash.mash(" ");
        let mut s2 = mash.mash(" ");

        s0 -= mash.mash(seed);
        if s0 < 0.0 {
            s0 += 1.0;
        }
        s1 -= mash.mash(seed);
        if s1 < 0.0 {
            s1 += 1.0;
        }
        s2 -= mash.mash(seed);
        if s2 < 0.0 {
            s2 += 1.0;
        }

        Self { s0, s1, s2, c: 1.0 }
    }

    /// Returns the next float in [0, 1) and advances the state.
    pub fn next(&mut self) -> f64 {
        let t = 2_091_639.0 * self.s0 + self.c * 2.328_306_436_538_696_3e-10; // 2^-32
        self.s0 = self.s1;
        self.s1 = self.s2;
        self.c = t.trunc();
        self.s2 = t - self.c;
        self.s2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Alea::new("42");
        let mut b = Alea::new("42");
        for _ in 0..100 {
            assert_eq!(a.next().to_bits(), b.next().to_bits());
        }
    }

    #[test]
    fn test_adjacent_seeds_diverge() {
        // Seeds differing by 1 must not collide in a 10-sample prefix.
        for base in 0..20 {
            let mut a = Alea::new(&base.to_string());
            let mut b = Alea::new(&(base + 1).to_string());
            let sa: Vec<u64> = (0..10).map(|_| a.next().to_bits()).collect();
            let sb: Vec<u64> = (0..10).map(|_| b.next().to_bits()).collect();
            assert_ne!(sa, sb, "seeds {} and {} collided", base, base + 1);
        }
    }

    #[test]
    fn test_output_range() {
        let mut rng = Alea::new("range-check");
        for _ in 0..10_000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v), "value {} out of [0, 1)", v);
        }
    }

    #[test]
    fn test_string_and_numeric_seeds_distinct() {
        let mut a = Alea::new("7");
        let mut b = Alea::new("seven");
        assert_ne!(a.next().to_bits(), b.next().to_bits());
    }

    #[test]
    fn test_clone_preserves_stream() {
        let mut a = Alea::new("fork");
        a.next();
        let mut b = a.clone();
        for _ in 0..10 {
            assert_eq!(a.next().to_bits(), b.next().to_bits());
        }
    }
}
