/// Source of uniform randomness for the stochastic effects.
///
/// Production code uses [`fastrand::Rng`]; tests can plug in a scripted sequence to assert exact
/// output.
pub trait RandomSource {
    /// Uniform `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, n)`; `0` when `n == 0`.
    fn below(&mut self, n: u32) -> u32 {
        crate::foundation::math::scale_floor(self.next_f64(), n)
    }

    /// Uniform integer in `[lo, hi]` (inclusive). Returns `lo` when `hi < lo`.
    fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (i64::from(hi) - i64::from(lo) + 1).min(i64::from(u32::MAX)) as u32;
        (i64::from(lo) + i64::from(self.below(span))) as i32
    }

    /// Uniform byte in `[0, 255]`.
    fn byte(&mut self) -> u8 {
        self.below(256) as u8
    }
}

impl RandomSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
