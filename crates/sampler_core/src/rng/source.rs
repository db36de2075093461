//! Traits describing where uniform randomness comes from.

use rand::rngs::StdRng;
use rand::Rng;

/// A stream of uniform variates in the half-open interval `[0, 1)`.
///
/// Implementors must never return a value outside `[0, 1)`. Samplers rely on
/// this to bound their rejection loops, but they also guard the measure-zero
/// endpoints themselves.
pub trait UniformSource {
    /// Returns the next uniform variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

/// A [`UniformSource`] whose stream can be restarted from a seed.
///
/// Reseeding does not reach into samplers that hold state of their own. See
/// [`GaussianGenerator::reset`](crate::GaussianGenerator::reset).
pub trait SeedableSource: UniformSource {
    /// Restarts the stream so it replays the sequence for `seed`.
    fn reseed(&mut self, seed: u64);
}

impl UniformSource for StdRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
