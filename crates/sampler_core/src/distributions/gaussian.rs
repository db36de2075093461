//! Normal(mean, stddev²) sampling with the polar Box–Muller transform.
//!
//! Each accepted trial yields two independent standard normals. The first is
//! returned immediately and the second is cached for the next call, so on
//! average one trial serves two calls.

use tracing::debug;

use crate::error::{require_finite, require_positive, Result};
use crate::rng::UniformSource;

/// Gaussian generator with an explicit Box–Muller pair cache.
///
/// # Reseeding
///
/// The cache is independent of the source. If the source is reseeded after an
/// odd number of [`sample`](Self::sample) calls, call [`reset`](Self::reset)
/// as well, or the first value after reseeding is the stale half of the old
/// pair.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{GaussianGenerator, SamplerRng, SeedableSource};
///
/// let mut rng = SamplerRng::from_seed(1);
/// let mut generator = GaussianGenerator::new(0.0, 1.0).unwrap();
///
/// let first = generator.sample(&mut rng);
/// assert!(generator.has_cached_value());
///
/// rng.reseed(1);
/// generator.reset();
/// assert_eq!(generator.sample(&mut rng), first);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianGenerator {
    mean: f64,
    stddev: f64,
    /// Second value of the last accepted pair, in standard-normal units.
    cached: Option<f64>,
}

impl GaussianGenerator {
    /// Creates a generator for Normal(`mean`, `stddev`²) with an empty cache.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidParameter` if `mean` is not finite or
    /// `stddev` is not finite and strictly positive.
    pub fn new(mean: f64, stddev: f64) -> Result<Self> {
        let mean = require_finite("mean", mean)?;
        let stddev = require_positive("stddev", stddev)?;
        debug!(mean, stddev, "created gaussian generator");
        Ok(Self {
            mean,
            stddev,
            cached: None,
        })
    }

    /// Returns the configured mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the configured standard deviation.
    #[inline]
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Whether the next [`sample`](Self::sample) will be served from the cache.
    #[inline]
    pub fn has_cached_value(&self) -> bool {
        self.cached.is_some()
    }

    /// Draws the next sample.
    ///
    /// Consumes no uniforms when a cached value is pending, otherwise an even
    /// number (two per trial, at least one trial).
    pub fn sample<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> f64 {
        if let Some(y2) = self.cached.take() {
            return self.mean + self.stddev * y2;
        }

        let (y1, y2) = polar_pair(source);
        self.cached = Some(y2);
        self.mean + self.stddev * y1
    }

    /// Discards any cached value. The next sample starts a fresh trial.
    #[inline]
    pub fn reset(&mut self) {
        self.cached = None;
    }
}

/// Alias for [`GaussianGenerator::new`].
pub fn create_gaussian_generator(mean: f64, stddev: f64) -> Result<GaussianGenerator> {
    GaussianGenerator::new(mean, stddev)
}

/// One accepted polar Box–Muller trial: two independent standard normals.
///
/// Points outside the unit disk are rejected (acceptance ≈ π/4), as is the
/// origin, where `ln(w)` is undefined.
fn polar_pair<S: UniformSource + ?Sized>(source: &mut S) -> (f64, f64) {
    loop {
        let x1 = 2.0 * source.next_uniform() - 1.0;
        let x2 = 2.0 * source.next_uniform() - 1.0;
        let w = x1 * x1 + x2 * x2;

        if w > 0.0 && w <= 1.0 {
            let factor = (-2.0 * w.ln() / w).sqrt();
            return (x1 * factor, x2 * factor);
        }
    }
}
