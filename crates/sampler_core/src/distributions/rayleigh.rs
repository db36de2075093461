//! Rayleigh(σ) sampling by inverse CDF.
//!
//! `F(x) = 1 - exp(-x² / 2σ²)`, so `x = σ · sqrt(-2 · ln(1 - U))` for a
//! uniform `U`. One draw per sample, no rejection.

use std::f64::consts::FRAC_PI_2;

use rand::Rng;
use rand_distr::Distribution;
use tracing::debug;

use crate::error::{require_positive, Result};
use crate::rng::UniformSource;

/// Draws one Rayleigh(`sigma`) variate from `source`.
///
/// # Errors
///
/// Returns `SamplerError::InvalidParameter` if `sigma` is not finite and
/// strictly positive.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{rayleigh_sample, SamplerRng};
///
/// let mut rng = SamplerRng::from_seed(8);
/// let x = rayleigh_sample(2.0, &mut rng).unwrap();
/// assert!(x >= 0.0);
/// ```
pub fn rayleigh_sample<S: UniformSource + ?Sized>(sigma: f64, source: &mut S) -> Result<f64> {
    let sigma = require_positive("sigma", sigma)?;
    Ok(draw(sigma, source))
}

/// Rayleigh distribution with a validated scale.
///
/// Usable with an injected [`UniformSource`] via [`Rayleigh::sample`] or with
/// any `rand::Rng` through [`Distribution`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rayleigh {
    sigma: f64,
}

impl Rayleigh {
    /// Creates a Rayleigh distribution with scale `sigma`.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidParameter` if `sigma` is not finite and
    /// strictly positive.
    pub fn new(sigma: f64) -> Result<Self> {
        let sigma = require_positive("sigma", sigma)?;
        debug!(sigma, "created rayleigh distribution");
        Ok(Self { sigma })
    }

    /// Returns the scale parameter.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the distribution mean, `σ · sqrt(π / 2)`.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.sigma * FRAC_PI_2.sqrt()
    }

    /// Draws one variate from `source`.
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        draw(self.sigma, source)
    }
}

impl Distribution<f64> for Rayleigh {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        inverse_cdf(self.sigma, rng.gen::<f64>())
    }
}

/// Redraws a (contract-violating) `U == 1`, which would give `ln(0)`.
fn draw<S: UniformSource + ?Sized>(sigma: f64, source: &mut S) -> f64 {
    loop {
        let u = source.next_uniform();
        if u < 1.0 {
            return inverse_cdf(sigma, u);
        }
    }
}

#[inline]
fn inverse_cdf(sigma: f64, u: f64) -> f64 {
    sigma * (-2.0 * (1.0 - u).ln()).sqrt()
}
