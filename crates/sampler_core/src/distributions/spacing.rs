//! Gaussian Unitary Ensemble nearest-neighbour spacing sampler.
//!
//! The continuous spacing law (Wigner surmise for β = 2) is
//!
//! ```text
//! p2(s) = (32 / π²) · s² · exp(-(4 / π) · s²)
//! ```
//!
//! with unit mean. [`EnsembleSpacingGenerator`] discretises it at resolution
//! `1 / average` and samples integer spacings whose mean is close to
//! `average`.
//!
//! # Table Construction
//!
//! With `N = floor(4·average + 0.5)`:
//!
//! ```text
//! cumulative[0]  = 0
//! cumulative[i]  = cumulative[i-1] + p2(i / average) / average,   1 ≤ i ≤ N
//! ```
//!
//! The sum truncates the tail beyond `s = 4`, so `cumulative[N]` is close to
//! but not exactly 1. Draws that land above it fall back to `N`.

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::Distribution;
use tracing::{debug, trace};

use crate::error::{require_positive, Result, SamplerError};
use crate::rng::UniformSource;

/// Normalisation constant `32 / π²` of the GUE spacing density.
const GUE_NORMALISATION: f64 = 32.0 / (PI * PI);

/// Gaussian decay rate `4 / π` of the GUE spacing density.
const GUE_DECAY: f64 = 4.0 / PI;

/// Largest table index accepted; bounds memory for very large averages.
pub const MAX_SPACING: usize = 10_000_000;

/// Evaluates the GUE nearest-neighbour spacing density `p2(s)`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::gue_spacing_density;
///
/// assert_eq!(gue_spacing_density(0.0), 0.0);
/// assert!(gue_spacing_density(1.0) > gue_spacing_density(3.0));
/// ```
#[inline]
pub fn gue_spacing_density(s: f64) -> f64 {
    GUE_NORMALISATION * s * s * (-GUE_DECAY * s * s).exp()
}

/// Discrete GUE spacing sampler backed by a precomputed cumulative table.
///
/// The table is built once and never mutated, so sampling takes `&self`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{EnsembleSpacingGenerator, SamplerRng};
///
/// let generator = EnsembleSpacingGenerator::new(4.0).unwrap();
/// assert_eq!(generator.max_spacing(), 16);
///
/// let mut rng = SamplerRng::from_seed(3);
/// let s = generator.sample(&mut rng);
/// assert!((1..=16).contains(&s));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleSpacingGenerator {
    average: f64,
    /// Cumulative mass, indices `0..=N`, non-decreasing, `cumulative[0] == 0`.
    cumulative: Vec<f64>,
}

/// Table size `N = floor(4·average + 1/2)` for an accepted `average`.
pub(crate) fn table_len(average: f64) -> Result<usize> {
    let average = require_positive("average", average)?;

    let len = (4.0 * average + 0.5).floor();
    if len < 1.0 {
        return Err(SamplerError::invalid(
            "average",
            format!("{} yields an empty spacing table, must be at least 0.125", average),
        ));
    }
    if len > MAX_SPACING as f64 {
        return Err(SamplerError::invalid(
            "average",
            format!(
                "table of {} entries exceeds the limit of {}",
                len, MAX_SPACING
            ),
        ));
    }
    Ok(len as usize)
}

impl EnsembleSpacingGenerator {
    /// Builds the cumulative table for the given average spacing.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidParameter` if:
    /// - `average` is not finite and strictly positive
    /// - `average < 0.125`, which leaves no spacing `≥ 1` in the table
    /// - the table would exceed [`MAX_SPACING`] entries (`average` above
    ///   roughly 2.5 million)
    pub fn new(average: f64) -> Result<Self> {
        let len = table_len(average)?;

        let mut cumulative = Vec::with_capacity(len + 1);
        let mut total = 0.0;
        cumulative.push(total);
        for index in 1..=len {
            let s = index as f64 / average;
            total += gue_spacing_density(s) / average;
            cumulative.push(total);
        }

        debug!(
            average,
            max_spacing = len,
            total_mass = total,
            "built ensemble spacing table"
        );

        Ok(Self {
            average,
            cumulative,
        })
    }

    /// Returns the average spacing the table was built for.
    #[inline]
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Returns `N`, the largest spacing the generator can produce.
    #[inline]
    pub fn max_spacing(&self) -> usize {
        self.cumulative.len() - 1
    }

    /// Returns the cumulative table, indices `0..=N`.
    #[inline]
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Draws one uniform from `source` and returns the matching spacing.
    ///
    /// The result always lies in `[1, N]`.
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> usize {
        self.invert(source.next_uniform())
    }

    /// Returns the first index `i ≥ 1` with `cumulative[i] > ran`, or `N` if
    /// no entry exceeds `ran`.
    fn invert(&self, ran: f64) -> usize {
        let max_spacing = self.max_spacing();
        // Non-decreasing table: the partition point is the first entry above `ran`
        let offset = self.cumulative[1..].partition_point(|&mass| mass <= ran);
        if offset < max_spacing {
            offset + 1
        } else {
            let total_mass = self.cumulative[max_spacing];
            trace!(
                ran,
                total_mass,
                "draw above truncated mass, using last spacing"
            );
            max_spacing
        }
    }
}

/// Alias for [`EnsembleSpacingGenerator::new`].
pub fn create_ensemble_spacing_generator(average: f64) -> Result<EnsembleSpacingGenerator> {
    EnsembleSpacingGenerator::new(average)
}

impl Distribution<usize> for EnsembleSpacingGenerator {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.invert(rng.gen::<f64>())
    }
}
