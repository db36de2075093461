//! # sampler_core: Scalar Samplers for Non-Standard Distributions
//!
//! Provides one-value-at-a-time samplers for distributions that `rand`'s
//! default facilities do not cover in the form we need:
//!
//! - [`GaussianGenerator`]: Normal(mean, stddev²) via the polar Box–Muller
//!   transform, caching the second value of each accepted pair
//! - [`EnsembleSpacingGenerator`]: discrete Gaussian Unitary Ensemble
//!   nearest-neighbour spacings by inversion of a precomputed cumulative table
//! - [`rayleigh_sample`] / [`Rayleigh`]: Rayleigh(σ) by direct inverse-CDF
//! - [`uniform_choice`]: uniform pick from a non-empty slice
//!
//! Every sampler draws from an injected [`UniformSource`], so sequences are
//! reproducible whenever the source is seeded.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::{EnsembleSpacingGenerator, GaussianGenerator, SamplerRng};
//!
//! let mut rng = SamplerRng::from_seed(42);
//!
//! let mut gaussian = GaussianGenerator::new(10.0, 2.0).unwrap();
//! let x = gaussian.sample(&mut rng);
//! assert!(x.is_finite());
//!
//! let spacing = EnsembleSpacingGenerator::new(4.0).unwrap();
//! let s = spacing.sample(&mut rng);
//! assert!((1..=16).contains(&s));
//! ```
//!
//! ## Parameter Validation
//!
//! Constructors reject, with [`SamplerError::InvalidParameter`]:
//!
//! - non-finite `mean`, and non-finite or non-positive `stddev` / `sigma`
//! - `average` that is non-finite, below `0.125` (no spacing `≥ 1` in the
//!   table), or above roughly 2.5 million (table larger than
//!   [`MAX_SPACING`](distributions::spacing::MAX_SPACING) entries)
//! - an empty collection passed to [`uniform_choice`]
//!
//! ## Feature Flags
//!
//! - `test-utils`: exposes `rng::ReplaySource`, a scripted source that replays
//!   fixed uniforms and panics when exhausted. Intended for tests only.
//!
//! ## Reseeding
//!
//! [`GaussianGenerator`] holds a cached half-pair between calls. After
//! reseeding a source, call [`GaussianGenerator::reset`] if an odd number of
//! samples were drawn since the last reseed, otherwise the first value after
//! reseeding comes from the old stream.
//!
//! ## Thread Safety
//!
//! Generators are plain owned values with no interior mutability. Confine each
//! instance (and its source) to one thread, or guard it externally.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod distributions;
pub mod error;
pub mod rng;

pub use config::{LogLevel, SamplerConfig};
pub use distributions::{
    create_ensemble_spacing_generator, create_gaussian_generator, gue_spacing_density,
    rayleigh_sample, uniform_choice, EnsembleSpacingGenerator, GaussianGenerator, Rayleigh,
};
pub use error::{Result, SamplerError};
pub use rng::{SamplerRng, SeedableSource, UniformSource};
