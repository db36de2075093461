//! Scalar samplers built on an injected [`UniformSource`](crate::UniformSource).
//!
//! - [`gaussian`]: polar Box–Muller with a one-value cache
//! - [`spacing`]: GUE nearest-neighbour spacings by table inversion
//! - [`rayleigh`]: Rayleigh(σ) by inverse CDF
//! - [`choice`]: uniform pick from a slice
//!
//! The `create_*` functions are thin aliases for the constructors, kept for
//! callers that prefer a free-function entry point.

pub mod choice;
pub mod gaussian;
pub mod rayleigh;
pub mod spacing;

pub use choice::uniform_choice;
pub use gaussian::{create_gaussian_generator, GaussianGenerator};
pub use rayleigh::{rayleigh_sample, Rayleigh};
pub use spacing::{create_ensemble_spacing_generator, gue_spacing_density, EnsembleSpacingGenerator};
