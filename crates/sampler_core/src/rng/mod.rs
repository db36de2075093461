//! # Uniform Random Sources
//!
//! Every sampler in this crate consumes uniform draws in `[0, 1)` from a
//! [`UniformSource`]. This module defines that seam and its implementations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: [`SamplerRng`] records its seed and can be reseeded
//! - **Injection**: samplers take `&mut impl UniformSource`, so tests can
//!   script exact draws with `ReplaySource` (`test-utils` feature)
//! - **Static dispatch**: generic parameters only; no `Box<dyn Trait>`
//!
//! ## Module Structure
//!
//! - [`source`]: the `UniformSource` and `SeedableSource` traits
//! - [`prng`]: seeded wrapper around `rand::rngs::StdRng`
//! - `replay`: scripted source replaying a fixed sequence (`test-utils`)
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{SamplerRng, SeedableSource, UniformSource};
//!
//! let mut rng = SamplerRng::from_seed(12345);
//! let first = rng.next_uniform();
//!
//! rng.reseed(12345);
//! assert_eq!(rng.next_uniform(), first);
//! ```

pub mod prng;
#[cfg(any(test, feature = "test-utils"))]
pub mod replay;
pub mod source;

// Public re-exports
pub use prng::SamplerRng;
#[cfg(any(test, feature = "test-utils"))]
pub use replay::ReplaySource;
pub use source::{SeedableSource, UniformSource};
