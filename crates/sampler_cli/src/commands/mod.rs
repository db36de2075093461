//! CLI command implementations
//!
//! Each submodule draws `count` samples through the single-sample API and
//! writes them to the given writer, one per line.

pub mod choice;
pub mod gaussian;
pub mod rayleigh;
pub mod spacing;
