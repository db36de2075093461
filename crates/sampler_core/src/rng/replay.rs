//! Scripted uniform source.
//!
//! [`ReplaySource`] hands out a fixed list of values in order. It exists so
//! callers can pin down exactly which draws a sampler consumes, which is how
//! the closed-form behaviour of the samplers is verified.

use super::source::UniformSource;

/// Uniform source that replays a fixed sequence of values.
///
/// Values are not range-checked, so endpoint guards in the samplers can be
/// exercised by scripting `0.0` or `1.0` directly.
///
/// # Panics
///
/// [`UniformSource::next_uniform`] panics once the sequence is exhausted, so
/// a sampler consuming more draws than expected fails loudly. Only compiled
/// for tests or with the `test-utils` feature.
#[derive(Clone, Debug, Default)]
pub struct ReplaySource {
    values: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Creates a source that will return `values` in order.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Number of values handed out so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Number of values left to hand out.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.position
    }
}

impl UniformSource for ReplaySource {
    fn next_uniform(&mut self) -> f64 {
        let value = *self.values.get(self.position).unwrap_or_else(|| {
            panic!(
                "ReplaySource exhausted after {} values",
                self.values.len()
            )
        });
        self.position += 1;
        value
    }
}
