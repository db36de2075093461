//! Rayleigh command implementation

use std::io::Write;

use sampler_core::{Rayleigh, SamplerConfig, UniformSource};
use tracing::info;

use crate::Result;

/// Run the rayleigh command
pub fn run<S, W>(
    config: &SamplerConfig,
    sigma: Option<f64>,
    source: &mut S,
    count: usize,
    out: &mut W,
) -> Result<()>
where
    S: UniformSource,
    W: Write,
{
    let distribution = Rayleigh::new(sigma.unwrap_or(config.rayleigh.sigma))?;
    info!(
        sigma = distribution.sigma(),
        mean = distribution.mean(),
        count,
        "Drawing rayleigh samples"
    );

    for _ in 0..count {
        writeln!(out, "{}", distribution.sample(source))?;
    }
    Ok(())
}
