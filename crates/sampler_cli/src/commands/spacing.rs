//! Spacing command implementation

use std::io::Write;

use sampler_core::{EnsembleSpacingGenerator, SamplerConfig, UniformSource};
use tracing::info;

use crate::Result;

/// Run the spacing command
pub fn run<S, W>(
    config: &SamplerConfig,
    average: Option<f64>,
    source: &mut S,
    count: usize,
    out: &mut W,
) -> Result<()>
where
    S: UniformSource,
    W: Write,
{
    let average = average.unwrap_or(config.spacing.average);
    let generator = EnsembleSpacingGenerator::new(average)?;
    info!(
        average,
        max_spacing = generator.max_spacing(),
        count,
        "Drawing ensemble spacings"
    );

    for _ in 0..count {
        writeln!(out, "{}", generator.sample(source))?;
    }
    Ok(())
}
