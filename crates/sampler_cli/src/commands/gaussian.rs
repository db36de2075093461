//! Gaussian command implementation

use std::io::Write;

use sampler_core::{GaussianGenerator, SamplerConfig, UniformSource};
use tracing::info;

use crate::args::split_exact;
use crate::Result;

/// Parameter overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct GaussianArgs {
    /// Mean override.
    pub mean: Option<f64>,
    /// Standard deviation override.
    pub stddev: Option<f64>,
    /// `"MEAN,STDDEV"` pair; wins over the individual flags.
    pub params: Option<String>,
}

/// Run the gaussian command
pub fn run<S, W>(
    config: &SamplerConfig,
    args: &GaussianArgs,
    source: &mut S,
    count: usize,
    out: &mut W,
) -> Result<()>
where
    S: UniformSource,
    W: Write,
{
    let (mean, stddev) = match &args.params {
        Some(params) => {
            let [mean, stddev] = split_exact::<2>(params)?;
            (mean, stddev)
        }
        None => (
            args.mean.unwrap_or(config.gaussian.mean),
            args.stddev.unwrap_or(config.gaussian.stddev),
        ),
    };

    let mut generator = GaussianGenerator::new(mean, stddev)?;
    info!(mean, stddev, count, "Drawing gaussian samples");

    for _ in 0..count {
        writeln!(out, "{}", generator.sample(source))?;
    }
    Ok(())
}
