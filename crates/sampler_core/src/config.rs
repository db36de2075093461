//! Sampler configuration management
//!
//! Loads default generator parameters from a TOML file and environment
//! variables. Precedence (highest to lowest) is: explicit overrides applied by
//! the caller, environment variables, config file, defaults.
//!
//! ```toml
//! seed = 42
//! log_level = "debug"
//!
//! [gaussian]
//! mean = 0.0
//! stddev = 1.0
//!
//! [spacing]
//! average = 4.0
//!
//! [rayleigh]
//! sigma = 1.0
//! ```

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::distributions::spacing::table_len;
use crate::distributions::{EnsembleSpacingGenerator, GaussianGenerator, Rayleigh};
use crate::error::{require_finite, require_positive, Result, SamplerError};
use crate::rng::SamplerRng;

/// Environment variable overriding [`SamplerConfig::seed`].
pub const ENV_SEED: &str = "SAMPLER_SEED";

/// Environment variable overriding [`SamplerConfig::log_level`].
pub const ENV_LOG_LEVEL: &str = "SAMPLER_LOG_LEVEL";

/// Log levels accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose, includes per-draw fallbacks.
    Trace,
    /// Generator construction details.
    Debug,
    /// Run summaries.
    #[default]
    Info,
    /// Warnings only.
    Warn,
    /// Errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(SamplerError::invalid(
                "log_level",
                format!("{}. Must be one of: trace, debug, info, warn, error", s),
            )),
        }
    }
}

impl LogLevel {
    /// Convert log level to a tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Gaussian generator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GaussianParams {
    /// Distribution mean.
    pub mean: f64,
    /// Distribution standard deviation.
    pub stddev: f64,
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            stddev: 1.0,
        }
    }
}

/// Ensemble spacing generator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpacingParams {
    /// Average spacing in table units.
    pub average: f64,
}

impl Default for SpacingParams {
    fn default() -> Self {
        Self { average: 4.0 }
    }
}

/// Rayleigh sampler parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RayleighParams {
    /// Scale parameter.
    pub sigma: f64,
}

impl Default for RayleighParams {
    fn default() -> Self {
        Self { sigma: 1.0 }
    }
}

/// Complete sampler configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    /// Seed for the uniform source; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Log level used when the binary installs its subscriber.
    pub log_level: LogLevel,
    /// Gaussian defaults.
    pub gaussian: GaussianParams,
    /// Ensemble spacing defaults.
    pub spacing: SpacingParams,
    /// Rayleigh defaults.
    pub rayleigh: RayleighParams,
}

impl SamplerConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// `SamplerError::Config` on malformed TOML or unknown keys,
    /// `SamplerError::InvalidParameter` on out-of-domain values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SamplerConfig = toml::from_str(content)
            .map_err(|e| SamplerError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SamplerError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Applies `SAMPLER_SEED` and `SAMPLER_LOG_LEVEL` from the process
    /// environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(seed.trim().parse().map_err(|_| {
                SamplerError::invalid("seed", format!("{} is not an unsigned integer", seed))
            })?);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        Ok(self)
    }

    /// Validates every parameter the way the generator constructors do.
    pub fn validate(&self) -> Result<()> {
        require_finite("mean", self.gaussian.mean)?;
        require_positive("stddev", self.gaussian.stddev)?;
        table_len(self.spacing.average)?;
        require_positive("sigma", self.rayleigh.sigma)?;
        Ok(())
    }

    /// Builds the uniform source: seeded if a seed is configured, otherwise
    /// from entropy.
    pub fn build_rng(&self) -> SamplerRng {
        match self.seed {
            Some(seed) => SamplerRng::from_seed(seed),
            None => SamplerRng::from_entropy(),
        }
    }

    /// Builds a Gaussian generator from the configured parameters.
    pub fn gaussian_generator(&self) -> Result<GaussianGenerator> {
        GaussianGenerator::new(self.gaussian.mean, self.gaussian.stddev)
    }

    /// Builds an ensemble spacing generator from the configured average.
    pub fn spacing_generator(&self) -> Result<EnsembleSpacingGenerator> {
        EnsembleSpacingGenerator::new(self.spacing.average)
    }

    /// Builds a Rayleigh distribution from the configured scale.
    pub fn rayleigh(&self) -> Result<Rayleigh> {
        Rayleigh::new(self.rayleigh.sigma)
    }
}
