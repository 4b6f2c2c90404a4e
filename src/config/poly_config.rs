// src/config/poly_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use log::{warn, LevelFilter};

/// Main polyarith configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyConfig {
    /// Logging level (error, warn, info, debug, trace). The library never
    /// installs a logger; callers feed this to theirs via [`PolyConfig::log_filter`].
    pub log_level: String,

    /// Newton-Raphson tuning
    pub root: RootConfig,

    /// Grid search bounds for the fixed-degree fits
    pub fit: FitConfig,
}

/// Newton-Raphson root search settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RootConfig {
    /// Stop once |f(x) / f'(x)| drops below this (default: 1e-4)
    pub tolerance: f64,

    /// Iteration cap (default: 100000)
    pub max_iterations: usize,
}

/// Integer grid searched by the linear and quadratic fits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FitConfig {
    /// Smallest leading coefficient tried (default: 1)
    pub leading_min: i64,

    /// Smallest value tried for the other coefficients (default: 0)
    pub other_min: i64,

    /// Exclusive upper bound for every coefficient (default: 20)
    pub coefficient_max: i64,

    /// Candidates at or above this squared error are never chosen (default: 1e20)
    pub distance_ceiling: f64,

    /// Spread the search over the rayon pool
    pub parallel: bool,
}

impl Default for PolyConfig {
    fn default() -> Self {
        PolyConfig {
            log_level: "info".to_string(),
            root: RootConfig::default(),
            fit: FitConfig::default(),
        }
    }
}

impl Default for RootConfig {
    fn default() -> Self {
        RootConfig {
            tolerance: 1e-4,
            max_iterations: 100_000,
        }
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        FitConfig {
            leading_min: 1,
            other_min: 0,
            coefficient_max: 20,
            distance_ceiling: 1e20,
            parallel: true,
        }
    }
}

impl PolyConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("polyarith.toml").exists() {
            builder = builder.add_source(File::with_name("polyarith.toml"));
        } else if Path::new("polyarith.yaml").exists() {
            builder = builder.add_source(File::with_name("polyarith.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    /// `log_level` as a filter, falling back to `Info` when it does not parse.
    pub fn log_filter(&self) -> LevelFilter {
        match self.log_level.parse() {
            Ok(filter) => filter,
            Err(_) => {
                warn!("Unknown log level '{}', using info", self.log_level);
                LevelFilter::Info
            }
        }
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = PolyConfig::default();
        Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("root.tolerance", defaults.root.tolerance)?
            .set_default("root.max_iterations", defaults.root.max_iterations as u64)?
            .set_default("fit.leading_min", defaults.fit.leading_min)?
            .set_default("fit.other_min", defaults.fit.other_min)?
            .set_default("fit.coefficient_max", defaults.fit.coefficient_max)?
            .set_default("fit.distance_ceiling", defaults.fit.distance_ceiling)?
            .set_default("fit.parallel", defaults.fit.parallel)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. POLYARITH_ROOT__MAX_ITERATIONS
        let config = builder
            .add_source(
                Environment::with_prefix("POLYARITH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PolyConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.root.tolerance, 1e-4);
        assert_eq!(config.root.max_iterations, 100_000);
        assert_eq!(config.fit.leading_min, 1);
        assert_eq!(config.fit.other_min, 0);
        assert_eq!(config.fit.coefficient_max, 20);
        assert_eq!(config.fit.distance_ceiling, 1e20);
        assert!(config.fit.parallel);
    }

    #[test]
    fn test_log_filter() {
        let mut config = PolyConfig::default();
        assert_eq!(config.log_filter(), LevelFilter::Info);
        config.log_level = "TRACE".to_string();
        assert_eq!(config.log_filter(), LevelFilter::Trace);
        config.log_level = "off".to_string();
        assert_eq!(config.log_filter(), LevelFilter::Off);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = PolyConfig::load().unwrap_or_else(|_| PolyConfig::default());
        assert_eq!(config.fit.coefficient_max, 20);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("polyarith_test_{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[root]\nmax_iterations = 50\n\n[fit]\nparallel = false").unwrap();

        let config = PolyConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.root.max_iterations, 50);
        assert_eq!(config.root.tolerance, 1e-4);
        assert!(!config.fit.parallel);
        assert_eq!(config.fit.coefficient_max, 20);
    }
}
