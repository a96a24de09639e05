//! Settings resolution
//!
//! Every setting has three possible sources, highest priority first:
//! 1. command-line flags
//! 2. a TOML config file (`--config PATH`, or the `FIB_CONFIG` env var)
//! 3. built-in defaults (n = 40, naive evaluator, no report)
//!
//! ```toml
//! n = 35
//! algorithm = "iterative"
//! report = "json"
//! ```

use crate::report::ReportConfig;
use fib_core::{Algorithm, index_from_i64, parse_index};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "FIB_CONFIG";

/// Index evaluated when none is given anywhere
pub const DEFAULT_INDEX: u32 = 40;

/// Contents of a config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub n: Option<i64>,
    pub algorithm: Option<String>,
    pub report: Option<String>,
}

impl FileConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse config: {}", e))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_toml(&content)
    }
}

/// Pick the config file: the explicit flag wins over `FIB_CONFIG`
pub fn config_path(flag: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Command-line overrides, as given by the user
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub n: Option<&'a str>,
    pub algorithm: Option<Algorithm>,
    pub report: Option<&'a str>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub n: u32,
    pub algorithm: Algorithm,
    pub report: Option<ReportConfig>,
}

impl Settings {
    pub fn resolve(overrides: &Overrides<'_>, file: &FileConfig) -> Result<Self, String> {
        let n = match (overrides.n, file.n) {
            (Some(raw), _) => parse_index(raw).map_err(|e| e.to_string())?,
            (None, Some(value)) => {
                index_from_i64(value).map_err(|e| format!("config key 'n': {}", e))?
            }
            (None, None) => DEFAULT_INDEX,
        };

        let algorithm = match (overrides.algorithm, file.algorithm.as_deref()) {
            (Some(algorithm), _) => algorithm,
            (None, Some(name)) => name
                .parse()
                .map_err(|e| format!("config key 'algorithm': {}", e))?,
            (None, None) => Algorithm::default(),
        };

        let report = match overrides.report.or(file.report.as_deref()) {
            Some(spec) => ReportConfig::parse(spec)?,
            None => None,
        };

        Ok(Settings {
            n,
            algorithm,
            report,
        })
    }
}
