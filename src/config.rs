//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. explicit path (`--config`)
//! 2. `$BIJGANIT_CONFIG` environment variable
//! 3. built-in defaults (every field is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
  pub solver: SolverConfig,
  pub chat: ChatConfig,
}

/// Solver rendering and extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
  /// Decimal places for irrational quadratic roots.
  pub precision: usize,
  /// Maximum operands taken from one problem text.
  pub max_expressions: usize,
}

impl Default for SolverConfig {
  fn default() -> Self {
    Self {
      precision: 3,
      max_expressions: 4,
    }
  }
}

/// Chat responder settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
  /// Extra words that send a chat message to the solver.
  pub solve_keywords: Vec<String>,
}

/// Load config from disk. Returns defaults if no config file is found.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
  let Some(path) = config_path(explicit) else {
    return Ok(Config::default());
  };
  if explicit.is_none() && !path.exists() {
    return Ok(Config::default());
  }

  let content = std::fs::read_to_string(&path)
    .with_context(|| format!("reading {}", path.display()))?;
  let config: Config = toml::from_str(&content)
    .with_context(|| format!("parsing {}", path.display()))?;
  Ok(config)
}

/// Resolve the config file path.
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
  if let Some(p) = explicit {
    return Some(p.to_path_buf());
  }
  std::env::var_os("BIJGANIT_CONFIG").map(PathBuf::from)
}
