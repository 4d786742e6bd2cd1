//! Configuration file handling.
//!
//! A `dp-align.toml` may provide cost tables per mode and enumeration limits:
//!
//! ```toml
//! [global]
//! insertion = 1
//! deletion = 1
//! substitution = 1
//! match = 0
//!
//! [local]
//! insertion = -1
//! deletion = -1
//! substitution = -3
//! match = 1
//!
//! [limits]
//! max_alignments = 100
//! ```
//!
//! Absent tables fall back to the built-in presets. A table that is present
//! must name all four costs.

use std::path::Path;

use anyhow::{Context, Result};
use dp_align::{AlignmentMode, CostModel, EnumerationLimits};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: CostModel,
    pub local: CostModel,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    pub max_alignments: Option<usize>,
    pub max_expansions: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: CostModel::edit_distance(),
            local: CostModel::smith_waterman(),
            limits: LimitsConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn costs_for(&self, mode: AlignmentMode) -> CostModel {
        match mode {
            AlignmentMode::Global => self.global,
            AlignmentMode::Local => self.local,
        }
    }

    pub fn enumeration_limits(&self) -> EnumerationLimits {
        EnumerationLimits {
            max_results: self.limits.max_alignments,
            max_expansions: self.limits.max_expansions,
        }
    }
}
