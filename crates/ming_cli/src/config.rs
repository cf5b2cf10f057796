//! TOML configuration for the `ming` binary.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use ming_chart::{AlignmentWeights, ChartMethod, PillarConfig, QmdjConfig};

/// All tunables, grouped by section.
///
/// ```toml
/// [pillars]
/// year_boundary = "LiChun"
///
/// [qmdj]
/// method = "ZhiRun"
///
/// [alignment]
/// primary = 2.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MingConfig {
    pub pillars: PillarConfig,
    pub qmdj: QmdjSection,
    pub alignment: AlignmentWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct QmdjSection {
    pub method: ChartMethod,
}

impl MingConfig {
    /// Load from a TOML file; no path means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let Some(path) = path else {
            debug!("using default configuration");
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;
        let config = Self::from_toml(&contents)
            .map_err(|e| format!("failed to parse config {}: {e}", path.display()))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Chart configuration; chart metadata uses the `[pillars]` section.
    pub fn qmdj_config(&self) -> QmdjConfig {
        QmdjConfig {
            method: self.qmdj.method,
            pillars: self.pillars,
        }
    }
}
