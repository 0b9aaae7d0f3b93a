use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use spectrend_series::PlotStyle;

/// Top-level spectrend configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpectrendConfig {
    /// Detrending and validation settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Styling for the input-vs-detrended figure.
    #[serde(default)]
    pub plot: PlotToml,
}

impl SpectrendConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml_str(&toml_str)
            .with_context(|| format!("invalid config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    #[serde(default = "default_detrend")]
    pub detrend: String,
    #[serde(default = "default_short_series")]
    pub short_series: String,
    #[serde(default)]
    pub require_finite: bool,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            detrend: default_detrend(),
            short_series: default_short_series(),
            require_finite: false,
        }
    }
}

fn default_detrend() -> String {
    "linear".to_string()
}
fn default_short_series() -> String {
    "nan".to_string()
}

/// Plot styling. `base` applies to both lines, the others override it.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotToml {
    #[serde(default)]
    pub base: PlotStyle,
    #[serde(default)]
    pub input: Option<PlotStyle>,
    #[serde(default)]
    pub detrended: Option<PlotStyle>,
}
