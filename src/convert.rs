//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use spectrend_series::{AnalysisConfig, DetrendKind, Figure, ShortSeriesPolicy, TimeSeries};

use crate::config::{AnalysisToml, PlotToml};

/// Builds an [`AnalysisConfig`] from the TOML analysis section.
pub fn build_analysis_config(analysis: &AnalysisToml) -> Result<AnalysisConfig> {
    let detrend = DetrendKind::from_name(&analysis.detrend).context("[analysis].detrend")?;
    let short_series =
        ShortSeriesPolicy::from_name(&analysis.short_series).context("[analysis].short_series")?;
    Ok(AnalysisConfig::new()
        .with_detrend(detrend)
        .with_short_series(short_series)
        .with_require_finite(analysis.require_finite))
}

/// Builds the input-vs-detrended figure with the TOML plot styling.
pub fn build_figure(ts: &TimeSeries, plot: &PlotToml) -> Figure {
    ts.plot_ts(&plot.base, plot.input.as_ref(), plot.detrended.as_ref())
}
