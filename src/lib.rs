//! # spectrend
//!
//! A toolbox for determining the presence of trends using spectral analysis.
//!
//! This crate ties the analysis crates together with a TOML configuration
//! layer and tracing setup. The analysis itself lives in
//! [`spectrend_series`], re-exported here.
//!
//! ## Quick Start
//!
//! ```ignore
//! use spectrend::{SpectrendConfig, analyze, logging};
//!
//! logging::init(1);
//! let config = SpectrendConfig::load("spectrend.toml".as_ref())?;
//! let ts = analyze(samples, &config)?;
//! println!("slope = {}", ts.linear_slope());
//! let figure = spectrend::convert::build_figure(&ts, &config.plot).to_json()?;
//! ```

pub mod config;
pub mod convert;
pub mod logging;

use anyhow::{Context, Result};
use tracing::info;

pub use config::SpectrendConfig;
pub use spectrend_series::{
    AnalysisConfig, Axes, DETRENDED_LABEL, DetrendKind, Figure, INPUT_LABEL, Line, PlotStyle,
    SeriesError, ShortSeriesPolicy, TimeSeries, fft, fft_complex, fftfreq, ifft, ifft_real,
};

/// Builds a [`TimeSeries`] from raw samples using the analysis section of
/// `config`.
pub fn analyze(data: Vec<f64>, config: &SpectrendConfig) -> Result<TimeSeries> {
    let analysis = convert::build_analysis_config(&config.analysis)?;
    let n = data.len();
    let ts = TimeSeries::with_config(data, &analysis)
        .with_context(|| format!("failed to analyse series of {n} samples"))?;
    info!(n, slope = ts.linear_slope(), "series analysed");
    Ok(ts)
}
