//! Configuration for building a [`TimeSeries`](crate::TimeSeries).

use crate::error::SeriesError;

/// Trend model removed before spectral analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetrendKind {
    /// Remove the least-squares line through the samples.
    #[default]
    Linear,
    /// Remove only the sample mean.
    Constant,
}

impl DetrendKind {
    /// Parses a detrend kind from its name (case-insensitive).
    ///
    /// | Input | Kind |
    /// |-------|------|
    /// | `"linear"` | [`DetrendKind::Linear`] |
    /// | `"constant"` | [`DetrendKind::Constant`] |
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidConfig`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, SeriesError> {
        match name.to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "constant" => Ok(Self::Constant),
            _ => Err(SeriesError::InvalidConfig(format!(
                "unknown detrend kind: {name}"
            ))),
        }
    }
}

/// What to do with a single-sample series, whose slope is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortSeriesPolicy {
    /// Keep the sample unchanged and report a NaN slope.
    #[default]
    Nan,
    /// Reject the series with [`SeriesError::TooShort`].
    Error,
}

impl ShortSeriesPolicy {
    /// Parses a policy from its name (`"nan"` or `"error"`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidConfig`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, SeriesError> {
        match name.to_lowercase().as_str() {
            "nan" => Ok(Self::Nan),
            "error" => Ok(Self::Error),
            _ => Err(SeriesError::InvalidConfig(format!(
                "unknown short-series policy: {name}"
            ))),
        }
    }
}

/// Options controlling how raw samples become a [`TimeSeries`](crate::TimeSeries).
///
/// # Example
///
/// ```
/// use spectrend_series::{AnalysisConfig, DetrendKind, ShortSeriesPolicy};
///
/// let config = AnalysisConfig::new()
///     .with_detrend(DetrendKind::Constant)
///     .with_short_series(ShortSeriesPolicy::Error)
///     .with_require_finite(true);
/// assert_eq!(config.detrend(), DetrendKind::Constant);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisConfig {
    detrend: DetrendKind,
    short_series: ShortSeriesPolicy,
    require_finite: bool,
}

impl AnalysisConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `detrend = Linear`, `short_series = Nan`,
    /// `require_finite = false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trend model.
    pub fn with_detrend(mut self, detrend: DetrendKind) -> Self {
        self.detrend = detrend;
        self
    }

    /// Sets the single-sample policy.
    pub fn with_short_series(mut self, policy: ShortSeriesPolicy) -> Self {
        self.short_series = policy;
        self
    }

    /// Sets whether NaN or infinite samples are rejected.
    pub fn with_require_finite(mut self, require: bool) -> Self {
        self.require_finite = require;
        self
    }

    /// Returns the trend model.
    pub fn detrend(&self) -> DetrendKind {
        self.detrend
    }

    /// Returns the single-sample policy.
    pub fn short_series(&self) -> ShortSeriesPolicy {
        self.short_series
    }

    /// Returns whether non-finite samples are rejected.
    pub fn require_finite(&self) -> bool {
        self.require_finite
    }
}
