//! The analysed time series and its cached spectral views.

use std::sync::OnceLock;

use ndarray::{ArrayBase, Data, Dimension};
use num_complex::Complex;
use tracing::{debug, warn};

use crate::config::{AnalysisConfig, ShortSeriesPolicy};
use crate::detrend::{Detrended, detrend};
use crate::error::SeriesError;
use crate::plot::{Figure, PlotStyle, series_figure};
use crate::transform::{fft, fftfreq};

/// A one-dimensional series together with its detrended and spectral views.
///
/// The input is fixed at construction. The detrended series and the linear
/// slope are computed eagerly; the frequency domain and the power spectrum are
/// computed on first access and then memoized. Both lazy fields are guarded by
/// [`OnceLock`], so a `TimeSeries` can be shared across threads and each view
/// is computed at most once.
///
/// # Example
///
/// ```ignore
/// use spectrend_series::TimeSeries;
///
/// let ts = TimeSeries::new(vec![1.0, 2.0, 3.0, 4.0, 5.0])?;
/// assert!((ts.linear_slope() - 1.0).abs() < 1e-12);
/// let power = ts.power_spectrum(); // triggers the DFT
/// ```
#[derive(Clone, Debug)]
pub struct TimeSeries {
    input_ts: Vec<f64>,
    detrended_ts: Vec<f64>,
    linear_slope: f64,
    freq_domain: OnceLock<Vec<Complex<f64>>>,
    power_spectrum: OnceLock<Vec<f64>>,
}

impl TimeSeries {
    /// Creates a `TimeSeries` from 1-D samples with the default configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::Empty`] | `data` is empty |
    pub fn new(data: Vec<f64>) -> Result<Self, SeriesError> {
        Self::with_config(data, &AnalysisConfig::default())
    }

    /// Creates a `TimeSeries` from 1-D samples.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::Empty`] | `data` is empty |
    /// | [`SeriesError::NonFinite`] | `require_finite` is set and a sample is NaN or infinite |
    /// | [`SeriesError::TooShort`] | one sample under [`ShortSeriesPolicy::Error`] |
    #[tracing::instrument(skip_all, fields(n = data.len()))]
    pub fn with_config(data: Vec<f64>, config: &AnalysisConfig) -> Result<Self, SeriesError> {
        if data.is_empty() {
            return Err(SeriesError::Empty);
        }
        if config.require_finite() {
            if let Some(index) = data.iter().position(|v| !v.is_finite()) {
                return Err(SeriesError::NonFinite { index });
            }
        }
        if data.len() < 2 {
            match config.short_series() {
                ShortSeriesPolicy::Error => {
                    return Err(SeriesError::TooShort {
                        len: data.len(),
                        min: 2,
                    });
                }
                ShortSeriesPolicy::Nan => {
                    warn!("single-sample series: linear slope is undefined (NaN)");
                }
            }
        }

        let Detrended { series, slope } = detrend(&data, config.detrend());

        Ok(Self {
            input_ts: data,
            detrended_ts: series,
            linear_slope: slope,
            freq_domain: OnceLock::new(),
            power_spectrum: OnceLock::new(),
        })
    }

    /// Creates a `TimeSeries` from an array of any dimensionality, dropping
    /// axes of length one.
    ///
    /// # Errors
    ///
    /// [`SeriesError::Shape`] if more than one axis has a length other than
    /// one, plus everything [`TimeSeries::new`] returns.
    pub fn from_array<S, D>(array: &ArrayBase<S, D>) -> Result<Self, SeriesError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        Self::from_array_with_config(array, &AnalysisConfig::default())
    }

    /// Like [`TimeSeries::from_array`] with an explicit configuration.
    pub fn from_array_with_config<S, D>(
        array: &ArrayBase<S, D>,
        config: &AnalysisConfig,
    ) -> Result<Self, SeriesError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        Self::with_config(squeeze(array)?, config)
    }

    /// The raw samples, exactly as given.
    pub fn input_ts(&self) -> &[f64] {
        &self.input_ts
    }

    /// The stationary series; `detrended_ts()[0] == input_ts()[0]`.
    pub fn detrended_ts(&self) -> &[f64] {
        &self.detrended_ts
    }

    /// Estimated trend per sample step. NaN for a single-sample series.
    pub fn linear_slope(&self) -> f64 {
        self.linear_slope
    }

    /// DFT of the detrended series, computed on first access.
    pub fn freq_domain(&self) -> &[Complex<f64>] {
        self.freq_domain.get_or_init(|| {
            let spectrum = fft(&self.detrended_ts);
            debug!(n = spectrum.len(), "computed frequency domain");
            spectrum
        })
    }

    /// Squared magnitude of each frequency bin, computed on first access.
    pub fn power_spectrum(&self) -> &[f64] {
        self.power_spectrum.get_or_init(|| {
            let power: Vec<f64> = self.freq_domain().iter().map(|c| c.norm_sqr()).collect();
            debug!(n = power.len(), "computed power spectrum");
            power
        })
    }

    /// Returns `true` once [`TimeSeries::freq_domain`] has been materialized.
    pub fn is_freq_domain_computed(&self) -> bool {
        self.freq_domain.get().is_some()
    }

    /// Returns `true` once [`TimeSeries::power_spectrum`] has been materialized.
    pub fn is_power_spectrum_computed(&self) -> bool {
        self.power_spectrum.get().is_some()
    }

    /// Frequency of each bin of [`TimeSeries::freq_domain`] for the given
    /// sample spacing.
    pub fn frequencies(&self, sample_spacing: f64) -> Vec<f64> {
        fftfreq(self.len(), sample_spacing)
    }

    /// Builds a figure of the input and detrended series.
    ///
    /// `base` styles both lines; `input` and `detrended` override it for one
    /// line each.
    pub fn plot_ts(
        &self,
        base: &PlotStyle,
        input: Option<&PlotStyle>,
        detrended: Option<&PlotStyle>,
    ) -> Figure {
        series_figure(&self.input_ts, &self.detrended_ts, base, input, detrended)
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.input_ts.len()
    }

    /// Returns `true` if the series is empty.
    ///
    /// Note: a constructed `TimeSeries` is never empty.
    pub fn is_empty(&self) -> bool {
        self.input_ts.is_empty()
    }
}

impl AsRef<[f64]> for TimeSeries {
    fn as_ref(&self) -> &[f64] {
        &self.input_ts
    }
}

/// Flattens an array with at most one non-singleton axis.
fn squeeze<S, D>(array: &ArrayBase<S, D>) -> Result<Vec<f64>, SeriesError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let shape = array.shape();
    let n_axes = shape.iter().filter(|&&len| len != 1).count();
    if n_axes > 1 {
        return Err(SeriesError::Shape {
            shape: shape.to_vec(),
        });
    }
    Ok(array.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetrendKind;
    use approx::assert_relative_eq;
    use ndarray::{Array, Array2, IxDyn, arr0, array};

    #[test]
    fn new_keeps_input() {
        let data = vec![2.0, -1.0, 4.5, 3.0];
        let ts = TimeSeries::new(data.clone()).unwrap();
        assert_eq!(ts.input_ts(), data.as_slice());
        assert_eq!(ts.len(), 4);
        assert!(!ts.is_empty());
    }

    #[test]
    fn new_empty_rejected() {
        let err = TimeSeries::new(vec![]).unwrap_err();
        assert!(matches!(err, SeriesError::Empty));
    }

    #[test]
    fn single_sample_nan_policy() {
        let ts = TimeSeries::new(vec![7.0]).unwrap();
        assert_eq!(ts.detrended_ts(), &[7.0]);
        assert!(ts.linear_slope().is_nan());
        assert_relative_eq!(ts.power_spectrum()[0], 49.0, epsilon = 1e-12);
    }

    #[test]
    fn single_sample_error_policy() {
        let config = AnalysisConfig::new().with_short_series(ShortSeriesPolicy::Error);
        let err = TimeSeries::with_config(vec![7.0], &config).unwrap_err();
        assert!(matches!(err, SeriesError::TooShort { len: 1, min: 2 }));
    }

    #[test]
    fn non_finite_allowed_by_default() {
        let ts = TimeSeries::new(vec![1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(ts.len(), 3);
        assert!(ts.linear_slope().is_nan());
    }

    #[test]
    fn non_finite_rejected_when_required() {
        let config = AnalysisConfig::new().with_require_finite(true);
        let err = TimeSeries::with_config(vec![1.0, 2.0, f64::INFINITY], &config).unwrap_err();
        assert!(matches!(err, SeriesError::NonFinite { index: 2 }));
    }

    #[test]
    fn constant_detrend_kind() {
        let config = AnalysisConfig::new().with_detrend(DetrendKind::Constant);
        let ts = TimeSeries::with_config(vec![1.0, 2.0, 3.0], &config).unwrap();
        assert_eq!(ts.detrended_ts().len(), 3);
        assert_relative_eq!(ts.detrended_ts()[2], 3.0, epsilon = 1e-12);
        assert_relative_eq!(ts.linear_slope(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn lazy_fields_start_empty() {
        let ts = TimeSeries::new(vec![1.0, 3.0, 2.0]).unwrap();
        assert!(!ts.is_freq_domain_computed());
        assert!(!ts.is_power_spectrum_computed());
    }

    #[test]
    fn power_spectrum_triggers_freq_domain() {
        let ts = TimeSeries::new(vec![1.0, 3.0, 2.0, 5.0]).unwrap();
        let _ = ts.power_spectrum();
        assert!(ts.is_freq_domain_computed());
        assert!(ts.is_power_spectrum_computed());
    }

    #[test]
    fn freq_domain_is_memoized() {
        let ts = TimeSeries::new(vec![1.0, 3.0, 2.0, 5.0]).unwrap();
        let first = ts.freq_domain();
        let second = ts.freq_domain();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn power_spectrum_is_memoized() {
        let ts = TimeSeries::new(vec![1.0, 3.0, 2.0, 5.0]).unwrap();
        let first = ts.power_spectrum();
        let second = ts.power_spectrum();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn frequencies_align_with_bins() {
        let ts = TimeSeries::new(vec![0.0; 4]).unwrap();
        assert_eq!(ts.frequencies(1.0), vec![0.0, 0.25, -0.5, -0.25]);
    }

    #[test]
    fn squeeze_column_vector() {
        let a: Array2<f64> = array![[1.0], [2.0], [3.0]];
        let ts = TimeSeries::from_array(&a).unwrap();
        assert_eq!(ts.input_ts(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn squeeze_three_axes() {
        let a = Array::from_shape_vec(IxDyn(&[1, 4, 1]), vec![4.0, 3.0, 2.0, 1.0]).unwrap();
        let ts = TimeSeries::from_array(&a).unwrap();
        assert_eq!(ts.input_ts(), &[4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn squeeze_scalar() {
        let ts = TimeSeries::from_array(&arr0(2.5)).unwrap();
        assert_eq!(ts.input_ts(), &[2.5]);
    }

    #[test]
    fn squeeze_matrix_rejected() {
        let a: Array2<f64> = Array2::zeros((3, 2));
        let err = TimeSeries::from_array(&a).unwrap_err();
        assert!(matches!(err, SeriesError::Shape { ref shape } if shape == &vec![3, 2]));
    }

    #[test]
    fn squeeze_empty_axis() {
        let a: Array2<f64> = Array2::zeros((0, 1));
        let err = TimeSeries::from_array(&a).unwrap_err();
        assert!(matches!(err, SeriesError::Empty));
    }

    #[test]
    fn as_ref_trait() {
        let ts = TimeSeries::new(vec![1.0, 2.0]).unwrap();
        let slice: &[f64] = ts.as_ref();
        assert_eq!(slice, &[1.0, 2.0]);
    }

    #[test]
    fn series_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + Clone>() {}
        assert_impl::<TimeSeries>();
    }
}
