//! Anchored trend removal.
//!
//! Plain least-squares detrending removes the mean together with the trend.
//! The series produced here is shifted back so that its first sample equals
//! the first input sample, keeping the absolute level of the observations.

use spectrend_stats::{diff, linear_fit, mean};
use tracing::debug;

use crate::config::DetrendKind;

/// Result of [`detrend`].
#[derive(Clone, Debug)]
pub(crate) struct Detrended {
    /// Stationary series anchored at the first input sample.
    pub series: Vec<f64>,
    /// Mean per-step change of the removed trend. NaN for fewer than two samples.
    pub slope: f64,
}

/// Removes a trend from `input` and re-anchors the result at `input[0]`.
///
/// With `d = input - trend`:
/// - `slope = mean(diff(input - d))`
/// - `series = d + (input[0] - d[0])`
///
/// Fewer than two samples leave the input unchanged with a NaN slope.
pub(crate) fn detrend(input: &[f64], kind: DetrendKind) -> Detrended {
    let n = input.len();
    if n < 2 {
        return Detrended {
            series: input.to_vec(),
            slope: f64::NAN,
        };
    }

    let trend: Vec<f64> = match kind {
        DetrendKind::Linear => match linear_fit(input) {
            Some(fit) => fit.fitted(n),
            None => vec![mean(input); n],
        },
        DetrendKind::Constant => vec![mean(input); n],
    };

    let residual: Vec<f64> = input.iter().zip(&trend).map(|(x, t)| x - t).collect();

    let removed: Vec<f64> = input
        .iter()
        .zip(&residual)
        .map(|(x, d)| x - d)
        .collect();
    let slope = mean(&diff(&removed));

    let start_diff = input[0] - residual[0];
    let series = residual.into_iter().map(|d| d + start_diff).collect();

    debug!(n, ?kind, slope, start_diff, "detrended series");
    Detrended { series, slope }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_input_becomes_constant() {
        let input: Vec<f64> = (0..20).map(|i| 4.0 + 0.75 * i as f64).collect();
        let out = detrend(&input, DetrendKind::Linear);

        assert_eq!(out.series.len(), 20);
        for &v in &out.series {
            assert_relative_eq!(v, 4.0, epsilon = 1e-10);
        }
        assert_relative_eq!(out.slope, 0.75, epsilon = 1e-10);
    }

    #[test]
    fn first_sample_is_anchored() {
        let input = [5.0, 1.0, 9.0, -3.0, 2.5, 7.0];
        let out = detrend(&input, DetrendKind::Linear);
        assert_relative_eq!(out.series[0], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn anchoring_is_a_uniform_shift() {
        // Residuals of the least-squares line differ from the anchored series
        // by one constant.
        let input = [3.0, 2.0, 3.0, 6.0];
        let out = detrend(&input, DetrendKind::Linear);
        let fit = linear_fit(&input).unwrap();
        let shift = out.series[0] - (input[0] - fit.at(0));
        for (i, &v) in out.series.iter().enumerate() {
            assert_relative_eq!(v - (input[i] - fit.at(i)), shift, epsilon = 1e-12);
        }
        assert_relative_eq!(out.slope, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_kind_keeps_variation() {
        let input = [1.0, 3.0, 2.0, 6.0];
        let out = detrend(&input, DetrendKind::Constant);

        // Mean removal followed by re-anchoring leaves the input unchanged.
        for (a, b) in out.series.iter().zip(input.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
        assert_relative_eq!(out.slope, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn single_sample_has_nan_slope() {
        let out = detrend(&[42.0], DetrendKind::Linear);
        assert_eq!(out.series, vec![42.0]);
        assert!(out.slope.is_nan());
    }

    #[test]
    fn two_samples_fit_exactly() {
        let out = detrend(&[2.0, 5.0], DetrendKind::Linear);
        assert_relative_eq!(out.series[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(out.series[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(out.slope, 3.0, epsilon = 1e-12);
    }
}
