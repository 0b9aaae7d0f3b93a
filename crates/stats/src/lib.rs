//! Numerical helper functions for the spectrend workspace.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// First differences `data[i + 1] - data[i]`.
///
/// The result has one element fewer than the input; empty for fewer than two
/// elements.
pub fn diff(data: &[f64]) -> Vec<f64> {
    data.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Ordinary least-squares line through `(i, data[i])` for `i = 0..n`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    /// Fitted value at index 0.
    pub intercept: f64,
    /// Change of the fitted value per index step.
    pub slope: f64,
}

impl LinearFit {
    /// Fitted value at index `i`.
    pub fn at(&self, i: usize) -> f64 {
        self.intercept + self.slope * i as f64
    }

    /// Fitted values for indices `0..n`.
    pub fn fitted(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.at(i)).collect()
    }
}

/// Least-squares linear fit against the sample index.
///
/// Returns `None` if fewer than 2 elements (the slope is undetermined).
pub fn linear_fit(data: &[f64]) -> Option<LinearFit> {
    let n = data.len();
    if n < 2 {
        return None;
    }

    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = mean(data);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &y) in data.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxy += dx * (y - y_mean);
        sxx += dx * dx;
    }

    // sxx > 0 whenever n >= 2
    let slope = sxy / sxx;
    Some(LinearFit {
        intercept: y_mean - slope * x_mean,
        slope,
    })
}
