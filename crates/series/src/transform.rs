//! Discrete Fourier transform pair over `rustfft`.
//!
//! All transforms keep the full length of the input and use the standard DFT
//! ordering: DC at index 0, positive frequencies up to Nyquist, then the
//! negative-frequency mirror.

use num_complex::Complex;
use rustfft::FftPlanner;

/// Forward DFT of a real signal (unnormalized).
pub fn fft(signal: &[f64]) -> Vec<Complex<f64>> {
    let buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft_complex(&buffer)
}

/// Forward DFT of a complex signal (unnormalized).
pub fn fft_complex(signal: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = signal.len();
    let mut buffer = signal.to_vec();
    if n == 0 {
        return buffer;
    }

    let mut planner = FftPlanner::new();
    let forward = planner.plan_fft_forward(n);
    forward.process(&mut buffer);
    buffer
}

/// Inverse DFT, normalized by `1/n` so that `ifft(&fft(x)) ≈ x`.
pub fn ifft(spectrum: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = spectrum.len();
    let mut buffer = spectrum.to_vec();
    if n == 0 {
        return buffer;
    }

    let mut planner = FftPlanner::new();
    let inverse = planner.plan_fft_inverse(n);
    inverse.process(&mut buffer);

    // rustfft is unnormalized
    let norm = 1.0 / n as f64;
    for c in &mut buffer {
        *c *= norm;
    }
    buffer
}

/// Real part of [`ifft`], for spectra of real signals.
pub fn ifft_real(spectrum: &[Complex<f64>]) -> Vec<f64> {
    ifft(spectrum).into_iter().map(|c| c.re).collect()
}

/// Sample frequencies of an `n`-point DFT with sample spacing `d`.
///
/// Matches the DFT ordering: `[0, 1, ..., ceil(n/2) - 1, -floor(n/2), ..., -1] / (d * n)`.
pub fn fftfreq(n: usize, d: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let scale = 1.0 / (d * n as f64);
    let n_positive = n.div_ceil(2);
    (0..n)
        .map(|i| {
            let k = if i < n_positive {
                i as f64
            } else {
                i as f64 - n as f64
            };
            k * scale
        })
        .collect()
}
