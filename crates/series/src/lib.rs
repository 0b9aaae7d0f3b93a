//! # spectrend-series
//!
//! Spectral views of a single time series for trend detection.
//!
//! ## Analysis Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["raw samples / ndarray"] -->|"squeeze + detrend"| B["TimeSeries"]
//!     B --> C[".input_ts()"]
//!     B --> D[".detrended_ts()"]
//!     B --> E[".linear_slope()"]
//!     B -->|"fft (lazy)"| F[".freq_domain()"]
//!     F -->|"|X|² (lazy)"| G[".power_spectrum()"]
//!     B -->|"plot_ts()"| H["Figure"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use spectrend_series::{TimeSeries, ifft_real};
//!
//! let ts = TimeSeries::new(vec![1.0, 2.0, 3.0, 4.0, 5.0])?;
//! assert_eq!(ts.detrended_ts()[0], 1.0);
//!
//! let spectrum = ts.freq_domain();
//! let restored = ifft_real(spectrum);
//! ```

mod config;
mod detrend;
mod error;
mod plot;
mod series;
mod transform;

pub use config::{AnalysisConfig, DetrendKind, ShortSeriesPolicy};
pub use error::SeriesError;
pub use plot::{Axes, DETRENDED_LABEL, Figure, INPUT_LABEL, Line, PlotStyle};
pub use series::TimeSeries;
pub use transform::{fft, fft_complex, fftfreq, ifft, ifft_real};
