//! Error types for the spectrend-series crate.

/// Error type for all fallible operations in the spectrend-series crate.
///
/// Covers shape normalisation, degenerate-length inputs, configuration
/// problems, and figure serialisation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeriesError {
    /// Returned when the input still has more than one axis after dropping
    /// singleton axes.
    #[error("cannot squeeze array of shape {shape:?} to one dimension")]
    Shape {
        /// Shape of the array that was provided.
        shape: Vec<usize>,
    },

    /// Returned when the input contains no samples.
    #[error("time series is empty")]
    Empty,

    /// Returned when the series is too short and the configuration rejects
    /// degenerate lengths.
    #[error("series too short: got {len} observations, need at least {min}")]
    TooShort {
        /// Number of observations provided.
        len: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when finite input is required and a sample is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFinite {
        /// Position of the first offending sample.
        index: usize,
    },

    /// Returned when an analysis configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned when a figure description cannot be serialised.
    #[error("figure serialization failed: {reason}")]
    Serialization {
        /// Underlying serializer message.
        reason: String,
    },
}
