//! Figure descriptions handed to an external plotting backend.
//!
//! Nothing here renders. A [`Figure`] carries the labelled series and the
//! resolved per-series styling; a backend draws it directly or from the JSON
//! produced by [`Figure::to_json`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SeriesError;

/// Legend label of the raw series.
pub const INPUT_LABEL: &str = "Input Time Series";

/// Legend label of the detrended series.
pub const DETRENDED_LABEL: &str = "Detrended Time Series";

/// Arbitrary key/value display options for one line (`color`, `linewidth`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlotStyle(BTreeMap<String, Value>);

impl PlotStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one option, replacing any previous value for `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value of one option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of options set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no option is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `self` overlaid with `overrides`; keys in `overrides` win.
    pub fn merged(&self, overrides: &PlotStyle) -> PlotStyle {
        let mut out = self.0.clone();
        out.extend(overrides.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        PlotStyle(out)
    }
}

impl FromIterator<(String, Value)> for PlotStyle {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        PlotStyle(iter.into_iter().collect())
    }
}

/// One labelled line of a plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    /// Legend label.
    pub label: String,
    /// Y values, plotted against the sample index.
    pub values: Vec<f64>,
    /// Resolved display options.
    pub style: PlotStyle,
}

/// A single set of axes holding the plotted lines in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axes {
    lines: Vec<Line>,
}

impl Axes {
    /// Lines in drawing order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Looks up a line by its label.
    pub fn line(&self, label: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.label == label)
    }
}

/// A renderable figure with one set of axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    axes: Axes,
}

impl Figure {
    /// The figure's axes.
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Serializes the figure for a plotting backend.
    pub fn to_json(&self) -> Result<String, SeriesError> {
        serde_json::to_string_pretty(self).map_err(|e| SeriesError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Builds the input-vs-detrended figure.
///
/// `base` applies to both lines; `input` and `detrended` override it per line.
pub(crate) fn series_figure(
    input_ts: &[f64],
    detrended_ts: &[f64],
    base: &PlotStyle,
    input: Option<&PlotStyle>,
    detrended: Option<&PlotStyle>,
) -> Figure {
    let empty = PlotStyle::new();
    let lines = vec![
        Line {
            label: INPUT_LABEL.to_string(),
            values: input_ts.to_vec(),
            style: base.merged(input.unwrap_or(&empty)),
        },
        Line {
            label: DETRENDED_LABEL.to_string(),
            values: detrended_ts.to_vec(),
            style: base.merged(detrended.unwrap_or(&empty)),
        },
    ];
    Figure {
        axes: Axes { lines },
    }
}
