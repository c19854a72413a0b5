//! Down-sampled `(minutes, temperature)` series and their analysis.

use serde::{Deserialize, Serialize};

/// One point of a series.
///
/// Serialized as `{"x": minutes, "y": temperature}` for charting hosts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Minutes since the start of the trial.
    #[serde(rename = "x")]
    pub time: f64,
    /// Temperature at that time.
    #[serde(rename = "y")]
    pub temperature: f64,
}

impl SeriesPoint {
    /// Construct a point.
    pub fn new(time: f64, temperature: f64) -> Self {
        Self { time, temperature }
    }
}

/// A labelled sequence of points in increasing time order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Label of the thermometer that produced the series.
    pub label: String,
    /// Recorded points.
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// An empty series.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
        }
    }

    /// Append a point.
    pub fn push(&mut self, point: SeriesPoint) {
        self.points.push(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points have been recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first `n` points (all of them if `n` exceeds the length).
    pub fn head(&self, n: usize) -> &[SeriesPoint] {
        &self.points[..n.min(self.points.len())]
    }

    /// Temperature at `time`, linearly interpolated between neighbouring
    /// points.
    ///
    /// Scans from the front: an exact time match returns that point, a
    /// time strictly between two points interpolates, and reaching the
    /// last point returns its value. A time before the first point
    /// therefore also yields the last value. `None` for an empty series.
    pub fn temperature_at(&self, time: f64) -> Option<f64> {
        let last = self.points.last()?;
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.time == time {
                return Some(a.temperature);
            }
            if a.time < time && time < b.time {
                let slope = (b.temperature - a.temperature) / (b.time - a.time);
                let intercept = a.temperature - slope * a.time;
                return Some(slope * time + intercept);
            }
        }
        Some(last.temperature)
    }

    /// `temperature_at(to) - temperature_at(from)`.
    pub fn change_between(&self, from: f64, to: f64) -> Option<f64> {
        Some(self.temperature_at(to)? - self.temperature_at(from)?)
    }
}
