//! Thermometer placement and readings.

use serde::{Deserialize, Serialize};

use cupheat_core::Coord;

/// Where a thermometer sits and whether it keeps a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThermometerSpec {
    /// Unique label, e.g. `"beverage"`.
    pub label: String,
    /// Cell the thermometer reads.
    pub coord: Coord,
    /// Whether sampled readings are appended to a series.
    pub records_series: bool,
}

impl ThermometerSpec {
    /// A thermometer at `coord`.
    pub fn new(label: impl Into<String>, coord: Coord, records_series: bool) -> Self {
        Self {
            label: label.into(),
            coord,
            records_series,
        }
    }

    /// The beverage thermometer (recording) and the air thermometer.
    pub fn reference() -> Vec<Self> {
        vec![
            Self::new("beverage", Coord::new(0, -1), true),
            Self::new("air", Coord::new(0, 7), false),
        ]
    }
}

/// A placed thermometer with its most recent reading.
#[derive(Clone, Debug, PartialEq)]
pub struct Thermometer {
    spec: ThermometerSpec,
    index: usize,
    last_temperature: Option<f64>,
}

impl Thermometer {
    pub(crate) fn new(spec: ThermometerSpec, index: usize) -> Self {
        Self {
            spec,
            index,
            last_temperature: None,
        }
    }

    /// Placement.
    pub fn spec(&self) -> &ThermometerSpec {
        &self.spec
    }

    /// Label.
    pub fn label(&self) -> &str {
        &self.spec.label
    }

    /// Flat index of the cell being read.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Temperature at the last sample, `None` before the first.
    pub fn last_temperature(&self) -> Option<f64> {
        self.last_temperature
    }

    pub(crate) fn record(&mut self, temperature: f64) -> Reading {
        self.last_temperature = Some(temperature);
        Reading {
            label: self.spec.label.clone(),
            coord: self.spec.coord,
            temperature,
        }
    }
}

/// One thermometer's value at one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Thermometer label.
    pub label: String,
    /// Cell read.
    pub coord: Coord,
    /// Temperature of that cell.
    pub temperature: f64,
}

impl Reading {
    /// Temperature rounded to one decimal, as shown on a thermometer.
    ///
    /// Exact ties round away from zero (`87.25` shows as `87.3`), which
    /// is what the host displays; `{:.1}` alone would round them to even.
    pub fn display_temperature(&self) -> String {
        format!("{:.1}", round_tenths(self.temperature))
    }
}

/// Only multiples of 0.25 that are not multiples of 0.5 sit exactly
/// halfway between two tenths; everything else already formats correctly.
fn round_tenths(t: f64) -> f64 {
    let quarters = t * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (t * 10.0).round() / 10.0
    } else {
        t
    }
}
