//! Thermometers and temperature series.
//!
//! [`Sensors`] reads a fixed set of thermometer cells from any
//! [`TemperatureField`](cupheat_core::TemperatureField) and, for thermometers
//! that record, appends a down-sampled `(minutes, temperature)` point to a
//! [`Series`] every [`SamplingPlan::sample_interval`] ticks.
//!
//! Sampling is read-only: sensors never touch the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod plan;
pub mod sensors;
pub mod series;
pub mod thermometer;

pub use error::ObsError;
pub use plan::SamplingPlan;
pub use sensors::Sensors;
pub use series::{Series, SeriesPoint};
pub use thermometer::{Reading, Thermometer, ThermometerSpec};
