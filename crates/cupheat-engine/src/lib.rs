//! Trial execution for the cupheat diffusion engine.
//!
//! - [`TrialRunner`] runs a complete fixed-length trial in one call.
//! - [`LiveTrial`] exposes the same loop one tick at a time, so a caller
//!   can render or stop between ticks.
//! - [`export_tick_state`] turns a finished [`Trial`] into the serializable
//!   per-tick record a host application consumes.
//! - [`Playback`] keeps a cursor over a finished trial.
//!
//! Every tick follows the same order: diffuse, sample the thermometers
//! with the pre-increment tick count, increment, record a snapshot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod live;
pub mod metrics;
pub mod params;
pub mod playback;
pub mod state;
pub mod trial;

pub use config::{ConfigError, TrialConfig};
pub use error::EngineError;
pub use live::{LiveTrial, RunState, TickReport};
pub use metrics::StepMetrics;
pub use params::{ParseTrialIdError, TemperatureLabel, TrialId, TrialParams};
pub use playback::{tick_from_fraction, Playback};
pub use state::{
    export_tick_state, export_tick_state_highlighting, SeriesState, ThermometerState, TickState,
    TrialState,
};
pub use trial::{Trial, TrialRunner};
