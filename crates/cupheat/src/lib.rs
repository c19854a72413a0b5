//! Cupheat: heat diffusion through a beverage cup cross-section.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all cupheat sub-crates. For most users, adding `cupheat` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cupheat::prelude::*;
//!
//! let runner = TrialRunner::new(TrialConfig::reference().with_seed(42)).unwrap();
//! let trial = runner
//!     .run(TrialParams::labelled("Aluminum", TemperatureLabel::Hot, TemperatureLabel::Cold))
//!     .unwrap();
//!
//! assert_eq!(trial.len(), 900);
//! let beverage = trial.series_for("beverage").unwrap();
//! assert_eq!(beverage.len(), 30);
//!
//! let state = export_tick_state(&trial, 450).unwrap();
//! assert_eq!(state.trial.id, "Aluminum-HotBev-ColdAir");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cupheat-core` | IDs, cell kinds, `GridSpec`, core traits and errors |
//! | [`space`] | `cupheat-space` | Lattice indexing, neighbours, rectangles |
//! | [`world`] | `cupheat-world` | Grid storage, cup geometry, material tables |
//! | [`propagators`] | `cupheat-propagators` | Diffusion stepper and visitation orders |
//! | [`obs`] | `cupheat-obs` | Thermometers, sampling plans, series |
//! | [`arena`] | `cupheat-arena` | Per-tick snapshot storage |
//! | [`engine`] | `cupheat-engine` | Trial runner, live stepping, export, playback |
//! | [`replay`] | `cupheat-replay` | Snapshot hashing and determinism checks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Per-tick snapshot storage (`cupheat-arena`).
pub use cupheat_arena as arena;

/// Core types, traits, and IDs (`cupheat-core`).
pub use cupheat_core as types;

/// Lattice indexing and rectangles (`cupheat-space`).
pub use cupheat_space as space;

/// Grid storage and world construction (`cupheat-world`).
///
/// [`world::WorldBuilder`] stamps air, wall and liquid regions onto a
/// fresh [`world::Grid`].
pub use cupheat_world as world;

/// The diffusion update (`cupheat-propagators`).
///
/// Swap the visitation order with [`propagators::FixedOrder`] or
/// [`propagators::Sequential`] for deterministic tests.
pub use cupheat_propagators as propagators;

/// Thermometers and recorded series (`cupheat-obs`).
pub use cupheat_obs as obs;

/// Trial execution (`cupheat-engine`).
///
/// [`engine::TrialRunner`] for whole trials, [`engine::LiveTrial`] for
/// tick-by-tick stepping.
pub use cupheat_engine as engine;

/// Determinism verification (`cupheat-replay`).
pub use cupheat_replay as replay;

/// Common imports for typical cupheat usage.
///
/// ```rust
/// use cupheat::prelude::*;
/// ```
pub mod prelude {
    // Snapshots
    pub use cupheat_arena::{Snapshot, SnapshotArena};

    // Core types and traits
    pub use cupheat_core::{CellKind, CellView, Coord, GridSpec, TemperatureField, TickId};

    // Errors
    pub use cupheat_core::WorldError;
    pub use cupheat_engine::{ConfigError, EngineError};

    // World
    pub use cupheat_world::{CupSpec, Grid, MaterialCatalog, WorldBuilder};

    // Diffusion
    pub use cupheat_propagators::{DiffusionStepper, VisitOrder};

    // Observation
    pub use cupheat_obs::{Reading, SamplingPlan, Series, SeriesPoint, ThermometerSpec};

    // Engine
    pub use cupheat_engine::{
        export_tick_state, LiveTrial, Playback, RunState, StepMetrics, TemperatureLabel,
        TickState, Trial, TrialConfig, TrialId, TrialParams, TrialRunner,
    };
}
