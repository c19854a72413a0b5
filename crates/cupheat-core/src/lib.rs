//! Core types and traits for the cupheat diffusion engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: tick and
//! coordinate identifiers, cell kinds, the immutable [`GridSpec`], the
//! world-building error types, and the [`TemperatureField`] trait shared
//! by live grids and recorded snapshots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod spec;
pub mod traits;

pub use cell::{CellKind, CellView};
pub use error::{GridSpecError, WorldError};
pub use id::{Coord, TickId};
pub use spec::GridSpec;
pub use traits::TemperatureField;
