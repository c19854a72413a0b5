//! Grid storage and cup world construction.
//!
//! [`Grid`] owns every cell of a trial in struct-of-arrays form.
//! [`WorldBuilder`] stamps the initial air, wall, and liquid regions onto a
//! fresh grid from a [`CupSpec`] and a [`MaterialCatalog`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod cup;
pub mod grid;
pub mod materials;

pub use builder::WorldBuilder;
pub use cup::{CupLayout, CupSpec};
pub use grid::Grid;
pub use materials::{ConductivityTable, MaterialCatalog, AIR_CONDUCTIVITY};

use cupheat_core::{GridSpecError, WorldError};
use cupheat_space::SpaceError;

/// Translate a lattice error into the world-building vocabulary.
pub(crate) fn world_error(e: SpaceError) -> WorldError {
    match e {
        SpaceError::CoordOutOfBounds { coord, .. } => WorldError::InvalidCoordinate { coord },
        SpaceError::InvalidRect { reason } => WorldError::InvalidCupGeometry { reason },
        SpaceError::EmptySpace => WorldError::InvalidGridSpec(GridSpecError::EmptyGrid),
    }
}
