//! Bounded 2-D lattice addressing for the cupheat diffusion engine.
//!
//! [`Lattice`] maps integer coordinates to flat cell indices and answers
//! 4-connected neighbour queries. Edges absorb: a cell on the boundary
//! simply has fewer neighbours, and no lookup ever wraps around.
//! [`Rect`] describes axis-aligned regions such as the cup footprint.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lattice;
pub mod rect;

pub use error::SpaceError;
pub use lattice::{Lattice, Neighbours};
pub use rect::Rect;
