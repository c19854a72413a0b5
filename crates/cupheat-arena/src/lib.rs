//! Contiguous per-tick snapshot storage.
//!
//! A trial keeps one full temperature copy per tick so playback can jump
//! to any tick. Rather than cloning whole grids, [`SnapshotArena`] appends
//! each tick's temperatures to a single `Vec<f64>` and stores the
//! per-trial constants (conductivity, kind) once in a shared
//! [`StaticLayer`]. A [`Snapshot`] is a borrowed view that stitches the two
//! back together.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod snapshot;
pub mod static_layer;
pub mod timeline;

pub use error::ArenaError;
pub use snapshot::Snapshot;
pub use static_layer::{SharedStaticLayer, StaticLayer};
pub use timeline::SnapshotArena;
