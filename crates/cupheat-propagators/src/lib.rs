//! In-place randomized heat diffusion.
//!
//! [`DiffusionStepper`] advances a [`Grid`](cupheat_world::Grid) by one
//! tick. Cells are visited one at a time in an order supplied by a
//! [`VisitOrder`]; each visited cell immediately absorbs or releases heat
//! from its current neighbours, so later cells in the same tick see the
//! already-updated values.
//!
//! The order source is pluggable:
//! - [`Shuffled`]: a fresh uniform permutation every tick (ChaCha8, seedable)
//! - [`FixedOrder`]: one caller-supplied permutation reused every tick
//! - [`Sequential`]: flat-index order

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diffusion;
pub mod error;
pub mod order;

pub use diffusion::{DiffusionStepper, DiffusionStepperBuilder};
pub use error::DiffusionError;
pub use order::{FixedOrder, Sequential, Shuffled, VisitOrder};
