//! Determinism verification for cupheat trials.
//!
//! A seeded trial is fully reproducible: the same config, initial
//! conditions and seed give bit-identical snapshots. This crate checks
//! that claim.
//!
//! - [`snapshot_hash`] and [`trial_hashes`] fingerprint recorded state
//!   with FNV-1a
//! - [`compare_snapshot`] and [`compare_trials`] locate the first
//!   diverging tick and the cells that differ
//! - [`replay_and_compare`] drives any stepping closure against a list
//!   of recorded hashes
//! - [`verify_trial`] reruns a finished trial from its seed

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;

pub use compare::{
    compare_snapshot, compare_trials, replay_and_compare, verify_trial, CellDivergence,
    DivergenceReport,
};
pub use error::ReplayError;
pub use hash::{config_hash, snapshot_hash, trial_hash, trial_hashes};
