//! Pure prison population logic for PrisonSim.
//!
//! Tracks prisoners across three security blocks, sizes and places intake
//! batches under a risk-tiered policy with lower-security fallback, and
//! reports population and riot-staffing figures. Everything is in-memory
//! and synchronous; random draws come through [`random::RandomSource`] so
//! runs can be replayed exactly.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`block`] | Blocks A/B/C, cell capacities, fallback order, occupancy counters |
//! | [`constants`] | Capacity, block sizes, startup ranges, riot history |
//! | [`crime`] | Crimes and their fixed risk levels |
//! | [`error`] | `PrisonError` and the crate `Result` alias |
//! | [`generation`] | Startup population per block |
//! | [`intake`] | Batch sizing, per-arrival placement, intake state machine |
//! | [`prison`] | Run-wide state and driver-facing reports |
//! | [`prisoner`] | Prisoner records and identifiers |
//! | [`random`] | Random source trait, `rand` adapter, scripted rolls |
//! | [`riot`] | Guards-needed formula, riot history, live assessment |
//! | [`store`] | Authoritative prisoner list and occupancy reconciliation |

pub mod block;
pub mod constants;
pub mod crime;
pub mod error;
pub mod generation;
pub mod intake;
pub mod prison;
pub mod prisoner;
pub mod random;
pub mod riot;
pub mod store;

pub use error::{PrisonError, Result};
