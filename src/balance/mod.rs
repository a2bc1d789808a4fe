//! Mass balance module
//!
//! Solves the sugar addition needed to raise the Brix of a fruit pulp.

pub mod calculator;
pub mod units;

pub use calculator::{compute, BalanceError, MassBalance};
pub use units::{brix_to_fraction, is_valid_brix, MAX_BRIX, MIN_BRIX, SWEETENER_SOLIDS_FRACTION};
