//! Sugar addition calculator
//!
//! Two conservation equations govern mixing pulp (M1, x1) with sugar (M2, x2)
//! into the final pulp (M3, x3):
//!
//! - total mass: `M1 + M2 = M3`
//! - soluble solids: `M1*x1 + M2*x2 = M3*x3`
//!
//! Substituting M3 gives `M2 = M1 * (x3 - x1) / (x2 - x3)`.

use serde::Serialize;
use thiserror::Error;

use super::units::{brix_to_fraction, SWEETENER_SOLIDS_FRACTION};

/// Outcome of a successful mass balance (M3, M2), in the unit of the input mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassBalance {
    /// Final pulp mass after the addition (M3)
    pub final_pulp_mass: f64,
    /// Sweetener mass to add (M2)
    pub sweetener_mass: f64,
}

/// Mass balance error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// Target Brix equals the sweetener's solids content, so no finite
    /// amount of sugar reaches it
    #[error("The calculation is undefined for a target Brix of 100%")]
    Undefined,

    /// The masses exceed the range of `f64`
    #[error("The resulting masses are too large to represent")]
    Overflow,
}

/// Solve the mass balance for the sugar to add and the resulting pulp mass
///
/// # Arguments
/// * `initial_pulp_mass` - M1, mass of pulp before the addition
/// * `initial_brix` - X1, Brix of the pulp (%)
/// * `target_brix` - X3, desired Brix (%)
///
/// Does not enforce `target_brix > initial_brix`: equal values give zero sugar,
/// a lower target gives a negative mass.
pub fn compute(
    initial_pulp_mass: f64,
    initial_brix: f64,
    target_brix: f64,
) -> Result<MassBalance, BalanceError> {
    let x1 = brix_to_fraction(initial_brix);
    let x2 = SWEETENER_SOLIDS_FRACTION;
    let x3 = brix_to_fraction(target_brix);

    let denominator = x2 - x3;
    if denominator == 0.0 {
        tracing::debug!(target_brix, "Mass balance undefined for target Brix");
        return Err(BalanceError::Undefined);
    }

    let sweetener_mass = initial_pulp_mass * (x3 - x1) / denominator;
    let final_pulp_mass = initial_pulp_mass + sweetener_mass;

    if !sweetener_mass.is_finite() || !final_pulp_mass.is_finite() {
        tracing::debug!(initial_pulp_mass, "Mass balance overflowed");
        return Err(BalanceError::Overflow);
    }

    tracing::debug!(
        initial_pulp_mass,
        initial_brix,
        target_brix,
        sweetener_mass,
        final_pulp_mass,
        "Solved mass balance"
    );

    Ok(MassBalance {
        final_pulp_mass,
        sweetener_mass,
    })
}
