//! Brix constants and conversions
//!
//! Brix is expressed as a percentage of soluble solids by mass.

/// Lowest valid Brix reading (%)
pub const MIN_BRIX: f64 = 0.0;
/// Highest valid Brix reading (%)
pub const MAX_BRIX: f64 = 100.0;

/// Soluble solids fraction of the sweetener (sugar is 100% soluble solids)
pub const SWEETENER_SOLIDS_FRACTION: f64 = 1.0;

/// Convert a Brix percentage to a mass fraction
pub fn brix_to_fraction(brix: f64) -> f64 {
    brix / 100.0
}

/// Whether a value is a finite Brix percentage within [0, 100]
pub fn is_valid_brix(brix: f64) -> bool {
    brix.is_finite() && (MIN_BRIX..=MAX_BRIX).contains(&brix)
}
