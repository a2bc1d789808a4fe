//! Sweetener Addition Tool
//!
//! Validates the form inputs, enforces the Brix ordering rule, runs the mass
//! balance and formats the result for display.

use crate::balance::{self, MassBalance, MAX_BRIX, MIN_BRIX};
use crate::models::{AdjustmentError, AdjustmentField, AdjustmentRequest, AdjustmentResult};

/// Assumption shown alongside every successful result
pub const SWEETENER_NOTE: &str =
    "This calculation is based on a mass balance assuming the added sugar is 100% soluble solids.";

/// Format a mass for display with two decimals
pub fn format_mass(kg: f64) -> String {
    format!("{:.2} kg", kg)
}

/// Check input shape and the target > initial ordering rule
pub fn validate_request(req: &AdjustmentRequest) -> Result<(), AdjustmentError> {
    let fields = [
        (AdjustmentField::InitialPulpMass, req.initial_pulp_mass),
        (AdjustmentField::InitialBrix, req.initial_brix),
        (AdjustmentField::TargetBrix, req.target_brix),
    ];
    if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
        return Err(AdjustmentError::NotFinite { field: *field });
    }

    if req.initial_pulp_mass < 0.0 {
        return Err(AdjustmentError::NegativeMass {
            value: req.initial_pulp_mass,
        });
    }

    for (field, value) in &fields[1..] {
        if !balance::is_valid_brix(*value) {
            return Err(AdjustmentError::OutOfRange {
                field: *field,
                value: *value,
                min: MIN_BRIX,
                max: MAX_BRIX,
            });
        }
    }

    if req.target_brix <= req.initial_brix {
        return Err(AdjustmentError::InvalidOrdering {
            initial_brix: req.initial_brix,
            target_brix: req.target_brix,
        });
    }

    Ok(())
}

/// Calculate the sugar needed to bring a pulp to the target Brix
pub fn calculate_sweetener_addition(
    req: &AdjustmentRequest,
) -> Result<AdjustmentResult, AdjustmentError> {
    if let Err(e) = validate_request(req) {
        tracing::warn!(kind = e.kind(), "Rejected sweetener request: {}", e);
        return Err(e);
    }

    let MassBalance {
        final_pulp_mass,
        sweetener_mass,
    } = balance::compute(req.initial_pulp_mass, req.initial_brix, req.target_brix).map_err(
        |e| {
            tracing::warn!("Sweetener calculation failed: {}", e);
            AdjustmentError::from(e)
        },
    )?;

    tracing::info!(
        "Add {:.2} kg sugar to {:.2} kg pulp: {}% -> {}% Brix",
        sweetener_mass,
        req.initial_pulp_mass,
        req.initial_brix,
        req.target_brix
    );

    Ok(AdjustmentResult {
        success: true,
        initial_pulp_mass: req.initial_pulp_mass,
        initial_brix: req.initial_brix,
        target_brix: req.target_brix,
        sweetener_mass,
        final_pulp_mass,
        sweetener_mass_display: format_mass(sweetener_mass),
        final_pulp_mass_display: format_mass(final_pulp_mass),
        message: format!(
            "To adjust the pulp to {}% Brix, add {} of sugar. The final pulp mass will be {}.",
            req.target_brix,
            format_mass(sweetener_mass),
            format_mass(final_pulp_mass)
        ),
        note: SWEETENER_NOTE.to_string(),
        calculated_at: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let result = calculate_sweetener_addition(&AdjustmentRequest::default()).unwrap();
        assert!(result.success);
        assert_eq!(result.sweetener_mass_display, "1.67 kg");
        assert_eq!(result.final_pulp_mass_display, "51.67 kg");
        assert!((result.sweetener_mass - 1.666_666_7).abs() < 1e-6);
        assert!(result.message.contains("10% Brix"));
        assert_eq!(result.note, SWEETENER_NOTE);
    }

    #[test]
    fn test_exact_result_is_not_rounded() {
        let req = AdjustmentRequest::new(100.0, 5.0, 20.0);
        let result = calculate_sweetener_addition(&req).unwrap();
        assert!((result.sweetener_mass - 18.75).abs() < 1e-9);
        assert_eq!(result.final_pulp_mass_display, "118.75 kg");
        assert_eq!(result.final_pulp_mass, result.initial_pulp_mass + result.sweetener_mass);
    }

    #[test]
    fn test_equal_brix_rejected() {
        let req = AdjustmentRequest::new(50.0, 10.0, 10.0);
        let err = calculate_sweetener_addition(&req).unwrap_err();
        assert_eq!(
            err,
            AdjustmentError::InvalidOrdering { initial_brix: 10.0, target_brix: 10.0 }
        );
    }

    #[test]
    fn test_lower_target_rejected() {
        let req = AdjustmentRequest::new(50.0, 12.0, 7.0);
        let err = calculate_sweetener_addition(&req).unwrap_err();
        assert_eq!(err.kind(), "invalid_ordering");
    }

    #[test]
    fn test_target_100_is_undefined() {
        let req = AdjustmentRequest::new(80.0, 10.0, 100.0);
        let err = calculate_sweetener_addition(&req).unwrap_err();
        assert_eq!(err, AdjustmentError::Balance(balance::BalanceError::Undefined));
        assert_eq!(err.kind(), "undefined_result");
    }

    #[test]
    fn test_initial_100_is_ordering_error() {
        // Ordering is checked before the calculator sees the 100% target
        let req = AdjustmentRequest::new(80.0, 100.0, 100.0);
        let err = calculate_sweetener_addition(&req).unwrap_err();
        assert_eq!(err.kind(), "invalid_ordering");
    }

    #[test]
    fn test_huge_mass_is_overflow_error() {
        let req = AdjustmentRequest::new(1e308, 0.0, 60.0);
        let err = calculate_sweetener_addition(&req).unwrap_err();
        assert_eq!(err, AdjustmentError::Balance(balance::BalanceError::Overflow));
        assert_eq!(err.kind(), "overflow");
    }

    #[test]
    fn test_negative_mass_rejected() {
        let req = AdjustmentRequest::new(-1.0, 7.0, 10.0);
        let err = calculate_sweetener_addition(&req).unwrap_err();
        assert_eq!(err, AdjustmentError::NegativeMass { value: -1.0 });
    }

    #[test]
    fn test_brix_out_of_range_rejected() {
        let req = AdjustmentRequest::new(50.0, 7.0, 101.0);
        let err = calculate_sweetener_addition(&req).unwrap_err();
        assert_eq!(
            err,
            AdjustmentError::OutOfRange {
                field: AdjustmentField::TargetBrix,
                value: 101.0,
                min: 0.0,
                max: 100.0,
            }
        );

        let req = AdjustmentRequest::new(50.0, -3.0, 10.0);
        let err = calculate_sweetener_addition(&req).unwrap_err();
        assert_eq!(err.kind(), "out_of_range");
    }

    #[test]
    fn test_nan_rejected() {
        let req = AdjustmentRequest::new(50.0, f64::NAN, 10.0);
        let err = calculate_sweetener_addition(&req).unwrap_err();
        assert_eq!(err, AdjustmentError::NotFinite { field: AdjustmentField::InitialBrix });
    }

    #[test]
    fn test_zero_mass_is_valid() {
        let req = AdjustmentRequest::new(0.0, 7.0, 10.0);
        let result = calculate_sweetener_addition(&req).unwrap();
        assert_eq!(result.sweetener_mass_display, "0.00 kg");
    }

    #[test]
    fn test_format_mass() {
        assert_eq!(format_mass(1.0 / 3.0), "0.33 kg");
        assert_eq!(format_mass(18.75), "18.75 kg");
    }
}
