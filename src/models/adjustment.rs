//! Brix adjustment model
//!
//! Request and response shapes for a sugar addition calculation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::balance::BalanceError;

/// Default initial pulp mass (kg)
pub const DEFAULT_INITIAL_PULP_MASS: f64 = 50.0;
/// Default initial Brix (%)
pub const DEFAULT_INITIAL_BRIX: f64 = 7.0;
/// Default target Brix (%)
pub const DEFAULT_TARGET_BRIX: f64 = 10.0;

fn default_initial_pulp_mass() -> f64 { DEFAULT_INITIAL_PULP_MASS }
fn default_initial_brix() -> f64 { DEFAULT_INITIAL_BRIX }
fn default_target_brix() -> f64 { DEFAULT_TARGET_BRIX }

/// Inputs for a sugar addition calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AdjustmentRequest {
    /// Initial pulp mass M1 in kg (default 50.0, must be >= 0)
    #[serde(default = "default_initial_pulp_mass")]
    pub initial_pulp_mass: f64,
    /// Initial Brix of the pulp X1 in % (default 7.0, 0-100)
    #[serde(default = "default_initial_brix")]
    pub initial_brix: f64,
    /// Desired final Brix X3 in % (default 10.0, 0-100, must exceed initial_brix)
    #[serde(default = "default_target_brix")]
    pub target_brix: f64,
}

impl AdjustmentRequest {
    pub fn new(initial_pulp_mass: f64, initial_brix: f64, target_brix: f64) -> Self {
        Self {
            initial_pulp_mass,
            initial_brix,
            target_brix,
        }
    }
}

impl Default for AdjustmentRequest {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_PULP_MASS, DEFAULT_INITIAL_BRIX, DEFAULT_TARGET_BRIX)
    }
}

/// Successful sugar addition result
#[derive(Debug, Clone, Serialize)]
pub struct AdjustmentResult {
    pub success: bool,
    pub initial_pulp_mass: f64,
    pub initial_brix: f64,
    pub target_brix: f64,
    pub sweetener_mass: f64,
    pub final_pulp_mass: f64,
    /// Sweetener mass formatted to two decimals, e.g. "1.67 kg"
    pub sweetener_mass_display: String,
    /// Final pulp mass formatted to two decimals, e.g. "51.67 kg"
    pub final_pulp_mass_display: String,
    pub message: String,
    pub note: String,
    pub calculated_at: String,
}

/// Input field names, used in validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentField {
    InitialPulpMass,
    InitialBrix,
    TargetBrix,
}

impl AdjustmentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentField::InitialPulpMass => "initial_pulp_mass",
            AdjustmentField::InitialBrix => "initial_brix",
            AdjustmentField::TargetBrix => "target_brix",
        }
    }
}

impl std::fmt::Display for AdjustmentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported to the caller of a sugar addition calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdjustmentError {
    #[error("{field} must be a finite number")]
    NotFinite { field: AdjustmentField },

    #[error("initial_pulp_mass must not be negative, got {value}")]
    NegativeMass { value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: AdjustmentField,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error(
        "The target Brix ({target_brix}%) must be greater than the initial Brix ({initial_brix}%) for adding sugar to make sense"
    )]
    InvalidOrdering { initial_brix: f64, target_brix: f64 },

    #[error("{0}. Please check the values entered")]
    Balance(#[from] BalanceError),
}

impl AdjustmentError {
    /// Stable identifier for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AdjustmentError::NotFinite { .. } => "not_finite",
            AdjustmentError::NegativeMass { .. } | AdjustmentError::OutOfRange { .. } => {
                "out_of_range"
            }
            AdjustmentError::InvalidOrdering { .. } => "invalid_ordering",
            AdjustmentError::Balance(BalanceError::Undefined) => "undefined_result",
            AdjustmentError::Balance(BalanceError::Overflow) => "overflow",
        }
    }
}

/// Error response body, returned in place of a result
#[derive(Debug, Clone, Serialize)]
pub struct AdjustmentErrorResponse {
    pub success: bool,
    pub error_kind: &'static str,
    pub error: String,
}

impl From<&AdjustmentError> for AdjustmentErrorResponse {
    fn from(err: &AdjustmentError) -> Self {
        Self {
            success: false,
            error_kind: err.kind(),
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_from_empty_json() {
        let req: AdjustmentRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, AdjustmentRequest::default());
        assert_eq!(req.initial_pulp_mass, 50.0);
        assert_eq!(req.initial_brix, 7.0);
        assert_eq!(req.target_brix, 10.0);
    }

    #[test]
    fn test_request_partial_json() {
        let req: AdjustmentRequest = serde_json::from_str(r#"{"target_brix": 20.0}"#).unwrap();
        assert_eq!(req.initial_pulp_mass, 50.0);
        assert_eq!(req.target_brix, 20.0);
    }

    #[test]
    fn test_request_schema_lists_inputs() {
        let schema = serde_json::to_value(schemars::schema_for!(AdjustmentRequest)).unwrap();
        for field in ["initial_pulp_mass", "initial_brix", "target_brix"] {
            assert!(schema["properties"][field].is_object(), "missing {}", field);
        }
    }

    #[test]
    fn test_error_kinds() {
        let ordering = AdjustmentError::InvalidOrdering { initial_brix: 10.0, target_brix: 7.0 };
        assert_eq!(ordering.kind(), "invalid_ordering");

        let undefined: AdjustmentError = BalanceError::Undefined.into();
        assert_eq!(undefined.kind(), "undefined_result");

        let overflow: AdjustmentError = BalanceError::Overflow.into();
        assert_eq!(overflow.kind(), "overflow");
        assert_eq!(
            overflow.to_string(),
            "The resulting masses are too large to represent. Please check the values entered"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AdjustmentError::OutOfRange {
            field: AdjustmentField::TargetBrix,
            value: 120.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "target_brix must be between 0 and 100, got 120");

        let err = AdjustmentError::NotFinite { field: AdjustmentField::InitialPulpMass };
        assert_eq!(err.to_string(), "initial_pulp_mass must be a finite number");
    }

    #[test]
    fn test_error_response_serialization() {
        let err = AdjustmentError::InvalidOrdering { initial_brix: 10.0, target_brix: 10.0 };
        let json = serde_json::to_value(AdjustmentErrorResponse::from(&err)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error_kind"], "invalid_ordering");
        assert!(json["error"].as_str().unwrap().contains("must be greater than"));
    }
}
