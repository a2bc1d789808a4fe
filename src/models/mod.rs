//! Data models
//!
//! Request, result and error types for sugar addition calculations.

mod adjustment;

pub use adjustment::{
    AdjustmentError, AdjustmentErrorResponse, AdjustmentField, AdjustmentRequest,
    AdjustmentResult, DEFAULT_INITIAL_BRIX, DEFAULT_INITIAL_PULP_MASS, DEFAULT_TARGET_BRIX,
};
