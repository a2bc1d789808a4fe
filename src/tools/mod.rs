//! Brix Tools module
//!
//! MCP tool implementations for the Pulp Brix Balance.

pub mod status;
pub mod sweetener;
