//! Pulp Brix Balance Library
//!
//! Sugar addition for fruit pulp, solved by mass balance.

pub mod balance;
pub mod build_info;
pub mod mcp;
pub mod models;
pub mod tools;
