//! Brix MCP Server Implementation
//!
//! Implements the MCP server with the sugar addition tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use tokio::sync::Mutex;

use crate::models::{AdjustmentErrorResponse, AdjustmentRequest};
use crate::tools::status::StatusTracker;
use crate::tools::sweetener;

/// Brix MCP Service
#[derive(Clone)]
pub struct BrixService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<BrixService>,
}

impl BrixService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for BrixService {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the sweetener calculation and render it as pretty JSON
///
/// Caller errors are rendered as an error body rather than a protocol error.
fn sweetener_addition_json(req: &AdjustmentRequest) -> Result<String, serde_json::Error> {
    match sweetener::calculate_sweetener_addition(req) {
        Ok(result) => serde_json::to_string_pretty(&result),
        Err(e) => serde_json::to_string_pretty(&AdjustmentErrorResponse::from(&e)),
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl BrixService {
    // --- Status ---

    #[tool(description = "Get the current status of the Brix service including build info and process information")]
    async fn brix_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for calculating sugar additions: inputs, the mass balance formula, and error cases. Call this when unsure how to use calculate_sweetener_addition.")]
    fn brix_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::BRIX_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(BRIX_INSTRUCTIONS)]))
    }

    // --- Sweetener ---

    #[tool(description = "Calculate how much sugar (100% soluble solids) to add to a fruit pulp to raise its Brix from initial_brix to target_brix, and the resulting final pulp mass. Target must be greater than initial Brix and below 100.")]
    fn calculate_sweetener_addition(&self, Parameters(req): Parameters<AdjustmentRequest>) -> Result<CallToolResult, McpError> {
        let json = sweetener_addition_json(&req).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for BrixService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "brix".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Pulp Brix Balance".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Pulp Brix Balance - sugar addition for fruit pulp by mass balance. \
                 Call brix_instructions for the formula and rules. \
                 Calculate: calculate_sweetener_addition (initial_pulp_mass kg, initial_brix %, target_brix %). \
                 Status: brix_status."
                    .into(),
            ),
        }
    }
}
