//! BFI MCP Server Implementation
//!
//! Implements the MCP server with all BFI tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::EstimatorConfig;
use crate::estimator::BodyFatEstimator;
use crate::tools::body_fat::{self, EstimateRequest};
use crate::tools::status::StatusTracker;

/// BFI MCP Service
#[derive(Clone)]
pub struct BfiService {
    status_tracker: Arc<StatusTracker>,
    /// Session estimator; remembers the last estimate for last_body_fat_category
    estimator: Arc<Mutex<BodyFatEstimator>>,
    tool_router: ToolRouter<BfiService>,
}

impl BfiService {
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            estimator: Arc::new(Mutex::new(BodyFatEstimator::new(config))),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateBodyFatParams {
    /// Sex: m, male, f, female (case-insensitive)
    pub sex: String,
    /// Body weight in the session weight unit (or weight_unit if given)
    pub weight: f64,
    /// Waist girth in the session length unit (or length_unit if given)
    pub waist: f64,
    /// Wrist girth (required for female)
    pub wrist: Option<f64>,
    /// Hip girth (required for female)
    pub hips: Option<f64>,
    /// Forearm girth (required for female)
    pub forearm: Option<f64>,
    /// Weight unit: lb, kg, st (persists for the session on success)
    pub weight_unit: Option<String>,
    /// Length unit: in, m, ft (persists for the session on success)
    pub length_unit: Option<String>,
}

impl From<EstimateBodyFatParams> for EstimateRequest {
    fn from(p: EstimateBodyFatParams) -> Self {
        Self {
            sex: p.sex,
            weight: p.weight,
            waist: p.waist,
            wrist: p.wrist,
            hips: p.hips,
            forearm: p.forearm,
            weight_unit: p.weight_unit,
            length_unit: p.length_unit,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListBodyFatCategoriesParams {
    /// Only show the table for this sex (optional)
    pub sex: Option<String>,
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl BfiService {
    // --- Status ---

    #[tool(description = "Get the current status of the BFI service including build info, active units, and process information")]
    async fn bfi_status(&self) -> Result<CallToolResult, McpError> {
        let config = self.estimator.lock().await.config();
        let status = self.status_tracker.get_status(config);
        to_json_result(&status)
    }

    #[tool(description = "Get instructions for estimating body fat. Call this when unsure which measurements or units the body fat tools need.")]
    fn body_fat_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::BODY_FAT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(BODY_FAT_INSTRUCTIONS)]))
    }

    // --- Body Fat ---

    #[tool(description = "Estimate body fat percentage from weight and girth measurements and classify it. Women also need wrist, hips and forearm.")]
    async fn estimate_body_fat(&self, Parameters(p): Parameters<EstimateBodyFatParams>) -> Result<CallToolResult, McpError> {
        let request = EstimateRequest::from(p);
        let mut estimator = self.estimator.lock().await;
        let result = body_fat::estimate_body_fat(&mut estimator, &request)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json_result(&result)
    }

    #[tool(description = "Get the category of the most recent body fat estimate in this session")]
    async fn last_body_fat_category(&self) -> Result<CallToolResult, McpError> {
        let estimator = self.estimator.lock().await;
        let result = body_fat::last_body_fat_category(&estimator)
            .map_err(|e| McpError::invalid_request(e, None))?;
        to_json_result(&result)
    }

    #[tool(description = "List the body fat category thresholds for men and women")]
    fn list_body_fat_categories(&self, Parameters(p): Parameters<ListBodyFatCategoriesParams>) -> Result<CallToolResult, McpError> {
        let result = body_fat::list_body_fat_categories(p.sex.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for BfiService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bfi".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Body Fat Index".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Body Fat Index (BFI) - Body fat estimation from girth measurements. \
                 Call body_fat_instructions for required measurements and units. \
                 Estimate: estimate_body_fat. Classify previous estimate: last_body_fat_category. \
                 Thresholds: list_body_fat_categories. Status: bfi_status."
                    .into(),
            ),
        }
    }
}
