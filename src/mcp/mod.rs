//! MCP server module

mod server;

pub use server::{BfiService, EstimateBodyFatParams, ListBodyFatCategoriesParams};
