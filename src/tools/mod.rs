//! BFI Tools module
//!
//! MCP tool implementations for the Body Fat Index service.

pub mod body_fat;
pub mod status;
