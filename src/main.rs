//! Body Fat Index (BFI)
//!
//! An MCP server for body fat estimation.

use bfi::build_info;
use bfi::mcp::BfiService;
use bfi::EstimatorConfig;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bfi=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = EstimatorConfig::from_env()?;
    eprintln!(
        "Session units: weight={} length={}",
        config.weight_unit.as_str(),
        config.length_unit.as_str()
    );

    let service = BfiService::new(config);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
