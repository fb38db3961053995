//! Docscan MCP Server
//!
//! Exposes a flat directory of text documents to AI agents via MCP,
//! with content-derived privacy classification.
//!
//! ## Tools
//!
//! - `search_files` - Search documents by filename or content substring
//! - `get_file_content` - Retrieve one document, optionally with metadata
//! - `list_files` - List documents with glob and privacy-level filtering
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "docscan": {
//!       "command": "docscan-mcp",
//!       "env": { "DOCSCAN_DOCUMENTS_DIR": "/path/to/documents" }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use docscan_scanner::{resolve_documents_root, DocumentStore};
use tools::FileScannerService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    // The documents root is resolved once here; no runtime reconfiguration.
    let root = resolve_documents_root();
    log::info!("Using documents directory: {}", root.display());

    let service = FileScannerService::new(DocumentStore::new(root));
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("Docscan MCP server stopped");
    Ok(())
}
