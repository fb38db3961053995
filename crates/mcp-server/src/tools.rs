//! MCP Tools for Docscan
//!
//! Three read-only, idempotent tools over a flat documents directory:
//! search, retrieve, list. Each handler validates its request before any
//! filesystem access and converts operational failures into error payloads
//! rather than protocol errors.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use docscan_scanner::{
    render_document, render_document_error, render_file_list, render_list_error,
    render_search_error, render_search_report, DocumentStore, PrivacyLevel, ResponseFormat,
    ScanError,
};

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;
const MAX_QUERY_CHARS: usize = 200;
const MAX_FILENAME_CHARS: usize = 255;

/// Docscan MCP Service
#[derive(Clone)]
pub struct FileScannerService {
    /// Documents view, root fixed at construction
    store: DocumentStore,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl FileScannerService {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for FileScannerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Docscan provides read-only access to a directory of text documents with content-derived privacy classification. Use 'list_files' to see what is available, 'search_files' to find documents by name or content, and 'get_file_content' to read one document. All tools are idempotent and never modify files.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Request validation
// ============================================================================

/// First violated constraint of a request, named by field.
#[derive(Debug, PartialEq, Eq)]
pub struct RequestError {
    pub field: &'static str,
    pub message: &'static str,
}

impl RequestError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    fn into_mcp(self) -> McpError {
        McpError::invalid_params(format!("{}: {}", self.field, self.message), None)
    }
}

// ============================================================================
// Tool Input Schemas
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchFilesRequest {
    /// Search query, matched against file names and content
    #[schemars(description = "Search query to match against file names and content (1-200 characters)")]
    pub query: String,

    /// Exclude non-public files (default: false)
    #[schemars(description = "If true, exclude files classified as sensitive or confidential")]
    pub exclude_sensitive: Option<bool>,

    /// Maximum results (default: 10)
    #[schemars(description = "Maximum number of results to return (1-50)")]
    pub limit: Option<usize>,
}

impl SearchFilesRequest {
    /// Query with surrounding whitespace stripped.
    fn query(&self) -> &str {
        self.query.trim()
    }

    fn validate(&self) -> Result<(), RequestError> {
        let query = self.query();
        if query.is_empty() {
            return Err(RequestError::new("query", "must not be empty"));
        }
        if query.chars().count() > MAX_QUERY_CHARS {
            return Err(RequestError::new("query", "must be at most 200 characters"));
        }
        if let Some(limit) = self.limit {
            if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
                return Err(RequestError::new("limit", "must be between 1 and 50"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetFileRequest {
    /// Name of the file to retrieve
    #[schemars(description = "Name of the file to retrieve (e.g., 'document1.txt')")]
    pub filename: String,

    /// Attach size and privacy level (default: false)
    #[schemars(description = "If true, include file metadata (size, privacy level)")]
    pub include_metadata: Option<bool>,

    /// Output format (default: markdown)
    #[schemars(description = "Output format: 'markdown' for human-readable or 'json' for machine-readable")]
    pub response_format: Option<ResponseFormat>,
}

impl GetFileRequest {
    /// Filename with surrounding whitespace stripped.
    fn filename(&self) -> &str {
        self.filename.trim()
    }

    fn validate(&self) -> Result<(), RequestError> {
        let filename = self.filename();
        if filename.is_empty() {
            return Err(RequestError::new("filename", "must not be empty"));
        }
        if filename.chars().count() > MAX_FILENAME_CHARS {
            return Err(RequestError::new("filename", "must be at most 255 characters"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListFilesRequest {
    /// Glob pattern (default: *.txt)
    #[schemars(description = "Optional glob pattern to filter files (e.g., '*.txt', 'report*')")]
    pub pattern: Option<String>,

    /// Keep only one privacy level
    #[schemars(description = "Filter by privacy level: 'public', 'sensitive', or 'confidential'")]
    pub privacy_filter: Option<PrivacyLevel>,

    /// Output format (default: markdown)
    #[schemars(description = "Output format: 'markdown' or 'json'")]
    pub response_format: Option<ResponseFormat>,
}

impl ListFilesRequest {
    /// Pattern with surrounding whitespace stripped; a blank pattern falls
    /// back to the default, same as an absent one.
    fn pattern(&self) -> Option<&str> {
        self.pattern
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FileScannerService {
    /// Search documents by case-insensitive substring in filename or content
    #[tool(
        description = "Search for files matching a query in filename or content. Read-only and idempotent. Results can be filtered to exclude sensitive information and are capped by 'limit'."
    )]
    pub async fn search_files(
        &self,
        Parameters(request): Parameters<SearchFilesRequest>,
    ) -> Result<CallToolResult, McpError> {
        request.validate().map_err(RequestError::into_mcp)?;
        let query = request.query();
        let exclude_sensitive = request.exclude_sensitive.unwrap_or(false);
        let limit = request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

        let payload = match self.store.search(query, exclude_sensitive, limit) {
            Ok(hits) => render_search_report(query, exclude_sensitive, &hits),
            Err(err @ ScanError::RootMissing) => render_search_error(&err.to_string()),
            Err(err) => render_search_error(&format!("Search failed: {err}")),
        };

        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }

    /// Retrieve the complete content of one document
    #[tool(
        description = "Retrieve the complete content of a specific file by name. Read-only and idempotent. Can include metadata like file size and privacy classification."
    )]
    pub async fn get_file_content(
        &self,
        Parameters(request): Parameters<GetFileRequest>,
    ) -> Result<CallToolResult, McpError> {
        request.validate().map_err(RequestError::into_mcp)?;
        let filename = request.filename();
        let include_metadata = request.include_metadata.unwrap_or(false);
        let format = request.response_format.unwrap_or_default();

        let payload = match self.store.read_document(filename) {
            Ok(content) => {
                let metadata = if include_metadata {
                    match self.store.metadata(filename) {
                        Ok(meta) => Some(meta),
                        Err(err) => {
                            return Ok(CallToolResult::success(vec![Content::text(
                                render_document_error(&format!("Failed to read file: {err}"), format),
                            )]));
                        }
                    }
                } else {
                    None
                };
                render_document(filename, &content, metadata.as_ref(), format)
            }
            Err(err @ ScanError::NotFound(_)) => render_document_error(&err.to_string(), format),
            Err(err) => render_document_error(&format!("Failed to read file: {err}"), format),
        };

        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }

    /// List documents with optional glob and privacy filtering
    #[tool(
        description = "List all files in the documents directory with metadata and privacy classification. Read-only and idempotent. Results can be filtered by glob pattern or privacy level."
    )]
    pub async fn list_files(
        &self,
        Parameters(request): Parameters<ListFilesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let format = request.response_format.unwrap_or_default();

        let payload = match self.store.list(request.pattern(), request.privacy_filter) {
            Ok(files) => render_file_list(&files, format),
            // A missing root lists as empty, unlike search. Kept as-is from
            // the original behavior.
            Err(ScanError::RootMissing) => render_file_list(&[], format),
            Err(err) => render_list_error(&format!("Failed to list files: {err}"), format),
        };

        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }
}
