//! Response rendering: structured JSON payloads or human-readable Markdown.
//!
//! Field names in the JSON shapes are stable; document content in Markdown
//! mode is appended verbatim (trusted plain text, no escaping).

use serde::{Deserialize, Serialize};

use crate::store::{FileMetadata, SearchHit};

/// Output format for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Serialize)]
struct ListPayload<'a> {
    files: &'a [FileMetadata],
    count: usize,
}

#[derive(Serialize)]
struct ListErrorPayload<'a> {
    error: &'a str,
    files: [(); 0],
}

#[derive(Serialize)]
struct DocumentPayload<'a> {
    filename: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a FileMetadata>,
}

#[derive(Serialize)]
struct DocumentErrorPayload<'a> {
    error: &'a str,
    content: Option<()>,
}

#[derive(Serialize)]
struct SearchPayload<'a> {
    query: &'a str,
    files_found: usize,
    excluded_sensitive: bool,
    files: &'a [SearchHit],
}

#[derive(Serialize)]
struct SearchErrorPayload<'a> {
    error: &'a str,
    files: [(); 0],
}

fn to_pretty_json<T: Serialize>(payload: &T) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_default()
}

/// Render a file listing in the requested format.
pub fn render_file_list(files: &[FileMetadata], format: ResponseFormat) -> String {
    match format {
        ResponseFormat::Json => to_pretty_json(&ListPayload {
            files,
            count: files.len(),
        }),
        ResponseFormat::Markdown => {
            if files.is_empty() {
                return "No files found.".to_string();
            }
            let mut out = format!("# Found {} file(s)\n\n", files.len());
            for file in files {
                out.push_str(&format!("## {}\n", file.filename));
                out.push_str(&format!("- **Privacy Level**: {}\n", file.privacy_level));
                out.push_str(&format!("- **Size**: {} bytes\n\n", file.size_bytes));
            }
            out
        }
    }
}

/// Render a whole-listing failure in the requested format.
pub fn render_list_error(message: &str, format: ResponseFormat) -> String {
    match format {
        ResponseFormat::Json => to_pretty_json(&ListErrorPayload {
            error: message,
            files: [],
        }),
        ResponseFormat::Markdown => format!("**Error**: {message}"),
    }
}

/// Render one document, with an optional metadata block.
pub fn render_document(
    filename: &str,
    content: &str,
    metadata: Option<&FileMetadata>,
    format: ResponseFormat,
) -> String {
    match format {
        ResponseFormat::Json => to_pretty_json(&DocumentPayload {
            filename,
            content,
            metadata,
        }),
        ResponseFormat::Markdown => {
            let mut out = format!("# {filename}\n\n");
            if let Some(meta) = metadata {
                out.push_str(&format!("**Privacy Level**: {}  \n", meta.privacy_level));
                out.push_str(&format!("**Size**: {} bytes\n\n", meta.size_bytes));
                out.push_str("---\n\n");
            }
            out.push_str(content);
            out
        }
    }
}

/// Render a document retrieval failure in the requested format.
pub fn render_document_error(message: &str, format: ResponseFormat) -> String {
    match format {
        ResponseFormat::Json => to_pretty_json(&DocumentErrorPayload {
            error: message,
            content: None,
        }),
        ResponseFormat::Markdown => format!("**Error**: {message}"),
    }
}

/// Render a search report. Search output is always structured JSON.
pub fn render_search_report(query: &str, excluded_sensitive: bool, files: &[SearchHit]) -> String {
    to_pretty_json(&SearchPayload {
        query,
        files_found: files.len(),
        excluded_sensitive,
        files,
    })
}

/// Render a whole-search failure.
pub fn render_search_error(message: &str) -> String {
    to_pretty_json(&SearchErrorPayload {
        error: message,
        files: [],
    })
}
