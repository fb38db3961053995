//! Core logic for the document scanner: privacy classification,
//! directory scans (search / get / list) and response rendering.

mod classifier;
mod config;
mod error;
mod render;
mod store;

pub use classifier::{classify, PrivacyLevel};
pub use config::{resolve_documents_root, DOCUMENTS_DIR_ENV};
pub use error::{Result, ScanError};
pub use render::{
    render_document, render_document_error, render_file_list, render_list_error,
    render_search_error, render_search_report, ResponseFormat,
};
pub use store::{DocumentStore, FileMetadata, MatchType, SearchHit};
