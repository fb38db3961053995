//! Documents-root resolution.
//!
//! The root is resolved exactly once at process start and injected into
//! [`crate::DocumentStore`]; no runtime reconfiguration is exposed.

use std::path::PathBuf;

/// Environment override for the documents directory.
pub const DOCUMENTS_DIR_ENV: &str = "DOCSCAN_DOCUMENTS_DIR";

/// Default directory name, relative to the process working directory.
const DEFAULT_DOCUMENTS_DIR: &str = "documents";

/// Resolve the documents root: `DOCSCAN_DOCUMENTS_DIR` if set, otherwise
/// `./documents`. The directory is not required to exist; missing-root
/// handling is an operation-level concern.
pub fn resolve_documents_root() -> PathBuf {
    match std::env::var_os(DOCUMENTS_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(DEFAULT_DOCUMENTS_DIR),
    }
}
