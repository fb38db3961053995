//! Directory scans over a flat documents root.
//!
//! Every operation re-reads the directory at call time; nothing is cached
//! between calls. Concurrent external writers are tolerated: a scan reflects
//! whatever the directory held at enumeration time, with no transactional
//! guarantee across the scan.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use serde::Serialize;

use crate::classifier::{classify, PrivacyLevel};
use crate::error::{Result, ScanError};

/// Default scan pattern for `search` and unfiltered `list`.
pub const DEFAULT_PATTERN: &str = "*.txt";

/// Which field of a document satisfied a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Filename,
    Content,
}

/// A single search match.
#[derive(Debug, Clone, Serialize, schemars::JsonSchema)]
pub struct SearchHit {
    pub filename: String,
    pub privacy_level: PrivacyLevel,
    pub size_bytes: u64,
    pub match_type: MatchType,
}

/// Listing metadata for one document.
#[derive(Debug, Clone, Serialize, schemars::JsonSchema)]
pub struct FileMetadata {
    pub filename: String,
    pub size_bytes: u64,
    pub privacy_level: PrivacyLevel,
    pub path: String,
}

/// Read-only view over a flat directory of text documents.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Search `*.txt` documents for a case-insensitive substring match in
    /// filename or content. The filename is checked first and decides
    /// `match_type`. At most `limit` hits are returned, in directory
    /// enumeration order. Unreadable files are skipped.
    pub fn search(
        &self,
        query: &str,
        exclude_sensitive: bool,
        limit: usize,
    ) -> Result<Vec<SearchHit>> {
        if !self.root.exists() {
            return Err(ScanError::RootMissing);
        }

        let matcher = compile_pattern(DEFAULT_PATTERN)?;
        let query_lower = query.to_lowercase();
        let mut hits = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let Ok(entry) = entry else { continue };
            let filename = entry.file_name().to_string_lossy().into_owned();
            if !matcher.is_match(&filename) {
                continue;
            }

            let Ok(content) = std::fs::read_to_string(entry.path()) else {
                log::debug!("skipping unreadable file: {}", entry.path().display());
                continue;
            };
            let privacy_level = classify(&content);

            if exclude_sensitive && privacy_level != PrivacyLevel::Public {
                continue;
            }

            let filename_matches = filename.to_lowercase().contains(&query_lower);
            if !filename_matches && !content.to_lowercase().contains(&query_lower) {
                continue;
            }

            let Ok(meta) = entry.metadata() else { continue };
            hits.push(SearchHit {
                filename,
                privacy_level,
                size_bytes: meta.len(),
                match_type: if filename_matches {
                    MatchType::Filename
                } else {
                    MatchType::Content
                },
            });

            if hits.len() >= limit {
                break;
            }
        }

        Ok(hits)
    }

    /// Read the full content of one document.
    ///
    /// The filename is joined to the root literally; no basename
    /// sanitization is applied (documented path-traversal gap, kept as-is).
    pub fn read_document(&self, filename: &str) -> Result<String> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Err(ScanError::NotFound(filename.to_string()));
        }
        Ok(std::fs::read_to_string(path)?)
    }

    /// Compute listing metadata for one document.
    pub fn metadata(&self, filename: &str) -> Result<FileMetadata> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Err(ScanError::NotFound(filename.to_string()));
        }
        self.entry_metadata(&path)
    }

    /// List documents matching a glob pattern (default `*.txt`), optionally
    /// keeping only one privacy level. Non-files and unreadable files are
    /// skipped.
    pub fn list(
        &self,
        pattern: Option<&str>,
        privacy_filter: Option<PrivacyLevel>,
    ) -> Result<Vec<FileMetadata>> {
        if !self.root.exists() {
            return Err(ScanError::RootMissing);
        }

        let matcher = compile_pattern(pattern.unwrap_or(DEFAULT_PATTERN))?;
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let Ok(entry) = entry else { continue };
            let filename = entry.file_name().to_string_lossy().into_owned();
            if !matcher.is_match(&filename) {
                continue;
            }
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let metadata = match self.entry_metadata(&path) {
                Ok(m) => m,
                Err(err) => {
                    log::debug!("skipping {}: {err}", path.display());
                    continue;
                }
            };

            if let Some(filter) = privacy_filter {
                if metadata.privacy_level != filter {
                    continue;
                }
            }

            files.push(metadata);
        }

        Ok(files)
    }

    fn entry_metadata(&self, path: &Path) -> Result<FileMetadata> {
        let content = std::fs::read_to_string(path)?;
        let meta = std::fs::metadata(path)?;
        Ok(FileMetadata {
            filename: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size_bytes: meta.len(),
            privacy_level: classify(&content),
            path: path.display().to_string(),
        })
    }
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|source| ScanError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}
