use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Documents directory not found")]
    RootMissing,

    #[error("File '{0}' not found in documents directory")]
    NotFound(String),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
