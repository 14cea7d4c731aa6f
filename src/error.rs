use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or reading a book.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Specified title '{title}' wasn't found at {path:?}")]
    NotFound { title: String, path: PathBuf },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CorpusError>;
