use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::error::{CorpusError, Result};

/// Directory, relative to the working root, that holds the books.
pub const BOOKS_DIR: &str = "books";

/// Finds books by title under `<root>/books/` and reads them into memory.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    root: PathBuf,
}

impl CorpusLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of `<root>/books/<title>.txt`, provided a regular file exists there.
    pub fn resolve(&self, title: &str) -> Result<PathBuf> {
        let path = self.root.join(BOOKS_DIR).join(format!("{title}.txt"));
        if !path.is_file() {
            return Err(CorpusError::NotFound {
                title: title.to_string(),
                path,
            });
        }

        info!(action = "resolve", component = "corpus_loader", title = title, path = ?path, "Book path resolved");
        Ok(path)
    }

    /// Reads the whole book as UTF-8 text.
    pub fn load(&self, title: &str) -> Result<String> {
        let start_time = Instant::now();
        let path = self.resolve(title)?;

        let text = fs::read_to_string(&path).map_err(|source| CorpusError::Io {
            path: path.clone(),
            source,
        })?;

        info!(
            action = "complete",
            component = "corpus_loader",
            bytes = text.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Book loaded"
        );
        Ok(text)
    }
}
