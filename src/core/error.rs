use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or parsing a `.ts` catalog.
///
/// Lookups never produce errors; a missing entry falls back to the source
/// text instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("{file_path}:{line}: malformed XML: {message}")]
    Xml {
        file_path: String,
        line: usize,
        message: String,
    },

    /// Well-formed XML that does not follow the catalog structure.
    #[error("{file_path}:{line}: {message}")]
    Format {
        file_path: String,
        line: usize,
        message: String,
    },
}

impl CatalogError {
    /// 1-based line the error points at, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            CatalogError::Io { .. } => None,
            CatalogError::Xml { line, .. } | CatalogError::Format { line, .. } => Some(*line),
        }
    }

    /// The error without its `path:line:` prefix, for reports that show the location apart.
    pub fn detail(&self) -> String {
        match self {
            CatalogError::Io { source, .. } => format!("failed to read file: {}", source),
            CatalogError::Xml { message, .. } => format!("malformed XML: {}", message),
            CatalogError::Format { message, .. } => message.clone(),
        }
    }
}
