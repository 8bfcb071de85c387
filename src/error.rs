use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("cannot access {}: {source}", path.display())]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} cannot span multiple lines")]
    MultiLine { field: String },

    #[error("{field} cannot be a section marker")]
    ReservedLine { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NotebookError {
    pub fn io_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NotebookError::IoUnavailable {
            path: path.into(),
            source,
        }
    }
}

pub type NotebookResult<T> = Result<T, NotebookError>;
