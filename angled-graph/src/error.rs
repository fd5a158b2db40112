use thiserror::Error;

use crate::model::EdgeKey;

/// Everything a graph operation can reject. Errors are raised before any
/// state or scene is touched.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GraphError {
    #[error("unknown vertex '{0}'")]
    UnknownVertex(String),

    #[error("unknown edge {start}->{end}")]
    UnknownEdge { start: String, end: String },

    #[error("vertex '{0}' is defined more than once")]
    DuplicateVertex(String),

    #[error("edges {incoming} and {outgoing} do not meet end-to-start")]
    NotAdjacent { incoming: EdgeKey, outgoing: EdgeKey },

    #[error("alternate flag must be 0 or 1, got {0}")]
    InvalidAlternate(u8),

    #[error("coordinates for '{label}' must be finite")]
    NonFinite { label: String },

    #[error("coordinates for '{label}' are out of bounds")]
    OutOfBounds { label: String },

    #[error("too many {what} (max {max})")]
    TooLarge { what: &'static str, max: usize },

    #[error("invalid graph description: {0}")]
    Json(String),
}

impl GraphError {
    pub fn unknown_edge(key: &EdgeKey) -> Self {
        GraphError::UnknownEdge {
            start: key.start.clone(),
            end: key.end.clone(),
        }
    }

    /// Stable machine-readable code, shared with the wasm result objects.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex(_) => "unknown_vertex",
            GraphError::UnknownEdge { .. } => "unknown_edge",
            GraphError::DuplicateVertex(_) => "duplicate_vertex",
            GraphError::NotAdjacent { .. } => "not_adjacent",
            GraphError::InvalidAlternate(_) => "invalid_alternate",
            GraphError::NonFinite { .. } => "non_finite",
            GraphError::OutOfBounds { .. } => "out_of_range",
            GraphError::TooLarge { .. } => "too_large",
            GraphError::Json(_) => "invalid_json",
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(error: serde_json::Error) -> Self {
        GraphError::Json(error.to_string())
    }
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
