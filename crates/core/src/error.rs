//! Errors raised by the optional guards and exports around the engine.
//!
//! Diffing itself never fails; these only come from `DiffEngine::try_diff`
//! and the JSON export.

/// Errors surfaced around the diff engine
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The line table would exceed the configured `max_cells`
    #[error("input too large: alignment needs {cells} cells, limit is {limit}")]
    InputTooLarge { cells: usize, limit: usize },

    #[error("failed to serialize diff: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiffError>;
