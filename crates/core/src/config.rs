//! Configuration for the diff engine

use serde::{Deserialize, Serialize};

/// Configuration for diff computation
///
/// The defaults reproduce the plain engine behavior: every adjacent
/// removed/added pair is refined and input size is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Attach a character-level diff to each removed line that is directly
    /// followed by an added line
    pub inline_refinement: bool,

    /// Upper bound on `(m+1)*(n+1)` for the line table, checked only by
    /// `DiffEngine::try_diff`
    pub max_cells: Option<usize>,

    /// Context lines around changes (for unified output)
    pub context_lines: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            inline_refinement: true,
            max_cells: None,
            context_lines: 3,
        }
    }

    pub fn with_inline_refinement(mut self, enabled: bool) -> Self {
        self.inline_refinement = enabled;
        self
    }

    pub fn with_max_cells(mut self, limit: usize) -> Self {
        self.max_cells = Some(limit);
        self
    }

    pub fn with_context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiffConfig::default();
        assert!(config.inline_refinement);
        assert_eq!(config.max_cells, None);
        assert_eq!(config.context_lines, 3);
    }

    #[test]
    fn test_builder() {
        let config = DiffConfig::new()
            .with_inline_refinement(false)
            .with_max_cells(1_000)
            .with_context_lines(1);
        assert!(!config.inline_refinement);
        assert_eq!(config.max_cells, Some(1_000));
        assert_eq!(config.context_lines, 1);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DiffConfig = serde_json::from_str(r#"{"max_cells": 42}"#).unwrap();
        assert_eq!(config.max_cells, Some(42));
        assert!(config.inline_refinement);
        assert_eq!(config.context_lines, 3);
    }
}
