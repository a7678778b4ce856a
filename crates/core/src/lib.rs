//! # linediff
//!
//! Line-level text diffing with character-level refinement of changed
//! lines.
//!
//! ## Core Concepts
//!
//! - **Tokenizers**: Split text into units, either lines or characters
//! - **Alignment**: A longest-common-subsequence table shared by both
//!   granularities, with a deterministic backtrack
//! - **DiffEngine**: Produces the line segments and refines every removed
//!   line that is directly followed by an added line
//! - **DiffSession**: Holds the last result for interactive callers
//!
//! Cost is quadratic in the number of lines, plus quadratic in line length
//! for each refined pair. Inputs are expected to be human-sized text.
//!
//! ## Example
//!
//! ```rust
//! use linediff_core::{calculate_diff, SegmentKind};
//!
//! let segments = calculate_diff("line1\nline2\nline3", "line1\nlineX\nline3");
//! assert_eq!(segments.len(), 4);
//! assert_eq!(segments[1].kind, SegmentKind::Removed);
//! assert!(segments[1].inline_changes.is_some());
//! ```

mod tracing_macros;

pub mod algorithm;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod export;
pub mod session;
pub mod tokenizers;

// Re-export main types
pub use config::DiffConfig;
pub use diff::{DiffResult, DiffSegment, DiffStatistics, InlineChange, SegmentKind};
pub use engine::DiffEngine;
pub use error::DiffError;
pub use export::UnifiedDiff;
pub use session::DiffSession;

/// Diff two texts with the default configuration and return the segments
///
/// Total over all inputs: empty strings on either side are fine and nothing
/// here can fail.
pub fn calculate_diff(original: &str, modified: &str) -> Vec<DiffSegment> {
    DiffEngine::default().segments(original, modified)
}

/// Main entry point for computing a full diff result
///
/// # Arguments
///
/// * `original` - The original text
/// * `modified` - The modified text
/// * `config` - Optional configuration (uses default if None)
///
/// # Example
///
/// ```rust
/// use linediff_core::compute_diff;
///
/// let result = compute_diff("Hello World", "Hello Rust", None);
/// println!("Changes: {}", result.summary());
/// ```
pub fn compute_diff(original: &str, modified: &str, config: Option<DiffConfig>) -> DiffResult {
    let config = config.unwrap_or_default();
    let engine = DiffEngine::new(config);
    engine.diff(original, modified)
}
