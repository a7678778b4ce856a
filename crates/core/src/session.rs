//! Caller-side holder for the most recent diff
//!
//! The engine keeps no state between calls. Interactive callers usually
//! hold on to the last computed segments for rendering; `DiffSession` is
//! that holder, and `reset` clears it back to empty.

use crate::config::DiffConfig;
use crate::diff::{DiffResult, DiffSegment};
use crate::engine::DiffEngine;
use crate::debug;

#[derive(Debug, Clone, Default)]
pub struct DiffSession {
    engine: DiffEngine,
    last: Option<DiffResult>,
}

impl DiffSession {
    pub fn new(config: DiffConfig) -> Self {
        Self {
            engine: DiffEngine::new(config),
            last: None,
        }
    }

    /// Diff the two texts and keep the result, replacing any previous one
    pub fn calculate(&mut self, original: &str, modified: &str) -> &DiffResult {
        self.last.insert(self.engine.diff(original, modified))
    }

    /// Segments of the last diff, empty if none was computed since the
    /// last reset
    pub fn segments(&self) -> &[DiffSegment] {
        self.last
            .as_ref()
            .map(|result| result.segments.as_slice())
            .unwrap_or_default()
    }

    pub fn result(&self) -> Option<&DiffResult> {
        self.last.as_ref()
    }

    /// Clear the held result
    pub fn reset(&mut self) {
        debug!(had_result = self.last.is_some(), "resetting diff session");
        self.last = None;
    }
}
