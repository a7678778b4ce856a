//! Diff result types and structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a unit relates the original text to the modified text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Present only in the modified text
    Added,
    /// Present only in the original text
    Removed,
    /// Present in both
    Unchanged,
}

impl SegmentKind {
    /// Line prefix used when rendering a segment as diff text.
    pub fn prefix(self) -> char {
        match self {
            SegmentKind::Added => '+',
            SegmentKind::Removed => '-',
            SegmentKind::Unchanged => ' ',
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentKind::Added => "added",
            SegmentKind::Removed => "removed",
            SegmentKind::Unchanged => "unchanged",
        };
        f.write_str(name)
    }
}

/// A character-level change inside a substituted line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineChange {
    pub kind: SegmentKind,
    pub text: String,
}

impl InlineChange {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Merge consecutive changes of the same kind into one span.
    ///
    /// The engine reports one change per character; renderers usually want
    /// runs, e.g. `h`, `-e`, `+a`, `llo world`.
    pub fn coalesce(changes: &[InlineChange]) -> Vec<InlineChange> {
        let mut merged: Vec<InlineChange> = Vec::new();
        for change in changes {
            match merged.last_mut() {
                Some(last) if last.kind == change.kind => last.text.push_str(&change.text),
                _ => merged.push(change.clone()),
            }
        }
        merged
    }
}

/// One line of diff output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: SegmentKind,

    /// The full line, without its delimiter
    pub value: String,

    /// Character-level refinement, only on a `Removed` line that was
    /// immediately followed by an `Added` line
    #[serde(
        rename = "inlineChanges",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_changes: Option<Vec<InlineChange>>,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            inline_changes: None,
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self::new(SegmentKind::Added, value)
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self::new(SegmentKind::Removed, value)
    }

    pub fn unchanged(value: impl Into<String>) -> Self {
        Self::new(SegmentKind::Unchanged, value)
    }

    pub fn with_inline_changes(mut self, changes: Vec<InlineChange>) -> Self {
        self.inline_changes = Some(changes);
        self
    }

    /// Whether this segment was detected as the first half of a substitution
    pub fn is_substitution(&self) -> bool {
        self.inline_changes.is_some()
    }
}

impl fmt::Display for DiffSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.value)
    }
}

/// Statistics about the diff
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffStatistics {
    /// Lines in the original text
    pub original_lines: usize,

    /// Lines in the modified text
    pub modified_lines: usize,

    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,

    /// Removed lines that carry an inline refinement
    pub substitutions: usize,

    /// Changed lines over total lines (0.0 to 1.0)
    pub change_ratio: f64,
}

impl DiffStatistics {
    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        let mut stats = Self::default();
        for segment in segments {
            match segment.kind {
                SegmentKind::Added => stats.added += 1,
                SegmentKind::Removed => stats.removed += 1,
                SegmentKind::Unchanged => stats.unchanged += 1,
            }
            if segment.is_substitution() {
                stats.substitutions += 1;
            }
        }
        stats.original_lines = stats.unchanged + stats.removed;
        stats.modified_lines = stats.unchanged + stats.added;
        stats.calculate_change_ratio();
        stats
    }

    fn calculate_change_ratio(&mut self) {
        let total = self.original_lines + self.modified_lines;
        self.change_ratio = if total > 0 {
            (self.added + self.removed) as f64 / total as f64
        } else {
            0.0
        };
    }
}

/// Complete diff result
#[derive(Debug, Clone, PartialEq)]
pub struct DiffResult {
    /// Segments in output order
    pub segments: Vec<DiffSegment>,

    pub statistics: DiffStatistics,
}

impl DiffResult {
    pub fn new(segments: Vec<DiffSegment>) -> Self {
        let statistics = DiffStatistics::from_segments(&segments);
        Self {
            segments,
            statistics,
        }
    }

    /// Get a summary of the diff
    pub fn summary(&self) -> String {
        format!(
            "Diff Summary: {} added, {} removed, {} unchanged, {} substitutions. Change: {:.1}%",
            self.statistics.added,
            self.statistics.removed,
            self.statistics.unchanged,
            self.statistics.substitutions,
            self.statistics.change_ratio * 100.0
        )
    }

    /// True when both texts had exactly the same lines
    pub fn is_identical(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| segment.kind == SegmentKind::Unchanged)
    }

    /// Get only the changed segments (exclude Unchanged)
    pub fn changed_segments(&self) -> Vec<&DiffSegment> {
        self.segments
            .iter()
            .filter(|segment| segment.kind != SegmentKind::Unchanged)
            .collect()
    }

    /// Rebuild the original text from unchanged and removed lines
    pub fn original_text(&self) -> String {
        self.join(SegmentKind::Removed)
    }

    /// Rebuild the modified text from unchanged and added lines
    pub fn modified_text(&self) -> String {
        self.join(SegmentKind::Added)
    }

    fn join(&self, side: SegmentKind) -> String {
        self.segments
            .iter()
            .filter(|segment| segment.kind == side || segment.kind == SegmentKind::Unchanged)
            .map(|segment| segment.value.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            writeln!(f, "{}", segment)?;
        }
        Ok(())
    }
}
