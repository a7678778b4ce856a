//! Text and JSON renderings of a segment sequence
//!
//! These are conveniences for callers that copy or save a diff. The engine
//! itself never produces or consumes them.

use crate::diff::{DiffSegment, SegmentKind};
use crate::error::Result;

/// Unified diff format output
#[derive(Debug, Clone)]
pub struct UnifiedDiff {
    /// Original filename/identifier
    pub original_name: String,
    /// Modified filename/identifier
    pub modified_name: String,
    /// Hunks of changes
    pub hunks: Vec<DiffHunk>,
}

/// A hunk represents a contiguous block of changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffHunk {
    /// Starting line in original (1-based, 0 when the hunk has no original lines)
    pub original_start: usize,
    /// Number of lines in original
    pub original_count: usize,
    /// Starting line in modified (1-based, 0 when the hunk has no modified lines)
    pub modified_start: usize,
    /// Number of lines in modified
    pub modified_count: usize,
    /// Lines in this hunk (with +/- prefixes)
    pub lines: Vec<String>,
}

impl UnifiedDiff {
    pub fn new(original_name: impl Into<String>, modified_name: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            modified_name: modified_name.into(),
            hunks: Vec::new(),
        }
    }

    /// Group segments into hunks, keeping `context_lines` unchanged lines
    /// around each change. Changes separated by at most twice that many
    /// unchanged lines share a hunk.
    pub fn from_segments(
        original_name: impl Into<String>,
        modified_name: impl Into<String>,
        segments: &[DiffSegment],
        context_lines: usize,
    ) -> Self {
        let mut diff = Self::new(original_name, modified_name);

        // Lines of each side that precede segment `k`
        let mut original_before = Vec::with_capacity(segments.len());
        let mut modified_before = Vec::with_capacity(segments.len());
        let (mut old_line, mut new_line) = (0, 0);
        for segment in segments {
            original_before.push(old_line);
            modified_before.push(new_line);
            if segment.kind != SegmentKind::Added {
                old_line += 1;
            }
            if segment.kind != SegmentKind::Removed {
                new_line += 1;
            }
        }

        let changes: Vec<usize> = segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| segment.kind != SegmentKind::Unchanged)
            .map(|(index, _)| index)
            .collect();

        let mut groups: Vec<(usize, usize)> = Vec::new();
        for &index in &changes {
            match groups.last_mut() {
                Some((_, end)) if index - *end - 1 <= 2 * context_lines => *end = index,
                _ => groups.push((index, index)),
            }
        }

        for (first, last) in groups {
            let lo = first.saturating_sub(context_lines);
            let hi = (last + context_lines).min(segments.len() - 1);
            let window = &segments[lo..=hi];

            let original_count = window.iter().filter(|s| s.kind != SegmentKind::Added).count();
            let modified_count = window.iter().filter(|s| s.kind != SegmentKind::Removed).count();

            diff.add_hunk(DiffHunk {
                original_start: hunk_start(original_before[lo], original_count),
                original_count,
                modified_start: hunk_start(modified_before[lo], modified_count),
                modified_count,
                lines: window.iter().map(|segment| segment.to_string()).collect(),
            });
        }

        diff
    }

    /// Add a hunk to the diff
    pub fn add_hunk(&mut self, hunk: DiffHunk) {
        self.hunks.push(hunk);
    }

    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Format as unified diff string
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("--- {}\n", self.original_name));
        output.push_str(&format!("+++ {}\n", self.modified_name));

        for hunk in &self.hunks {
            output.push_str(&format!(
                "@@ -{},{} +{},{} @@\n",
                hunk.original_start, hunk.original_count, hunk.modified_start, hunk.modified_count
            ));

            for line in &hunk.lines {
                output.push_str(line);
                output.push('\n');
            }
        }

        output
    }
}

fn hunk_start(lines_before: usize, count: usize) -> usize {
    if count == 0 {
        lines_before
    } else {
        lines_before + 1
    }
}

/// Serialize segments as JSON, `inlineChanges` omitted where absent
pub fn to_json(segments: &[DiffSegment]) -> Result<String> {
    Ok(serde_json::to_string(segments)?)
}
