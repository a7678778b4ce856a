//! Main diff engine that orchestrates the line and character passes

use crate::algorithm::{self, Edit};
use crate::config::DiffConfig;
use crate::diff::{DiffResult, DiffSegment, InlineChange, SegmentKind};
use crate::error::{DiffError, Result};
use crate::tokenizers::{CharacterTokenizer, LineTokenizer, Tokenizer};
use crate::{debug, trace};

/// The main diff engine
///
/// Holds only configuration. Every call builds its own tables and output,
/// so one engine can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compute the diff between two texts
    ///
    /// 1. Split both texts into lines
    /// 2. Align the lines and backtrack into an edit script
    /// 3. Refine each removed line directly followed by an added line with
    ///    a character-level diff
    /// 4. Wrap the segments with statistics
    pub fn diff(&self, original: &str, modified: &str) -> DiffResult {
        DiffResult::new(self.segments(original, modified))
    }

    /// Compute only the segment sequence
    pub fn segments(&self, original: &str, modified: &str) -> Vec<DiffSegment> {
        let original_lines = LineTokenizer.tokenize(original);
        let modified_lines = LineTokenizer.tokenize(modified);
        self.diff_lines(&original_lines, &modified_lines)
    }

    /// Like [`diff`](Self::diff), but refuses inputs whose line table would
    /// exceed `max_cells`. Without a limit this never fails.
    pub fn try_diff(&self, original: &str, modified: &str) -> Result<DiffResult> {
        let original_lines = LineTokenizer.tokenize(original);
        let modified_lines = LineTokenizer.tokenize(modified);

        if let Some(limit) = self.config.max_cells {
            let cells = algorithm::cell_count(original_lines.len(), modified_lines.len());
            if cells > limit {
                debug!(cells, limit, "rejecting diff input");
                return Err(DiffError::InputTooLarge { cells, limit });
            }
        }

        Ok(DiffResult::new(
            self.diff_lines(&original_lines, &modified_lines),
        ))
    }

    fn diff_lines(&self, original: &[&str], modified: &[&str]) -> Vec<DiffSegment> {
        debug!(
            original_lines = original.len(),
            modified_lines = modified.len(),
            cells = algorithm::cell_count(original.len(), modified.len()),
            "line diff"
        );

        let script = algorithm::edit_script(original, modified);
        self.refine_substitutions(script)
    }

    /// Attach inline changes to every removed line that is immediately
    /// followed by an added line. Adjacency alone decides; there is no
    /// similarity threshold. The added line is kept as is.
    fn refine_substitutions(&self, script: Vec<Edit<&str>>) -> Vec<DiffSegment> {
        let mut segments = Vec::with_capacity(script.len());
        let mut edits = script.into_iter().peekable();

        while let Some(edit) = edits.next() {
            let segment = DiffSegment::new(edit.kind, edit.unit);

            if self.config.inline_refinement && edit.kind == SegmentKind::Removed {
                if let Some(next) = edits.next_if(|next| next.kind == SegmentKind::Added) {
                    segments.push(segment.with_inline_changes(inline_diff(edit.unit, next.unit)));
                    segments.push(DiffSegment::added(next.unit));
                    continue;
                }
            }

            segments.push(segment);
        }

        debug!(
            substitutions = segments.iter().filter(|s| s.is_substitution()).count(),
            segments = segments.len(),
            "refined substitution pairs"
        );
        segments
    }
}

/// Character-level diff of two lines, one change per character.
///
/// Same alignment and tie-break as the line pass.
pub fn inline_diff(removed: &str, added: &str) -> Vec<InlineChange> {
    let changes: Vec<InlineChange> = diff_units(&CharacterTokenizer, removed, added)
        .into_iter()
        .map(|(kind, text)| InlineChange::new(kind, text))
        .collect();

    trace!(
        removed_len = removed.len(),
        added_len = added.len(),
        changes = changes.len(),
        "inline diff"
    );
    changes
}

/// Diff two texts at the granularity of `tokenizer`.
pub fn diff_units<T: Tokenizer>(
    tokenizer: &T,
    original: &str,
    modified: &str,
) -> Vec<(SegmentKind, String)> {
    let a = tokenizer.tokenize(original);
    let b = tokenizer.tokenize(modified);

    algorithm::edit_script(&a, &b)
        .into_iter()
        .map(|edit| (edit.kind, tokenizer.unit_text(&edit.unit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(segments: &[DiffSegment]) -> Vec<SegmentKind> {
        segments.iter().map(|s| s.kind).collect()
    }

    fn engine() -> DiffEngine {
        DiffEngine::default()
    }

    #[test]
    fn test_both_empty() {
        assert!(engine().segments("", "").is_empty());
    }

    #[test]
    fn test_original_empty() {
        let segments = engine().segments("", "b\nc");
        assert_eq!(segments, vec![DiffSegment::added("b"), DiffSegment::added("c")]);
    }

    #[test]
    fn test_modified_empty() {
        let segments = engine().segments("a\nb", "");
        assert_eq!(segments, vec![DiffSegment::removed("a"), DiffSegment::removed("b")]);
    }

    #[test]
    fn test_identical() {
        let text = "one\n\ntwo\n";
        let segments = engine().segments(text, text);
        assert_eq!(segments.len(), 4);
        assert!(segments.iter().all(|s| s.kind == SegmentKind::Unchanged));
        assert!(segments.iter().all(|s| s.inline_changes.is_none()));
    }

    #[test]
    fn test_line_substitution() {
        let segments = engine().segments("line1\nline2\nline3", "line1\nlineX\nline3");

        assert_eq!(
            kinds(&segments),
            vec![
                SegmentKind::Unchanged,
                SegmentKind::Removed,
                SegmentKind::Added,
                SegmentKind::Unchanged,
            ]
        );
        assert_eq!(segments[0].value, "line1");
        assert_eq!(segments[1].value, "line2");
        assert_eq!(segments[2].value, "lineX");
        assert_eq!(segments[3].value, "line3");

        let inline = segments[1].inline_changes.as_ref().unwrap();
        assert_eq!(
            InlineChange::coalesce(inline),
            vec![
                InlineChange::new(SegmentKind::Unchanged, "line"),
                InlineChange::new(SegmentKind::Removed, "2"),
                InlineChange::new(SegmentKind::Added, "X"),
            ]
        );
        assert!(segments[2].inline_changes.is_none());
    }

    #[test]
    fn test_single_character_substitution() {
        let segments = engine().segments("hello world", "hallo world");

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].kind, SegmentKind::Removed);
        assert_eq!(segments[0].value, "hello world");
        assert_eq!(segments[1], DiffSegment::added("hallo world"));

        let inline = segments[0].inline_changes.as_ref().unwrap();
        assert_eq!(inline.len(), 12);
        assert_eq!(inline[0], InlineChange::new(SegmentKind::Unchanged, "h"));
        assert_eq!(inline[1], InlineChange::new(SegmentKind::Removed, "e"));
        assert_eq!(inline[2], InlineChange::new(SegmentKind::Added, "a"));
        assert!(inline[3..].iter().all(|c| c.kind == SegmentKind::Unchanged));

        assert_eq!(
            InlineChange::coalesce(inline),
            vec![
                InlineChange::new(SegmentKind::Unchanged, "h"),
                InlineChange::new(SegmentKind::Removed, "e"),
                InlineChange::new(SegmentKind::Added, "a"),
                InlineChange::new(SegmentKind::Unchanged, "llo world"),
            ]
        );
    }

    #[test]
    fn test_refinement_follows_adjacency_not_similarity() {
        // Edit script is -a -b +c +d; only the b/c pair is adjacent
        let segments = engine().segments("a\nb", "c\nd");

        assert_eq!(
            kinds(&segments),
            vec![
                SegmentKind::Removed,
                SegmentKind::Removed,
                SegmentKind::Added,
                SegmentKind::Added,
            ]
        );
        assert_eq!(segments[0].value, "a");
        assert!(segments[0].inline_changes.is_none());

        assert_eq!(segments[1].value, "b");
        assert_eq!(
            segments[1].inline_changes,
            Some(vec![
                InlineChange::new(SegmentKind::Removed, "b"),
                InlineChange::new(SegmentKind::Added, "c"),
            ])
        );

        assert_eq!(segments[2], DiffSegment::added("c"));
        assert_eq!(segments[3], DiffSegment::added("d"));
    }

    #[test]
    fn test_unrelated_lines_still_refined() {
        let segments = engine().segments("apple", "zzz");
        let inline = segments[0].inline_changes.as_ref().unwrap();
        assert_eq!(
            InlineChange::coalesce(inline),
            vec![
                InlineChange::new(SegmentKind::Removed, "apple"),
                InlineChange::new(SegmentKind::Added, "zzz"),
            ]
        );
    }

    #[test]
    fn test_added_before_removed_is_not_a_pair() {
        // "x" is inserted before the unchanged line, "y" removed after it
        let segments = engine().segments("keep\ny", "x\nkeep");
        assert_eq!(
            kinds(&segments),
            vec![SegmentKind::Added, SegmentKind::Unchanged, SegmentKind::Removed]
        );
        assert!(segments.iter().all(|s| s.inline_changes.is_none()));
    }

    #[test]
    fn test_refinement_disabled() {
        let engine = DiffEngine::new(DiffConfig::new().with_inline_refinement(false));
        let segments = engine.segments("hello", "hallo");
        assert_eq!(segments, vec![DiffSegment::removed("hello"), DiffSegment::added("hallo")]);
    }

    #[test]
    fn test_empty_line_substitution() {
        let segments = engine().segments("", "\n");
        assert_eq!(segments, vec![DiffSegment::added(""), DiffSegment::added("")]);

        let segments = engine().segments("a\n", "a\nb");
        assert_eq!(segments[0], DiffSegment::unchanged("a"));
        assert_eq!(segments[1].value, "");
        assert_eq!(
            segments[1].inline_changes,
            Some(vec![InlineChange::new(SegmentKind::Added, "b")])
        );
        assert_eq!(segments[2], DiffSegment::added("b"));
    }

    #[test]
    fn test_case_sensitive() {
        let segments = engine().segments("Hello", "hello");
        assert_eq!(kinds(&segments), vec![SegmentKind::Removed, SegmentKind::Added]);
    }

    #[test]
    fn test_deterministic() {
        let original = "a\nb\nc\na\nb\nb\na";
        let modified = "c\nb\na\nb\na\nc";
        let first = engine().segments(original, modified);
        let second = engine().segments(original, modified);
        assert_eq!(first, second);
    }

    #[test]
    fn test_try_diff_without_limit() {
        let result = engine().try_diff("a", "b").unwrap();
        assert_eq!(result.statistics.substitutions, 1);
    }

    #[test]
    fn test_try_diff_limit() {
        let engine = DiffEngine::new(DiffConfig::new().with_max_cells(9));

        // 3 lines against 2 lines -> 4 * 3 = 12 cells
        let err = engine.try_diff("a\nb\nc", "a\nb").unwrap_err();
        assert!(matches!(err, DiffError::InputTooLarge { cells: 12, limit: 9 }));

        // 2 lines against 2 lines -> 9 cells, exactly at the limit
        let result = engine.try_diff("a\nb", "a\nc").unwrap();
        assert_eq!(result.segments.len(), 3);
    }

    #[test]
    fn test_diff_units_lines() {
        let units = diff_units(&LineTokenizer, "a\nb", "a\nc");
        assert_eq!(
            units,
            vec![
                (SegmentKind::Unchanged, "a".to_string()),
                (SegmentKind::Removed, "b".to_string()),
                (SegmentKind::Added, "c".to_string()),
            ]
        );
    }
}
