//! Longest-common-subsequence alignment
//!
//! One routine serves both diff granularities: it is generic over any unit
//! type with equality, so the line pass and the character pass share the
//! same table construction and the same backtracking tie-break.
//!
//! Cost is `O(m·n)` time and memory for sequences of length `m` and `n`.
//! There is no chunking or linear-space fallback; multi-megabyte inputs are
//! not a supported use case.

use crate::diff::SegmentKind;

/// One step of an edit script: a unit and how it got from the first
/// sequence to the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit<T> {
    pub kind: SegmentKind,
    pub unit: T,
}

impl<T> Edit<T> {
    fn new(kind: SegmentKind, unit: T) -> Self {
        Self { kind, unit }
    }
}

/// Number of cells in the table for sequences of length `m` and `n`.
///
/// Saturates instead of overflowing so it can be compared against a limit.
pub fn cell_count(m: usize, n: usize) -> usize {
    m.saturating_add(1).saturating_mul(n.saturating_add(1))
}

/// The LCS length table.
///
/// `(m+1)×(n+1)` cells stored row-major. Cell `(i, j)` holds the LCS length
/// of `a[..i]` and `b[..j]`; row 0 and column 0 are zero.
#[derive(Debug, Clone)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Fill the table for `a` against `b` using exact unit equality.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Compute the edit script turning `a` into `b`, in forward order.
///
/// Backtracks from `(m, n)` to `(0, 0)`:
/// - equal units become `Unchanged` and move diagonally;
/// - otherwise `Added` is taken when `i == 0` or `table[i][j-1] >= table[i-1][j]`;
/// - otherwise `Removed`.
///
/// Preferring `Added` on ties makes the output deterministic even though
/// the LCS is not unique in general. Walking backwards emits additions
/// before removals, so once reversed every removal run precedes the
/// addition run that replaces it.
pub fn edit_script<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<Edit<T>> {
    let table = LcsTable::build(a, b);

    let mut script = Vec::with_capacity(a.len() + b.len() - table.lcs_len());
    let mut i = a.len();
    let mut j = b.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            script.push(Edit::new(SegmentKind::Unchanged, a[i - 1].clone()));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            script.push(Edit::new(SegmentKind::Added, b[j - 1].clone()));
            j -= 1;
        } else {
            script.push(Edit::new(SegmentKind::Removed, a[i - 1].clone()));
            i -= 1;
        }
    }

    script.reverse();
    script
}
