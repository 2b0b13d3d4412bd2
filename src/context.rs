use crate::error::DiffError;
use crate::hunk::Hunk;

/// Number of unchanged lines `diff -u` keeps around each change.
pub const DEFAULT_CONTEXT: usize = 3;

/// How far, in hunks, an unchanged hunk may sit from the nearest change and
/// still survive [`prune_context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextWindow(usize);

impl ContextWindow {
    pub fn new(lines: usize) -> Self {
        ContextWindow(lines)
    }

    pub fn lines(self) -> usize {
        self.0
    }

    /// Same as [`prune_context`] with this window.
    pub fn prune(self, hunks: &[Hunk]) -> Vec<Hunk> {
        prune_context(hunks, self.0)
    }
}

impl Default for ContextWindow {
    fn default() -> Self {
        ContextWindow(DEFAULT_CONTEXT)
    }
}

impl From<usize> for ContextWindow {
    fn from(lines: usize) -> Self {
        ContextWindow(lines)
    }
}

impl TryFrom<i64> for ContextWindow {
    type Error = DiffError;

    fn try_from(lines: i64) -> Result<Self, Self::Error> {
        if lines < 0 {
            return Err(DiffError::NegativeContext(lines));
        }
        Ok(ContextWindow(usize::try_from(lines).unwrap_or(usize::MAX)))
    }
}

impl TryFrom<i32> for ContextWindow {
    type Error = DiffError;

    fn try_from(lines: i32) -> Result<Self, Self::Error> {
        ContextWindow::try_from(i64::from(lines))
    }
}

impl TryFrom<isize> for ContextWindow {
    type Error = DiffError;

    fn try_from(lines: isize) -> Result<Self, Self::Error> {
        // isize is at most 64 bits on every supported target
        ContextWindow::try_from(lines as i64)
    }
}

/// Drops unchanged hunks that are more than `context` positions away from
/// the closest insert or delete. Distances are counted in the hunk list, not
/// in line numbers.
///
/// A list without any change prunes to nothing. Callers holding a signed
/// window go through [`ContextWindow::try_from`], which rejects negatives.
///
/// # Examples
///
/// ```
/// use linediff::{diff, prune_context, Hunk};
///
/// let old = vec!["aaa", "bbb", "ccc", "ddd", "eee", "fff"];
/// let new = vec!["aaa", "bbb", "XXX", "ddd", "eee", "fff"];
/// assert_eq!(prune_context(&diff(&old, &new), 1), vec![
///     Hunk::unchanged(1, "bbb"),
///     Hunk::delete(2, "ccc"),
///     Hunk::insert(2, "XXX"),
///     Hunk::unchanged(3, "ddd"),
/// ]);
/// ```
pub fn prune_context(hunks: &[Hunk], context: usize) -> Vec<Hunk> {
    // distance to the closest change at or before each position
    let mut before = vec![None; hunks.len()];
    let mut last = None;
    for (i, hunk) in hunks.iter().enumerate() {
        if hunk.is_change() {
            last = Some(i);
        }
        before[i] = last.map(|c| i - c);
    }

    let mut after = None;
    let mut pruned = Vec::with_capacity(hunks.len());
    for (i, hunk) in hunks.iter().enumerate().rev() {
        if hunk.is_change() {
            after = Some(i);
        }
        let nearest = match (before[i], after.map(|c| c - i)) {
            (Some(b), Some(a)) => Some(b.min(a)),
            (b, a) => b.or(a),
        };
        if nearest.is_some_and(|d| d <= context) {
            pruned.push(hunk.clone());
        }
    }
    pruned.reverse();

    log::trace!(
        "pruned {} hunks to {} with context {}",
        hunks.len(),
        pruned.len(),
        context
    );
    pruned
}
