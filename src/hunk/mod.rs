mod types;
pub use types::*;

use crate::lcs::{self, Edit, Script};

struct HunkBuilder<'a, S> {
    old: &'a [S],
    new: &'a [S],
    old_line: usize,
    new_line: usize,
    hunks: Vec<Hunk>,
}

impl<'a, S: AsRef<str>> HunkBuilder<'a, S> {
    fn new(old: &'a [S], new: &'a [S], capacity: usize) -> Self {
        HunkBuilder {
            old,
            new,
            old_line: 0,
            new_line: 0,
            hunks: Vec::with_capacity(capacity),
        }
    }

    fn process(&mut self, edit: Edit) {
        match edit {
            Edit::Equal { old, new } => {
                debug_assert_eq!(self.old[old].as_ref(), self.new[new].as_ref());
                self.hunks
                    .push(Hunk::unchanged(self.old_line, self.old[old].as_ref()));
                self.old_line += 1;
                self.new_line += 1;
            }
            Edit::Delete { old } => {
                self.hunks
                    .push(Hunk::delete(self.old_line, self.old[old].as_ref()));
                self.old_line += 1;
            }
            Edit::Insert { new } => {
                self.hunks
                    .push(Hunk::insert(self.new_line, self.new[new].as_ref()));
                self.new_line += 1;
            }
        }
    }

    fn finish(self) -> Vec<Hunk> {
        debug_assert_eq!(self.old_line, self.old.len());
        debug_assert_eq!(self.new_line, self.new.len());
        self.hunks
    }
}

fn build<S: AsRef<str>>(old: &[S], new: &[S], script: Script) -> Vec<Hunk> {
    let mut builder = HunkBuilder::new(old, new, script.len());
    for edit in script {
        builder.process(edit);
    }
    builder.finish()
}

/// Computes the line diff between two sequences.
///
/// # Examples
///
/// ```
/// use linediff::{diff, Hunk};
///
/// let old = vec!["aaa", "bbb", "ccc"];
/// let new = vec!["aaa", "ZZZ", "ccc"];
/// assert_eq!(diff(&old, &new), vec![
///     Hunk::unchanged(0, "aaa"),
///     Hunk::delete(1, "bbb"),
///     Hunk::insert(1, "ZZZ"),
///     Hunk::unchanged(2, "ccc"),
/// ]);
/// ```
///
/// The matcher keeps an `old.len() * new.len()` table in memory, so this is
/// not meant for inputs with hundreds of thousands of lines on both sides.
pub fn diff<S: AsRef<str>>(old: &[S], new: &[S]) -> Vec<Hunk> {
    let old_lines: Vec<&str> = old.iter().map(|line| line.as_ref()).collect();
    let new_lines: Vec<&str> = new.iter().map(|line| line.as_ref()).collect();
    let script = lcs::script(&old_lines, &new_lines);
    let hunks = build(old, new, script);
    log::debug!(
        "diffed {} against {} lines: {} hunks, {} changed",
        old.len(),
        new.len(),
        hunks.len(),
        hunks.iter().filter(|h| h.is_change()).count()
    );
    hunks
}
