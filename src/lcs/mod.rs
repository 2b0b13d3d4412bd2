mod types;
pub(crate) use types::*;

/// Suffix LCS lengths: `get(x, y)` is the length of the longest common
/// subsequence of `old[x..]` and `new[y..]`.
struct Table {
    data: Vec<usize>,
    width: usize,
}

impl Table {
    fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let width = new.len() + 1;
        let mut table = Table {
            data: vec![0; (old.len() + 1) * width],
            width,
        };
        for x in (0..old.len()).rev() {
            for y in (0..new.len()).rev() {
                let val = if old[x] == new[y] {
                    table.get(x + 1, y + 1) + 1
                } else {
                    table.get(x + 1, y).max(table.get(x, y + 1))
                };
                table.set(x, y, val);
            }
        }
        table
    }

    fn get(&self, x: usize, y: usize) -> usize {
        self.data[x * self.width + y]
    }

    fn set(&mut self, x: usize, y: usize, val: usize) {
        self.data[x * self.width + y] = val;
    }
}

/// Aligns two sequences along a longest common subsequence.
///
/// The table is walked forward from the start of both sequences. At every
/// cell a match is taken when the lines are equal; otherwise a one-for-one
/// replacement (a Delete immediately followed by its Insert) is preferred
/// whenever it stays optimal, then a Delete, then an Insert.
pub(crate) fn script<T: PartialEq>(old: &[T], new: &[T]) -> Script {
    if old.is_empty() {
        return (0..new.len()).map(|new| Edit::Insert { new }).collect();
    }
    if new.is_empty() {
        return (0..old.len()).map(|old| Edit::Delete { old }).collect();
    }

    let n = old.len();
    let m = new.len();
    let table = Table::build(old, new);
    log::trace!("lcs table {}x{}, {} common lines", n + 1, m + 1, table.get(0, 0));

    let mut edits: Script = Vec::with_capacity(n + m - table.get(0, 0));
    let (mut x, mut y) = (0, 0);
    while x < n || y < m {
        if x == n {
            edits.push(Edit::Insert { new: y });
            y += 1;
        } else if y == m {
            edits.push(Edit::Delete { old: x });
            x += 1;
        } else if old[x] == new[y] {
            edits.push(Edit::Equal { old: x, new: y });
            x += 1;
            y += 1;
        } else if table.get(x + 1, y + 1) == table.get(x, y) {
            edits.push(Edit::Delete { old: x });
            edits.push(Edit::Insert { new: y });
            x += 1;
            y += 1;
        } else if table.get(x + 1, y) >= table.get(x, y + 1) {
            edits.push(Edit::Delete { old: x });
            x += 1;
        } else {
            edits.push(Edit::Insert { new: y });
            y += 1;
        }
    }
    edits
}
