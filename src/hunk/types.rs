/// What happened to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Unchanged,
    Insert,
    Delete,
}

/// Represents the fate of one line in a diff.
/// Please note that `line_num` counts in the original sequence for
/// `Operation::Unchanged` and `Operation::Delete`, but in the modified
/// sequence for `Operation::Insert`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hunk {
    operation: Operation,
    line_num: usize,
    line: String,
}

impl Hunk {
    pub fn new(operation: Operation, line_num: usize, line: impl Into<String>) -> Self {
        Hunk {
            operation,
            line_num,
            line: line.into(),
        }
    }

    pub fn unchanged(line_num: usize, line: impl Into<String>) -> Self {
        Hunk::new(Operation::Unchanged, line_num, line)
    }

    pub fn insert(line_num: usize, line: impl Into<String>) -> Self {
        Hunk::new(Operation::Insert, line_num, line)
    }

    pub fn delete(line_num: usize, line: impl Into<String>) -> Self {
        Hunk::new(Operation::Delete, line_num, line)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn line_num(&self) -> usize {
        self.line_num
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// True for inserts and deletes.
    pub fn is_change(&self) -> bool {
        self.operation != Operation::Unchanged
    }
}
