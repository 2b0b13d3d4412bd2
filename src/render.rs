use crate::hunk::{diff, Hunk, Operation};
use std::fmt;

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sigil = match self {
            Operation::Unchanged => " ",
            Operation::Insert => "+",
            Operation::Delete => "-",
        };
        f.write_str(sigil)
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operation(), self.line())
    }
}

/// Renders hunks the way a unified diff body shows them, one line each.
pub fn render(hunks: &[Hunk]) -> String {
    hunks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("\n")
}

/// Computes the diff between two strings after breaking them into newlines
/// and running `diff`.
pub fn diff_lines(old: &str, new: &str) -> Vec<Hunk> {
    // can't use `.lines()`, a trailing `\r` is part of the line
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    diff(&old_lines, &new_lines)
}

/// Reads the original sequence back out of an unpruned diff.
pub fn original(hunks: &[Hunk]) -> Vec<&str> {
    hunks
        .iter()
        .filter(|h| h.operation() != Operation::Insert)
        .map(Hunk::line)
        .collect()
}

/// Reads the modified sequence back out of an unpruned diff.
pub fn modified(hunks: &[Hunk]) -> Vec<&str> {
    hunks
        .iter()
        .filter(|h| h.operation() != Operation::Delete)
        .map(Hunk::line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::prune_context;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_sides_roundtrip(
            old in prop::collection::vec(".*", 0..20usize),
            new in prop::collection::vec(".*", 0..20usize),
        ) {
            let hunks = diff(&old, &new);
            prop_assert_eq!(original(&hunks), old);
            prop_assert_eq!(modified(&hunks), new);
        }

        #[test]
        fn test_diff_lines_roundtrip(old in "[ab\r\n]{0,30}", new in "[ab\r\n]{0,30}") {
            let hunks = diff_lines(&old, &new);
            prop_assert_eq!(original(&hunks).join("\n"), old);
            prop_assert_eq!(modified(&hunks).join("\n"), new);
        }
    }

    #[test]
    fn test_diff_lines() {
        let old = "hello\nworld\nfoo";
        let new = "hello\nrust\nfoo";
        assert_eq!(
            diff_lines(old, new),
            vec![
                Hunk::unchanged(0, "hello"),
                Hunk::delete(1, "world"),
                Hunk::insert(1, "rust"),
                Hunk::unchanged(2, "foo"),
            ]
        );
    }

    #[test]
    fn test_render() {
        let old = "a\nb\nc\nd\ne\nf";
        let new = "a\nb\nc\nD\ne\nf";
        let hunks = prune_context(&diff_lines(old, new), 1);
        assert_eq!(render(&hunks), " c\n-d\n+D\n e");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_operation_sigils() {
        assert_eq!(Operation::Unchanged.to_string(), " ");
        assert_eq!(Operation::Insert.to_string(), "+");
        assert_eq!(Operation::Delete.to_string(), "-");
        assert_eq!(Hunk::insert(4, "new line").to_string(), "+new line");
    }
}
