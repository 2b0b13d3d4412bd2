/// Alias for a vector of Edit
/// Result of the LCS matcher, in the order the lines appear
pub(crate) type Script = Vec<Edit>;

/// Each entry of a script points back into the inputs:
/// kept on both sides (Equal)
/// removed from the old sequence (Delete)
/// added from the new sequence (Insert)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edit {
    Equal { old: usize, new: usize },
    Delete { old: usize },
    Insert { new: usize },
}
