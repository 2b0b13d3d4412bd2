use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// A context window was requested with a negative number of lines.
    #[error("context window must be non-negative, got {0}")]
    NegativeContext(i64),
}
