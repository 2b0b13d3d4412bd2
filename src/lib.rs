pub mod context;
pub mod error;
pub mod hunk;
mod lcs;
pub mod render;

pub use context::{prune_context, ContextWindow, DEFAULT_CONTEXT};
pub use error::DiffError;
pub use hunk::{diff, Hunk, Operation};
pub use render::{diff_lines, modified, original, render};
