//! Error types for the diff crate.

use std::fmt;

use shapediff_types::TypeError;

/// Which of the two compared values an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Original,
    Modified,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Original => f.write_str("original"),
            Side::Modified => f.write_str("modified"),
        }
    }
}

/// Errors that can occur during diff operations.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DiffError {
    /// The two values at `path` do not share a declared type or shape.
    #[error("shape mismatch at {path}: original is {original}, modified is {modified}")]
    ShapeMismatch {
        path: String,
        original: String,
        modified: String,
    },

    /// A value at `path` could not be classified.
    #[error("unsupported shape at {path}: {type_name}")]
    UnsupportedShape {
        path: String,
        type_name: &'static str,
    },

    /// A top-level value was absent.
    #[error("the {side} root value is absent")]
    NullRoot { side: Side },

    /// An operation value could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] TypeError),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
