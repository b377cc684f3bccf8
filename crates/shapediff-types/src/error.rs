use thiserror::Error;

/// Errors produced while inspecting or rendering classified values.
#[derive(Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("unsupported shape: {type_name} is neither scalar, sequence, nor composite")]
    Unsupported { type_name: &'static str },

    #[error("non-finite float has no JSON representation: {0}")]
    NonFiniteFloat(f64),
}

/// Convenience alias for type-level results.
pub type TypeResult<T> = Result<T, TypeError>;
