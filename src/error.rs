use thiserror::Error;

/// Errors raised by a forward pass.
///
/// Shape checks run before any computation; a failed check aborts the whole
/// call with no partial output.
#[derive(Error, Debug)]
pub enum RevaeError {
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },
}

pub type Result<T> = std::result::Result<T, RevaeError>;
