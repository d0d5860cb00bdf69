/// Convenience result type used across vatform.
pub type VatformResult<T> = Result<T, VatformError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum VatformError {
    /// Inputs rejected before any work started (stack shape, parameter ranges).
    #[error("precondition error: {0}")]
    Precondition(String),

    /// Two images were combined without matching dimensions.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Cooperative cancellation was observed before the stack swap.
    /// The input stack is untouched when this is returned.
    #[error("operation cancelled")]
    Cancelled,

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VatformError {
    /// Build a [`VatformError::Precondition`] value.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Build a [`VatformError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// True for the cooperative-cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
