/// Convenience result type used across loopstrip.
pub type LoopstripResult<T> = Result<T, LoopstripError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LoopstripError {
    /// Invalid user-provided item data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rejected carousel tunables.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoopstripError {
    /// Build a [`LoopstripError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LoopstripError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
