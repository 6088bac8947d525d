/// Convenience result type used across huecards.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// A caller-provided argument is out of its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// SVG parsing or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// An image encoder rejected its input.
    #[error("encode error: {0}")]
    Encode(String),

    /// One or more output files could not be written. Each failure is logged individually.
    #[error("export failed: {failed} of {total} output files were not written")]
    Export {
        /// Number of files that failed.
        failed: usize,
        /// Number of files that were attempted.
        total: usize,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`CardError::InvalidColor`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
