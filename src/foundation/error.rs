/// Crate-wide result alias.
pub type LedstageResult<T> = Result<T, LedstageError>;

/// Error type for scene construction, asset loading, and frame hand-off.
#[derive(thiserror::Error, Debug)]
pub enum LedstageError {
    /// A constructor or setter was given inconsistent values.
    #[error("validation error: {0}")]
    Validation(String),

    /// An asset (image, sprite spec, rasterized text) could not be produced.
    #[error("asset error: {0}")]
    Asset(String),

    /// A frame could not be rendered or handed to the frame sink.
    #[error("render error: {0}")]
    Render(String),

    /// Any other error, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LedstageError {
    /// Build a [`LedstageError::Validation`] from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LedstageError::Asset`] from any message.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`LedstageError::Render`] from any message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
