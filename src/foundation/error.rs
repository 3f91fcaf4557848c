/// Convenience result type used across gitforest.
pub type ForestResult<T> = Result<T, ForestError>;

/// Top-level error taxonomy used by the rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum ForestError {
    /// Invalid user-provided grid or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The sprite source yielded nothing to draw.
    #[error("no sprites available: {0}")]
    NoSprites(String),

    /// Errors while compositing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForestError {
    /// Build a [`ForestError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ForestError::NoSprites`] value.
    pub fn no_sprites(msg: impl Into<String>) -> Self {
        Self::NoSprites(msg.into())
    }

    /// Build a [`ForestError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ForestError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
