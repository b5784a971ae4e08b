/// Convenience result type used across dialkit.
pub type DialResult<T> = Result<T, DialError>;

/// Top-level error taxonomy used by the generators.
#[derive(thiserror::Error, Debug)]
pub enum DialError {
    /// Invalid configuration, theme data or sample readout values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or compositing a layer.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while loading or shaping with a font.
    #[error("font error: {0}")]
    Font(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DialError {
    /// Build a [`DialError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DialError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DialError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`DialError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
