/// Result alias used at construction and configuration boundaries.
pub type FxResult<T> = Result<T, FxError>;

/// Errors raised while building buffers or parsing effect configuration.
///
/// Effect operations themselves never fail: degenerate geometry and unsupported blend modes are
/// silent no-ops.
#[derive(thiserror::Error, Debug)]
pub enum FxError {
    /// Caller-provided data is inconsistent (e.g. a pixel array of the wrong length).
    #[error("validation error: {0}")]
    Validation(String),

    /// Effect configuration could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with the source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FxError {
    /// Build a [`FxError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FxError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
