use std::path::PathBuf;

/// Convenience result type used across spingif.
pub type SpinResult<T> = Result<T, SpinError>;

/// Top-level error taxonomy used by the pipeline and its collaborators.
#[derive(thiserror::Error, Debug)]
pub enum SpinError {
    /// The input path does not exist.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input could not be decoded as a supported raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid run configuration (step count, worker count).
    #[error("config error: {0}")]
    Config(String),

    /// The animated container could not be produced.
    #[error("encode error: {0}")]
    Encode(String),

    /// The output could not be created or persisted.
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpinError {
    /// Build a [`SpinError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SpinError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SpinError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
