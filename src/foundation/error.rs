/// Convenience result type used across pixelforge.
pub type PixelforgeResult<T> = Result<T, PixelforgeError>;

/// Top-level error taxonomy used by facade APIs.
#[derive(thiserror::Error, Debug)]
pub enum PixelforgeError {
    /// Caller-supplied canvas geometry the engine cannot represent.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Malformed Base64 input, or bytes no recognized image format matches.
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from collaborators or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixelforgeError {
    /// Build a [`PixelforgeError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`PixelforgeError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
