use thiserror::Error;

/// Failure to produce pixels for one atlas entry.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no image registered for `{0}`")]
    NotFound(String),

    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    /// The placement's pixel coordinates do not fit in `u32`.
    #[error("placement at cell {cell:?} overflows pixel coordinates")]
    OutOfRange { cell: (u32, u32) },

    /// The decoder went away before delivering a result.
    #[error("decode cancelled")]
    Cancelled,
}

/// A placement whose image never landed in the atlas.
#[derive(Debug)]
pub struct DecodeFailure {
    pub id: String,
    pub error: DecodeError,
}

/// Failure of the atlas as a whole.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to encode atlas: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write atlas: {0}")]
    Io(#[from] std::io::Error),
}
