//! Error type shared by the composer and its I/O collaborators.

use thiserror::Error;

/// Convenience alias for results carrying [`MosaicError`].
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Main error type for mosaic operations.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// The tile library contains no images.
    #[error("tile library is empty")]
    EmptyLibrary,

    /// A block size of zero cannot partition the target.
    #[error("block size must be positive")]
    ZeroBlockSize,

    /// Failed to enumerate the tile library directory.
    #[error("failed to read tile directory")]
    Io(#[from] std::io::Error),

    /// Failed to decode or encode an image.
    #[error("failed to decode or encode an image")]
    Image(#[from] image::ImageError),
}
