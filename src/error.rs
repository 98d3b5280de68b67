//! Error type for image file I/O.

use std::{io, path::PathBuf};

/// Error returned by [`Image`][crate::Image] loading and saving operations.
///
/// Only recoverable I/O and codec failures are represented here. Contract violations (mismatched
/// zero/nonzero dimensions, out-of-bounds pixel access, saving an empty image) panic instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The save path's extension does not name a supported output format.
    #[error("unsupported image extension in path '{}' (expected png, bmp or tga)", .0.display())]
    UnsupportedExtension(PathBuf),

    /// Reading or writing the file failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Decoding or encoding the image data failed.
    #[error(transparent)]
    Codec(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
