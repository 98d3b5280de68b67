//! Owned, in-memory RGBA image manipulation.
//!
//! # Overview
//!
//! This crate provides the [`Image`] type, an owned 8-bit RGBA image backed by a contiguous,
//! row-major pixel buffer. Images can be loaded from and saved to common raster formats, resized
//! canvas-style (content preserving), rescaled with Lanczos resampling, flipped, mirrored and
//! converted to greyscale, all in memory and single-threaded.
//!
//! # Channel Order
//!
//! The byte layout of each pixel within the buffer is chosen per image via [`ChannelOrder`]
//! (RGBA, ARGB, ABGR or BGRA). Every operation honors the configured order. External codec and
//! resampling routines only understand RGBA, so buffers held in any other order are re-encoded to
//! RGBA around those calls and back afterwards.

use log::LevelFilter;

mod codec;
mod error;
mod image;
mod pixel;
mod resample;
mod resolution;

pub use crate::codec::ImageFormat;
pub use crate::error::{Error, Result};
pub use crate::image::Image;
pub use crate::pixel::{ChannelOrder, Pixel};
pub use crate::resolution::Resolution;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and this library will log at *trace*
/// level. Otherwise, they will log at *debug* level.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
