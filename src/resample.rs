//! RGBA resampling collaborator.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resamples an RGBA byte buffer of `src_width x src_height` pixels to
/// `dst_width x dst_height`, using a Lanczos filter.
///
/// All dimensions must be positive and `src` must hold exactly `src_width * src_height * 4`
/// bytes.
pub(crate) fn resample_rgba(
    src: Vec<u8>,
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Vec<u8> {
    let src = RgbaImage::from_raw(src_width, src_height, src)
        .expect("buffer size does not match source dimensions");
    imageops::resize(&src, dst_width, dst_height, FilterType::Lanczos3).into_raw()
}
