//! The owned image container.

use std::borrow::Cow;
use std::fmt;

use crate::pixel::{swizzle_from_rgba, swizzle_to_rgba, ChannelOrder, Pixel};
use crate::resample;
use crate::resolution::Resolution;

/// An owned 8-bit RGBA image.
///
/// Pixels are stored row-major in a contiguous buffer, each encoded in the image's
/// [`ChannelOrder`]. An image is either *empty* (both dimensions zero, no pixel data) or has
/// strictly positive width and height. Cloning an image deep-copies its buffer.
#[derive(Clone, Default)]
pub struct Image {
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// Invariant: `buf.len() == width * height * 4`.
    pub(crate) buf: Vec<u8>,
    pub(crate) order: ChannelOrder,
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

fn check_dimensions(width: u32, height: u32) {
    assert!(
        (width > 0) == (height > 0),
        "invalid image dimensions {width}x{height} (must be both zero or both positive)",
    );
}

impl Image {
    /// Creates a transparent black image of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if exactly one of `width` and `height` is zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_order(width, height, ChannelOrder::default())
    }

    /// Creates a transparent black image whose buffer is encoded in `order`.
    ///
    /// # Panics
    ///
    /// Panics if exactly one of `width` and `height` is zero.
    pub fn with_order(width: u32, height: u32, order: ChannelOrder) -> Self {
        check_dimensions(width, height);
        Self {
            width,
            height,
            buf: vec![0; byte_len(width, height)],
            order,
        }
    }

    /// Creates an empty image with zero dimensions and no pixel data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an [`Image`] from raw, preexisting RGBA pixel data.
    ///
    /// `buf` needs to contain data in the following interleaved pixel format:
    /// `rrrrrrrr gggggggg bbbbbbbb aaaaaaaa`. Its length needs to be exactly
    /// `width * height * 4`, or this function will panic.
    pub fn from_rgba8(width: u32, height: u32, buf: &[u8]) -> Self {
        check_dimensions(width, height);
        let expected_size = byte_len(width, height);
        assert_eq!(
            expected_size,
            buf.len(),
            "incorrect buffer size {} for {}x{} image (expected {} bytes)",
            buf.len(),
            width,
            height,
            expected_size,
        );
        Self {
            width,
            height,
            buf: buf.to_vec(),
            order: ChannelOrder::default(),
        }
    }

    /// Returns the width of this image, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of this image, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the size of this image.
    #[inline]
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    /// Returns `true` if this image holds no pixel data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the channel order the pixel buffer is encoded in.
    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Returns the raw pixel buffer, encoded in [`Image::order`].
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the raw pixel buffer mutably, encoded in [`Image::order`].
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Returns the pixel at the given coordinates.
    ///
    /// # Panics
    ///
    /// This will panic if `(x, y)` is outside the bounds of this image.
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        let idx = self.byte_index(x, y);
        let bytes = [
            self.buf[idx],
            self.buf[idx + 1],
            self.buf[idx + 2],
            self.buf[idx + 3],
        ];
        self.order.decode(bytes)
    }

    /// Sets the pixel at the given coordinates.
    ///
    /// # Panics
    ///
    /// This will panic if `(x, y)` is outside the bounds of this image.
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = self.byte_index(x, y);
        self.buf[idx..idx + 4].copy_from_slice(&self.order.encode(pixel));
    }

    fn byte_index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel coordinates ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height,
        );
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Discards all pixel data and resets both dimensions to zero.
    ///
    /// Idempotent. The channel order is retained.
    pub fn clear(&mut self) {
        self.buf = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    /// Resizes the image as in a window or canvas resize.
    ///
    /// Preserves as much as possible of the old content in the top-left corner; newly visible
    /// pixels are transparent black. Resizing to `(0, 0)` clears the image; resizing to the
    /// current dimensions does nothing.
    ///
    /// # Panics
    ///
    /// Panics if exactly one of `width` and `height` is zero.
    pub fn resize(&mut self, width: u32, height: u32) {
        check_dimensions(width, height);
        if width == 0 && height == 0 {
            self.clear();
            return;
        }
        if width == self.width && height == self.height {
            return;
        }

        let mut new_buf = vec![0; byte_len(width, height)];
        let old_stride = self.width as usize * 4;
        let new_stride = width as usize * 4;
        let row_bytes = self.width.min(width) as usize * 4;
        for y in 0..self.height.min(height) as usize {
            let src = y * old_stride;
            let dst = y * new_stride;
            new_buf[dst..dst + row_bytes].copy_from_slice(&self.buf[src..src + row_bytes]);
        }

        self.width = width;
        self.height = height;
        self.buf = new_buf;
    }

    /// Resizes the image by resampling its content to fit the new dimensions.
    ///
    /// Resampling uses a Lanczos filter. Rescaling to `(0, 0)` clears the image; rescaling to the
    /// current dimensions does nothing; rescaling an empty image yields a transparent black image
    /// of the requested size.
    ///
    /// # Panics
    ///
    /// Panics if exactly one of `width` and `height` is zero.
    pub fn rescale(&mut self, width: u32, height: u32) {
        check_dimensions(width, height);
        if width == 0 && height == 0 {
            self.clear();
            return;
        }
        if width == self.width && height == self.height {
            return;
        }
        if self.is_empty() {
            // No content to interpolate.
            self.buf = vec![0; byte_len(width, height)];
            self.width = width;
            self.height = height;
            return;
        }

        log::trace!("rescale {} -> {}x{}", self.resolution(), width, height);

        // The resampler only understands RGBA.
        let src = self.rgba_bytes().into_owned();
        let mut out = resample::resample_rgba(src, self.width, self.height, width, height);
        swizzle_from_rgba(self.order, &mut out);

        self.width = width;
        self.height = height;
        self.buf = out;
    }

    /// Replaces every pixel's color channels with their average.
    ///
    /// The average is computed as `(r + g + b) / 3` with truncating integer division; alpha is
    /// left untouched.
    pub fn greyscale(&mut self) {
        let [r, g, b, _] = self.order.offsets();
        for px in self.buf.chunks_exact_mut(4) {
            let grey = ((u16::from(px[r]) + u16::from(px[g]) + u16::from(px[b])) / 3) as u8;
            px[r] = grey;
            px[g] = grey;
            px[b] = grey;
        }
    }

    /// Reverses the order of the image's rows, flipping it vertically in place.
    pub fn flip(&mut self) {
        let row_bytes = self.width as usize * 4;
        let height = self.height as usize;
        for y in 0..height / 2 {
            let top = y * row_bytes;
            let bottom = (height - 1 - y) * row_bytes;
            let (a, b) = self.buf.split_at_mut(bottom);
            a[top..top + row_bytes].swap_with_slice(&mut b[..row_bytes]);
        }
    }

    /// Reverses the order of the pixels within each row, mirroring the image horizontally in
    /// place.
    pub fn mirror(&mut self) {
        if self.width < 2 {
            return;
        }
        let row_bytes = self.width as usize * 4;
        for row in self.buf.chunks_exact_mut(row_bytes) {
            let mut i = 0;
            let mut j = self.width as usize - 1;
            while i < j {
                for c in 0..4 {
                    row.swap(i * 4 + c, j * 4 + c);
                }
                i += 1;
                j -= 1;
            }
        }
    }

    /// Returns `true` if both images have the same dimensions and identical r, g, b and a values
    /// for every pixel.
    pub fn same(&self, rhs: &Image) -> bool {
        self.compare(rhs, true)
    }

    /// Like [`Image::same`], but ignores the alpha channel.
    pub fn same_rgb(&self, rhs: &Image) -> bool {
        self.compare(rhs, false)
    }

    fn compare(&self, rhs: &Image, with_alpha: bool) -> bool {
        if self.width != rhs.width || self.height != rhs.height {
            return false;
        }
        // Self-comparison (and comparison of two empty images) hits the same storage; no need to
        // touch the pixel data.
        if self.buf.as_ptr() == rhs.buf.as_ptr() {
            return true;
        }
        if with_alpha && self.order == rhs.order {
            return self.buf == rhs.buf;
        }

        let channels = if with_alpha { 4 } else { 3 };
        let lhs_off = self.order.offsets();
        let rhs_off = rhs.order.offsets();
        self.buf
            .chunks_exact(4)
            .zip(rhs.buf.chunks_exact(4))
            .all(|(l, r)| (0..channels).all(|c| l[lhs_off[c]] == r[rhs_off[c]]))
    }

    /// Returns the pixel buffer re-encoded as RGBA.
    ///
    /// Borrows the buffer unchanged when the internal order already is RGBA.
    pub(crate) fn rgba_bytes(&self) -> Cow<'_, [u8]> {
        match self.order {
            ChannelOrder::Rgba => Cow::Borrowed(&self.buf),
            order => {
                let mut bytes = self.buf.clone();
                swizzle_to_rgba(order, &mut bytes);
                Cow::Owned(bytes)
            }
        }
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} Image ({:?})", self.width, self.height, self.order)
    }
}
