//! Pixel values and channel-order handling.

use std::fmt;

/// A single 8-bit RGBA pixel.
///
/// The fields always carry their semantic meaning; how a pixel is laid out inside an image buffer
/// is decided by the image's [`ChannelOrder`]. Colors are non-premultiplied.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// An encoded pixel occupies exactly 4 bytes.
const _: () = assert!(std::mem::size_of::<Pixel>() == 4);

impl Pixel {
    /// Fully transparent black (all components are 0).
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0, 255);
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn with_alpha(mut self, a: u8) -> Pixel {
        self.a = a;
        self
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Byte layout of an encoded pixel within an image buffer.
///
/// External codec and resampling routines only understand [`ChannelOrder::Rgba`]; buffers held in
/// any other order are swizzled to RGBA before such a call and swizzled back afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    #[default]
    Rgba,
    Argb,
    Abgr,
    Bgra,
}

impl ChannelOrder {
    /// Byte offsets of the r, g, b and a channels within an encoded pixel.
    pub(crate) const fn offsets(self) -> [usize; 4] {
        match self {
            ChannelOrder::Rgba => [0, 1, 2, 3],
            ChannelOrder::Argb => [1, 2, 3, 0],
            ChannelOrder::Abgr => [3, 2, 1, 0],
            ChannelOrder::Bgra => [2, 1, 0, 3],
        }
    }

    /// Encodes `pixel` into its 4-byte representation in this order.
    #[inline]
    pub fn encode(self, pixel: Pixel) -> [u8; 4] {
        let [r, g, b, a] = self.offsets();
        let mut bytes = [0; 4];
        bytes[r] = pixel.r;
        bytes[g] = pixel.g;
        bytes[b] = pixel.b;
        bytes[a] = pixel.a;
        bytes
    }

    /// Decodes a 4-byte pixel encoded in this order.
    #[inline]
    pub fn decode(self, bytes: [u8; 4]) -> Pixel {
        let [r, g, b, a] = self.offsets();
        Pixel {
            r: bytes[r],
            g: bytes[g],
            b: bytes[b],
            a: bytes[a],
        }
    }
}

/// Re-encodes a pixel buffer from `order` into RGBA, in place.
///
/// No-op when `order` already is RGBA.
pub(crate) fn swizzle_to_rgba(order: ChannelOrder, buf: &mut [u8]) {
    if order == ChannelOrder::Rgba {
        return;
    }
    for chunk in buf.chunks_exact_mut(4) {
        let px = order.decode([chunk[0], chunk[1], chunk[2], chunk[3]]);
        chunk.copy_from_slice(&[px.r, px.g, px.b, px.a]);
    }
}

/// Re-encodes an RGBA pixel buffer into `order`, in place.
///
/// No-op when `order` already is RGBA.
pub(crate) fn swizzle_from_rgba(order: ChannelOrder, buf: &mut [u8]) {
    if order == ChannelOrder::Rgba {
        return;
    }
    for chunk in buf.chunks_exact_mut(4) {
        let px = Pixel::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        chunk.copy_from_slice(&order.encode(px));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_layouts() {
        let px = Pixel::new(1, 2, 3, 4);
        assert_eq!(ChannelOrder::Rgba.encode(px), [1, 2, 3, 4]);
        assert_eq!(ChannelOrder::Argb.encode(px), [4, 1, 2, 3]);
        assert_eq!(ChannelOrder::Abgr.encode(px), [4, 3, 2, 1]);
        assert_eq!(ChannelOrder::Bgra.encode(px), [3, 2, 1, 4]);
    }

    #[test]
    fn decode_inverts_encode() {
        let px = Pixel::new(10, 20, 30, 40);
        for order in [
            ChannelOrder::Rgba,
            ChannelOrder::Argb,
            ChannelOrder::Abgr,
            ChannelOrder::Bgra,
        ] {
            assert_eq!(order.decode(order.encode(px)), px);
        }
    }

    #[test]
    fn swizzle_buffer() {
        // Two BGRA-encoded pixels.
        let mut buf = vec![3, 2, 1, 4, 30, 20, 10, 40];
        swizzle_to_rgba(ChannelOrder::Bgra, &mut buf);
        assert_eq!(buf, [1, 2, 3, 4, 10, 20, 30, 40]);
        swizzle_from_rgba(ChannelOrder::Bgra, &mut buf);
        assert_eq!(buf, [3, 2, 1, 4, 30, 20, 10, 40]);
    }
}
