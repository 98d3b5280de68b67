//! Image file loading and saving.

use std::path::Path;

use image::{io::Reader, ColorType};

use crate::error::{Error, Result};
use crate::image::Image;
use crate::pixel::swizzle_from_rgba;

/// Enumeration of output formats supported by [`Image::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageFormat {
    /// Portable Network Graphics.
    Png,
    /// Windows bitmap.
    Bmp,
    /// Truevision TGA.
    Tga,
}

impl ImageFormat {
    /// Determines the output format from a path's file extension.
    ///
    /// The extension is matched case-insensitively; a missing or unrecognized extension is an
    /// error.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("bmp") => Ok(Self::Bmp),
            Some("tga") => Ok(Self::Tga),
            _ => Err(Error::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
            ImageFormat::Tga => image::ImageFormat::Tga,
        }
    }
}

/// Image file I/O.
impl Image {
    /// Loads an image from the filesystem, replacing the current content.
    ///
    /// The file format is detected by sniffing the file's content; all raster formats enabled in
    /// the underlying codec library (PNG, BMP, TGA, JPEG, GIF) are supported, with any native
    /// channel count expanded to RGBA. On failure the image is left unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.load_impl(path.as_ref())
    }

    fn load_impl(&mut self, path: &Path) -> Result<()> {
        let decoded = Reader::open(path)?.with_guessed_format()?.decode()?;
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        let mut buf = rgba.into_raw();
        swizzle_from_rgba(self.order, &mut buf);

        log::debug!("loaded {}x{} image from '{}'", width, height, path.display());

        self.width = width;
        self.height = height;
        self.buf = buf;
        Ok(())
    }

    /// Loads an image from the filesystem into a fresh [`Image`].
    ///
    /// See [`Image::load`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut image = Image::empty();
        image.load(path)?;
        Ok(image)
    }

    /// Saves the image to the filesystem.
    ///
    /// The output format is selected by the path's file extension (case-insensitive); `.png`,
    /// `.bmp` and `.tga` are supported. An unsupported extension fails without touching the
    /// filesystem. The image itself is never modified, even when encoding fails.
    ///
    /// # Panics
    ///
    /// Panics if the image is empty.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_impl(path.as_ref())
    }

    fn save_impl(&self, path: &Path) -> Result<()> {
        assert!(!self.is_empty(), "cannot save an empty image");

        let format = ImageFormat::from_path(path)?;

        // Encoders only understand RGBA.
        let rgba = self.rgba_bytes();
        image::save_buffer_with_format(
            path,
            &rgba,
            self.width,
            self.height,
            ColorType::Rgba8,
            format.into(),
        )?;

        log::debug!("saved {}x{} image to '{}'", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path() {
        assert_eq!(ImageFormat::from_path(Path::new("a.png")).unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("a.PNG")).unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("dir.d/a.bmp")).unwrap(), ImageFormat::Bmp);
        assert_eq!(ImageFormat::from_path(Path::new("a.b.tga")).unwrap(), ImageFormat::Tga);

        assert!(ImageFormat::from_path(Path::new("a.jpg")).is_err());
        assert!(ImageFormat::from_path(Path::new("noextension")).is_err());
    }
}
