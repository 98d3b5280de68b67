//! File round-trip tests for `Image::load` and `Image::save`.

use pixbuf::{ChannelOrder, Error, Image, Pixel};

fn noise_image(width: u32, height: u32, opaque: bool) -> Image {
    let mut image = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let a = if opaque { 255 } else { fastrand::u8(..) };
            image.set(
                x,
                y,
                Pixel::new(fastrand::u8(..), fastrand::u8(..), fastrand::u8(..), a),
            );
        }
    }
    image
}

#[test]
fn png_roundtrip_preserves_all_channels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.png");

    let image = noise_image(16, 9, false);
    image.save(&path).unwrap();

    let loaded = Image::open(&path).unwrap();
    assert!(loaded.same(&image));
}

#[test]
fn bmp_roundtrip_preserves_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.bmp");

    let image = noise_image(8, 8, true);
    image.save(&path).unwrap();

    let loaded = Image::open(&path).unwrap();
    assert!(loaded.same_rgb(&image));
}

#[test]
fn tga_roundtrip_preserves_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.tga");

    let image = noise_image(5, 7, true);
    image.save(&path).unwrap();

    let loaded = Image::open(&path).unwrap();
    assert!(loaded.same_rgb(&image));
}

#[test]
fn save_with_unsupported_extension_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();

    let image = noise_image(4, 4, true);
    for name in ["image.gif", "image.jpeg", "image"] {
        let path = dir.path().join(name);
        let err = image.save(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension(_)), "{err}");
        assert!(!path.exists());
    }
}

#[test]
fn load_failure_leaves_image_unchanged() {
    let dir = tempfile::tempdir().unwrap();

    let original = noise_image(6, 3, false);
    let mut image = original.clone();

    assert!(image.load(dir.path().join("does-not-exist.png")).is_err());
    assert_eq!(image.width(), 6);
    assert_eq!(image.height(), 3);
    assert!(image.same(&original));

    // A file that no decoder recognizes fails the same way.
    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"not an image at all").unwrap();
    assert!(image.load(&garbage).is_err());
    assert!(image.same(&original));
}

#[test]
fn non_rgba_order_survives_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bgra.png");

    let mut image = Image::with_order(3, 3, ChannelOrder::Bgra);
    for y in 0..3 {
        for x in 0..3 {
            image.set(x, y, Pixel::new(fastrand::u8(..), fastrand::u8(..), fastrand::u8(..), 255));
        }
    }
    image.save(&path).unwrap();

    // Loading into a BGRA-ordered container re-encodes the decoded RGBA data.
    let mut loaded = Image::with_order(0, 0, ChannelOrder::Bgra);
    loaded.load(&path).unwrap();
    assert_eq!(loaded.order(), ChannelOrder::Bgra);
    assert!(loaded.same(&image));

    // And loading into the default order still compares equal channel-wise.
    let rgba = Image::open(&path).unwrap();
    assert_eq!(rgba.order(), ChannelOrder::Rgba);
    assert!(rgba.same(&image));
}

#[test]
fn load_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let small = dir.path().join("small.png");
    let large = dir.path().join("large.png");

    noise_image(2, 2, true).save(&small).unwrap();
    let big = noise_image(10, 4, true);
    big.save(&large).unwrap();

    let mut image = Image::open(&small).unwrap();
    image.load(&large).unwrap();
    assert_eq!(image.width(), 10);
    assert_eq!(image.height(), 4);
    assert!(image.same(&big));
}
