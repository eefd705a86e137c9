use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::engine::decode::decode_image;
use crate::error::GalleryError;

/// Stretches `overlay` to the base's exact pixel size and alpha-blends it at the origin.
pub fn composite(base: &DynamicImage, overlay: &DynamicImage) -> RgbaImage {
    let mut canvas = base.to_rgba8();
    let stretched = overlay
        .resize_exact(canvas.width(), canvas.height(), FilterType::Lanczos3)
        .to_rgba8();
    imageops::overlay(&mut canvas, &stretched, 0, 0);
    canvas
}

/// Renders the print surface for `base`, with `overlay` on top when given.
///
/// The result always has the base image's dimensions.
pub fn compose(base: &Path, overlay: Option<&Path>) -> Result<RgbaImage, GalleryError> {
    let base_image = decode_image(base)?;
    match overlay {
        Some(overlay_path) => {
            let overlay_image = decode_image(overlay_path)?;
            Ok(composite(&base_image, &overlay_image))
        }
        None => Ok(base_image.to_rgba8()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};
    use tempfile::TempDir;

    fn write_base(dir: &TempDir, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.path().join("base.png");
        ImageBuffer::from_fn(width, height, |x, _y| Rgb([(x % 255) as u8, 80_u8, 160_u8]))
            .save(&path)
            .expect("base should be saved");
        path
    }

    #[test]
    fn composite_keeps_base_dimensions_for_any_overlay_size() {
        let dir = TempDir::new().expect("tempdir should be created");
        let base = write_base(&dir, 320, 200);

        for (width, height) in [(16, 16), (1000, 50), (320, 200)] {
            let overlay = dir.path().join(format!("overlay-{width}x{height}.png"));
            ImageBuffer::from_fn(width, height, |_x, _y| Rgba([255_u8, 0, 0, 128]))
                .save(&overlay)
                .expect("overlay should be saved");

            let surface = compose(&base, Some(&overlay)).expect("compose should succeed");
            assert_eq!(surface.dimensions(), (320, 200));
        }
    }

    #[test]
    fn opaque_overlay_replaces_base_pixels() {
        let base = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(8, 8, Rgb([0_u8, 0, 255])));
        let overlay =
            DynamicImage::ImageRgba8(ImageBuffer::from_pixel(8, 8, Rgba([255_u8, 0, 0, 255])));

        let surface = composite(&base, &overlay);
        assert_eq!(surface.get_pixel(4, 4), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn transparent_overlay_leaves_base_untouched() {
        let base = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(8, 8, Rgb([12_u8, 34, 56])));
        let overlay =
            DynamicImage::ImageRgba8(ImageBuffer::from_pixel(4, 4, Rgba([255_u8, 255, 255, 0])));

        let surface = composite(&base, &overlay);
        assert_eq!(surface, base.to_rgba8());
    }

    #[test]
    fn without_overlay_the_base_is_returned() {
        let dir = TempDir::new().expect("tempdir should be created");
        let base = write_base(&dir, 40, 30);

        let surface = compose(&base, None).expect("compose should succeed");
        assert_eq!(surface.dimensions(), (40, 30));
    }

    #[test]
    fn unreadable_overlay_is_reported() {
        let dir = TempDir::new().expect("tempdir should be created");
        let base = write_base(&dir, 40, 30);
        let overlay = dir.path().join("overlay.png");
        std::fs::write(&overlay, b"garbage").expect("file should be written");

        let result = compose(&base, Some(&overlay));
        assert!(matches!(result, Err(GalleryError::Decode { path, .. }) if path == overlay));
    }
}
