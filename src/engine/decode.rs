use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbaImage};

use crate::error::GalleryError;
use crate::infra::config::BoundingBox;

pub fn decode_image(path: &Path) -> Result<DynamicImage, GalleryError> {
    ImageReader::open(path)
        .map_err(|error| GalleryError::decode(path, error))?
        .with_guessed_format()
        .map_err(|error| GalleryError::decode(path, error))?
        .decode()
        .map_err(|error| GalleryError::decode(path, error))
}

/// Shrinks `image` to fit inside `bounds`, keeping its aspect ratio.
/// Images that already fit are returned unscaled.
pub fn fit_within(image: DynamicImage, bounds: BoundingBox) -> DynamicImage {
    if image.width() <= bounds.width && image.height() <= bounds.height {
        return image;
    }
    image.resize(bounds.width, bounds.height, FilterType::Lanczos3)
}

/// Decodes `path` and downscales it for display in a `bounds`-sized slot.
pub fn decode_bounded(path: &Path, bounds: BoundingBox) -> Result<RgbaImage, GalleryError> {
    let image = decode_image(path)?;
    Ok(fit_within(image, bounds).to_rgba8())
}
