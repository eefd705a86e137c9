use std::path::PathBuf;

use image::RgbaImage;

use crate::gallery::{GallerySession, LightboxNavigator};
use crate::print::PrintPreview;

/// A decoded grid tile. Unreadable sources keep their slot and carry the error.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub path: PathBuf,
    pub image: Result<RgbaImage, String>,
}

#[derive(Debug, Clone)]
pub struct LightboxView {
    pub navigator: LightboxNavigator,
    pub frame: Result<RgbaImage, String>,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub session: GallerySession,
    pub thumbnails: Vec<Thumbnail>,
    pub gallery_generation: u64,
    pub lightbox: Option<LightboxView>,
    pub lightbox_generation: u64,
    pub print_preview: Option<PrintPreview>,
    /// Advances whenever the preview surface is replaced, across preview windows.
    pub preview_generation: u64,
    pub fullscreen: bool,
    pub quit_requested: bool,
}
