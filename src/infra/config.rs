use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings_path: PathBuf,
    pub print_temp_dir: PathBuf,
    pub grid_columns: usize,
    pub thumbnail_box: BoundingBox,
    pub lightbox_box: BoundingBox,
    /// Display size of the print-preview texture; printing keeps full resolution.
    pub preview_box: BoundingBox,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from("photo-gallery.json"),
            print_temp_dir: std::env::temp_dir(),
            grid_columns: 5,
            thumbnail_box: BoundingBox::new(100, 100),
            lightbox_box: BoundingBox::new(600, 400),
            preview_box: BoundingBox::new(1600, 1200),
            window_size: [1080.0, 600.0],
        }
    }
}
