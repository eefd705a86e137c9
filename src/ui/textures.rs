use eframe::egui;
use image::{DynamicImage, RgbaImage};

use crate::app::state::AppState;
use crate::engine::decode::fit_within;
use crate::infra::config::BoundingBox;

/// GPU copies of the decoded images in `AppState`, refreshed when a generation changes.
pub struct TextureStore {
    preview_box: BoundingBox,
    gallery_generation: Option<u64>,
    thumbnails: Vec<Option<egui::TextureHandle>>,
    lightbox_generation: Option<u64>,
    lightbox: Option<egui::TextureHandle>,
    preview_generation: Option<u64>,
    preview: Option<egui::TextureHandle>,
}

impl TextureStore {
    pub fn new(preview_box: BoundingBox) -> Self {
        Self {
            preview_box,
            gallery_generation: None,
            thumbnails: Vec::new(),
            lightbox_generation: None,
            lightbox: None,
            preview_generation: None,
            preview: None,
        }
    }

    pub fn sync(&mut self, ctx: &egui::Context, state: &AppState) {
        if self.gallery_generation != Some(state.gallery_generation) {
            self.thumbnails = state
                .thumbnails
                .iter()
                .enumerate()
                .map(|(index, thumbnail)| {
                    thumbnail
                        .image
                        .as_ref()
                        .ok()
                        .map(|image| upload(ctx, &format!("thumbnail-{index}"), image))
                })
                .collect();
            self.gallery_generation = Some(state.gallery_generation);
        }

        match &state.lightbox {
            Some(view) if self.lightbox_generation != Some(view.generation) => {
                self.lightbox = view
                    .frame
                    .as_ref()
                    .ok()
                    .map(|image| upload(ctx, "lightbox", image));
                self.lightbox_generation = Some(view.generation);
            }
            Some(_) => {}
            None => {
                self.lightbox = None;
                self.lightbox_generation = None;
            }
        }

        match &state.print_preview {
            Some(preview) if self.preview_generation != Some(state.preview_generation) => {
                let bounds = within_texture_limit(ctx, self.preview_box);
                self.preview = preview
                    .surface()
                    .ok()
                    .map(|image| upload_fitted(ctx, "print-preview", image, bounds));
                self.preview_generation = Some(state.preview_generation);
            }
            Some(_) => {}
            None => {
                self.preview = None;
                self.preview_generation = None;
            }
        }
    }

    pub fn thumbnail(&self, index: usize) -> Option<&egui::TextureHandle> {
        self.thumbnails.get(index).and_then(Option::as_ref)
    }

    pub fn lightbox(&self) -> Option<&egui::TextureHandle> {
        self.lightbox.as_ref()
    }

    pub fn preview(&self) -> Option<&egui::TextureHandle> {
        self.preview.as_ref()
    }
}

fn upload(ctx: &egui::Context, name: &str, image: &RgbaImage) -> egui::TextureHandle {
    let size = [image.width() as usize, image.height() as usize];
    let pixels = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
    ctx.load_texture(name, pixels, egui::TextureOptions::LINEAR)
}

/// Uploads a downscaled copy when `image` is larger than `bounds`.
fn upload_fitted(
    ctx: &egui::Context,
    name: &str,
    image: &RgbaImage,
    bounds: BoundingBox,
) -> egui::TextureHandle {
    if image.width() <= bounds.width && image.height() <= bounds.height {
        return upload(ctx, name, image);
    }
    let fitted = fit_within(DynamicImage::ImageRgba8(image.clone()), bounds).into_rgba8();
    upload(ctx, name, &fitted)
}

fn within_texture_limit(ctx: &egui::Context, bounds: BoundingBox) -> BoundingBox {
    let side = ctx.input(|input| input.max_texture_side);
    let side = u32::try_from(side).unwrap_or(u32::MAX);
    BoundingBox::new(bounds.width.min(side), bounds.height.min(side))
}
