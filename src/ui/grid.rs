use eframe::egui;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Thumbnail};
use crate::ui::textures::TextureStore;
use crate::ui::theme;

const TILE_SPACING: f32 = 20.0;

/// Row and column of the `index`th tile in a wrap-grid of `columns` columns.
pub fn grid_position(index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (index / columns, index % columns)
}

pub fn show(
    ui: &mut egui::Ui,
    state: &AppState,
    textures: &TextureStore,
    columns: usize,
    tile_size: egui::Vec2,
    events: &mut Vec<AppEvent>,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("thumbnail_grid")
                .spacing([TILE_SPACING, TILE_SPACING])
                .show(ui, |ui| {
                    for (index, thumbnail) in state.thumbnails.iter().enumerate() {
                        let selected = state.session.selected_index() == Some(index);
                        let response = tile(
                            ui,
                            thumbnail,
                            textures.thumbnail(index),
                            selected,
                            tile_size,
                        );

                        if response.double_clicked() {
                            events.push(AppEvent::OpenLightbox(index));
                        } else if response.clicked() {
                            events.push(AppEvent::SelectImage(index));
                        }

                        let (_, column) = grid_position(index, columns);
                        if column + 1 == columns.max(1) {
                            ui.end_row();
                        }
                    }
                });
        });
}

fn tile(
    ui: &mut egui::Ui,
    thumbnail: &Thumbnail,
    texture: Option<&egui::TextureHandle>,
    selected: bool,
    tile_size: egui::Vec2,
) -> egui::Response {
    let fill = if selected {
        theme::SELECTION
    } else {
        theme::BACKGROUND
    };
    let name = thumbnail
        .path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    egui::Frame::default()
        .fill(fill)
        .inner_margin(4.0)
        .show(ui, |ui| {
            ui.set_min_size(tile_size);
            let response = match (texture, &thumbnail.image) {
                (Some(texture), _) => ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .sense(egui::Sense::click()),
                ),
                (None, Err(message)) => ui
                    .add(
                        egui::Label::new(egui::RichText::new("unreadable").color(theme::ERROR))
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_text(message),
                (None, Ok(_)) => ui.add(egui::Spinner::new()),
            };
            response.on_hover_text(name)
        })
        .inner
}
