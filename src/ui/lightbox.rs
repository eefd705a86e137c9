use eframe::egui;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::ui::textures::TextureStore;

const TITLE: &str = "Image View";

pub fn show(
    ctx: &egui::Context,
    state: &AppState,
    textures: &TextureStore,
    size: [f32; 2],
    events: &mut Vec<AppEvent>,
) {
    let Some(view) = &state.lightbox else {
        return;
    };

    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("lightbox"),
        egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(size),
        |ctx, class| {
            if ctx.input(|input| input.viewport().close_requested()) {
                events.push(AppEvent::CloseLightbox);
            }
            if ctx.input(|input| input.key_pressed(egui::Key::ArrowLeft)) {
                events.push(AppEvent::LightboxPrevious);
            }
            if ctx.input(|input| input.key_pressed(egui::Key::ArrowRight)) {
                events.push(AppEvent::LightboxNext);
            }

            let mut body = |ui: &mut egui::Ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(view.navigator.has_previous(), egui::Button::new("<"))
                        .clicked()
                    {
                        events.push(AppEvent::LightboxPrevious);
                    }
                    ui.label(format!(
                        "{} / {}",
                        view.navigator.index() + 1,
                        view.navigator.len()
                    ));
                    if ui
                        .add_enabled(view.navigator.has_next(), egui::Button::new(">"))
                        .clicked()
                    {
                        events.push(AppEvent::LightboxNext);
                    }
                });
                ui.centered_and_justified(|ui| match (textures.lightbox(), &view.frame) {
                    (Some(texture), _) => {
                        ui.add(egui::Image::from_texture(
                            egui::load::SizedTexture::from_handle(texture),
                        ));
                    }
                    (None, Err(message)) => {
                        ui.colored_label(crate::ui::theme::ERROR, message);
                    }
                    (None, Ok(_)) => {
                        ui.spinner();
                    }
                });
            };

            match class {
                egui::ViewportClass::Embedded => {
                    let mut open = true;
                    egui::Window::new(TITLE)
                        .open(&mut open)
                        .default_size(size)
                        .show(ctx, |ui| body(ui));
                    if !open {
                        events.push(AppEvent::CloseLightbox);
                    }
                }
                _ => {
                    egui::CentralPanel::default().show(ctx, |ui| body(ui));
                }
            }
        },
    );
}
