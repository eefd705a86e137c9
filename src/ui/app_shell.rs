use eframe::egui;

use crate::app::controller::ApplicationController;
use crate::app::events::AppEvent;
use crate::ui::dialogs::pick_folder;
use crate::ui::textures::TextureStore;
use crate::ui::{grid, lightbox, print_preview, theme};

const WINDOW_TITLE: &str = "Photo Viewer";

pub struct GalleryApp {
    controller: ApplicationController,
    textures: TextureStore,
    applied_fullscreen: bool,
}

impl GalleryApp {
    fn new(controller: ApplicationController) -> Self {
        let textures = TextureStore::new(controller.config().preview_box);
        Self {
            controller,
            textures,
            applied_fullscreen: false,
        }
    }

    fn toolbar(&self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        ui.horizontal(|ui| {
            if ui.button("Open Folder").clicked() {
                if let Some(folder) = pick_folder() {
                    events.push(AppEvent::OpenFolder(folder));
                }
            }
            if ui.button("Print").clicked() {
                events.push(AppEvent::OpenPrintPreview);
            }
            let label = if self.controller.state().fullscreen {
                "Exit Fullscreen"
            } else {
                "Fullscreen"
            };
            if ui.button(label).clicked() {
                events.push(AppEvent::ToggleFullscreen);
            }
        });
    }

    fn status_line(&self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        let session = &self.controller.state().session;
        ui.horizontal(|ui| {
            match session.folder() {
                Some(folder) if session.is_empty() => {
                    ui.label(format!("{}  (no images)", folder.display()))
                }
                Some(folder) => {
                    ui.label(format!("{}  ({} images)", folder.display(), session.len()))
                }
                None => ui.label("No folder open"),
            };
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppEvent::Quit);
                }
            });
        });
    }

    fn apply_window_state(&mut self, ctx: &egui::Context) {
        let state = self.controller.state();
        if state.fullscreen != self.applied_fullscreen {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(state.fullscreen));
            self.applied_fullscreen = state.fullscreen;
        }
        if state.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.textures.sync(ctx, self.controller.state());
        let mut events = Vec::new();

        if ctx.input(|input| input.key_pressed(egui::Key::F11)) {
            events.push(AppEvent::ToggleFullscreen);
        }
        if ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
            events.push(AppEvent::ExitFullscreen);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(10.0);
            self.toolbar(ui, &mut events);
            ui.add_space(10.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.add_space(6.0);
            self.status_line(ui, &mut events);
            ui.add_space(6.0);
        });

        let config = self.controller.config();
        let columns = config.grid_columns;
        let tile_size = egui::vec2(
            config.thumbnail_box.width as f32,
            config.thumbnail_box.height as f32,
        );
        let lightbox_size = [
            config.lightbox_box.width as f32,
            config.lightbox_box.height as f32,
        ];
        egui::CentralPanel::default().show(ctx, |ui| {
            grid::show(
                ui,
                self.controller.state(),
                &self.textures,
                columns,
                tile_size,
                &mut events,
            );
        });

        lightbox::show(
            ctx,
            self.controller.state(),
            &self.textures,
            lightbox_size,
            &mut events,
        );
        print_preview::show(ctx, self.controller.state(), &self.textures, &mut events);

        if !events.is_empty() {
            for event in events {
                self.controller.dispatch(event);
            }
            ctx.request_repaint();
        }
        self.apply_window_state(ctx);
    }
}

pub fn launch_window(controller: ApplicationController) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(controller.config().window_size),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(GalleryApp::new(controller)))
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
