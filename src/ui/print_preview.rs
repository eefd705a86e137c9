use eframe::egui;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::print::{PrintPreview, PrintStatus};
use crate::ui::dialogs::pick_overlay;
use crate::ui::textures::TextureStore;
use crate::ui::theme;

const TITLE: &str = "Print Preview";
const SYSTEM_DEFAULT: &str = "System default";

pub fn show(
    ctx: &egui::Context,
    state: &AppState,
    textures: &TextureStore,
    events: &mut Vec<AppEvent>,
) {
    let Some(preview) = &state.print_preview else {
        return;
    };

    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("print_preview"),
        egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([800.0, 640.0]),
        |ctx, class| {
            if ctx.input(|input| input.viewport().close_requested()) {
                events.push(AppEvent::ClosePrintPreview);
            }

            match class {
                egui::ViewportClass::Embedded => {
                    let mut open = true;
                    egui::Window::new(TITLE)
                        .open(&mut open)
                        .show(ctx, |ui| body(ui, preview, textures, events));
                    if !open {
                        events.push(AppEvent::ClosePrintPreview);
                    }
                }
                _ => {
                    egui::TopBottomPanel::bottom("print_controls").show(ctx, |ui| {
                        controls(ui, preview, events);
                    });
                    egui::CentralPanel::default().show(ctx, |ui| {
                        surface(ui, preview, textures);
                    });
                }
            }
        },
    );
}

fn body(
    ui: &mut egui::Ui,
    preview: &PrintPreview,
    textures: &TextureStore,
    events: &mut Vec<AppEvent>,
) {
    controls(ui, preview, events);
    ui.separator();
    surface(ui, preview, textures);
}

fn controls(ui: &mut egui::Ui, preview: &PrintPreview, events: &mut Vec<AppEvent>) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Upload Overlay").clicked() {
            if let Some(path) = pick_overlay() {
                events.push(AppEvent::UploadOverlay(path));
            }
        }

        let mut enabled = preview.overlay_enabled();
        if ui
            .add_enabled(
                preview.overlay().is_some(),
                egui::Checkbox::new(&mut enabled, "Show overlay"),
            )
            .changed()
        {
            events.push(AppEvent::SetOverlayEnabled(enabled));
        }
    });

    ui.horizontal(|ui| {
        let current = preview.target_printer().map(str::to_string);
        let mut choice = current.clone();
        let system_default = match preview.host_default() {
            Some(name) => format!("{SYSTEM_DEFAULT} ({name})"),
            None => SYSTEM_DEFAULT.to_string(),
        };
        egui::ComboBox::from_label("Printer")
            .selected_text(choice.as_deref().unwrap_or(&system_default))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut choice, None, system_default.as_str());
                for name in preview.printers() {
                    ui.selectable_value(&mut choice, Some(name.clone()), name);
                }
            });
        if choice != current {
            events.push(AppEvent::SelectPrinter(choice));
        }

        if ui
            .add_enabled(current.is_some(), egui::Button::new("Set as default"))
            .clicked()
        {
            events.push(AppEvent::MakePrinterDefault);
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Print Image").clicked() {
            events.push(AppEvent::PrintImage);
        }
        match preview.status() {
            Some(PrintStatus::Sent { printer }) => {
                ui.label(format!(
                    "Sent to {}",
                    printer.as_deref().unwrap_or("the default printer")
                ));
            }
            Some(PrintStatus::DefaultPrinterChanged(name)) => {
                ui.label(format!("{name} is now the default printer"));
            }
            Some(PrintStatus::Failed(message)) => {
                ui.colored_label(theme::ERROR, message);
            }
            None => {}
        }
    });
    ui.add_space(6.0);
}

fn surface(ui: &mut egui::Ui, preview: &PrintPreview, textures: &TextureStore) {
    ui.centered_and_justified(|ui| match (textures.preview(), preview.surface()) {
        (Some(texture), _) => {
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                    .shrink_to_fit(),
            );
        }
        (None, Err(message)) => {
            ui.colored_label(theme::ERROR, message);
        }
        (None, Ok(_)) => {
            ui.spinner();
        }
    });
}
