use std::path::{Path, PathBuf};

use crate::app::events::AppEvent;
use crate::app::notifier::{Notifier, NO_SELECTION_MESSAGE};
use crate::app::state::{AppState, LightboxView, Thumbnail};
use crate::engine::decode::decode_bounded;
use crate::error::GalleryError;
use crate::gallery::{list_images, LightboxNavigator};
use crate::infra::config::AppConfig;
use crate::infra::settings::PersistedSettings;
use crate::print::{PrintPreview, PrintQueue};

pub struct ApplicationController {
    config: AppConfig,
    settings: PersistedSettings,
    state: AppState,
    print_queue: Box<dyn PrintQueue>,
    notifier: Box<dyn Notifier>,
}

impl ApplicationController {
    pub fn new(
        config: AppConfig,
        print_queue: Box<dyn PrintQueue>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            settings: PersistedSettings::default(),
            state: AppState::default(),
            print_queue,
            notifier,
        }
    }

    /// Loads persisted settings and reopens the last folder when it still exists.
    pub fn bootstrap(&mut self) {
        self.settings =
            PersistedSettings::load(&self.config.settings_path).unwrap_or_else(|error| {
                log::warn!("ignoring unreadable settings: {error}");
                PersistedSettings::default()
            });

        let Some(folder) = self.settings.restorable_folder().map(Path::to_path_buf) else {
            log::debug!("no restorable folder in settings");
            return;
        };
        if let Err(error) = self.load_folder(folder) {
            log::debug!("startup restore skipped: {error}");
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::OpenFolder(folder) => match self.load_folder(folder.clone()) {
                Ok(()) => self.remember_folder(folder),
                Err(error) => {
                    log::warn!("failed to open folder: {error}");
                    self.notifier.show_error("Error", &error.to_string());
                }
            },
            AppEvent::SelectImage(index) => {
                if !self.state.session.select(index) {
                    log::debug!("ignoring selection of missing index {index}");
                }
            }
            AppEvent::OpenLightbox(index) => self.open_lightbox(index),
            AppEvent::LightboxNext => self.move_lightbox(LightboxNavigator::next),
            AppEvent::LightboxPrevious => self.move_lightbox(LightboxNavigator::previous),
            AppEvent::CloseLightbox => self.state.lightbox = None,
            AppEvent::OpenPrintPreview => self.open_print_preview(),
            AppEvent::UploadOverlay(path) => {
                if let Some(preview) = self.state.print_preview.as_mut() {
                    preview.set_overlay(path);
                    self.state.preview_generation += 1;
                }
            }
            AppEvent::SetOverlayEnabled(enabled) => {
                if let Some(preview) = self.state.print_preview.as_mut() {
                    if preview.set_overlay_enabled(enabled) {
                        self.state.preview_generation += 1;
                    }
                }
            }
            AppEvent::SelectPrinter(printer) => {
                if let Some(preview) = self.state.print_preview.as_mut() {
                    preview.select_printer(printer);
                }
            }
            AppEvent::MakePrinterDefault => {
                if let Some(preview) = self.state.print_preview.as_mut() {
                    if let Err(error) = preview.make_target_default(self.print_queue.as_ref()) {
                        log::warn!("failed to change default printer: {error}");
                    }
                }
            }
            AppEvent::PrintImage => {
                if let Some(preview) = self.state.print_preview.as_mut() {
                    match preview.print(self.print_queue.as_ref(), &self.config.print_temp_dir) {
                        Ok(()) => log::info!("print job sent for {}", preview.base().display()),
                        Err(error) => log::warn!("print failed: {error}"),
                    }
                }
            }
            AppEvent::ClosePrintPreview => self.state.print_preview = None,
            AppEvent::ToggleFullscreen => self.state.fullscreen = !self.state.fullscreen,
            AppEvent::ExitFullscreen => self.state.fullscreen = false,
            AppEvent::Quit => self.state.quit_requested = true,
        }
    }

    fn load_folder(&mut self, folder: PathBuf) -> Result<(), GalleryError> {
        let images = list_images(&folder)?;
        let bounds = self.config.thumbnail_box;
        let thumbnails = images
            .iter()
            .map(|path| Thumbnail {
                path: path.clone(),
                image: decode_bounded(path, bounds).map_err(|error| {
                    log::warn!("thumbnail unavailable: {error}");
                    error.to_string()
                }),
            })
            .collect();

        log::info!("loaded {} images from {}", images.len(), folder.display());
        self.state.session.replace(folder, images);
        self.state.thumbnails = thumbnails;
        self.state.gallery_generation += 1;
        self.state.lightbox = None;
        self.state.print_preview = None;
        Ok(())
    }

    fn remember_folder(&mut self, folder: PathBuf) {
        self.settings.last_opened_folder = Some(folder);
        match self.settings.save(&self.config.settings_path) {
            Ok(()) => log::info!("saved settings to {}", self.config.settings_path.display()),
            Err(error) => log::warn!("failed to save settings: {error}"),
        }
    }

    fn open_lightbox(&mut self, index: usize) {
        let Some(navigator) = LightboxNavigator::new(self.state.session.len(), index) else {
            return;
        };
        self.state.lightbox = Some(self.render_lightbox(navigator));
    }

    fn move_lightbox(&mut self, step: fn(&mut LightboxNavigator) -> bool) {
        let Some(mut navigator) = self.state.lightbox.as_ref().map(|view| view.navigator) else {
            return;
        };
        if !step(&mut navigator) {
            log::debug!("lightbox already at edge {}", navigator.index());
            return;
        }
        self.state.lightbox = Some(self.render_lightbox(navigator));
    }

    fn render_lightbox(&mut self, navigator: LightboxNavigator) -> LightboxView {
        self.state.lightbox_generation += 1;
        let frame = match self.state.session.image(navigator.index()) {
            Some(path) => decode_bounded(path, self.config.lightbox_box).map_err(|error| {
                log::warn!("lightbox image unavailable: {error}");
                error.to_string()
            }),
            None => Err(format!("no image at index {}", navigator.index())),
        };
        LightboxView {
            navigator,
            frame,
            generation: self.state.lightbox_generation,
        }
    }

    fn open_print_preview(&mut self) {
        let Some(selected) = self.state.session.selected_path().map(Path::to_path_buf) else {
            self.notifier.show_error("Error", NO_SELECTION_MESSAGE);
            return;
        };
        self.state.print_preview = Some(PrintPreview::open(selected, self.print_queue.as_ref()));
        self.state.preview_generation += 1;
    }
}
