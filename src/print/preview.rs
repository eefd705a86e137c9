use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::engine::compose::compose;
use crate::error::GalleryError;
use crate::print::job::{print_original, print_surface};
use crate::print::PrintQueue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintStatus {
    Sent { printer: Option<String> },
    DefaultPrinterChanged(String),
    Failed(String),
}

/// State of the print-preview window for one selected image.
#[derive(Debug)]
pub struct PrintPreview {
    base: PathBuf,
    overlay: Option<PathBuf>,
    overlay_enabled: bool,
    printers: Vec<String>,
    host_default: Option<String>,
    target_printer: Option<String>,
    surface: Result<RgbaImage, String>,
    status: Option<PrintStatus>,
}

impl PrintPreview {
    /// Opens on the system default printer; `target_printer` stays `None`
    /// until the user picks one, so the plain `print` verb is used.
    pub fn open(base: PathBuf, queue: &dyn PrintQueue) -> Self {
        let printers = queue.printers().unwrap_or_else(|error| {
            log::warn!("printer enumeration failed: {error}");
            Vec::new()
        });
        let host_default = queue.default_printer().unwrap_or_else(|error| {
            log::warn!("default printer lookup failed: {error}");
            None
        });

        let mut preview = Self {
            base,
            overlay: None,
            overlay_enabled: false,
            printers,
            host_default,
            target_printer: None,
            surface: Err(String::new()),
            status: None,
        };
        preview.render();
        preview
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn overlay(&self) -> Option<&Path> {
        self.overlay.as_deref()
    }

    pub fn overlay_enabled(&self) -> bool {
        self.overlay_enabled
    }

    /// The overlay that takes part in rendering and printing right now.
    pub fn active_overlay(&self) -> Option<&Path> {
        self.overlay.as_deref().filter(|_| self.overlay_enabled)
    }

    pub fn printers(&self) -> &[String] {
        &self.printers
    }

    pub fn host_default(&self) -> Option<&str> {
        self.host_default.as_deref()
    }

    pub fn target_printer(&self) -> Option<&str> {
        self.target_printer.as_deref()
    }

    pub fn surface(&self) -> Result<&RgbaImage, &str> {
        self.surface.as_ref().map_err(String::as_str)
    }

    pub fn status(&self) -> Option<&PrintStatus> {
        self.status.as_ref()
    }

    pub fn set_overlay(&mut self, path: PathBuf) {
        self.overlay = Some(path);
        self.overlay_enabled = true;
        self.render();
    }

    /// Returns whether the surface was re-rendered.
    pub fn set_overlay_enabled(&mut self, enabled: bool) -> bool {
        if self.overlay_enabled == enabled {
            return false;
        }
        self.overlay_enabled = enabled;
        self.render();
        true
    }

    pub fn select_printer(&mut self, printer: Option<String>) {
        self.target_printer = printer;
    }

    pub fn make_target_default(&mut self, queue: &dyn PrintQueue) -> Result<(), GalleryError> {
        let Some(name) = self.target_printer.clone() else {
            return Err(GalleryError::Print("no printer chosen".to_string()));
        };
        let result = queue.set_default_printer(&name);
        self.status = Some(match &result {
            Ok(()) => PrintStatus::DefaultPrinterChanged(name),
            Err(error) => PrintStatus::Failed(error.to_string()),
        });
        result
    }

    /// Prints the composite when an overlay is active, otherwise the original file.
    pub fn print(&mut self, queue: &dyn PrintQueue, temp_dir: &Path) -> Result<(), GalleryError> {
        let printer = self.target_printer.as_deref();
        let result = if self.active_overlay().is_some() {
            match &self.surface {
                Ok(surface) => print_surface(queue, surface, printer, temp_dir),
                Err(message) => Err(GalleryError::Print(format!(
                    "overlay could not be rendered: {message}"
                ))),
            }
        } else {
            print_original(queue, &self.base, printer)
        };

        self.status = Some(match &result {
            Ok(()) => PrintStatus::Sent {
                printer: self.target_printer.clone(),
            },
            Err(error) => PrintStatus::Failed(error.to_string()),
        });
        result
    }

    fn render(&mut self) {
        self.surface = compose(&self.base, self.active_overlay()).map_err(|error| {
            log::warn!("print preview render failed: {error}");
            error.to_string()
        });
    }
}
