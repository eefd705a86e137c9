mod job;
mod preview;
#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod shell;

use std::path::Path;

use crate::error::GalleryError;

pub use preview::{PrintPreview, PrintStatus};

/// The host's print services.
pub trait PrintQueue {
    fn printers(&self) -> Result<Vec<String>, GalleryError>;

    fn default_printer(&self) -> Result<Option<String>, GalleryError>;

    fn set_default_printer(&self, name: &str) -> Result<(), GalleryError>;

    /// Hands `path` to the platform print verb, on `printer` or the default printer.
    fn print_file(&self, path: &Path, printer: Option<&str>) -> Result<(), GalleryError>;
}

#[cfg(windows)]
pub fn platform_queue() -> Box<dyn PrintQueue> {
    Box::new(shell::ShellPrintQueue)
}

#[cfg(not(windows))]
pub fn platform_queue() -> Box<dyn PrintQueue> {
    Box::new(unsupported::UnsupportedPrintQueue)
}
