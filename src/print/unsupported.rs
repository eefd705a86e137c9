use std::path::Path;

use crate::error::GalleryError;
use crate::print::PrintQueue;

/// Used on hosts without the Windows shell print verb.
#[derive(Debug, Default)]
pub struct UnsupportedPrintQueue;

impl PrintQueue for UnsupportedPrintQueue {
    fn printers(&self) -> Result<Vec<String>, GalleryError> {
        Ok(Vec::new())
    }

    fn default_printer(&self) -> Result<Option<String>, GalleryError> {
        Ok(None)
    }

    fn set_default_printer(&self, _name: &str) -> Result<(), GalleryError> {
        Err(GalleryError::PrintUnsupported)
    }

    fn print_file(&self, _path: &Path, _printer: Option<&str>) -> Result<(), GalleryError> {
        Err(GalleryError::PrintUnsupported)
    }
}
