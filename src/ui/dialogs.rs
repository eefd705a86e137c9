use std::path::PathBuf;

use crate::app::notifier::Notifier;
use crate::gallery::SUPPORTED_EXTENSIONS;

/// Native message boxes.
#[derive(Debug, Default)]
pub struct RfdNotifier;

impl Notifier for RfdNotifier {
    fn show_error(&self, title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

pub fn pick_folder() -> Option<PathBuf> {
    rfd::FileDialog::new().pick_folder()
}

pub fn pick_overlay() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Image files", &SUPPORTED_EXTENSIONS)
        .pick_file()
}
