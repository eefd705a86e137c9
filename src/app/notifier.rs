pub const NO_SELECTION_MESSAGE: &str = "Please select an image to print.";

/// Modal feedback to the user.
pub trait Notifier {
    fn show_error(&self, title: &str, message: &str);
}
