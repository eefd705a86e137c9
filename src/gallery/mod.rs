pub mod lightbox;
pub mod scanner;
pub mod session;

pub use lightbox::LightboxNavigator;
pub use scanner::{list_images, SUPPORTED_EXTENSIONS};
pub use session::GallerySession;
