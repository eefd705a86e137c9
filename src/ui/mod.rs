pub mod app_shell;
pub mod dialogs;
mod grid;
mod lightbox;
mod print_preview;
mod textures;
mod theme;
