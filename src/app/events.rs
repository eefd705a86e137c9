use std::path::PathBuf;

/// Every user action the shell can raise. The controller is the single handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    OpenFolder(PathBuf),
    SelectImage(usize),
    OpenLightbox(usize),
    LightboxNext,
    LightboxPrevious,
    CloseLightbox,
    OpenPrintPreview,
    UploadOverlay(PathBuf),
    SetOverlayEnabled(bool),
    SelectPrinter(Option<String>),
    MakePrinterDefault,
    PrintImage,
    ClosePrintPreview,
    ToggleFullscreen,
    ExitFullscreen,
    Quit,
}
