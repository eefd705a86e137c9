use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::GalleryError;
use crate::print::PrintQueue;

/// Sends the untouched source file to the printer.
pub fn print_original(
    queue: &dyn PrintQueue,
    path: &Path,
    printer: Option<&str>,
) -> Result<(), GalleryError> {
    log::info!("printing {} as-is", path.display());
    queue.print_file(path, printer)
}

/// Writes `surface` to a temporary bitmap in `temp_dir`, prints it, then deletes it.
pub fn print_surface(
    queue: &dyn PrintQueue,
    surface: &RgbaImage,
    printer: Option<&str>,
    temp_dir: &Path,
) -> Result<(), GalleryError> {
    let mut bitmap = tempfile::Builder::new()
        .prefix("photo-gallery-print-")
        .suffix(".png")
        .tempfile_in(temp_dir)?;

    {
        let mut writer = BufWriter::new(bitmap.as_file_mut());
        surface
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|error| GalleryError::Encode(error.to_string()))?;
        writer.flush()?;
    }

    log::info!(
        "printing composite {}x{} via {}",
        surface.width(),
        surface.height(),
        bitmap.path().display()
    );
    let result = queue.print_file(bitmap.path(), printer);
    bitmap.close()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::print::testing::FakePrintQueue;
    use image::{ImageBuffer, Rgba};
    use tempfile::TempDir;

    #[test]
    fn original_is_sent_unmodified() {
        let queue = FakePrintQueue::default();
        print_original(&queue, Path::new("/photos/a.png"), Some("Office"))
            .expect("print should succeed");

        let jobs = queue.jobs.borrow();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].path, Path::new("/photos/a.png"));
        assert_eq!(jobs[0].printer.as_deref(), Some("Office"));
    }

    #[test]
    fn surface_is_written_printed_and_removed() {
        let dir = TempDir::new().expect("tempdir should be created");
        let queue = FakePrintQueue::default();
        let surface = ImageBuffer::from_pixel(64, 48, Rgba([9_u8, 8, 7, 255]));

        print_surface(&queue, &surface, None, dir.path()).expect("print should succeed");

        let jobs = queue.jobs.borrow();
        assert_eq!(jobs.len(), 1);
        assert!(jobs[0].existed);
        assert_eq!(jobs[0].dimensions, Some((64, 48)));
        assert!(!jobs[0].path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).expect("read_dir").count(), 0);
    }

    #[test]
    fn temporary_bitmap_is_removed_when_printing_fails() {
        let dir = TempDir::new().expect("tempdir should be created");
        let queue = FakePrintQueue {
            fail_with: Some("spooler offline".to_string()),
            ..FakePrintQueue::default()
        };
        let surface = ImageBuffer::from_pixel(4, 4, Rgba([0_u8, 0, 0, 255]));

        let result = print_surface(&queue, &surface, None, dir.path());

        assert!(matches!(result, Err(GalleryError::Print(message)) if message == "spooler offline"));
        assert_eq!(std::fs::read_dir(dir.path()).expect("read_dir").count(), 0);
    }
}
