use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::GalleryError;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Extension match is case-sensitive: `photo.JPG` is not listed.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Lists the supported images directly inside `folder`, in directory-listing order.
///
/// Failing to read `folder` itself is an error; an entry that cannot be
/// resolved (such as a dangling symlink) is skipped.
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>, GalleryError> {
    if !folder.is_dir() {
        return Err(GalleryError::InvalidFolder(folder.to_path_buf()));
    }
    let root = std::path::absolute(folder)?;

    let mut images = Vec::new();
    for entry in WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if error.depth() == 0 || error.path() == Some(root.as_path()) => {
                return Err(GalleryError::Io(error.into()));
            }
            Err(error) => {
                log::warn!("skipping unreadable entry: {error}");
                continue;
            }
        };
        if entry.file_type().is_file() && is_supported_image(entry.path()) {
            images.push(entry.into_path());
        }
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn supported_extensions_are_case_sensitive() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("a.jpeg")));
        assert!(!is_supported_image(Path::new("a.JPG")));
        assert!(!is_supported_image(Path::new("a.txt")));
        assert!(!is_supported_image(Path::new("png")));
    }

    #[test]
    fn lists_only_image_files_in_listing_order() {
        let dir = TempDir::new().expect("tempdir should be created");
        for name in ["a.png", "b.jpg", "c.txt"] {
            fs::write(dir.path().join(name), b"x").expect("file should be written");
        }
        fs::create_dir(dir.path().join("nested.png")).expect("dir should be created");
        fs::write(dir.path().join("nested.png").join("d.png"), b"x")
            .expect("file should be written");

        let images = list_images(dir.path()).expect("listing should succeed");

        let listing_order: Vec<String> = fs::read_dir(dir.path())
            .expect("read_dir should succeed")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().to_string())
            .filter(|name| name == "a.png" || name == "b.jpg")
            .collect();
        assert_eq!(file_names(&images), listing_order);
        assert!(images.iter().all(|path| path.is_absolute()));
    }

    #[test]
    fn empty_folder_yields_empty_list() {
        let dir = TempDir::new().expect("tempdir should be created");
        let images = list_images(dir.path()).expect("listing should succeed");
        assert!(images.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_folder_is_an_error_not_an_empty_gallery() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("tempdir should be created");
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).expect("dir should be created");
        fs::write(locked.join("a.png"), b"x").expect("file should be written");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
            .expect("permissions should change");

        // Privileged users can read the folder anyway.
        let readable = fs::read_dir(&locked).is_ok();
        let result = list_images(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("permissions should be restored");
        if readable {
            return;
        }

        assert!(matches!(result, Err(GalleryError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped() {
        let dir = TempDir::new().expect("tempdir should be created");
        fs::write(dir.path().join("a.png"), b"x").expect("file should be written");
        std::os::unix::fs::symlink(dir.path().join("gone.png"), dir.path().join("b.png"))
            .expect("symlink should be created");

        let images = list_images(dir.path()).expect("listing should succeed");

        assert_eq!(file_names(&images), ["a.png"]);
    }

    #[test]
    fn missing_folder_is_rejected() {
        let dir = TempDir::new().expect("tempdir should be created");
        let missing = dir.path().join("missing");
        assert!(matches!(
            list_images(&missing),
            Err(GalleryError::InvalidFolder(path)) if path == missing
        ));
    }
}
