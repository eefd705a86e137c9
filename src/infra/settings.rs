use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// State that survives between runs. Only the last opened folder is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    #[serde(default)]
    pub last_opened_folder: Option<PathBuf>,
}

impl PersistedSettings {
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(error) => return Err(GalleryError::Io(error)),
        };

        serde_json::from_str(&raw).map_err(|error| {
            GalleryError::Settings(format!("failed to parse {}: {error}", path.display()))
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), GalleryError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let raw = serde_json::to_string_pretty(self)
            .map_err(|error| GalleryError::Settings(error.to_string()))?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// The stored folder, if it still exists as a directory.
    pub fn restorable_folder(&self) -> Option<&Path> {
        self.last_opened_folder
            .as_deref()
            .filter(|folder| folder.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().expect("tempdir should be created");
        let settings = PersistedSettings::load(&dir.path().join("absent.json"))
            .expect("missing file should not be an error");
        assert_eq!(settings, PersistedSettings::default());
    }

    #[test]
    fn saved_folder_is_read_back() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("nested").join("settings.json");
        let settings = PersistedSettings {
            last_opened_folder: Some(dir.path().to_path_buf()),
        };

        settings.save(&path).expect("settings should save");
        let loaded = PersistedSettings::load(&path).expect("settings should load");

        assert_eq!(loaded, settings);
        assert_eq!(loaded.restorable_folder(), Some(dir.path()));
    }

    #[test]
    fn malformed_file_is_a_settings_error() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("settings.json");
        fs::write(&path, "last_opened_folder=").expect("file should be written");

        assert!(matches!(
            PersistedSettings::load(&path),
            Err(GalleryError::Settings(_))
        ));
    }

    #[test]
    fn vanished_folder_is_not_restorable() {
        let dir = TempDir::new().expect("tempdir should be created");
        let settings = PersistedSettings {
            last_opened_folder: Some(dir.path().join("gone")),
        };
        assert_eq!(settings.restorable_folder(), None);
    }
}
