use std::path::{Path, PathBuf};

/// The images of the open folder and the current selection.
///
/// Selection is stored as an index so it can only ever point into the
/// current image list; replacing the list clears it.
#[derive(Debug, Clone, Default)]
pub struct GallerySession {
    folder: Option<PathBuf>,
    images: Vec<PathBuf>,
    selected: Option<usize>,
}

impl GallerySession {
    pub fn replace(&mut self, folder: PathBuf, images: Vec<PathBuf>) {
        self.folder = Some(folder);
        self.images = images;
        self.selected = None;
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn image(&self, index: usize) -> Option<&Path> {
        self.images.get(index).map(PathBuf::as_path)
    }

    /// Returns false and keeps the old selection when `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_path(&self) -> Option<&Path> {
        self.selected.and_then(|index| self.image(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(names: &[&str]) -> GallerySession {
        let mut session = GallerySession::default();
        session.replace(
            PathBuf::from("/photos"),
            names.iter().map(|name| PathBuf::from("/photos").join(name)).collect(),
        );
        session
    }

    #[test]
    fn select_records_path_and_replaces_prior_selection() {
        let mut session = session_with(&["a.png", "b.jpg"]);
        assert!(session.select(0));
        assert!(session.select(1));
        assert_eq!(session.selected_index(), Some(1));
        assert_eq!(session.selected_path(), Some(Path::new("/photos/b.jpg")));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut session = session_with(&["a.png"]);
        assert!(session.select(0));
        assert!(!session.select(3));
        assert_eq!(session.selected_index(), Some(0));
    }

    #[test]
    fn replacing_folder_clears_images_and_selection() {
        let mut session = session_with(&["a.png", "b.jpg"]);
        session.select(1);

        session.replace(PathBuf::from("/empty"), Vec::new());

        assert!(session.is_empty());
        assert_eq!(session.selected_path(), None);
        assert_eq!(session.folder(), Some(Path::new("/empty")));
    }
}
