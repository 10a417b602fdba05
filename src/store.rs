use image::DynamicImage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Holds the currently selected set of decoded images plus the most recent
/// user-visible error. Replaced wholesale on each selection, never persisted.
#[derive(Default)]
pub struct ImageStore {
    images: Vec<DynamicImage>,
    error: Option<String>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[DynamicImage] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Load the given paths and replace the stored images with every one that
    /// decodes. Paths that cannot be read or decoded are dropped; the last
    /// failure's message is kept as the store error. A selection where every
    /// path decodes clears any previous error.
    pub fn select_images(&mut self, paths: &[PathBuf]) {
        let mut images = Vec::with_capacity(paths.len());
        let mut error = None;

        for path in paths {
            match load_image(path) {
                Ok(image) => images.push(image),
                Err(message) => error = Some(message),
            }
        }

        self.images = images;
        self.error = error;
    }

    /// Empty the image list and clear the error field.
    pub fn clear_images(&mut self) {
        self.images.clear();
        self.error = None;
    }
}

/// Read a file's bytes in one bounded operation and decode them as an image.
/// The returned message is the user-visible error string.
fn load_image(path: &Path) -> Result<DynamicImage, String> {
    let bytes = fs::read(path).map_err(|err| {
        log::warn!("failed to read {}: {}", path.display(), err);
        match err.kind() {
            ErrorKind::PermissionDenied => "Access denied".to_string(),
            _ => "Can't get data".to_string(),
        }
    })?;

    image::load_from_memory(&bytes).map_err(|err| {
        log::warn!("failed to decode {}: {}", path.display(), err);
        "Can't get data".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::fs;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        let image = RgbImage::from_pixel(width, height, image::Rgb([10, 120, 200]));
        image.save(&path).unwrap();
        path
    }

    fn write_garbage(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"not an image at all").unwrap();
        path
    }

    #[test]
    fn test_select_all_valid() {
        let dir = TempDir::new().unwrap();
        let paths = vec![
            write_png(&dir, "a.png", 100, 100),
            write_png(&dir, "b.png", 50, 50),
        ];

        let mut store = ImageStore::new();
        store.set_error("stale error");
        store.select_images(&paths);

        assert_eq!(store.images().len(), 2);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_select_all_invalid_sets_error() {
        let dir = TempDir::new().unwrap();
        let paths = vec![
            write_garbage(&dir, "junk.png"),
            dir.path().join("missing.png"),
        ];

        let mut store = ImageStore::new();
        store.select_images(&paths);

        assert!(store.is_empty());
        assert_eq!(store.error(), Some("Can't get data"));
    }

    #[test]
    fn test_mixed_selection_keeps_valid_and_preserves_error() {
        let dir = TempDir::new().unwrap();
        let paths = vec![
            write_png(&dir, "good.png", 64, 64),
            write_garbage(&dir, "bad.png"),
        ];

        let mut store = ImageStore::new();
        store.select_images(&paths);

        assert_eq!(store.images().len(), 1);
        assert_eq!(store.error(), Some("Can't get data"));
    }

    #[test]
    fn test_selection_replaces_previous_images() {
        let dir = TempDir::new().unwrap();
        let first = vec![
            write_png(&dir, "a.png", 10, 10),
            write_png(&dir, "b.png", 10, 10),
        ];
        let second = vec![write_png(&dir, "c.png", 20, 20)];

        let mut store = ImageStore::new();
        store.select_images(&first);
        store.select_images(&second);

        assert_eq!(store.images().len(), 1);
        assert_eq!(store.images()[0].width(), 20);
    }

    #[test]
    fn test_clear_images() {
        let dir = TempDir::new().unwrap();
        let paths = vec![write_png(&dir, "a.png", 10, 10)];

        let mut store = ImageStore::new();
        store.select_images(&paths);
        store.set_error("leftover");
        store.clear_images();

        assert!(store.is_empty());
        assert_eq!(store.error(), None);
    }
}
