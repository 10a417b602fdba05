use std::path::Path;

use crate::image_export::OutputFormat;

/// File extensions the decoder stack accepts, used by the GUI file picker.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff"];

/// Get file extension in lowercase
pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a file has one of the supported image extensions
pub fn is_supported_image(path: &Path) -> bool {
    match get_file_extension(path) {
        Some(ext) => SUPPORTED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Build the output filename for the image at the given position.
/// Always `Image{index}.{suffix}`, zero-based, with no collision avoidance.
pub fn output_filename(index: usize, format: OutputFormat) -> String {
    format!("Image{}.{}", index, format.suffix())
}
