// Selection and conversion handlers for the GUI
// Bridges the native dialogs to the library's store and batch converter

use super::PhotoExporterApp;
use eframe::egui;
use photo_exporter::image_export::{export_batch, ExportRequest};
use photo_exporter::utils;

impl PhotoExporterApp {
    /// Open the native file picker and replace the store's selection
    pub fn select_images(&mut self) {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("Images", utils::SUPPORTED_EXTENSIONS)
            .set_title("Select images")
            .pick_files()
        {
            self.store.select_images(&paths);
            self.previews_stale = true;
        }
    }

    pub fn clear_images(&mut self) {
        self.store.clear_images();
        self.previews.clear();
        self.previews_stale = false;
    }

    /// Prompt for a destination folder, then run the synchronous batch
    /// converter. Dismissing the prompt records the cancellation message.
    pub fn convert_images(&mut self) {
        if self.store.is_empty() {
            self.store.set_error("No images selected");
            return;
        }

        match rfd::FileDialog::new().set_title("Select Folder").pick_folder() {
            Some(directory) => {
                let outcome = export_batch(&ExportRequest {
                    images: self.store.images(),
                    dest_dir: &directory,
                    format: self.selected_format,
                });
                match outcome.into_error() {
                    Some(message) => self.store.set_error(message),
                    None => self.store.clear_error(),
                }
            }
            None => self.store.set_error("Folder selection was cancelled."),
        }
    }

    /// Re-upload one texture per stored image for the preview surface
    pub fn rebuild_previews(&mut self, ctx: &egui::Context) {
        self.previews.clear();

        for (index, image) in self.store.images().iter().enumerate() {
            let rgba = image.to_rgba8();
            let (width, height) = (rgba.width() as usize, rgba.height() as usize);
            let color_image = egui::ColorImage {
                size: [width, height],
                source_size: egui::vec2(width as f32, height as f32),
                pixels: rgba
                    .pixels()
                    .map(|p| egui::Color32::from_rgba_unmultiplied(p.0[0], p.0[1], p.0[2], p.0[3]))
                    .collect(),
            };

            self.previews.push(ctx.load_texture(
                format!("preview_{}", index),
                color_image,
                egui::TextureOptions::LINEAR,
            ));
        }
    }
}
