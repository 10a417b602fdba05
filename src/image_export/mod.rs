pub mod encode;
pub mod pdf;

use image::DynamicImage;
use std::fs;
use std::path::Path;

use crate::utils::output_filename;

/// Target encodings for a batch export. Raster variants carry the bitmap
/// encoding tag; the two PDF variants carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Tiff,
    /// One single-page PDF document per image
    Pdf,
    /// One multi-page PDF document holding every image
    SinglePdf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Png,
        OutputFormat::Jpeg,
        OutputFormat::Tiff,
        OutputFormat::Pdf,
        OutputFormat::SinglePdf,
    ];

    /// Name shown in the format selector
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Pdf => "pdf",
            OutputFormat::SinglePdf => "one pdf",
        }
    }

    /// File suffix for output filenames
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Pdf | OutputFormat::SinglePdf => "pdf",
        }
    }

    /// Bitmap encoding tag for raster variants; PDF variants have none
    pub fn bitmap(&self) -> Option<image::ImageFormat> {
        match self {
            OutputFormat::Png => Some(image::ImageFormat::Png),
            OutputFormat::Jpeg => Some(image::ImageFormat::Jpeg),
            OutputFormat::Tiff => Some(image::ImageFormat::Tiff),
            OutputFormat::Pdf | OutputFormat::SinglePdf => None,
        }
    }
}

/// Everything a batch export needs: the ordered images, a destination
/// directory that already exists, and the target format.
#[derive(Clone, Copy)]
pub struct ExportRequest<'a> {
    pub images: &'a [DynamicImage],
    pub dest_dir: &'a Path,
    pub format: OutputFormat,
}

/// Result of a batch export: success, or the last failure's user-visible
/// message. Per-item failures overwrite earlier ones; the batch always runs
/// to completion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    error: Option<String>,
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_error(self) -> Option<String> {
        self.error
    }

    fn record(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

/// Write every image in the request to disk in the requested format.
/// A single synchronous pass: no retries, no rollback, and a failed item
/// never aborts the remaining ones.
pub fn export_batch(request: &ExportRequest<'_>) -> ConversionOutcome {
    let mut outcome = ConversionOutcome::default();

    if request.images.is_empty() {
        outcome.record("No images selected");
        return outcome;
    }

    match request.format {
        OutputFormat::Png | OutputFormat::Jpeg | OutputFormat::Tiff => {
            for (index, image) in request.images.iter().enumerate() {
                let path = request.dest_dir.join(output_filename(index, request.format));
                if let Err(message) = save_raster(image, &path, request.format) {
                    outcome.record(message);
                }
            }
        }
        OutputFormat::Pdf => {
            for (index, image) in request.images.iter().enumerate() {
                let path = request.dest_dir.join(output_filename(index, OutputFormat::Pdf));
                if let Err(err) = pdf::write_pdf(std::slice::from_ref(image), &path) {
                    log::warn!("failed to write {}: {:#}", path.display(), err);
                    outcome.record("Could not write to pdf");
                }
            }
        }
        OutputFormat::SinglePdf => {
            // Combined output always lands in Image0.pdf, regardless of count
            let path = request
                .dest_dir
                .join(output_filename(0, OutputFormat::SinglePdf));
            if let Err(err) = pdf::write_pdf(request.images, &path) {
                log::warn!("failed to write {}: {:#}", path.display(), err);
                outcome.record("Could not write to pdf");
            }
        }
    }

    outcome
}

/// Encode one image to the raster format's byte representation and write it.
/// The returned message is the user-visible error string for this item.
fn save_raster(image: &DynamicImage, path: &Path, format: OutputFormat) -> Result<(), String> {
    let bytes = encode::encode_to_bytes(image, format).map_err(|err| {
        log::warn!("failed to encode {}: {:#}", path.display(), err);
        format!("Failed to convert image to {}", format.label())
    })?;

    log::debug!("writing {} ({} bytes)", path.display(), bytes.len());
    fs::write(path, &bytes).map_err(|err| err.to_string())
}
