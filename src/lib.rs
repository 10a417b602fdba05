// Library exports for reuse by the GUI shell
pub mod image_export;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use image_export::{export_batch, ConversionOutcome, ExportRequest, OutputFormat};
pub use store::ImageStore;
