use anyhow::{Context, Result};
use image::DynamicImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::Path;

use super::encode;

/// Build a PDF document with one page per image, in the given order.
/// Each page's media box matches the image's pixel dimensions in points and
/// carries the image as a full-page DCTDecode XObject.
pub fn pdf_document(images: &[DynamicImage]) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(images.len());

    for (index, image) in images.iter().enumerate() {
        let bitmap = image.to_rgb8();
        let (width, height) = (bitmap.width() as i64, bitmap.height() as i64);

        let jpeg = encode::jpeg_bytes(&bitmap)
            .with_context(|| format!("failed to encode page {} image", index))?;

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width,
                "Height" => height,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg,
        ));

        let name = format!("Im{}", index);
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                // Scale the unit image square up to the full page
                Operation::new(
                    "cm",
                    vec![
                        width.into(),
                        0.into(),
                        0.into(),
                        height.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content
                .encode()
                .with_context(|| format!("failed to encode page {} content", index))?,
        ));

        let mut xobjects = lopdf::Dictionary::new();
        xobjects.set(name, image_id);

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => xobjects,
            },
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => images.len() as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

/// Build the document and write it to disk
pub fn write_pdf(images: &[DynamicImage], path: &Path) -> Result<()> {
    let mut doc = pdf_document(images)?;
    doc.compress();
    log::debug!("writing {} ({} pages)", path.display(), images.len());
    doc.save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn solid_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([0, 80, 160])))
    }

    #[test]
    fn test_document_has_one_page_per_image() {
        let images = vec![solid_image(100, 60), solid_image(30, 40)];
        let doc = pdf_document(&images).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_written_document_reloads_with_page_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.pdf");
        let images = vec![solid_image(16, 16), solid_image(8, 8), solid_image(4, 4)];

        write_pdf(&images, &path).unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_page_media_box_matches_image_dimensions() {
        let doc = pdf_document(&[solid_image(120, 75)]).unwrap();
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();

        assert_eq!(media_box[2].as_i64().unwrap(), 120);
        assert_eq!(media_box[3].as_i64().unwrap(), 75);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.pdf");
        assert!(write_pdf(&[solid_image(4, 4)], &path).is_err());
    }
}
