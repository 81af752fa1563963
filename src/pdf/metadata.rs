//! Page counting for printed PDFs

use std::path::Path;
use lopdf::{Document, Object};
use crate::error::{Error, Result};

/// Count pages by reading the Count field from the Pages dictionary
/// This handles nested page trees without walking them
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let catalog = doc.get_object(catalog_id)?.as_dict()?;

    let pages_id = catalog.get(b"Pages")?.as_reference()?;
    let pages = doc.get_object(pages_id)?.as_dict()?;

    match pages.get(b"Count")? {
        Object::Integer(n) if *n >= 0 => Ok(*n as usize),
        other => Err(Error::MalformedPdf(format!("Invalid page count: {:?}", other))),
    }
}

/// Count the pages of an in-memory PDF
pub fn count_pages_in_bytes(bytes: &[u8]) -> Result<usize> {
    let doc = Document::load_mem(bytes)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf);
    }

    Ok(page_count)
}

/// Count the pages of a PDF file
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    count_pages_in_bytes(&bytes)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::dictionary;

    /// Minimal PDF with `count` blank Letter pages
    pub(crate) fn blank_pdf(count: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = (0..count)
            .map(|_| {
                let page_id = doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ],
                });
                Object::Reference(page_id)
            })
            .collect();

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => Object::Integer(count as i64),
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("failed to write test PDF");
        bytes
    }

    #[test]
    fn test_count_pages_in_bytes() {
        assert_eq!(count_pages_in_bytes(&blank_pdf(3)).unwrap(), 3);
        assert_eq!(count_pages_in_bytes(&blank_pdf(1)).unwrap(), 1);
    }

    #[test]
    fn test_zero_pages_is_error() {
        let result = count_pages_in_bytes(&blank_pdf(0));
        assert!(matches!(result, Err(Error::EmptyPdf)));
    }

    #[test]
    fn test_garbage_is_pdf_error() {
        let result = count_pages_in_bytes(b"not a pdf");
        assert!(matches!(result, Err(Error::Pdf(_))));
    }

    #[test]
    fn test_count_pages_nonexistent_file() {
        let result = count_pages(Path::new("nonexistent.pdf"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
