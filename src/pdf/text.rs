//! PDF text extraction.
//!
//! This module wraps `lopdf` behind a small extractor type. Construction
//! runs a capability probe (once per process): a minimal one-page document
//! is generated, serialized, and parsed back. If the probe fails, every
//! constructor call reports the cached failure instead of deferring the
//! problem into the conversion hot path.

use super::error::{PdfError, Result};
use lopdf::{Document, Object, Stream, dictionary};
use once_cell::sync::Lazy;

/// Cached outcome of the once-per-process capability probe.
static PARSER_READY: Lazy<Result<()>> = Lazy::new(probe_capability);

/// Extracts plain text from PDF bytes, page by page.
#[derive(Debug)]
pub struct PdfTextExtractor {
    _private: (),
}

impl PdfTextExtractor {
    /// Create an extractor, failing fast when the parsing capability is
    /// unavailable in this environment.
    pub fn new() -> Result<Self> {
        PARSER_READY.as_ref().map_err(Clone::clone)?;
        Ok(Self { _private: () })
    }

    /// Extract the text of every page, concatenated in page order.
    ///
    /// Pages whose extracted text is empty or whitespace-only contribute
    /// nothing, not even a separator; a document whose pages all yield
    /// nothing produces an empty string rather than an error.
    pub fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String> {
        let document = Document::load_mem(pdf_bytes)?;

        let mut content = String::new();
        for (page_number, _object_id) in document.get_pages() {
            let page_text = document.extract_text(&[page_number]).map_err(|e| {
                PdfError::TextExtractionFailed(format!("page {}: {}", page_number, e))
            })?;

            if page_text.trim().is_empty() {
                continue;
            }
            content.push_str(&page_text);
        }

        Ok(content)
    }

    /// Number of pages in the document.
    pub fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize> {
        let document = Document::load_mem(pdf_bytes)?;
        Ok(document.get_pages().len())
    }
}

/// Round-trip a generated single-page document through the parser.
fn probe_capability() -> Result<()> {
    let bytes = probe_document()?;
    let document = Document::load_mem(&bytes)
        .map_err(|e| PdfError::CapabilityUnavailable(format!("cannot parse probe document: {}", e)))?;
    if document.get_pages().is_empty() {
        return Err(PdfError::CapabilityUnavailable(
            "probe document has no pages".to_string(),
        ));
    }
    Ok(())
}

/// Build a minimal blank single-page PDF in memory.
fn probe_document() -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| PdfError::CapabilityUnavailable(format!("cannot serialize probe document: {}", e)))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_creation() {
        let result = PdfTextExtractor::new();
        assert!(result.is_ok());
    }

    #[test]
    fn test_probe_result_is_cached() {
        let first = PdfTextExtractor::new();
        let second = PdfTextExtractor::new();
        assert!(first.is_ok());
        assert!(second.is_ok());
    }

    #[test]
    fn test_extract_empty_input() {
        let extractor = PdfTextExtractor::new().unwrap();
        let result = extractor.extract_text(b"");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_invalid_pdf() {
        let extractor = PdfTextExtractor::new().unwrap();
        let result = extractor.extract_text(b"not a pdf");
        assert!(matches!(result.unwrap_err(), PdfError::InvalidPdf(_)));
    }

    #[test]
    fn test_extract_truncated_pdf() {
        let extractor = PdfTextExtractor::new().unwrap();
        let result = extractor.extract_text(b"%PDF-1.4\n1 0 obj\n<<");
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_page_yields_empty_string() {
        let extractor = PdfTextExtractor::new().unwrap();
        let bytes = probe_document().unwrap();
        let text = extractor.extract_text(&bytes).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_page_count() {
        let extractor = PdfTextExtractor::new().unwrap();
        let bytes = probe_document().unwrap();
        assert_eq!(extractor.page_count(&bytes).unwrap(), 1);
    }
}
