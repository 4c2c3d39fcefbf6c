//! PDF parsing seam.
//!
//! Converters depend only on the narrow contract exposed here: open a PDF
//! from raw bytes, enumerate its pages, extract text per page. Parsing is
//! delegated to `lopdf`; a capability probe at construction time fails
//! cleanly when the parser cannot operate in this environment.

pub mod error;
pub mod text;

pub use error::PdfError;
pub use text::PdfTextExtractor;
