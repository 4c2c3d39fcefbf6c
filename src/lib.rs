//! docpipe - Document Pipeline Components
//!
//! docpipe provides interchangeable nodes for document-processing pipelines.
//! Each node is a [`Component`]: a callable with declared named outputs that
//! can be serialized to and reconstructed from a JSON configuration mapping.
//!
//! The crate currently ships one component, [`PdfToTextConverter`], which
//! converts PDF inputs (file-system paths or in-memory byte streams) into
//! plain-text [`Document`] records. Inputs that fail to read or parse are
//! skipped with a logged warning; they never abort the batch.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docpipe::{FileSource, PdfToTextConverter};
//!
//! # fn main() -> docpipe::Result<()> {
//! let converter = PdfToTextConverter::new()?;
//! let output = converter.run(&[FileSource::from("document.pdf")], None);
//! println!("extracted {} documents", output.documents.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Component contract** (`component`): the pipeline-node traits and the
//!   configuration mapping type
//! - **Data model** (`types`): `Document`, `ByteStream`, `FileSource`
//! - **Converters** (`converters`): the conversion components
//! - **PDF backend** (`pdf`): the narrow parsing seam the converters sit on

#![deny(unsafe_code)]

pub mod component;
pub mod converters;
pub mod error;
pub mod io;
pub mod pdf;
pub mod types;

pub use component::{Component, ComponentConfig, FromConfig};
pub use converters::pdf_to_text::PdfToTextConverter;
pub use error::{DocpipeError, Result};
pub use types::{ByteStream, ConverterOutput, Document, FileSource};
