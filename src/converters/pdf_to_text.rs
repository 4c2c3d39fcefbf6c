//! PDF to text conversion component.
//!
//! [`PdfToTextConverter`] walks an ordered list of [`FileSource`] inputs,
//! extracts the text of each PDF page by page, and wraps the results in
//! [`Document`] records under the declared `documents` output. An input that
//! cannot be read or parsed is skipped with a logged warning; it never
//! aborts the batch.

use crate::component::{Component, ComponentConfig, FromConfig};
use crate::pdf::PdfTextExtractor;
use crate::types::{ConverterOutput, Document, FileSource};
use crate::{DocpipeError, Result, io};
use serde_json::json;
use tracing::warn;

/// Converts PDF files or byte streams into plain-text documents.
///
/// The instance holds only immutable configuration: the default
/// `id_hash_keys` list used for document identity. A per-call override never
/// mutates the instance, so one converter may serve concurrent callers.
///
/// # Example
///
/// ```rust,no_run
/// use docpipe::{FileSource, PdfToTextConverter};
///
/// # fn main() -> docpipe::Result<()> {
/// let converter = PdfToTextConverter::new()?;
/// let output = converter.run(
///     &[
///         FileSource::from("a.pdf"),
///         FileSource::from("b.pdf"),
///     ],
///     None,
/// );
/// assert!(output.documents.len() <= 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PdfToTextConverter {
    extractor: PdfTextExtractor,
    id_hash_keys: Vec<String>,
}

impl PdfToTextConverter {
    /// Create a converter with the default identity derivation.
    ///
    /// # Errors
    ///
    /// Returns `DocpipeError::MissingDependency` when the PDF parsing
    /// capability is unavailable. The check runs here, at construction,
    /// never during conversion.
    pub fn new() -> Result<Self> {
        Self::with_id_hash_keys(Vec::new())
    }

    /// Create a converter whose documents derive their identity from the
    /// named attributes by default.
    pub fn with_id_hash_keys(id_hash_keys: Vec<String>) -> Result<Self> {
        let extractor = PdfTextExtractor::new()
            .map_err(|e| DocpipeError::MissingDependency(e.to_string()))?;
        Ok(Self {
            extractor,
            id_hash_keys,
        })
    }

    /// The configured default `id_hash_keys` list.
    pub fn id_hash_keys(&self) -> &[String] {
        &self.id_hash_keys
    }

    /// Convert each source into a document, in input order.
    ///
    /// `id_hash_keys` overrides the instance default for this call only.
    /// Sources that fail to read or parse are skipped: a warning naming the
    /// source and the underlying error is logged and processing continues
    /// with the next source. Successful documents keep the relative order of
    /// their inputs; skipped inputs are simply absent.
    pub fn run(&self, sources: &[FileSource], id_hash_keys: Option<&[String]>) -> ConverterOutput {
        let effective_keys = id_hash_keys.unwrap_or(&self.id_hash_keys);

        let mut documents = Vec::with_capacity(sources.len());
        for source in sources {
            match self.extract_source(source) {
                Ok(text) => {
                    documents.push(Document::with_id_hash_keys(text, effective_keys.to_vec()));
                }
                Err(error) => {
                    warn!(source = %source, error = %error, "could not convert source, skipping it");
                }
            }
        }

        ConverterOutput { documents }
    }

    /// Resolve one source to its extracted text.
    ///
    /// Read failures surface as `Io`/`Validation` errors, parse failures as
    /// `Parsing`, so the skip log tells the two apart.
    fn extract_source(&self, source: &FileSource) -> Result<String> {
        let text = match source {
            FileSource::Path(path) => {
                io::validate_file_exists(path)?;
                let bytes = io::read_file(path)?;
                self.extractor.extract_text(&bytes)?
            }
            FileSource::Stream(stream) => self.extractor.extract_text(&stream.data)?,
        };
        Ok(text)
    }
}

impl Component for PdfToTextConverter {
    fn name(&self) -> &str {
        "pdf-to-text-converter"
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["documents"]
    }

    fn to_config(&self) -> ComponentConfig {
        let mut config = ComponentConfig::new();
        config.insert("id_hash_keys".to_string(), json!(self.id_hash_keys));
        config
    }
}

impl FromConfig for PdfToTextConverter {
    fn from_config(config: &ComponentConfig) -> Result<Self> {
        let id_hash_keys = match config.get("id_hash_keys") {
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                DocpipeError::serialization_with_source(
                    "invalid `id_hash_keys` in component config",
                    e,
                )
            })?,
            None => Vec::new(),
        };
        Self::with_id_hash_keys(id_hash_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ByteStream;
    use serde_json::json;

    #[test]
    fn test_construction_succeeds() {
        assert!(PdfToTextConverter::new().is_ok());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let converter = PdfToTextConverter::new().unwrap();
        let output = converter.run(&[], None);
        assert!(output.documents.is_empty());
    }

    #[test]
    fn test_garbage_stream_is_skipped() {
        let converter = PdfToTextConverter::new().unwrap();
        let sources = [FileSource::from(ByteStream::new(b"not a pdf".to_vec()))];
        let output = converter.run(&sources, None);
        assert!(output.documents.is_empty());
    }

    #[test]
    fn test_missing_path_is_skipped() {
        let converter = PdfToTextConverter::new().unwrap();
        let sources = [FileSource::from("/nonexistent/input.pdf")];
        let output = converter.run(&sources, None);
        assert!(output.documents.is_empty());
    }

    #[test]
    fn test_component_metadata() {
        let converter = PdfToTextConverter::new().unwrap();
        assert_eq!(converter.name(), "pdf-to-text-converter");
        assert_eq!(converter.output_names(), &["documents"]);
    }

    #[test]
    fn test_to_config_contains_id_hash_keys() {
        let converter =
            PdfToTextConverter::with_id_hash_keys(vec!["text".to_string()]).unwrap();
        let config = converter.to_config();
        assert_eq!(config.get("id_hash_keys"), Some(&json!(["text"])));
    }

    #[test]
    fn test_config_round_trip() {
        let converter = PdfToTextConverter::with_id_hash_keys(vec![
            "text".to_string(),
            "metadata".to_string(),
        ])
        .unwrap();
        let config = converter.to_config();
        let rebuilt = PdfToTextConverter::from_config(&config).unwrap();
        assert_eq!(rebuilt.to_config(), config);
        assert_eq!(rebuilt.id_hash_keys(), converter.id_hash_keys());
    }

    #[test]
    fn test_from_config_missing_key_defaults_to_empty() {
        let converter = PdfToTextConverter::from_config(&ComponentConfig::new()).unwrap();
        assert!(converter.id_hash_keys().is_empty());
    }

    #[test]
    fn test_from_config_rejects_non_list() {
        let mut config = ComponentConfig::new();
        config.insert("id_hash_keys".to_string(), json!("text"));
        let result = PdfToTextConverter::from_config(&config);
        assert!(matches!(
            result.unwrap_err(),
            DocpipeError::Serialization { .. }
        ));
    }
}
