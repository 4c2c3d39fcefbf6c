//! Core data model shared by all pipeline components.
//!
//! - [`Document`] - a plain-text record with a stable, content-derived id
//! - [`ByteStream`] - in-memory file content with optional metadata
//! - [`FileSource`] - the input union accepted by file converters
//! - [`ConverterOutput`] - the declared outputs of a conversion call

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// String-keyed JSON metadata attached to documents and byte streams.
pub type MetadataMap = BTreeMap<String, serde_json::Value>;

/// A plain-text document record produced by a converter.
///
/// The id is derived from the document's content when it is constructed and
/// is never recomputed implicitly: a `Document` is created once, returned to
/// the caller, and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable content-derived identifier (lowercase hex SHA-256).
    pub id: String,

    /// Extracted text. May be empty when the source had no text layer.
    pub text: String,

    /// Caller-supplied metadata. Converters leave this empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: MetadataMap,

    /// The attribute names the id was derived from. Empty means the default
    /// derivation over all content fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub id_hash_keys: Vec<String>,
}

impl Document {
    /// Create a document with the default identity derivation.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id_hash_keys(text, Vec::new())
    }

    /// Create a document whose identity is derived from the named attributes.
    ///
    /// Each entry resolves to `text`, `metadata`, or a metadata field of that
    /// name; names that resolve to nothing still participate in the hash, so
    /// distinct key lists always yield distinct ids.
    pub fn with_id_hash_keys(text: impl Into<String>, id_hash_keys: Vec<String>) -> Self {
        let text = text.into();
        let metadata = MetadataMap::new();
        let id = derive_id(&text, &metadata, &id_hash_keys);
        Self {
            id,
            text,
            metadata,
            id_hash_keys,
        }
    }

    /// Replace the metadata map, re-deriving the id.
    #[must_use]
    pub fn with_metadata(mut self, metadata: MetadataMap) -> Self {
        self.metadata = metadata;
        self.id = derive_id(&self.text, &self.metadata, &self.id_hash_keys);
        self
    }
}

/// Derive a document id by hashing the selected attributes.
///
/// Key names and resolved values are separated by NUL sentinels so that
/// concatenation cannot alias across field boundaries. Metadata values hash
/// through their canonical JSON rendering; `BTreeMap` ordering keeps the
/// digest deterministic.
fn derive_id(text: &str, metadata: &MetadataMap, id_hash_keys: &[String]) -> String {
    let mut hasher = Sha256::new();

    let hash_metadata = |hasher: &mut Sha256| {
        for (key, value) in metadata {
            hasher.update(key.as_bytes());
            hasher.update([0u8]);
            hasher.update(value.to_string().as_bytes());
            hasher.update([0u8]);
        }
    };

    if id_hash_keys.is_empty() {
        hasher.update(text.as_bytes());
        hasher.update([0u8]);
        hash_metadata(&mut hasher);
    } else {
        for key in id_hash_keys {
            hasher.update(key.as_bytes());
            hasher.update([0u8]);
            match key.as_str() {
                "text" => hasher.update(text.as_bytes()),
                "metadata" => hash_metadata(&mut hasher),
                other => {
                    if let Some(value) = metadata.get(other) {
                        hasher.update(value.to_string().as_bytes());
                    }
                }
            }
            hasher.update([0u8]);
        }
    }

    hex::encode(hasher.finalize())
}

/// In-memory file content, used when no file-system path is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByteStream {
    /// Raw file bytes.
    pub data: Vec<u8>,

    /// Optional metadata describing the stream (origin, MIME type, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: MetadataMap,
}

impl ByteStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            metadata: MetadataMap::new(),
        }
    }

    /// Attach a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Read a file eagerly into a stream. IO errors bubble up unchanged.
    pub fn from_file_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Ok(Self::new(data))
    }
}

/// A single converter input: a file-system path or an in-memory byte stream.
///
/// The union is closed; converters match it exhaustively, so no third input
/// kind can reach them.
#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    /// Path to a file on disk.
    Path(PathBuf),
    /// File content held in memory.
    Stream(ByteStream),
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Path(path) => write!(f, "{}", path.display()),
            FileSource::Stream(stream) => {
                write!(f, "<in-memory byte stream of {} bytes>", stream.data.len())
            }
        }
    }
}

impl From<PathBuf> for FileSource {
    fn from(path: PathBuf) -> Self {
        FileSource::Path(path)
    }
}

impl From<&Path> for FileSource {
    fn from(path: &Path) -> Self {
        FileSource::Path(path.to_path_buf())
    }
}

impl From<&str> for FileSource {
    fn from(path: &str) -> Self {
        FileSource::Path(PathBuf::from(path))
    }
}

impl From<String> for FileSource {
    fn from(path: String) -> Self {
        FileSource::Path(PathBuf::from(path))
    }
}

impl From<ByteStream> for FileSource {
    fn from(stream: ByteStream) -> Self {
        FileSource::Stream(stream)
    }
}

/// The declared outputs of a conversion call.
///
/// Serializes to the mapping `{"documents": [...]}`. Documents appear in the
/// relative order of their inputs; skipped inputs are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterOutput {
    pub documents: Vec<Document>,
}
