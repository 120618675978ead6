//! Study documents and the plain-text ingestion boundary.
//!
//! Only text that decodes cleanly as UTF-8 becomes a [`Document`]. Anything
//! else (binary uploads, PDFs) is rejected here so the analyzer never sees it.

use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while turning raw input into a [`Document`].
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} is not valid UTF-8 text (first invalid byte at offset {offset})")]
    NotText { name: String, offset: usize },

    #[error(
        "{name} is a {format} document. Copy its text into a .txt file and load that instead."
    )]
    UnsupportedFormat { name: String, format: &'static str },
}

/// Opaque document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plain-text study document.
///
/// Immutable after construction: the analyzer only ever borrows it.
#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,
    name: Option<String>,
    text: String,
}

impl Document {
    /// Create a document from text that is already known to be valid.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(id),
            name: None,
            text: text.into(),
        }
    }

    /// Attach a human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Decode raw bytes as a document, rejecting anything that is not UTF-8.
    ///
    /// A leading byte-order mark is dropped.
    pub fn from_bytes(id: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DocumentError> {
        let id = id.into();
        let text = String::from_utf8(bytes).map_err(|e| DocumentError::NotText {
            name: id.clone(),
            offset: e.utf8_error().valid_up_to(),
        })?;
        let text = match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        };
        Ok(Self::new(id, text))
    }

    /// Load a document from disk.
    ///
    /// PDF files are refused with guidance to convert them first; every other
    /// file must decode as UTF-8.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            return Err(DocumentError::UnsupportedFormat {
                name,
                format: "PDF",
            });
        }

        let bytes = fs::read(path).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })?;

        // Some PDFs arrive without an extension; the magic header gives them away.
        if bytes.starts_with(b"%PDF-") {
            return Err(DocumentError::UnsupportedFormat {
                name,
                format: "PDF",
            });
        }

        Ok(Self::from_bytes(path.display().to_string(), bytes)?.with_name(name))
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for display: the human-readable name if set, else the identifier.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
