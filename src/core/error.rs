use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, converting, or saving an invoice batch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that could not be read or written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input bytes are not valid in the expected text encoding.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// A source element or attribute the mapping relies on is absent.
    #[error("missing source field `{path}`")]
    MissingField {
        /// Slash-separated path relative to the `faktura` element
        /// (e.g. "dokladHlavicka/odberatel/adresa").
        path: &'static str,
    },

    /// Converting one invoice of a batch failed.
    #[error("invoice #{index}: {source}")]
    Invoice {
        /// Zero-based position of the invoice in the source document.
        index: usize,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Walk through `Invoice` wrappers to the underlying cause.
    pub fn root_cause(&self) -> &ConvertError {
        match self {
            Self::Invoice { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
