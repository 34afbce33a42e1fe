// SPDX-License-Identifier: PMPL-1.0-or-later

//! Errors raised while loading a translation catalog.
//!
//! Every variant names the document it came from so a diagnostic log line
//! is enough to locate the problem. None of these are fatal to the host:
//! callers are expected to fall back to an untranslated catalog (see
//! [`crate::catalog::load_or_untranslated`]).

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to turn a `.ts` document into a usable catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The document could not be read from disk
    #[error("{}: cannot read catalog: {source}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not valid in the declared (or detected) encoding
    #[error("{}: cannot decode catalog as {encoding}", .file.display())]
    Decode { file: PathBuf, encoding: String },

    /// The XML itself is broken (mismatched tags, bad entity, truncated file)
    #[error("{}:{line}: malformed XML: {reason}", .file.display())]
    Xml {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// `<TS>` has no `language` attribute, or it is empty
    #[error("{}: <TS> element does not declare a target language", .file.display())]
    MissingLanguage { file: PathBuf },

    /// The declared language is not a locale identifier we understand
    #[error("{}: invalid locale identifier '{locale}'", .file.display())]
    InvalidLocale { file: PathBuf, locale: String },

    /// An element showed up where the format does not allow it
    #[error("{}:{line}: unexpected <{element}> inside <{parent}>", .file.display())]
    UnexpectedElement {
        file: PathBuf,
        line: usize,
        element: String,
        parent: String,
    },

    /// A required child element is absent
    #[error("{}:{line}: <{parent}> is missing <{element}>", .file.display())]
    MissingElement {
        file: PathBuf,
        line: usize,
        element: &'static str,
        parent: &'static str,
    },

    /// An attribute value could not be interpreted
    #[error("{}:{line}: invalid {attribute} value '{value}'", .file.display())]
    InvalidAttribute {
        file: PathBuf,
        line: usize,
        attribute: &'static str,
        value: String,
    },

    /// Two messages share (context, source, disambiguation)
    #[error(
        "{}: duplicate message '{source_text}' in context '{context}'{}",
        .file.display(),
        disambiguation_suffix(.disambiguation)
    )]
    DuplicateMessage {
        file: PathBuf,
        context: String,
        source_text: String,
        disambiguation: Option<String>,
    },

    /// No catalog file exists for the locale or any of its fallbacks
    #[error("no catalog for locale '{locale}' in {}", .dir.display())]
    NotFound { locale: String, dir: PathBuf },
}

impl CatalogLoadError {
    pub fn io(file: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            file: file.into(),
            source,
        }
    }

    pub fn xml(file: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::Xml {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }

    /// The document (or directory, for `NotFound`) the error refers to.
    pub fn file(&self) -> &Path {
        match self {
            Self::Io { file, .. }
            | Self::Decode { file, .. }
            | Self::Xml { file, .. }
            | Self::MissingLanguage { file }
            | Self::InvalidLocale { file, .. }
            | Self::UnexpectedElement { file, .. }
            | Self::MissingElement { file, .. }
            | Self::InvalidAttribute { file, .. }
            | Self::DuplicateMessage { file, .. } => file,
            Self::NotFound { dir, .. } => dir,
        }
    }
}

fn disambiguation_suffix(disambiguation: &Option<String>) -> String {
    match disambiguation {
        Some(d) => format!(" (disambiguation '{d}')"),
        None => String::new(),
    }
}

/// Result alias for catalog loading.
pub type Result<T> = std::result::Result<T, CatalogLoadError>;
