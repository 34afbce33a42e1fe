// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core data model shared by the parser, the runtime catalog and the tooling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where a translatable string was found in the application sources.
///
/// Provenance only: nothing at runtime looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => write!(f, "{}", self.file),
        }
    }
}

/// Translation state as recorded by the `type` attribute of `<translation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationState {
    /// No `type` attribute: a translator signed the text off
    #[default]
    Finished,
    Unfinished,
    /// The source string disappeared from the application
    Vanished,
    /// Legacy spelling of `Vanished` written by older tools
    Obsolete,
}

impl TranslationState {
    /// Interpret the `type` attribute. `None` means the attribute was absent.
    pub fn from_type_attr(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => Some(TranslationState::Finished),
            Some("unfinished") => Some(TranslationState::Unfinished),
            Some("vanished") => Some(TranslationState::Vanished),
            Some("obsolete") => Some(TranslationState::Obsolete),
            Some(_) => None,
        }
    }

    /// Vanished and obsolete messages are never loaded at runtime.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            TranslationState::Finished | TranslationState::Unfinished
        )
    }
}

/// One message of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub context: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_source: Option<String>,
    /// `None` when the document carries no (or an empty) translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    /// The `<comment>` element; empty comments are stored as `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,
    #[serde(default)]
    pub state: TranslationState,
    /// `<numerusform>` texts for messages with `numerus="yes"`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plural_forms: Vec<String>,
}

impl TranslationEntry {
    pub fn new(context: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            old_source: None,
            translation: None,
            disambiguation: None,
            locations: Vec::new(),
            extra_comment: None,
            translator_comment: None,
            state: TranslationState::Unfinished,
            plural_forms: Vec::new(),
        }
    }

    /// Builder helper: attach a finished translation.
    pub fn translated(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.translation = if text.is_empty() { None } else { Some(text) };
        self.state = TranslationState::Finished;
        self
    }

    /// Builder helper: attach a disambiguation comment.
    pub fn with_disambiguation(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.disambiguation = if comment.is_empty() { None } else { Some(comment) };
        self
    }

    pub fn is_numerus(&self) -> bool {
        !self.plural_forms.is_empty()
    }

    /// True when lookup will return something other than the source.
    pub fn has_translation(&self) -> bool {
        self.translation.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The text shown to the user: the translation, or the source verbatim.
    pub fn display_text(&self) -> &str {
        match self.translation.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => &self.source,
        }
    }
}

/// A parsed `.ts` document, before it is turned into a runtime catalog.
///
/// Keeps vanished and obsolete messages so lint and statistics tooling can
/// see the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Format version from `<TS version="...">`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Raw `language` attribute, e.g. `it_IT`
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    /// blake3 hex digest of the raw document bytes
    pub fingerprint: String,
    pub entries: Vec<TranslationEntry>,
}

impl TsDocument {
    /// Context names in document order, without repeats.
    pub fn context_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.contains(&entry.context.as_str()) {
                names.push(&entry.context);
            }
        }
        names
    }

    /// Messages that make it into the runtime catalog.
    pub fn active_entries(&self) -> impl Iterator<Item = &TranslationEntry> {
        self.entries.iter().filter(|e| e.state.is_active())
    }
}
