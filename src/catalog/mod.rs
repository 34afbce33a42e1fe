// SPDX-License-Identifier: PMPL-1.0-or-later

//! The runtime translation catalog.
//!
//! A [`Catalog`] is built once from a parsed `.ts` document and is immutable
//! afterwards. Lookups are keyed by the exact triple
//! (context, source, disambiguation); a miss or an empty translation resolves
//! to the source text itself, so the UI always has something to show.

mod directory;
mod loader;

pub use directory::CatalogDirectory;
pub use loader::{load_bytes, load_file, load_or_untranslated, LoadOptions};

use crate::error::{CatalogLoadError, Result};
use crate::locale::LocaleId;
use crate::types::{TranslationEntry, TranslationState, TsDocument};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An in-memory, read-only translation table for one locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: LocaleId,
    source_locale: Option<LocaleId>,
    origin: Option<PathBuf>,
    fingerprint: Option<String>,
    entries: Vec<TranslationEntry>,
    // context -> source -> indices into `entries` (one per disambiguation)
    index: HashMap<String, HashMap<String, Vec<usize>>>,
}

impl Catalog {
    /// An empty catalog. Every lookup returns the source string.
    pub fn new(locale: LocaleId) -> Self {
        Self {
            locale,
            source_locale: None,
            origin: None,
            fingerprint: None,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The catalog used when a locale's document is missing or broken.
    pub fn untranslated(locale: LocaleId) -> Self {
        Self::new(locale)
    }

    /// Build the runtime view of a parsed document.
    ///
    /// Vanished and obsolete messages are dropped. When
    /// `options.include_unfinished` is off, unfinished translations are
    /// treated as absent.
    pub fn from_document(document: TsDocument, options: &LoadOptions) -> Result<Self> {
        let origin = document
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("<memory>"));
        let locale =
            LocaleId::parse(&document.language).ok_or_else(|| CatalogLoadError::InvalidLocale {
                file: origin.clone(),
                locale: document.language.clone(),
            })?;

        let mut catalog = Catalog::new(locale);
        catalog.source_locale = document
            .source_language
            .as_deref()
            .and_then(LocaleId::parse);
        catalog.origin = document.path;
        catalog.fingerprint = Some(document.fingerprint).filter(|f| !f.is_empty());

        let mut skipped = 0usize;
        for mut entry in document.entries {
            if !entry.state.is_active() {
                skipped += 1;
                continue;
            }
            if entry.state == TranslationState::Unfinished && !options.include_unfinished {
                entry.translation = None;
                entry.plural_forms.clear();
            }
            catalog.insert(entry)?;
        }

        if skipped > 0 {
            debug!(
                file = %origin.display(),
                skipped,
                "dropped vanished/obsolete messages"
            );
        }
        Ok(catalog)
    }

    /// Add one entry. Fails if (context, source, disambiguation) is taken.
    pub fn insert(&mut self, mut entry: TranslationEntry) -> Result<()> {
        if entry.disambiguation.as_deref() == Some("") {
            entry.disambiguation = None;
        }

        let slot = self
            .index
            .entry(entry.context.clone())
            .or_default()
            .entry(entry.source.clone())
            .or_default();

        if slot
            .iter()
            .any(|&i| self.entries[i].disambiguation == entry.disambiguation)
        {
            return Err(CatalogLoadError::DuplicateMessage {
                file: self
                    .origin
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("<memory>")),
                context: entry.context,
                source_text: entry.source,
                disambiguation: entry.disambiguation,
            });
        }

        slot.push(self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    // ─── Lookup ─────────────────────────────────────────────────────────

    /// The entry stored under the exact key, if any. An empty
    /// disambiguation is the same as none.
    pub fn lookup(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
    ) -> Option<&TranslationEntry> {
        let wanted = disambiguation.filter(|d| !d.is_empty());
        self.index
            .get(context)?
            .get(source)?
            .iter()
            .map(|&i| &self.entries[i])
            .find(|entry| entry.disambiguation.as_deref() == wanted)
    }

    /// The text to display for a key: the translation on an exact hit with
    /// non-empty text, otherwise `source` unchanged.
    pub fn resolve<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        disambiguation: Option<&str>,
    ) -> &'a str {
        match self.lookup(context, source, disambiguation) {
            Some(entry) if entry.has_translation() => entry.display_text(),
            _ => source,
        }
    }

    /// Plural-aware resolution for numerus messages. Picks the form the
    /// catalog language uses for `n` and substitutes `%n` (and `%Ln`).
    pub fn resolve_plural(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        n: i64,
    ) -> String {
        let text = match self.lookup(context, source, disambiguation) {
            Some(entry) if entry.is_numerus() => {
                let index = self.locale.plural_rule().form_index(n);
                entry
                    .plural_forms
                    .get(index)
                    .or_else(|| entry.plural_forms.last())
                    .map(String::as_str)
                    .filter(|form| !form.is_empty())
                    .unwrap_or(source)
            }
            Some(entry) if entry.has_translation() => entry.display_text(),
            _ => source,
        };
        substitute_count(text, n)
    }

    // ─── Accessors ──────────────────────────────────────────────────────

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    pub fn source_locale(&self) -> Option<&LocaleId> {
        self.source_locale.as_ref()
    }

    /// File the catalog was loaded from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True for the fallback catalog that resolves everything to source.
    pub fn is_untranslated(&self) -> bool {
        self.origin.is_none() && self.entries.is_empty()
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Context names, sorted.
    pub fn contexts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.index.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of entries with a usable translation.
    pub fn translated_count(&self) -> usize {
        self.entries.iter().filter(|e| e.has_translation()).count()
    }
}

fn substitute_count(text: &str, n: i64) -> String {
    if !text.contains('%') {
        return text.to_string();
    }
    let count = n.to_string();
    text.replace("%Ln", &count).replace("%n", &count)
}
