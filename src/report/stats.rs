// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation coverage statistics for a `.ts` document.

use crate::types::{TranslationState, TsDocument};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Counts for one context (or the whole document, in [`CatalogStats::totals`]).
///
/// `total` covers active messages only; vanished and obsolete ones are
/// counted separately in `obsolete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextStats {
    pub name: String,
    pub total: usize,
    /// Finished with non-empty text
    pub finished: usize,
    /// Marked unfinished but carrying text (shown at runtime by default)
    pub unfinished: usize,
    /// No usable text: the UI shows the source
    pub untranslated: usize,
    pub obsolete: usize,
}

impl ContextStats {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Share of active messages with a finished translation, in percent.
    pub fn coverage_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.finished as f64 * 100.0 / self.total as f64
    }

    fn absorb(&mut self, other: &ContextStats) {
        self.total += other.total;
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.untranslated += other.untranslated;
        self.obsolete += other.obsolete;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    pub fingerprint: String,
    pub contexts: Vec<ContextStats>,
    pub totals: ContextStats,
    pub coverage_percent: f64,
}

impl CatalogStats {
    pub fn from_document(document: &TsDocument) -> Self {
        let mut contexts: Vec<ContextStats> = document
            .context_names()
            .into_iter()
            .map(ContextStats::named)
            .collect();

        for entry in &document.entries {
            let Some(stats) = contexts.iter_mut().find(|c| c.name == entry.context) else {
                continue;
            };
            if !entry.state.is_active() {
                stats.obsolete += 1;
                continue;
            }
            stats.total += 1;
            match (entry.state, entry.has_translation()) {
                (_, false) => stats.untranslated += 1,
                (TranslationState::Unfinished, true) => stats.unfinished += 1,
                (_, true) => stats.finished += 1,
            }
        }

        let mut totals = ContextStats::named("total");
        for context in &contexts {
            totals.absorb(context);
        }

        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            file: document.path.clone(),
            language: document.language.clone(),
            source_language: document.source_language.clone(),
            fingerprint: document.fingerprint.clone(),
            coverage_percent: totals.coverage_percent(),
            contexts,
            totals,
        }
    }

    /// Contexts sorted by how much work is left, most first.
    pub fn most_incomplete(&self, limit: usize) -> Vec<&ContextStats> {
        let mut sorted: Vec<&ContextStats> = self
            .contexts
            .iter()
            .filter(|c| c.untranslated + c.unfinished > 0)
            .collect();
        sorted.sort_by(|a, b| {
            (b.untranslated + b.unfinished)
                .cmp(&(a.untranslated + a.unfinished))
                .then_with(|| a.name.cmp(&b.name))
        });
        sorted.truncate(limit);
        sorted
    }
}
