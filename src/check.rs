// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lint checks for `.ts` documents.
//!
//! These run over the parsed document (vanished messages included) and
//! report things that load fine but will look wrong in the editor: a lost
//! keyboard accelerator, a `%1` the translator dropped, a key that would
//! make the runtime loader reject the file.

use crate::locale::LocaleId;
use crate::ts;
use crate::types::{Location, TranslationEntry, TranslationState, TsDocument};
use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Warn,
    Error,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    /// Stable identifier, e.g. `placeholder-mismatch`
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub detail: String,
}

impl Diagnostic {
    fn document(level: Level, code: &'static str, detail: String) -> Self {
        Self {
            level,
            code,
            context: None,
            source_text: None,
            location: None,
            detail,
        }
    }

    fn entry(level: Level, code: &'static str, entry: &TranslationEntry, detail: String) -> Self {
        Self {
            level,
            code,
            context: Some(entry.context.clone()),
            source_text: Some(entry.source.clone()),
            location: entry.locations.first().cloned(),
            detail,
        }
    }
}

/// Check results for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub messages: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn count(&self, level: Level) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Level::Error) > 0
    }
}

// ─── Document checks ────────────────────────────────────────────────────

/// Run every check over a parsed document.
pub fn check_document(document: &TsDocument) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    match LocaleId::parse(&document.language) {
        None => diagnostics.push(Diagnostic::document(
            Level::Error,
            "invalid-language",
            format!("'{}' is not a locale identifier", document.language),
        )),
        Some(locale) if locale.language().len() == 2 && !locale.is_iso639_1() => {
            diagnostics.push(Diagnostic::document(
                Level::Warn,
                "unknown-language",
                format!("'{}' is not an ISO 639-1 language code", locale.language()),
            ));
        }
        Some(_) => {}
    }

    let mut seen: HashSet<(&str, &str, Option<&str>)> = HashSet::new();
    for entry in &document.entries {
        let active = entry.state.is_active();
        if active
            && !seen.insert((
                entry.context.as_str(),
                entry.source.as_str(),
                entry.disambiguation.as_deref(),
            ))
        {
            diagnostics.push(Diagnostic::entry(
                Level::Error,
                "duplicate-message",
                entry,
                "same context, source and disambiguation as an earlier message".to_string(),
            ));
        }

        if entry.source.trim().is_empty() {
            diagnostics.push(Diagnostic::entry(
                Level::Warn,
                "empty-source",
                entry,
                "message has no source text".to_string(),
            ));
        }

        if active {
            check_entry(entry, &mut diagnostics);
        }
    }

    diagnostics
}

fn check_entry(entry: &TranslationEntry, out: &mut Vec<Diagnostic>) {
    if entry.state == TranslationState::Finished && !entry.has_translation() {
        out.push(Diagnostic::entry(
            Level::Warn,
            "finished-empty",
            entry,
            "marked finished but has no translation".to_string(),
        ));
    }

    let texts: Vec<&str> = if entry.is_numerus() {
        entry
            .plural_forms
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect()
    } else {
        entry.translation.as_deref().into_iter().collect()
    };

    for text in texts {
        let expected = accelerator_count(&entry.source);
        let found = accelerator_count(text);
        if expected != found {
            out.push(Diagnostic::entry(
                Level::Warn,
                "accelerator-mismatch",
                entry,
                format!("source has {expected} '&' accelerator(s), translation has {found}"),
            ));
        }

        let expected = placeholders(&entry.source, entry.is_numerus());
        let found = placeholders(text, entry.is_numerus());
        if expected != found {
            out.push(Diagnostic::entry(
                Level::Error,
                "placeholder-mismatch",
                entry,
                format!(
                    "source uses [{}], translation uses [{}]",
                    expected.join(", "),
                    found.join(", ")
                ),
            ));
        }

        if edge_whitespace(&entry.source) != edge_whitespace(text) {
            out.push(Diagnostic::entry(
                Level::Warn,
                "whitespace-mismatch",
                entry,
                "leading/trailing whitespace differs from source".to_string(),
            ));
        }
    }
}

/// Keyboard accelerators: `&` followed by a visible character. `&&` is a
/// literal ampersand.
fn accelerator_count(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        match chars.peek() {
            Some('&') => {
                chars.next();
            }
            Some(next) if !next.is_whitespace() => count += 1,
            _ => {}
        }
    }
    count
}

/// Qt argument markers (`%1`, `%L2`, `%n`), sorted and deduplicated. `%n`
/// only counts for numerus messages, where the plural forms must keep it.
fn placeholders(text: &str, numerus: bool) -> Vec<String> {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    let marker = MARKER.get_or_init(|| Regex::new(r"%L?(\d{1,2}|n)").expect("static regex"));

    let mut found: Vec<String> = marker
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|m| numerus || m != "n")
        .map(|m| format!("%{m}"))
        .collect();
    found.sort();
    found.dedup();
    found
}

fn edge_whitespace(text: &str) -> (bool, bool) {
    (
        text.starts_with(char::is_whitespace),
        text.ends_with(char::is_whitespace),
    )
}

// ─── Files ──────────────────────────────────────────────────────────────

/// `.ts` files under `root` (or `root` itself when it is a file), sorted.
pub fn collect_ts_files(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("ts"))
        .collect();
    files.sort();
    files
}

/// Parse and check one file. A parse failure becomes a single
/// `load-failed` error.
pub fn check_file(path: &Path) -> FileReport {
    match ts::read_document(path) {
        Ok(document) => FileReport {
            file: path.to_path_buf(),
            language: Some(document.language.clone()),
            messages: document.entries.len(),
            diagnostics: check_document(&document),
        },
        Err(err) => FileReport {
            file: path.to_path_buf(),
            language: None,
            messages: 0,
            diagnostics: vec![Diagnostic::document(
                Level::Error,
                "load-failed",
                err.to_string(),
            )],
        },
    }
}

/// Check many files in parallel. Reports come back in input order.
pub fn check_files(paths: &[PathBuf]) -> Vec<FileReport> {
    debug!(files = paths.len(), "checking translation files");
    paths.par_iter().map(|path| check_file(path)).collect()
}
