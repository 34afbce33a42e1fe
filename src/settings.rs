// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation settings: which directory to read and which locale to use.
//!
//! Settings come from an optional YAML file, then environment overrides
//! (`CHKFORGE_TRANSLATIONS_DIR`, `CHKFORGE_LOCALE`, and `LANG` as a last
//! resort for the locale), then command-line flags applied by the caller.

use crate::catalog::{CatalogDirectory, LoadOptions};
use crate::locale::LocaleId;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCALE_ENV: &str = "CHKFORGE_LOCALE";
pub const TRANSLATIONS_DIR_ENV: &str = "CHKFORGE_TRANSLATIONS_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub translations_dir: PathBuf,
    pub file_prefix: String,
    /// `None` means "whatever the environment says, else source strings"
    pub locale: Option<String>,
    /// Try `it` when `it_IT` has no catalog
    pub locale_fallback: bool,
    pub include_unfinished: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translations_dir: PathBuf::from("translations"),
            file_prefix: "chkforge".to_string(),
            locale: None,
            locale_fallback: true,
            include_unfinished: true,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing settings {}", path.display()))
    }

    /// `load` when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment, in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = non_empty(TRANSLATIONS_DIR_ENV) {
            self.translations_dir = PathBuf::from(dir);
        }
        if let Some(locale) = non_empty(LOCALE_ENV) {
            self.locale = Some(locale);
        } else if self.locale.is_none() {
            // LANG=C / POSIX means "no translation", not a locale
            self.locale = non_empty("LANG").filter(|lang| {
                let base = lang.split('.').next().unwrap_or_default();
                base != "C" && base != "POSIX"
            });
        }
    }

    /// The configured locale, parsed. `Ok(None)` when none is set.
    pub fn locale_id(&self) -> Result<Option<LocaleId>> {
        match self.locale.as_deref() {
            None => Ok(None),
            Some(raw) => LocaleId::parse(raw)
                .map(Some)
                .ok_or_else(|| anyhow!("invalid locale '{raw}' in settings")),
        }
    }

    pub fn directory(&self) -> CatalogDirectory {
        CatalogDirectory::new(&self.translations_dir, &self.file_prefix)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            include_unfinished: self.include_unfinished,
        }
    }
}
