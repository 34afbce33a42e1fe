// SPDX-License-Identifier: PMPL-1.0-or-later

//! The process-wide translation handle.
//!
//! [`Translator`] owns the active [`Catalog`] behind an `ArcSwap`. Reads never
//! lock; a locale switch builds the new catalog off to the side and swaps the
//! pointer. Anyone still holding a [`Translator::snapshot`] keeps the old
//! catalog alive until they drop it.

use crate::catalog::{load_file, Catalog, CatalogDirectory, LoadOptions};
use crate::error::Result;
use crate::locale::LocaleId;
use crate::ts;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Translator {
    active: ArcSwap<Catalog>,
    options: LoadOptions,
}

impl Translator {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_options(catalog, LoadOptions::default())
    }

    pub fn with_options(catalog: Catalog, options: LoadOptions) -> Self {
        Self {
            active: ArcSwap::from_pointee(catalog),
            options,
        }
    }

    /// A translator that shows source strings for `locale`.
    pub fn untranslated(locale: LocaleId) -> Self {
        Self::new(Catalog::untranslated(locale))
    }

    /// Start-up path: load `locale` from `dir`, falling back to source
    /// strings if that fails. Never fails itself.
    pub fn from_directory(
        dir: &CatalogDirectory,
        locale: &LocaleId,
        fallback: bool,
        options: LoadOptions,
    ) -> Self {
        let catalog = match dir.load(locale, fallback, &options) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(locale = %locale, error = %err, "starting without translations");
                Catalog::untranslated(locale.clone())
            }
        };
        Self::with_options(catalog, options)
    }

    // ─── Lookup ─────────────────────────────────────────────────────────

    /// Resolve a string against the active catalog.
    pub fn tr(&self, context: &str, source: &str, disambiguation: Option<&str>) -> String {
        self.active
            .load()
            .resolve(context, source, disambiguation)
            .to_string()
    }

    /// Resolve a numerus string for count `n`.
    pub fn tr_plural(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        n: i64,
    ) -> String {
        self.active
            .load()
            .resolve_plural(context, source, disambiguation, n)
    }

    /// The active catalog. Stays valid across later swaps.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.active.load_full()
    }

    pub fn locale(&self) -> LocaleId {
        self.active.load().locale().clone()
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    // ─── Swapping ───────────────────────────────────────────────────────

    /// Make `catalog` active and return the one it replaced.
    pub fn install(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let to = next.locale().clone();
        let previous = self.active.swap(next);
        info!(
            from = %previous.locale(),
            to = %to,
            "translation catalog swapped"
        );
        previous
    }

    /// Switch to `locale`. On failure the untranslated catalog for `locale`
    /// is installed and the load error returned for the caller to report.
    pub fn switch_locale(
        &self,
        dir: &CatalogDirectory,
        locale: &LocaleId,
        fallback: bool,
    ) -> Result<()> {
        match dir.load(locale, fallback, &self.options) {
            Ok(catalog) => {
                self.install(catalog);
                Ok(())
            }
            Err(err) => {
                warn!(locale = %locale, error = %err, "locale switch failed, showing source strings");
                self.install(Catalog::untranslated(locale.clone()));
                Err(err)
            }
        }
    }

    /// Re-read the active catalog's file. Swaps only if the content changed;
    /// returns whether it did. A catalog with no backing file is left alone.
    pub fn reload(&self) -> Result<bool> {
        let current = self.snapshot();
        let Some(path) = current.origin() else {
            debug!("active catalog has no file, nothing to reload");
            return Ok(false);
        };

        let document = ts::read_document(path)?;
        if current.fingerprint() == Some(document.fingerprint.as_str()) {
            debug!(file = %path.display(), "catalog unchanged");
            return Ok(false);
        }

        let catalog = Catalog::from_document(document, &self.options)?;
        self.install(catalog);
        Ok(true)
    }

    /// Load a specific file and make it active.
    pub fn install_file(&self, path: &std::path::Path) -> Result<Arc<Catalog>> {
        let catalog = load_file(path, &self.options)?;
        Ok(self.install(catalog))
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let active = self.active.load();
        f.debug_struct("Translator")
            .field("locale", &active.locale().to_string())
            .field("entries", &active.len())
            .field("options", &self.options)
            .finish()
    }
}
