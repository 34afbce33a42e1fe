// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading catalogs from disk, with the untranslated fallback.

use super::Catalog;
use crate::error::Result;
use crate::locale::LocaleId;
use crate::ts;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Knobs applied when a parsed document becomes a runtime catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Use translations marked `unfinished` (lrelease without `-nounfinished`)
    pub include_unfinished: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            include_unfinished: true,
        }
    }
}

/// Parse a `.ts` file into a catalog.
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Catalog> {
    let document = ts::read_document(path)?;
    let catalog = Catalog::from_document(document, options)?;
    info!(
        file = %path.display(),
        locale = %catalog.locale(),
        entries = catalog.len(),
        translated = catalog.translated_count(),
        "loaded translation catalog"
    );
    Ok(catalog)
}

/// Parse an in-memory document. `origin` names it in diagnostics.
pub fn load_bytes(bytes: &[u8], origin: &Path, options: &LoadOptions) -> Result<Catalog> {
    let document = ts::parse_bytes(bytes, origin)?;
    Catalog::from_document(document, options)
}

/// Load `path`, or fall back to an untranslated catalog for `locale`.
///
/// The failure is logged, never propagated: a broken catalog must not take
/// the editor down with it.
pub fn load_or_untranslated(path: &Path, locale: &LocaleId, options: &LoadOptions) -> Catalog {
    match load_file(path, options) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!(
                locale = %locale,
                error = %err,
                "translation catalog unavailable, showing source strings"
            );
            Catalog::untranslated(locale.clone())
        }
    }
}
