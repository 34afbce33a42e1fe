// SPDX-License-Identifier: PMPL-1.0-or-later

//! ChkForge translation catalogs.
//!
//! Loads Qt Linguist `.ts` documents and resolves UI strings through them.
//! A string is looked up by its context (the UI component), its English
//! source text and an optional disambiguation comment; anything the catalog
//! does not translate comes back as the source text.
//!
//! ```no_run
//! use chkforge_i18n::{CatalogDirectory, LoadOptions, LocaleId, Translator};
//!
//! let dir = CatalogDirectory::new("translations", "chkforge");
//! let locale = LocaleId::parse("it_IT").unwrap();
//! let translator = Translator::from_directory(&dir, &locale, true, LoadOptions::default());
//! assert_eq!(translator.tr("AbilitiesTab", "Use Default", None), "Usa standard");
//! ```

pub mod catalog;
pub mod check;
pub mod error;
pub mod locale;
pub mod report;
pub mod settings;
pub mod translator;
pub mod ts;
pub mod types;

pub use catalog::{load_or_untranslated, Catalog, CatalogDirectory, LoadOptions};
pub use error::CatalogLoadError;
pub use locale::LocaleId;
pub use settings::Settings;
pub use translator::Translator;
pub use types::{Location, TranslationEntry, TranslationState, TsDocument};
