// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locating catalog files for a locale.
//!
//! Catalogs live side by side in one directory and are named
//! `<prefix>_<locale>.ts`, e.g. `chkforge_it_it.ts`. The locale part is
//! matched case-insensitively.

use super::{load_file, Catalog, LoadOptions};
use crate::error::{CatalogLoadError, Result};
use crate::locale::LocaleId;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDirectory {
    dir: PathBuf,
    prefix: String,
}

impl CatalogDirectory {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Canonical file path for `locale`, whether or not it exists.
    pub fn path_for(&self, locale: &LocaleId) -> PathBuf {
        self.dir
            .join(format!("{}_{}.ts", self.prefix, locale.file_stem()))
    }

    /// First existing catalog along the locale's fallback chain (or for the
    /// exact locale only, when `fallback` is off).
    pub fn find(&self, locale: &LocaleId, fallback: bool) -> Result<(LocaleId, PathBuf)> {
        let candidates = if fallback {
            locale.fallback_chain()
        } else {
            vec![locale.clone()]
        };
        let mut available: Option<Vec<(LocaleId, PathBuf)>> = None;

        for candidate in candidates {
            let path = self.path_for(&candidate);
            if path.is_file() {
                return Ok((candidate, path));
            }
            // same locale, different file-name casing
            let listing = available.get_or_insert_with(|| self.available());
            if let Some((_, path)) = listing.iter().find(|(id, _)| *id == candidate) {
                return Ok((candidate, path.clone()));
            }
            debug!(locale = %candidate, path = %path.display(), "no catalog file");
        }

        Err(CatalogLoadError::NotFound {
            locale: locale.to_string(),
            dir: self.dir.clone(),
        })
    }

    /// Every `<prefix>_<locale>.ts` in the directory, sorted by locale.
    /// Files whose suffix is not a locale are ignored.
    pub fn available(&self) -> Vec<(LocaleId, PathBuf)> {
        let head = format!("{}_", self.prefix);
        let mut found: Vec<(LocaleId, PathBuf)> = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let path = entry.into_path();
                if path.extension().and_then(|e| e.to_str()) != Some("ts") {
                    return None;
                }
                let stem = path.file_stem()?.to_str()?;
                let locale = LocaleId::parse(stem.strip_prefix(&head)?)?;
                Some((locale, path))
            })
            .collect();
        found.sort_by(|a, b| a.0.cmp(&b.0));
        found
    }

    /// Find and load the catalog for `locale`.
    pub fn load(
        &self,
        locale: &LocaleId,
        fallback: bool,
        options: &LoadOptions,
    ) -> Result<Catalog> {
        let (found, path) = self.find(locale, fallback)?;
        if &found != locale {
            debug!(requested = %locale, using = %found, "falling back to base language catalog");
        }
        let catalog = load_file(&path, options)?;
        if catalog.locale().language() != found.language() {
            warn!(
                file = %path.display(),
                expected = %found,
                declared = %catalog.locale(),
                "catalog declares a different language than its file name"
            );
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn doc(language: &str) -> String {
        format!(
            "<TS version=\"2.1\" language=\"{language}\"><context><name>QObject</name>\
             <message><source>Zerg</source><translation>Zerg ({language})</translation>\
             </message></context></TS>"
        )
    }

    fn setup(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, language) in files {
            fs::write(dir.path().join(name), doc(language)).unwrap();
        }
        dir
    }

    #[test]
    fn path_uses_lowercase_stem() {
        let dir = CatalogDirectory::new("translations", "chkforge");
        let it = LocaleId::parse("it_IT").unwrap();
        assert_eq!(
            dir.path_for(&it),
            Path::new("translations").join("chkforge_it_it.ts")
        );
    }

    #[test]
    fn lists_available_locales() {
        let tmp = setup(&[
            ("chkforge_ko_kr.ts", "ko_KR"),
            ("chkforge_it_it.ts", "it_IT"),
            ("chkforge_notes.ts", "it_IT"),
            ("other_de_de.ts", "de_DE"),
        ]);
        fs::write(tmp.path().join("chkforge_fr.txt"), "x").unwrap();

        let dir = CatalogDirectory::new(tmp.path(), "chkforge");
        let locales: Vec<String> = dir
            .available()
            .iter()
            .map(|(id, _)| id.to_string())
            .collect();
        assert_eq!(locales, vec!["it_IT", "ko_KR"]);
    }

    #[test]
    fn region_falls_back_to_language_file() {
        let tmp = setup(&[("chkforge_it.ts", "it")]);
        let dir = CatalogDirectory::new(tmp.path(), "chkforge");
        let it_ch = LocaleId::parse("it_CH").unwrap();

        let (found, path) = dir.find(&it_ch, true).unwrap();
        assert_eq!(found.to_string(), "it");
        assert!(path.ends_with("chkforge_it.ts"));

        let err = dir.find(&it_ch, false).unwrap_err();
        assert!(matches!(err, CatalogLoadError::NotFound { .. }));
    }

    #[test]
    fn exact_region_wins() {
        let tmp = setup(&[("chkforge_it.ts", "it"), ("chkforge_it_it.ts", "it_IT")]);
        let dir = CatalogDirectory::new(tmp.path(), "chkforge");
        let catalog = dir
            .load(&LocaleId::parse("it_IT").unwrap(), true, &LoadOptions::default())
            .unwrap();
        assert_eq!(catalog.resolve("QObject", "Zerg", None), "Zerg (it_IT)");
    }

    #[test]
    fn file_name_casing_is_tolerated() {
        let tmp = setup(&[("chkforge_ko_KR.ts", "ko_KR")]);
        let dir = CatalogDirectory::new(tmp.path(), "chkforge");
        let (found, path) = dir.find(&LocaleId::parse("ko_KR").unwrap(), false).unwrap();
        assert_eq!(found.to_string(), "ko_KR");
        assert!(path.is_file());
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn misnamed_file_is_loaded_with_a_warning() {
        let tmp = setup(&[("chkforge_it_it.ts", "ko_KR"), ("chkforge_ko_kr.ts", "ko_KR")]);
        let dir = CatalogDirectory::new(tmp.path(), "chkforge");

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        let it = LocaleId::parse("it_IT").unwrap();
        let ko = LocaleId::parse("ko_KR").unwrap();
        let (misnamed, matching) = tracing::subscriber::with_default(subscriber, || {
            let misnamed = dir.load(&it, false, &LoadOptions::default()).unwrap();
            let before = captured.0.lock().unwrap().len();
            let matching = dir.load(&ko, false, &LoadOptions::default()).unwrap();
            let after = captured.0.lock().unwrap().len();
            assert_eq!(
                before, after,
                "a matching catalog logs nothing at warn level"
            );
            (misnamed, matching)
        });

        assert_eq!(misnamed.locale().to_string(), "ko_KR");
        assert_eq!(matching.locale().to_string(), "ko_KR");
        let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(log.contains("WARN"), "{log}");
        assert!(log.contains("expected=it_IT"), "{log}");
        assert!(log.contains("declared=ko_KR"), "{log}");
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = CatalogDirectory::new("/nonexistent/translations", "chkforge");
        assert!(dir.available().is_empty());
    }
}
