// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale switching, snapshots and reload through the shared translator

use chkforge_i18n::{CatalogDirectory, CatalogLoadError, LoadOptions, LocaleId, Translator};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn shipped() -> CatalogDirectory {
    CatalogDirectory::new(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("translations"),
        "chkforge",
    )
}

fn locale(raw: &str) -> LocaleId {
    LocaleId::parse(raw).expect("valid locale")
}

#[test]
fn test_start_in_italian_and_switch_to_korean() {
    let dir = shipped();
    let translator =
        Translator::from_directory(&dir, &locale("it_IT"), true, LoadOptions::default());
    assert_eq!(
        translator.tr("QObject", "Space", Some("Tileset")),
        "Spazio"
    );

    let italian = translator.snapshot();
    translator
        .switch_locale(&dir, &locale("ko_KR"), true)
        .expect("Korean catalog loads");

    assert_eq!(translator.locale().to_string(), "ko_KR");
    assert_eq!(translator.tr("QObject", "Space", Some("Tileset")), "우주");
    // UI built from the old snapshot keeps its strings
    assert_eq!(italian.resolve("QObject", "Space", Some("Tileset")), "Spazio");
}

#[test]
fn test_unshipped_region_starts_untranslated() {
    // no chkforge_it_ch.ts, no chkforge_it.ts: nothing to fall back to
    let dir = shipped();
    let translator =
        Translator::from_directory(&dir, &locale("it_CH"), true, LoadOptions::default());
    assert!(translator.snapshot().is_untranslated());
    assert_eq!(translator.tr("AbilitiesTab", "Use Default", None), "Use Default");
}

#[test]
fn test_failed_switch_installs_untranslated_catalog() {
    let dir = shipped();
    let translator =
        Translator::from_directory(&dir, &locale("ko_KR"), true, LoadOptions::default());

    let err = translator
        .switch_locale(&dir, &locale("de_DE"), true)
        .unwrap_err();
    assert!(matches!(err, CatalogLoadError::NotFound { .. }));
    assert_eq!(translator.locale().to_string(), "de_DE");
    assert_eq!(translator.tr("QObject", "Computer", None), "Computer");
}

#[test]
fn test_concurrent_readers_during_swaps() {
    let dir = shipped();
    let translator = Arc::new(Translator::from_directory(
        &dir,
        &locale("it_IT"),
        true,
        LoadOptions::default(),
    ));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let translator = Arc::clone(&translator);
            thread::spawn(move || {
                for _ in 0..500 {
                    let text = translator.tr("QObject", "Computer", None);
                    assert!(text == "Computer" || text == "컴퓨터", "torn read: {text}");
                }
            })
        })
        .collect();

    for i in 0..20 {
        let next = if i % 2 == 0 { "ko_KR" } else { "it_IT" };
        translator
            .switch_locale(&dir, &locale(next), true)
            .expect("shipped catalog loads");
    }

    for reader in readers {
        reader.join().expect("reader thread");
    }
}

#[test]
fn test_reload_only_swaps_on_change() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chkforge_it_it.ts");
    let write = |text: &str| {
        fs::write(
            &path,
            format!(
                "<TS version=\"2.1\" language=\"it_IT\"><context><name>MainWindow</name>\
                 <message><source>&amp;File</source><translation>{text}</translation></message>\
                 </context></TS>"
            ),
        )
        .unwrap();
    };
    write("&amp;File");

    let dir = CatalogDirectory::new(tmp.path(), "chkforge");
    let translator =
        Translator::from_directory(&dir, &locale("it_IT"), true, LoadOptions::default());
    assert_eq!(translator.tr("MainWindow", "&File", None), "&File");

    assert!(!translator.reload().unwrap(), "unchanged file must not swap");

    write("&amp;Archivio");
    assert!(translator.reload().unwrap());
    assert_eq!(translator.tr("MainWindow", "&File", None), "&Archivio");
}

#[test]
fn test_reload_keeps_catalog_when_file_breaks() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chkforge_ko_kr.ts");
    fs::write(
        &path,
        "<TS language=\"ko_KR\"><context><name>QObject</name>\
         <message><source>Zerg</source><translation>저그</translation></message></context></TS>",
    )
    .unwrap();

    let dir = CatalogDirectory::new(tmp.path(), "chkforge");
    let translator =
        Translator::from_directory(&dir, &locale("ko_KR"), false, LoadOptions::default());
    fs::write(&path, "<TS language=\"ko_KR\"><context>").unwrap();

    assert!(translator.reload().is_err());
    assert_eq!(translator.tr("QObject", "Zerg", None), "저그");
}

#[test]
fn test_install_file_returns_previous() {
    let translator = Translator::untranslated(locale("it_IT"));
    let previous = translator
        .install_file(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("translations/chkforge_it_it.ts"),
        )
        .unwrap();
    assert!(previous.is_untranslated());
    assert_eq!(
        translator.tr("AbilitiesTab", "Use Default", None),
        "Usa standard"
    );
}
