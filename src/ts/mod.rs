// SPDX-License-Identifier: PMPL-1.0-or-later

//! Qt Linguist `.ts` documents.
//!
//! A `.ts` file is XML: a `<TS>` root with a `language` attribute, one
//! `<context>` per UI component, and one `<message>` per translatable
//! string. This module turns such a file into a [`TsDocument`]; it does not
//! decide what is visible at runtime (see [`crate::catalog`]).

mod reader;

use crate::error::{CatalogLoadError, Result};
use crate::types::TsDocument;
use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// How far into the file we look for the XML declaration.
const DECLARATION_SCAN_LIMIT: usize = 256;

/// Read and parse a `.ts` file.
pub fn read_document(path: &Path) -> Result<TsDocument> {
    let bytes = fs::read(path).map_err(|err| CatalogLoadError::io(path, err))?;
    parse_bytes(&bytes, path)
}

/// Parse raw document bytes. `origin` is only used in diagnostics.
pub fn parse_bytes(bytes: &[u8], origin: &Path) -> Result<TsDocument> {
    let text = decode(bytes, origin)?;
    let mut document = reader::parse(&text, origin)?;
    document.fingerprint = blake3::hash(bytes).to_hex().to_string();
    Ok(document)
}

/// Parse an already-decoded document. Any `encoding` in the XML
/// declaration is ignored: the text is UTF-8 already.
pub fn parse_str(text: &str, origin: &Path) -> Result<TsDocument> {
    let mut document = reader::parse(text.trim_start_matches('\u{feff}'), origin)?;
    document.fingerprint = blake3::hash(text.as_bytes()).to_hex().to_string();
    Ok(document)
}

/// Decode to UTF-8, honouring a BOM first and the XML declaration second.
fn decode<'a>(bytes: &'a [u8], origin: &Path) -> Result<Cow<'a, str>> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (declared_encoding(bytes, origin)?.unwrap_or(UTF_8), bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| CatalogLoadError::Decode {
            file: origin.to_path_buf(),
            encoding: encoding.name().to_string(),
        })
}

fn declared_encoding(bytes: &[u8], origin: &Path) -> Result<Option<&'static Encoding>> {
    static ENCODING_ATTR: OnceLock<Regex> = OnceLock::new();

    if !bytes.starts_with(b"<?xml") {
        return Ok(None);
    }
    let head = &bytes[..bytes.len().min(DECLARATION_SCAN_LIMIT)];
    let Some(end) = head.windows(2).position(|w| w == b"?>") else {
        return Ok(None);
    };
    let declaration = String::from_utf8_lossy(&head[..end]);

    let pattern = ENCODING_ATTR.get_or_init(|| {
        Regex::new(r#"encoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#).expect("static regex")
    });
    let Some(label) = pattern.captures(&declaration).and_then(|c| c.get(1)) else {
        return Ok(None);
    };

    match Encoding::for_label(label.as_str().as_bytes()) {
        Some(encoding) => Ok(Some(encoding)),
        None => Err(CatalogLoadError::Decode {
            file: origin.to_path_buf(),
            encoding: label.as_str().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("test.ts")
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"<TS language=\"it_IT\"></TS>");
        let text = decode(&bytes, origin()).unwrap();
        assert!(text.starts_with("<TS"));
    }

    #[test]
    fn declared_latin1_is_honoured() {
        let mut bytes =
            b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<TS language=\"it_IT\">".to_vec();
        bytes.push(0xE0); // à
        bytes.extend_from_slice(b"</TS>");
        let text = decode(&bytes, origin()).unwrap();
        assert!(text.contains('à'));
    }

    #[test]
    fn unknown_declared_encoding_is_an_error() {
        let bytes = b"<?xml version=\"1.0\" encoding=\"klingon\"?><TS/>";
        let err = decode(bytes, origin()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Decode { .. }));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes = b"<TS language=\"ko_KR\">\xff\xfe\xfd</TS>";
        assert!(matches!(
            decode(bytes, origin()),
            Err(CatalogLoadError::Decode { .. })
        ));
    }

    #[test]
    fn decoded_text_is_not_decoded_again() {
        let text = "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
                    <TS language=\"it_IT\"><context><name>QObject</name>\
                    <message><source>city</source><translation>città</translation></message>\
                    </context></TS>";
        let document = parse_str(text, origin()).unwrap();
        assert_eq!(document.entries[0].translation.as_deref(), Some("città"));
        assert_eq!(
            document.fingerprint,
            blake3::hash(text.as_bytes()).to_hex().to_string()
        );
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = parse_str("<TS language=\"it_IT\"></TS>", origin()).unwrap();
        let b = parse_str("<TS language=\"it_IT\"></TS>", origin()).unwrap();
        let c = parse_str("<TS language=\"ko_KR\"></TS>", origin()).unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_ne!(a.fingerprint, c.fingerprint);
        assert_eq!(a.fingerprint.len(), 64);
    }
}
