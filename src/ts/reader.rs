// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pull parser over the `.ts` element tree.
//!
//! The format is small and rigid, so the parser is a hand-written descent
//! over `quick-xml` events: one method per element kind, each consuming
//! events up to and including its own closing tag.

use crate::error::{CatalogLoadError, Result};
use crate::types::{Location, TranslationEntry, TranslationState, TsDocument};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

pub(super) fn parse(text: &str, origin: &Path) -> Result<TsDocument> {
    TsParser::new(text, origin).document()
}

/// Next structural item inside an element, with whitespace and comments skipped.
enum Child<'a> {
    Open(BytesStart<'a>),
    Empty(BytesStart<'a>),
    Close,
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    text: &'a str,
    origin: &'a Path,
    // state for relative `<location line="+N">` resolution
    last_file: Option<String>,
    last_lines: HashMap<String, u32>,
}

impl<'a> TsParser<'a> {
    fn new(text: &'a str, origin: &'a Path) -> Self {
        Self {
            reader: Reader::from_str(text),
            text,
            origin,
            last_file: None,
            last_lines: HashMap::new(),
        }
    }

    fn document(mut self) -> Result<TsDocument> {
        let mut root: Option<TsDocument> = None;

        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"TS" && root.is_none() => {
                    let mut document = self.root(&e)?;
                    self.ts_body(&mut document.entries)?;
                    root = Some(document);
                }
                Event::Empty(e) if e.name().as_ref() == b"TS" && root.is_none() => {
                    root = Some(self.root(&e)?);
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(self.unexpected(&e, "document"));
                }
                Event::Text(t) if t.iter().all(u8::is_ascii_whitespace) => {}
                Event::Text(_) | Event::CData(_) => {
                    return Err(self.xml_error("text outside the <TS> element"));
                }
                Event::End(_) => return Err(self.xml_error("unbalanced closing tag")),
                Event::Eof => break,
                _ => {}
            }
        }

        root.ok_or_else(|| CatalogLoadError::MissingElement {
            file: self.origin.to_path_buf(),
            line: self.line(),
            element: "TS",
            parent: "document",
        })
    }

    fn root(&self, e: &BytesStart) -> Result<TsDocument> {
        let language = self
            .attribute(e, b"language")?
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| CatalogLoadError::MissingLanguage {
                file: self.origin.to_path_buf(),
            })?;

        Ok(TsDocument {
            path: Some(self.origin.to_path_buf()),
            version: self.attribute(e, b"version")?,
            language,
            source_language: self
                .attribute(e, b"sourcelanguage")?
                .filter(|l| !l.trim().is_empty()),
            fingerprint: String::new(),
            entries: Vec::new(),
        })
    }

    fn ts_body(&mut self, entries: &mut Vec<TranslationEntry>) -> Result<()> {
        loop {
            match self.child("TS")? {
                Child::Open(e) => match e.name().as_ref() {
                    b"context" => self.context(entries)?,
                    b"dependencies" => self.skip(&e)?,
                    _ => return Err(self.unexpected(&e, "TS")),
                },
                Child::Empty(e) => match e.name().as_ref() {
                    b"context" | b"dependencies" => {}
                    _ => return Err(self.unexpected(&e, "TS")),
                },
                Child::Close => return Ok(()),
            }
        }
    }

    fn context(&mut self, entries: &mut Vec<TranslationEntry>) -> Result<()> {
        let start = self.position();
        let mut name: Option<String> = None;

        loop {
            match self.child("context")? {
                Child::Open(e) => match e.name().as_ref() {
                    b"name" => name = Some(self.text("name")?),
                    b"comment" | b"encoding" => self.skip(&e)?,
                    b"message" => {
                        let Some(context) = name.as_deref() else {
                            return Err(CatalogLoadError::MissingElement {
                                file: self.origin.to_path_buf(),
                                line: self.line_at(start),
                                element: "name",
                                parent: "context",
                            });
                        };
                        let entry = self.message(&e, context)?;
                        entries.push(entry);
                    }
                    _ => return Err(self.unexpected(&e, "context")),
                },
                Child::Empty(e) => match e.name().as_ref() {
                    b"name" => name = Some(String::new()),
                    b"comment" | b"encoding" => {}
                    b"message" => {
                        return Err(CatalogLoadError::MissingElement {
                            file: self.origin.to_path_buf(),
                            line: self.line(),
                            element: "source",
                            parent: "message",
                        });
                    }
                    _ => return Err(self.unexpected(&e, "context")),
                },
                Child::Close => break,
            }
        }

        if name.is_none() {
            return Err(CatalogLoadError::MissingElement {
                file: self.origin.to_path_buf(),
                line: self.line_at(start),
                element: "name",
                parent: "context",
            });
        }
        Ok(())
    }

    fn message(&mut self, start: &BytesStart, context: &str) -> Result<TranslationEntry> {
        let offset = self.position();
        let numerus = self.attribute(start, b"numerus")?.as_deref() == Some("yes");
        let mut entry = TranslationEntry::new(context, "");
        let mut source: Option<String> = None;

        loop {
            match self.child("message")? {
                Child::Open(e) => match e.name().as_ref() {
                    b"location" => {
                        let location = self.location(&e)?;
                        entry.locations.push(location);
                        self.skip(&e)?;
                    }
                    b"source" => source = Some(self.text("source")?),
                    b"oldsource" => entry.old_source = non_empty(self.text("oldsource")?),
                    b"comment" => entry.disambiguation = non_empty(self.text("comment")?),
                    b"extracomment" => {
                        entry.extra_comment = non_empty(self.text("extracomment")?);
                    }
                    b"translatorcomment" => {
                        entry.translator_comment = non_empty(self.text("translatorcomment")?);
                    }
                    b"translation" => {
                        entry.state = self.state(&e)?;
                        let (text, forms) = self.translation(numerus)?;
                        entry.translation = text;
                        entry.plural_forms = forms;
                    }
                    b"oldcomment" | b"userdata" => self.skip(&e)?,
                    other if other.starts_with(b"extra-") => self.skip(&e)?,
                    _ => return Err(self.unexpected(&e, "message")),
                },
                Child::Empty(e) => match e.name().as_ref() {
                    b"location" => {
                        let location = self.location(&e)?;
                        entry.locations.push(location);
                    }
                    b"source" => source = Some(String::new()),
                    b"translation" => entry.state = self.state(&e)?,
                    b"oldsource" | b"comment" | b"oldcomment" | b"extracomment"
                    | b"translatorcomment" | b"userdata" => {}
                    other if other.starts_with(b"extra-") => {}
                    _ => return Err(self.unexpected(&e, "message")),
                },
                Child::Close => break,
            }
        }

        entry.source = source.ok_or_else(|| CatalogLoadError::MissingElement {
            file: self.origin.to_path_buf(),
            line: self.line_at(offset),
            element: "source",
            parent: "message",
        })?;
        Ok(entry)
    }

    fn location(&mut self, e: &BytesStart) -> Result<Location> {
        let file = match self.attribute(e, b"filename")? {
            Some(file) => file,
            None => self
                .last_file
                .clone()
                .ok_or_else(|| self.invalid_attribute("filename", ""))?,
        };

        let line = match self.attribute(e, b"line")? {
            None => None,
            Some(raw) => Some(self.resolve_line(&file, &raw)?),
        };

        if let Some(line) = line {
            self.last_lines.insert(file.clone(), line);
        }
        self.last_file = Some(file.clone());
        Ok(Location { file, line })
    }

    /// Absolute (`"37"`) or relative to the previous location in the same
    /// file (`"+12"`, `"-3"`).
    fn resolve_line(&self, file: &str, raw: &str) -> Result<u32> {
        let trimmed = raw.trim();
        let resolved = if trimmed.starts_with(['+', '-']) {
            let base = i64::from(self.last_lines.get(file).copied().unwrap_or(0));
            trimmed
                .parse::<i64>()
                .ok()
                .and_then(|delta| u32::try_from(base + delta).ok())
        } else {
            trimmed.parse::<u32>().ok()
        };
        resolved.ok_or_else(|| self.invalid_attribute("line", raw))
    }

    fn state(&self, e: &BytesStart) -> Result<TranslationState> {
        let raw = self.attribute(e, b"type")?;
        TranslationState::from_type_attr(raw.as_deref())
            .ok_or_else(|| self.invalid_attribute("type", raw.as_deref().unwrap_or_default()))
    }

    /// Body of `<translation>`: plain text, `<numerusform>`s, or
    /// `<lengthvariant>`s (the first variant wins).
    fn translation(&mut self, numerus: bool) -> Result<(Option<String>, Vec<String>)> {
        let mut text = String::new();
        let mut forms = Vec::new();
        let mut variants = Vec::new();

        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let chunk = t.unescape().map_err(|err| self.xml_error(err))?;
                    text.push_str(&chunk);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::Start(e) => match e.name().as_ref() {
                    b"numerusform" => forms.push(self.text("numerusform")?),
                    b"lengthvariant" => variants.push(self.text("lengthvariant")?),
                    _ => return Err(self.unexpected(&e, "translation")),
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"byte" => text.push(self.byte(&e)?),
                    b"numerusform" => forms.push(String::new()),
                    b"lengthvariant" => variants.push(String::new()),
                    _ => return Err(self.unexpected(&e, "translation")),
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(self.xml_error("unexpected end of document inside <translation>"))
                }
                _ => {}
            }
        }

        let main = if numerus || !forms.is_empty() {
            forms.first().cloned().unwrap_or_default()
        } else if let Some(first) = variants.into_iter().next() {
            first
        } else {
            normalize_newlines(text)
        };
        Ok((non_empty(main), forms))
    }

    /// Character content of a leaf element, entities and `<byte>` resolved.
    fn text(&mut self, element: &str) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let chunk = t.unescape().map_err(|err| self.xml_error(err))?;
                    out.push_str(&chunk);
                }
                Event::CData(c) => out.push_str(&String::from_utf8_lossy(&c)),
                Event::Empty(e) if e.name().as_ref() == b"byte" => out.push(self.byte(&e)?),
                Event::Start(e) | Event::Empty(e) => return Err(self.unexpected(&e, element)),
                Event::End(_) => return Ok(normalize_newlines(out)),
                Event::Eof => {
                    return Err(
                        self.xml_error(format!("unexpected end of document inside <{element}>"))
                    )
                }
                _ => {}
            }
        }
    }

    /// `<byte value="x1b"/>` or `<byte value="27"/>`
    fn byte(&self, e: &BytesStart) -> Result<char> {
        let raw = self.attribute(e, b"value")?.unwrap_or_default();
        let code = match raw.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => raw.parse::<u32>().ok(),
        };
        code.and_then(char::from_u32)
            .ok_or_else(|| self.invalid_attribute("value", &raw))
    }

    fn child(&mut self, parent: &str) -> Result<Child<'a>> {
        loop {
            match self.next_event()? {
                Event::Start(e) => return Ok(Child::Open(e)),
                Event::Empty(e) => return Ok(Child::Empty(e)),
                Event::End(_) => return Ok(Child::Close),
                Event::Text(t) if t.iter().all(u8::is_ascii_whitespace) => {}
                Event::Text(_) | Event::CData(_) => {
                    return Err(self.xml_error(format!("unexpected text inside <{parent}>")))
                }
                Event::Eof => {
                    return Err(
                        self.xml_error(format!("unexpected end of document inside <{parent}>"))
                    )
                }
                _ => {}
            }
        }
    }

    fn skip(&mut self, e: &BytesStart) -> Result<()> {
        match self.reader.read_to_end(e.name()) {
            Ok(_) => Ok(()),
            Err(err) => Err(self.xml_error(err)),
        }
    }

    fn next_event(&mut self) -> Result<Event<'a>> {
        match self.reader.read_event() {
            Ok(event) => Ok(event),
            Err(err) => Err(self.xml_error(err)),
        }
    }

    fn attribute(&self, e: &BytesStart, key: &[u8]) -> Result<Option<String>> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(err))?;
            if attr.key.as_ref() == key {
                let value = attr.unescape_value().map_err(|err| self.xml_error(err))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    /// Byte offset of the reader. Cheap; turn it into a line with
    /// [`Self::line_at`] only when an error is built.
    fn position(&self) -> usize {
        usize::try_from(self.reader.buffer_position()).unwrap_or(usize::MAX)
    }

    /// 1-based line of a byte offset.
    fn line_at(&self, pos: usize) -> usize {
        let bytes = self.text.as_bytes();
        let upto = &bytes[..pos.min(bytes.len())];
        upto.iter().filter(|&&b| b == b'\n').count() + 1
    }

    /// 1-based line of the reader's current position.
    fn line(&self) -> usize {
        self.line_at(self.position())
    }

    fn xml_error(&self, reason: impl Display) -> CatalogLoadError {
        CatalogLoadError::xml(self.origin, self.line(), reason.to_string())
    }

    fn unexpected(&self, e: &BytesStart, parent: &str) -> CatalogLoadError {
        CatalogLoadError::UnexpectedElement {
            file: self.origin.to_path_buf(),
            line: self.line(),
            element: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            parent: parent.to_string(),
        }
    }

    fn invalid_attribute(&self, attribute: &'static str, value: &str) -> CatalogLoadError {
        CatalogLoadError::InvalidAttribute {
            file: self.origin.to_path_buf(),
            line: self.line(),
            attribute,
            value: value.to_string(),
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ko_KR">
<context>
    <name>AbilitiesTab</name>
    <message>
        <location filename="abilitiestab.ui" line="46"/>
        <location filename="abilitiestab.ui" line="168"/>
        <source>Use Defaults</source>
        <oldsource>Use Default</oldsource>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location filename="abilitiestab.ui" line="58"/>
        <source>Minerals</source>
        <extracomment>EditLocal:1223</extracomment>
        <translation>광물</translation>
    </message>
</context>
<context>
    <name>QObject</name>
    <message>
        <location filename="terrain.cpp" line="96"/>
        <source>Space</source>
        <comment>Tileset</comment>
        <translation>우주</translation>
    </message>
    <message>
        <location filename="terrain.cpp" line="101"/>
        <source>Space</source>
        <comment>Brush</comment>
        <translation type="unfinished">우주</translation>
    </message>
    <message>
        <source>Mi&amp;d Air</source>
        <translation>&quot;중간&quot; 공중</translation>
    </message>
</context>
</TS>
"#;

    fn parse_sample(text: &str) -> Result<TsDocument> {
        parse(text, Path::new("sample.ts"))
    }

    #[test]
    fn parses_header_and_contexts() {
        let doc = parse_sample(SAMPLE).expect("sample parses");
        assert_eq!(doc.language, "ko_KR");
        assert_eq!(doc.version.as_deref(), Some("2.1"));
        assert_eq!(doc.source_language, None);
        assert_eq!(doc.entries.len(), 5);
        assert_eq!(doc.context_names(), vec!["AbilitiesTab", "QObject"]);
    }

    #[test]
    fn parses_message_fields() {
        let doc = parse_sample(SAMPLE).unwrap();
        let first = &doc.entries[0];
        assert_eq!(first.context, "AbilitiesTab");
        assert_eq!(first.source, "Use Defaults");
        assert_eq!(first.old_source.as_deref(), Some("Use Default"));
        assert_eq!(first.translation, None);
        assert_eq!(first.state, TranslationState::Unfinished);
        assert_eq!(first.locations.len(), 2);
        assert_eq!(first.locations[1].line, Some(168));

        let minerals = &doc.entries[1];
        assert_eq!(minerals.translation.as_deref(), Some("광물"));
        assert_eq!(minerals.extra_comment.as_deref(), Some("EditLocal:1223"));
        assert_eq!(minerals.state, TranslationState::Finished);
    }

    #[test]
    fn keeps_disambiguation_apart() {
        let doc = parse_sample(SAMPLE).unwrap();
        let spaces: Vec<_> = doc.entries.iter().filter(|e| e.source == "Space").collect();
        assert_eq!(spaces.len(), 2);
        assert_eq!(spaces[0].disambiguation.as_deref(), Some("Tileset"));
        assert_eq!(spaces[1].disambiguation.as_deref(), Some("Brush"));
        assert_eq!(spaces[1].state, TranslationState::Unfinished);
        assert_eq!(spaces[1].translation.as_deref(), Some("우주"));
    }

    #[test]
    fn unescapes_entities() {
        let doc = parse_sample(SAMPLE).unwrap();
        let air = doc.entries.last().unwrap();
        assert_eq!(air.source, "Mi&d Air");
        assert_eq!(air.translation.as_deref(), Some("\"중간\" 공중"));
    }

    #[test]
    fn multiline_source_is_preserved() {
        let text = "<TS language=\"it_IT\"><context><name>AboutDialog</name><message>\
                    <source>## Credits\n- Jon\n</source><translation type=\"unfinished\"/>\
                    </message></context></TS>";
        let doc = parse_sample(text).unwrap();
        assert_eq!(doc.entries[0].source, "## Credits\n- Jon\n");
        assert_eq!(doc.entries[0].translation, None);
    }

    #[test]
    fn crlf_is_normalized() {
        let text = "<TS language=\"it_IT\"><context><name>A</name><message>\
                    <source>one\r\ntwo</source><translation>uno\r\ndue</translation>\
                    </message></context></TS>";
        let doc = parse_sample(text).unwrap();
        assert_eq!(doc.entries[0].source, "one\ntwo");
        assert_eq!(doc.entries[0].translation.as_deref(), Some("uno\ndue"));
    }

    #[test]
    fn numerus_forms() {
        let text = r#"<TS language="it_IT"><context><name>MainWindow</name>
            <message numerus="yes">
                <source>%n unit(s) selected</source>
                <translation>
                    <numerusform>%n unità selezionata</numerusform>
                    <numerusform>%n unità selezionate</numerusform>
                </translation>
            </message></context></TS>"#;
        let doc = parse_sample(text).unwrap();
        let entry = &doc.entries[0];
        assert!(entry.is_numerus());
        assert_eq!(entry.plural_forms.len(), 2);
        assert_eq!(entry.translation.as_deref(), Some("%n unità selezionata"));
    }

    #[test]
    fn relative_locations_and_bytes() {
        let text = r#"<TS language="it_IT"><context><name>QObject</name>
            <message><location filename="strings.cpp" line="43"/><source>Computer</source>
                <translation>Computer</translation></message>
            <message><location line="+112"/><location filename="terrain.cpp" line="+5"/>
                <source>Tab<byte value="x9"/>stop</source>
                <translation>Tab<byte value="9"/>stop</translation></message>
            </context></TS>"#;
        let doc = parse_sample(text).unwrap();
        let second = &doc.entries[1];
        assert_eq!(second.locations[0].file, "strings.cpp");
        assert_eq!(second.locations[0].line, Some(155));
        assert_eq!(second.locations[1].file, "terrain.cpp");
        assert_eq!(second.locations[1].line, Some(5));
        assert_eq!(second.source, "Tab\tstop");
        assert_eq!(second.translation.as_deref(), Some("Tab\tstop"));
    }

    #[test]
    fn vanished_messages_are_parsed() {
        let text = r#"<TS language="it_IT"><context><name>MainWindow</name>
            <message><source>&amp;Recent Files</source>
            <translation type="vanished">File &amp;recenti</translation></message>
            </context></TS>"#;
        let doc = parse_sample(text).unwrap();
        assert_eq!(doc.entries[0].state, TranslationState::Vanished);
        assert_eq!(doc.active_entries().count(), 0);
    }

    #[test]
    fn skips_extra_elements() {
        let text = r#"<TS language="it_IT"><dependencies><dependency catalog="qtbase"/></dependencies>
            <context><name>A</name><message id="a.b">
            <source>x</source><extra-po-flags>c-format</extra-po-flags><userdata>u</userdata>
            <translatorcomment>check tone</translatorcomment>
            <translation>y</translation></message></context></TS>"#;
        let doc = parse_sample(text).unwrap();
        assert_eq!(doc.entries[0].translation.as_deref(), Some("y"));
        assert_eq!(
            doc.entries[0].translator_comment.as_deref(),
            Some("check tone")
        );
    }

    #[test]
    fn missing_language_fails() {
        let err = parse_sample("<TS version=\"2.1\"></TS>").unwrap_err();
        assert!(matches!(err, CatalogLoadError::MissingLanguage { .. }));
        let err = parse_sample("<TS language=\"\"/>").unwrap_err();
        assert!(matches!(err, CatalogLoadError::MissingLanguage { .. }));
    }

    #[test]
    fn missing_root_fails() {
        let err = parse_sample("<?xml version=\"1.0\"?>\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::MissingElement { element: "TS", .. }
        ));
        let err = parse_sample("<catalog language=\"it\"/>").unwrap_err();
        assert!(matches!(err, CatalogLoadError::UnexpectedElement { .. }));
    }

    #[test]
    fn missing_source_fails() {
        let text = "<TS language=\"it_IT\"><context><name>A</name>\n<message>\
                    <translation>y</translation></message></context></TS>";
        let err = parse_sample(text).unwrap_err();
        match err {
            CatalogLoadError::MissingElement {
                element, parent, ..
            } => {
                assert_eq!(element, "source");
                assert_eq!(parent, "message");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn message_before_name_fails() {
        let text = "<TS language=\"it_IT\"><context><message><source>x</source>\
                    </message></context></TS>";
        let err = parse_sample(text).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::MissingElement { element: "name", .. }
        ));
    }

    #[test]
    fn truncated_document_reports_line() {
        let text = "<TS language=\"it_IT\">\n<context>\n<name>A</name>\n<message>\n";
        let err = parse_sample(text).unwrap_err();
        match err {
            CatalogLoadError::Xml { line, reason, .. } => {
                assert!(line >= 4, "line was {line}");
                assert!(reason.contains("message"));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn mismatched_tags_fail() {
        let text = "<TS language=\"it_IT\"><context><name>A</context></TS>";
        assert!(matches!(
            parse_sample(text),
            Err(CatalogLoadError::Xml { .. })
        ));
    }

    #[test]
    fn bad_attributes_fail() {
        let text = "<TS language=\"it_IT\"><context><name>A</name><message>\
                    <source>x</source><translation type=\"maybe\">y</translation>\
                    </message></context></TS>";
        assert!(matches!(
            parse_sample(text),
            Err(CatalogLoadError::InvalidAttribute {
                attribute: "type",
                ..
            })
        ));

        let text = "<TS language=\"it_IT\"><context><name>A</name><message>\
                    <location filename=\"a.ui\" line=\"ten\"/><source>x</source>\
                    </message></context></TS>";
        assert!(matches!(
            parse_sample(text),
            Err(CatalogLoadError::InvalidAttribute {
                attribute: "line",
                ..
            })
        ));
    }

    #[test]
    fn unknown_element_in_message_fails() {
        let text = "<TS language=\"it_IT\"><context><name>A</name><message>\
                    <source>x</source><bogus/></message></context></TS>";
        match parse_sample(text).unwrap_err() {
            CatalogLoadError::UnexpectedElement {
                element, parent, ..
            } => {
                assert_eq!(element, "bogus");
                assert_eq!(parent, "message");
            }
            other => panic!("unexpected error {other}"),
        }
    }
}
