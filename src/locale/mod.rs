// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifiers.
//!
//! `.ts` documents declare their target as `language="it_IT"`; settings and
//! environment variables may spell the same thing `it-IT`, `it_it` or
//! `it_IT.UTF-8`. [`LocaleId`] normalizes all of them to `it_IT` and knows
//! the fallback order used when looking for a catalog file
//! (`it_IT` first, then the bare language `it`).

mod iso639;
mod plural;

pub use iso639::{is_valid_iso639_1, language_name, native_name};
pub use plural::PluralRule;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A normalized `language[_Script][_REGION]` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

/// A string that is not a locale identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLocale(pub String);

impl fmt::Display for InvalidLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid locale identifier '{}'", self.0)
    }
}

impl std::error::Error for InvalidLocale {}

impl LocaleId {
    /// Parse a locale identifier. Returns `None` when the language is not a
    /// two- or three-letter subtag or the remaining subtags are malformed.
    /// The language need not be in the ISO 639-1 table: Qt also names
    /// catalogs `fil_PH`, `ast` or `yue_HK`.
    pub fn parse(raw: &str) -> Option<Self> {
        // POSIX suffixes: it_IT.UTF-8, de_DE@euro
        let trimmed = raw.trim();
        let core = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        let mut parts = core.split(['_', '-']);

        let language = parts.next()?.to_ascii_lowercase();
        if !is_language_subtag(&language) {
            return None;
        }

        let mut script = None;
        let mut region = None;
        for part in parts {
            if part.len() == 4
                && part.chars().all(|c| c.is_ascii_alphabetic())
                && script.is_none()
                && region.is_none()
            {
                let mut chars = part.chars();
                let first = chars.next()?.to_ascii_uppercase();
                let rest: String = chars.map(|c| c.to_ascii_lowercase()).collect();
                script = Some(format!("{first}{rest}"));
            } else if region.is_none()
                && ((part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
                    || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit())))
            {
                region = Some(part.to_ascii_uppercase());
            } else {
                return None;
            }
        }

        Some(Self {
            language,
            script,
            region,
        })
    }

    /// A locale with only a language subtag.
    pub fn language_only(code: &str) -> Option<Self> {
        let language = code.to_ascii_lowercase();
        is_language_subtag(&language).then_some(Self {
            language,
            script: None,
            region: None,
        })
    }

    /// True when the language is a two-letter ISO 639-1 code.
    pub fn is_iso639_1(&self) -> bool {
        is_valid_iso639_1(&self.language)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The bare-language locale (`it` for `it_IT`).
    pub fn base(&self) -> LocaleId {
        LocaleId {
            language: self.language.clone(),
            script: None,
            region: None,
        }
    }

    /// Locales to try, most specific first: `zh_Hant_TW`, `zh_Hant`, `zh`.
    pub fn fallback_chain(&self) -> Vec<LocaleId> {
        let mut chain = vec![self.clone()];
        if self.script.is_some() && self.region.is_some() {
            chain.push(LocaleId {
                language: self.language.clone(),
                script: self.script.clone(),
                region: None,
            });
        }
        if self.script.is_some() || self.region.is_some() {
            chain.push(self.base());
        }
        chain
    }

    /// Lowercase form used in catalog file names (`chkforge_it_it.ts`).
    pub fn file_stem(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }

    pub fn plural_rule(&self) -> PluralRule {
        PluralRule::for_language(&self.language)
    }

    /// Human-readable name, e.g. `Italian (IT)`; falls back to the code.
    pub fn display_name(&self) -> String {
        let name = language_name(&self.language).unwrap_or(self.language.as_str());
        match &self.region {
            Some(region) => format!("{name} ({region})"),
            None => name.to_string(),
        }
    }
}

fn is_language_subtag(code: &str) -> bool {
    (2..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_lowercase())
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = &self.script {
            write!(f, "_{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "_{region}")?;
        }
        Ok(())
    }
}

impl FromStr for LocaleId {
    type Err = InvalidLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleId::parse(s).ok_or_else(|| InvalidLocale(s.to_string()))
    }
}

impl Serialize for LocaleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocaleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
