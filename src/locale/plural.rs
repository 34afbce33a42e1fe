// SPDX-License-Identifier: PMPL-1.0-or-later

//! Plural form selection for numerus messages.
//!
//! A `.ts` numerus message stores one `<numerusform>` per plural form of the
//! target language, in the order Qt Linguist uses for that language. The
//! rule here maps a count to an index into that list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluralRule {
    /// One form for every count (Korean, Japanese, Chinese, ...)
    Single,
    /// `n == 1` vs everything else (English, Italian, German, ...)
    OneOther,
    /// `n <= 1` vs everything else (French, Brazilian Portuguese)
    French,
    /// one / few / many keyed on the last digits (Russian, Ukrainian, ...)
    EastSlavic,
    /// 1 / 2-4 ending (not 12-14) / rest
    Polish,
    /// 1 / 2-4 / rest (Czech, Slovak)
    CzechSlovak,
}

impl PluralRule {
    /// Rule for an ISO 639-1 language code. Unknown languages get
    /// [`PluralRule::OneOther`], which matches the source language.
    pub fn for_language(code: &str) -> Self {
        match code {
            "ja" | "ko" | "zh" | "vi" | "th" | "id" | "ms" | "tr" => PluralRule::Single,
            "fr" => PluralRule::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::CzechSlovak,
            _ => PluralRule::OneOther,
        }
    }

    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::OneOther | PluralRule::French => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::CzechSlovak => 3,
        }
    }

    /// Index of the plural form to use for `n`.
    pub fn form_index(&self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let (m10, m100) = (n % 10, n % 100);
        match self {
            PluralRule::Single => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if m10 == 1 && m100 != 11 {
                    0
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
        }
    }
}
