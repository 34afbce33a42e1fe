// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language codes and display names.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Every ISO 639-1 two-letter code, sorted for binary search.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// (code, English name, native name) for languages a map editor is likely
/// to ship. StarCraft itself was localized into most of these.
const DISPLAY_NAMES: &[(&str, &str, &str)] = &[
    ("cs", "Czech", "Čeština"),
    ("de", "German", "Deutsch"),
    ("en", "English", "English"),
    ("es", "Spanish", "Español"),
    ("fi", "Finnish", "Suomi"),
    ("fr", "French", "Français"),
    ("it", "Italian", "Italiano"),
    ("ja", "Japanese", "日本語"),
    ("ko", "Korean", "한국어"),
    ("nl", "Dutch", "Nederlands"),
    ("pl", "Polish", "Polski"),
    ("pt", "Portuguese", "Português"),
    ("ru", "Russian", "Русский"),
    ("sv", "Swedish", "Svenska"),
    ("tr", "Turkish", "Türkçe"),
    ("uk", "Ukrainian", "Українська"),
    ("zh", "Chinese", "中文"),
];

/// Is `code` a known ISO 639-1 code? Codes are lowercase; `"EN"` is rejected.
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO_639_1.binary_search(&code).is_ok()
}

/// English name for a language code, if we have one on file.
pub fn language_name(code: &str) -> Option<&'static str> {
    DISPLAY_NAMES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, english, _)| *english)
}

/// The language's name written in that language, for locale pickers.
pub fn native_name(code: &str) -> Option<&'static str> {
    DISPLAY_NAMES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, _, native)| *native)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table_is_sorted() {
        assert!(ISO_639_1.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn validates_codes() {
        assert!(is_valid_iso639_1("it"));
        assert!(is_valid_iso639_1("ko"));
        assert!(is_valid_iso639_1("zu"));
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1("KO"));
        assert!(!is_valid_iso639_1("ita"));
        assert!(!is_valid_iso639_1(""));
    }

    #[test]
    fn display_names_resolve() {
        assert_eq!(language_name("it"), Some("Italian"));
        assert_eq!(native_name("ko"), Some("한국어"));
        assert_eq!(language_name("zu"), None);
    }

    #[test]
    fn display_names_only_for_valid_codes() {
        for (code, _, _) in DISPLAY_NAMES {
            assert!(is_valid_iso639_1(code), "{code} should be ISO 639-1");
        }
    }
}
