// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    /// Colored, human-readable
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ReportOutputFormat::Text),
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Text => "txt",
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    /// Machine-readable rendering. `Text` has no generic form and is
    /// serialized as JSON; callers print text through the formatter.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self {
            ReportOutputFormat::Text | ReportOutputFormat::Json => {
                Ok(serde_json::to_string_pretty(value)?)
            }
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn parses_aliases() {
        assert_eq!(ReportOutputFormat::parse("YML"), Some(ReportOutputFormat::Yaml));
        assert_eq!(ReportOutputFormat::parse("json"), Some(ReportOutputFormat::Json));
        assert_eq!(ReportOutputFormat::parse("txt"), Some(ReportOutputFormat::Text));
        assert_eq!(ReportOutputFormat::parse("sarif"), None);
    }

    #[test]
    fn serializes_json_and_yaml() {
        let mut value = BTreeMap::new();
        value.insert("language", "it_IT");

        let json = ReportOutputFormat::Json.serialize(&value).unwrap();
        assert!(json.contains("\"language\": \"it_IT\""));
        let yaml = ReportOutputFormat::Yaml.serialize(&value).unwrap();
        assert!(yaml.contains("language: it_IT"));
    }
}
