// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use crate::check::{FileReport, Level};
use crate::locale::LocaleId;
use crate::report::stats::{CatalogStats, ContextStats};
use colored::*;
use std::path::PathBuf;

/// How many contexts the stats view lists under "most incomplete".
const INCOMPLETE_LIMIT: usize = 10;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_stats(&self, stats: &CatalogStats) {
        print!("{}", self.render_stats(stats));
    }

    pub fn render_stats(&self, stats: &CatalogStats) -> String {
        let mut out = String::new();
        let title = match &stats.file {
            Some(file) => format!("=== {} ===", file.display()),
            None => "=== CATALOG ===".to_string(),
        };
        out.push_str(&format!("\n{}\n", title.bold().cyan()));
        out.push_str(&format!(
            "  Language: {}\n",
            describe_language(&stats.language)
        ));
        if let Some(source) = &stats.source_language {
            out.push_str(&format!("  Source language: {source}\n"));
        }
        out.push_str(&format!("  Fingerprint: {}\n", stats.fingerprint.dimmed()));
        out.push('\n');

        out.push_str(&format!("{}\n", "TOTALS".bold().yellow()));
        out.push_str(&totals_block(&stats.totals));
        out.push_str(&format!(
            "    Coverage: {}\n",
            coverage_label(stats.coverage_percent)
        ));

        let incomplete = stats.most_incomplete(INCOMPLETE_LIMIT);
        if !incomplete.is_empty() {
            out.push('\n');
            out.push_str(&format!("{}\n", "MOST INCOMPLETE CONTEXTS".bold().yellow()));
            for (i, context) in incomplete.iter().enumerate() {
                out.push_str(&format!(
                    "    {}. {:<28} {:>4} untranslated {:>4} unfinished  ({})\n",
                    i + 1,
                    context.name.bold(),
                    context.untranslated,
                    context.unfinished,
                    coverage_label(context.coverage_percent())
                ));
            }
        }
        out
    }

    pub fn print_check(&self, reports: &[FileReport]) {
        print!("{}", self.render_check(reports));
    }

    pub fn render_check(&self, reports: &[FileReport]) -> String {
        let mut out = String::new();
        for report in reports {
            let status = if report.has_errors() {
                "FAILED".red()
            } else if report.count(Level::Warn) > 0 {
                "WARN".yellow()
            } else {
                "OK".green()
            };
            out.push_str(&format!(
                "{} {} ({} messages)\n",
                status.bold(),
                report.file.display(),
                report.messages
            ));

            for diagnostic in &report.diagnostics {
                let tag = match diagnostic.level {
                    Level::Error => diagnostic.level.tag().red(),
                    Level::Warn => diagnostic.level.tag().yellow(),
                };
                let mut line = format!("  [{}] {:22}", tag, diagnostic.code);
                if let Some(context) = &diagnostic.context {
                    line.push_str(&format!(" {}", context.bold()));
                }
                if let Some(source) = &diagnostic.source_text {
                    line.push_str(&format!(" \"{}\"", preview(source)));
                }
                if let Some(location) = &diagnostic.location {
                    line.push_str(&format!(" ({location})"));
                }
                line.push_str(&format!(": {}\n", diagnostic.detail));
                out.push_str(&line);
            }
        }

        let errors: usize = reports.iter().map(|r| r.count(Level::Error)).sum();
        let warnings: usize = reports.iter().map(|r| r.count(Level::Warn)).sum();
        out.push_str(&format!(
            "\n{} file(s), {} error(s), {} warning(s)\n",
            reports.len(),
            errors,
            warnings
        ));
        out
    }

    pub fn print_locales(&self, locales: &[(LocaleId, PathBuf)]) {
        if locales.is_empty() {
            println!("{}", "No translation catalogs found".yellow());
            return;
        }
        for (locale, path) in locales {
            let native = crate::locale::native_name(locale.language()).unwrap_or("");
            println!(
                "  {:<10} {:<24} {:<12} {}",
                locale.to_string().bold(),
                locale.display_name(),
                native,
                path.display().to_string().dimmed()
            );
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn totals_block(totals: &ContextStats) -> String {
    format!(
        "    Messages: {}\n    Finished: {}\n    Unfinished: {}\n    Untranslated: {}\n    Vanished/obsolete: {}\n",
        totals.total,
        totals.finished.to_string().green(),
        totals.unfinished.to_string().yellow(),
        totals.untranslated.to_string().red(),
        totals.obsolete
    )
}

fn coverage_label(percent: f64) -> ColoredString {
    let label = format!("{percent:.1}%");
    if percent >= 90.0 {
        label.green()
    } else if percent >= 50.0 {
        label.yellow()
    } else {
        label.red()
    }
}

fn describe_language(raw: &str) -> String {
    match LocaleId::parse(raw) {
        Some(locale) => format!("{} ({})", locale, locale.display_name()),
        None => format!("{raw} (unrecognized)"),
    }
}

/// First line of a message, shortened for one-line output.
fn preview(text: &str) -> String {
    const MAX: usize = 40;
    let first = text.lines().next().unwrap_or_default();
    let mut short: String = first.chars().take(MAX).collect();
    if first.chars().count() > MAX || text.lines().nth(1).is_some() {
        short.push('…');
    }
    short
}
