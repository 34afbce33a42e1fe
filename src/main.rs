// SPDX-License-Identifier: PMPL-1.0-or-later

//! chkforge-i18n: inspect and query the ChkForge translation catalogs
//!
//! Looks strings up the same way the editor does, prints coverage
//! statistics, lints `.ts` files and exports them as JSON or YAML.

use anyhow::{anyhow, bail, Context, Result};
use chkforge_i18n::catalog;
use chkforge_i18n::check;
use chkforge_i18n::locale::LocaleId;
use chkforge_i18n::report::{self, CatalogStats, ReportFormatter, ReportOutputFormat};
use chkforge_i18n::settings::Settings;
use chkforge_i18n::translator::Translator;
use chkforge_i18n::ts;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chkforge-i18n")]
#[command(version)]
#[command(about = "Inspect and query ChkForge translation catalogs")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (YAML)
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Log catalog loading at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one string the way the editor would
    Lookup {
        /// Translation context, e.g. AbilitiesTab
        context: String,

        /// Source text
        source: String,

        /// Disambiguation comment
        #[arg(short, long)]
        disambiguation: Option<String>,

        /// Locale to resolve in (defaults to settings/environment)
        #[arg(short, long)]
        locale: Option<String>,

        /// Read this .ts file instead of the translations directory
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Count for numerus messages
        #[arg(short = 'n', long)]
        count: Option<i64>,
    },

    /// Translation coverage for a .ts file or a locale
    Stats {
        /// .ts file or locale (defaults to the configured locale)
        #[arg(value_name = "FILE|LOCALE")]
        target: Option<String>,

        #[arg(short = 'F', long, value_enum, default_value = "text")]
        format: ReportOutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Lint .ts files (a file or a directory)
    Check {
        /// Defaults to the translations directory
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        #[arg(short = 'F', long, value_enum, default_value = "text")]
        format: ReportOutputFormat,

        /// Fail on warnings too
        #[arg(long)]
        strict: bool,
    },

    /// Dump a parsed .ts file
    Export {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(short = 'F', long, value_enum, default_value = "json")]
        format: ReportOutputFormat,

        /// Leave out vanished and obsolete messages
        #[arg(long)]
        active_only: bool,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the catalogs in the translations directory
    Locales,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut settings = Settings::load_or_default(cli.settings.as_deref())?;
    settings.apply_env();

    match cli.command {
        Commands::Lookup {
            context,
            source,
            disambiguation,
            locale,
            file,
            count,
        } => {
            let translator = match file {
                Some(path) => {
                    let catalog = catalog::load_file(&path, &settings.load_options())
                        .with_context(|| format!("loading {}", path.display()))?;
                    Translator::with_options(catalog, settings.load_options())
                }
                None => {
                    if let Some(raw) = locale {
                        settings.locale = Some(raw);
                    }
                    match settings.locale_id()? {
                        Some(locale) => Translator::from_directory(
                            &settings.directory(),
                            &locale,
                            settings.locale_fallback,
                            settings.load_options(),
                        ),
                        None => bail!("no locale given (use --locale or set CHKFORGE_LOCALE)"),
                    }
                }
            };

            let disambiguation = disambiguation.as_deref();
            let text = match count {
                Some(n) => translator.tr_plural(&context, &source, disambiguation, n),
                None => translator.tr(&context, &source, disambiguation),
            };
            info!(locale = %translator.locale(), "resolved");
            println!("{text}");
        }

        Commands::Stats {
            target,
            format,
            output,
        } => {
            let path = resolve_target(&settings, target.as_deref())?;
            let document = ts::read_document(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let stats = report::catalog_stats(&document);
            emit_stats(&stats, format, output.as_deref())?;
        }

        Commands::Check {
            path,
            format,
            strict,
        } => {
            let root = path.unwrap_or_else(|| settings.translations_dir.clone());
            let files = check::collect_ts_files(&root);
            if files.is_empty() {
                bail!("no .ts files under {}", root.display());
            }

            let reports = check::check_files(&files);
            match format {
                ReportOutputFormat::Text => ReportFormatter::new().print_check(&reports),
                other => println!("{}", other.serialize(&reports)?),
            }

            let failed = reports.iter().any(|r| {
                r.has_errors() || (strict && r.count(check::Level::Warn) > 0)
            });
            if failed {
                return Err(anyhow!("translation check reported issues"));
            }
        }

        Commands::Export {
            file,
            format,
            active_only,
            output,
        } => {
            let mut document = ts::read_document(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            if active_only {
                document.entries.retain(|e| e.state.is_active());
            }
            // text has no export form of its own
            let format = match format {
                ReportOutputFormat::Text => ReportOutputFormat::Json,
                other => other,
            };
            match output {
                Some(path) => {
                    report::save_report(&document, format, &path)?;
                    println!("Export saved to: {}", path.display());
                }
                None => println!("{}", format.serialize(&document)?),
            }
        }

        Commands::Locales => {
            let directory = settings.directory();
            println!(
                "Catalogs in {} (prefix '{}'):",
                directory.dir().display(),
                directory.prefix()
            );
            ReportFormatter::new().print_locales(&directory.available());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// A `.ts` path, or a locale resolved through the translations directory.
fn resolve_target(settings: &Settings, target: Option<&str>) -> Result<PathBuf> {
    if let Some(raw) = target {
        let path = Path::new(raw);
        if path.extension().and_then(|e| e.to_str()) == Some("ts") || path.is_file() {
            return Ok(path.to_path_buf());
        }
    }

    let locale = match target {
        Some(raw) => LocaleId::parse(raw)
            .ok_or_else(|| anyhow!("'{raw}' is neither a .ts file nor a locale"))?,
        None => settings
            .locale_id()?
            .ok_or_else(|| anyhow!("no locale given (pass a file or set CHKFORGE_LOCALE)"))?,
    };
    let (_, path) = settings
        .directory()
        .find(&locale, settings.locale_fallback)?;
    Ok(path)
}

fn emit_stats(
    stats: &CatalogStats,
    format: ReportOutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match (format, output) {
        (ReportOutputFormat::Text, None) => ReportFormatter::new().print_stats(stats),
        (ReportOutputFormat::Text, Some(path)) => {
            colored::control::set_override(false);
            let text = ReportFormatter::new().render_stats(stats);
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            println!("Report saved to: {}", path.display());
        }
        (format, Some(path)) => {
            report::save_report(stats, format, path)?;
            println!("Report saved to: {}", path.display());
        }
        (format, None) => println!("{}", format.serialize(stats)?),
    }
    Ok(())
}
