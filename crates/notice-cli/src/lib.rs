//! Notice CLI
//!
//! Plays the page host from a terminal: a JSON file stands in for the
//! page-injected descriptor and another for the browser's cookie jar.
//!
//! ```text
//! notice show --descriptor page.json --jar jar.json [--today 2026-10-16]
//! notice views --jar jar.json --id <id> [--today 2026-10-16]
//! notice render [--level escape-only|restricted-markdown] message.md
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgMatches, Command};
use notice_policy::DisplayPolicy;
use notice_popup::{NoticeConfig, NotificationDescriptor, NotificationManager, Outcome, RecordingOverlay};
use notice_render::{renderer_for, RenderLevel};
use notice_store::{Clock, FixedClock, JarFile, SystemClock};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Command-line definition
#[must_use]
pub fn build_cli() -> Command {
    Command::new("notice")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Homepage notification popup host")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .help("Pin the current day (YYYY-MM-DD)"),
        )
        .subcommand(
            Command::new("show")
                .about("Evaluate a page descriptor and print the popup if shown")
                .arg(
                    Arg::new("descriptor")
                        .long("descriptor")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON file holding the page descriptor (or null)"),
                )
                .arg(
                    Arg::new("jar")
                        .long("jar")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON cookie jar, created if missing"),
                ),
        )
        .subcommand(
            Command::new("views")
                .about("Print the recorded view count of a notification")
                .arg(
                    Arg::new("jar")
                        .long("jar")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON cookie jar"),
                )
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .help("Notification id"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a message file as HTML")
                .arg(
                    Arg::new("level")
                        .long("level")
                        .default_value("restricted-markdown")
                        .value_parser(["escape-only", "restricted-markdown"])
                        .help("Renderer level"),
                )
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Message file"),
                ),
        )
}

/// Run the selected subcommand and return what should be printed
///
/// # Errors
/// Returns an error if an input file cannot be read or parsed, or the jar
/// cannot be saved
pub async fn run(matches: &ArgMatches) -> Result<Option<String>> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => NoticeConfig::load(path)
            .await
            .with_context(|| format!("loading config {}", path.display()))?,
        None => NoticeConfig::default(),
    };
    let clock: Arc<dyn Clock> = match matches.get_one::<String>("today") {
        Some(raw) => Arc::new(FixedClock::on(parse_day(raw)?)),
        None => Arc::new(SystemClock),
    };

    match matches.subcommand() {
        Some(("show", args)) => {
            let descriptor = required_path(args, "descriptor")?;
            let jar = required_path(args, "jar")?;
            show(descriptor, jar, clock, config).await
        }
        Some(("views", args)) => {
            let jar = required_path(args, "jar")?;
            let id = args.get_one::<String>("id").context("missing --id")?;
            let count = views(jar, id, clock, &config).await?;
            Ok(Some(count.to_string()))
        }
        Some(("render", args)) => {
            let file = required_path(args, "file")?;
            let level: RenderLevel = args
                .get_one::<String>("level")
                .map_or(Ok(RenderLevel::default()), |raw| raw.parse())?;
            render(file, level, &config).await.map(Some)
        }
        _ => Ok(None),
    }
}

fn required_path<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a Path> {
    args.get_one::<PathBuf>(name)
        .map(PathBuf::as_path)
        .with_context(|| format!("missing --{name}"))
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid --today {raw:?}"))
}

/// Evaluate the page descriptor against the jar, persist the jar and
/// return the mounted fragment when the popup is shown
///
/// # Errors
/// Returns an error if the descriptor or jar cannot be read, or the jar cannot be saved
pub async fn show(
    descriptor: &Path,
    jar: &Path,
    clock: Arc<dyn Clock>,
    config: NoticeConfig,
) -> Result<Option<String>> {
    let raw = tokio::fs::read_to_string(descriptor)
        .await
        .with_context(|| format!("reading descriptor {}", descriptor.display()))?;
    let Some(descriptor) = NotificationDescriptor::from_page_json(&raw)? else {
        tracing::debug!("page carries no notification");
        return Ok(None);
    };

    let file = JarFile::new(jar);
    let store = file.load(Arc::clone(&clock)).await?;
    let overlay = Arc::new(RecordingOverlay::new());
    let manager = NotificationManager::new(store, clock, Arc::clone(&overlay), config);

    let outcome = manager.init(Some(&descriptor)).await;
    file.save(manager.policy().store()).await?;

    match outcome {
        Some(Outcome::Presented { views }) => {
            tracing::info!(id = %descriptor.id, views, "popup shown");
            Ok(overlay.last().map(|fragment| fragment.html))
        }
        Some(Outcome::Suppressed(reason)) => {
            tracing::info!(id = %descriptor.id, %reason, "popup suppressed");
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Recorded view count of `id` in the jar file
///
/// # Errors
/// Returns an error if the jar file exists but cannot be read
pub async fn views(jar: &Path, id: &str, clock: Arc<dyn Clock>, config: &NoticeConfig) -> Result<u32> {
    let store = JarFile::new(jar).load(Arc::clone(&clock)).await?;
    let policy = DisplayPolicy::new(store, clock).with_config(config.policy.clone());
    Ok(policy.view_count(id))
}

/// Render a message file at `level`
///
/// # Errors
/// Returns an error if the file cannot be read
pub async fn render(file: &Path, level: RenderLevel, config: &NoticeConfig) -> Result<String> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("reading message {}", file.display()))?;
    Ok(renderer_for(level, config.links.clone()).render(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn today_is_global() {
        let matches = build_cli()
            .try_get_matches_from(["notice", "views", "--jar", "j.json", "--id", "n1", "--today", "2026-10-16"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("today").map(String::as_str), Some("2026-10-16"));
    }

    #[test]
    fn day_format() {
        assert_eq!(parse_day("2026-10-16").unwrap(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert!(parse_day("2026-13-01").is_err());
    }
}
