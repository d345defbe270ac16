//! streamdiag: the streaming standards diagram on the command line.
//!
//! Loads the diagram's JSON data document from a file or URL, checks it
//! against the schema rules, renders it as an HTML fragment and searches it.
//!
//! # Usage
//!
//! ```text
//! streamdiag [OPTIONS] <COMMAND>
//!
//! Commands:
//!   validate  Validate a data file and print the report
//!   render    Render the diagram as an HTML fragment
//!   search    Print technologies matching a query
//!   explore   Read queries from stdin, one per line
//!
//! Options:
//!   --config <FILE>    Config file [default: streamdiag.toml]
//!   --data <SOURCE>    Data file path or http(s) URL
//!   --no-validate      Skip schema validation while loading
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable            | Overrides            |
//! |---------------------|----------------------|
//! | `STREAMDIAG_CONFIG` | `--config`           |
//! | `STREAMDIAG_DATA`   | `--data`             |
//! | `RUST_LOG`          | `[logging] log_level`|
//!
//! CLI args take precedence over environment variables, which take
//! precedence over the config file.
//!
//! # Output streams
//!
//! Results, reports and HTML go to stdout; logs go to stderr so the output
//! can be piped.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use streamdiag::application::{DiagramSession, Fetcher, Loader, QueryEffect};
use streamdiag::domain::{AppConfig, DataSource};
use streamdiag::infrastructure::fetch::SourceFetcher;
use streamdiag::infrastructure::output::{format_report, write_output};
use streamdiag::infrastructure::storage::config::{load_config, DEFAULT_CONFIG_FILE};
use streamdiag_core::{validate_json_string, Document, Validator};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Interactive reference diagram of video streaming standards.
#[derive(Debug, Parser)]
#[command(
    name = "streamdiag",
    about = "Validate, render and search the streaming standards diagram",
    version
)]
struct Cli {
    /// Path to the TOML config file. A missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE, env = "STREAMDIAG_CONFIG")]
    config: PathBuf,

    /// Data document: a file path or an http(s) URL.
    ///
    /// Overrides `[data] source` from the config file.
    #[arg(long, global = true, env = "STREAMDIAG_DATA")]
    data: Option<String>,

    /// Load without running the schema validator.
    #[arg(long, global = true)]
    no_validate: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a data file and print the report. Exits 1 when invalid.
    Validate {
        /// File or URL to check; defaults to the configured data source.
        file: Option<String>,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Render the diagram as an HTML fragment.
    Render {
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Mount point id; overrides `[render] mount_id`.
        #[arg(long)]
        mount: Option<String>,

        /// Apply this search before serialising, so matches are highlighted.
        #[arg(long)]
        query: Option<String>,
    },

    /// Print `name - category (layer)` for every matching technology.
    Search {
        query: String,
    },

    /// Read queries from stdin, one per line, printing results for each.
    ///
    /// `:pick NAME` highlights one technology, `:html` prints the current
    /// fragment, `:quit` exits.
    Explore,
}

impl Cli {
    /// Folds CLI and environment overrides into the file configuration.
    fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(data) = &self.data {
            config.data.source = data.clone();
        }
        if self.no_validate {
            config.data.validate_on_load = false;
        }
        if let Command::Render {
            mount: Some(mount), ..
        } = &self.command
        {
            config.render.mount_id = mount.clone();
        }
        config
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// # What happens at startup
///
/// 1. CLI arguments are parsed with `clap`.
/// 2. The config file is read (defaults when absent) and CLI overrides are
///    applied.
/// 3. `tracing_subscriber` is initialised, writing to stderr. `RUST_LOG`
///    wins over `[logging] log_level`.
/// 4. The subcommand runs.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let file_config = load_config(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    let config = cli.apply_overrides(file_config);

    // ── Logging setup ─────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    let fetcher: Arc<dyn Fetcher> =
        Arc::new(SourceFetcher::new().context("failed to initialise HTTP client")?);

    match cli.command {
        Command::Validate { file, json } => {
            let raw = file.unwrap_or_else(|| config.data.source.clone());
            run_validate(fetcher, &raw, json).await
        }
        Command::Render { out, query, .. } => {
            let document = load(fetcher, &config).await?;
            let mut session = new_session(document, &config)?;
            if let Some(query) = query {
                session.apply_query(&query)?;
            }
            let html = session.html()?;
            write_output(out.as_deref(), &html).context("failed to write HTML output")?;
            if let Some(path) = out {
                info!(path = %path.display(), "diagram written");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Search { query } => {
            let document = load(fetcher, &config).await?;
            let mut session = new_session(document, &config)?;
            print_effect(&session.apply_query(&query)?, config.search.min_query_len);
            Ok(ExitCode::SUCCESS)
        }
        Command::Explore => {
            let document = load(fetcher, &config).await?;
            let session = new_session(document, &config)?;
            run_explore(session, config.search.min_query_len).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

async fn load(fetcher: Arc<dyn Fetcher>, config: &AppConfig) -> anyhow::Result<Document> {
    let source = DataSource::parse(&config.data.source)
        .with_context(|| format!("invalid data source '{}'", config.data.source))?;
    let validator = config.data.validate_on_load.then(Validator::new);
    let loader = Loader::new(source, fetcher, validator);
    loader
        .load()
        .await
        .with_context(|| format!("failed to load diagram data from {}", loader.source()))
}

fn new_session(document: Document, config: &AppConfig) -> anyhow::Result<DiagramSession> {
    DiagramSession::new(
        document,
        config.render.mount_id.clone(),
        config.search.min_query_len,
    )
    .context("failed to render diagram")
}

async fn run_validate(
    fetcher: Arc<dyn Fetcher>,
    raw: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let source = DataSource::parse(raw).with_context(|| format!("invalid data source '{raw}'"))?;
    let text = fetcher
        .fetch(&source)
        .await
        .with_context(|| format!("failed to read {source}"))?;

    let result = validate_json_string(&text);
    if json {
        let rendered =
            serde_json::to_string_pretty(&result.report).context("failed to encode report")?;
        write_output(None, &rendered)?;
    } else {
        write_output(None, &format_report(&result.report))?;
    }

    if result.is_valid {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(source = %source, "data file is invalid");
        Ok(ExitCode::FAILURE)
    }
}

fn print_effect(effect: &QueryEffect, min_query_len: usize) {
    match effect {
        QueryEffect::Cleared => {
            println!("(query shorter than {min_query_len} characters: showing everything)");
        }
        QueryEffect::Results(lines) if lines.is_empty() => println!("No results found"),
        QueryEffect::Results(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
    }
}

async fn run_explore(mut session: DiagramSession, min_query_len: usize) -> anyhow::Result<()> {
    info!(
        technologies = session.document().technology_count(),
        "explore: type a query per line, :pick NAME, :html or :quit"
    );
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match ExploreInput::parse(&line) {
            ExploreInput::Quit => break,
            ExploreInput::Html => write_output(None, &session.html()?)?,
            ExploreInput::Pick(name) => match session.highlight(name) {
                0 => println!("No technology named '{name}'"),
                n => println!("Highlighted {n} item(s) named '{name}'"),
            },
            ExploreInput::Query(query) => {
                print_effect(&session.apply_query(query)?, min_query_len);
            }
        }
    }
    Ok(())
}

/// One line of `explore` input.
#[derive(Debug, PartialEq, Eq)]
enum ExploreInput<'a> {
    Query(&'a str),
    Pick(&'a str),
    Html,
    Quit,
}

impl<'a> ExploreInput<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            ":quit" | ":q" => Self::Quit,
            ":html" => Self::Html,
            trimmed => match trimmed.strip_prefix(":pick ") {
                Some(name) => Self::Pick(name.trim()),
                // Raw value: leading or trailing spaces are part of the query
                None => Self::Query(line),
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_config_path() {
        // Arrange / Act
        let cli = Cli::parse_from(["streamdiag", "search", "hls"]);

        // Assert
        assert_eq!(cli.config, PathBuf::from("streamdiag.toml"));
        assert!(!cli.no_validate);
    }

    #[test]
    fn test_cli_search_query() {
        let cli = Cli::parse_from(["streamdiag", "search", "low latency"]);
        assert!(matches!(cli.command, Command::Search { ref query } if query == "low latency"));
    }

    #[test]
    fn test_cli_validate_with_file_and_json() {
        let cli = Cli::parse_from(["streamdiag", "validate", "data.json", "--json"]);
        match cli.command {
            Command::Validate { file, json } => {
                assert_eq!(file.as_deref(), Some("data.json"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["streamdiag", "render", "--data", "d.json", "--no-validate"]);
        assert_eq!(cli.data.as_deref(), Some("d.json"));
        assert!(cli.no_validate);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        // Arrange
        let cli = Cli::parse_from([
            "streamdiag",
            "--data",
            "https://example.org/d.json",
            "--no-validate",
            "render",
            "--mount",
            "main",
        ]);

        // Act
        let config = cli.apply_overrides(AppConfig::default());

        // Assert
        assert_eq!(config.data.source, "https://example.org/d.json");
        assert!(!config.data.validate_on_load);
        assert_eq!(config.render.mount_id, "main");
    }

    #[test]
    fn test_no_overrides_keep_file_values() {
        let cli = Cli::parse_from(["streamdiag", "explore"]);
        let mut file = AppConfig::default();
        file.data.source = "custom.json".to_string();

        let config = cli.apply_overrides(file.clone());

        assert_eq!(config, file);
    }

    #[test]
    fn test_explore_input_commands() {
        assert_eq!(ExploreInput::parse(":quit"), ExploreInput::Quit);
        assert_eq!(ExploreInput::parse(":html"), ExploreInput::Html);
        assert_eq!(ExploreInput::parse(":pick  HLS "), ExploreInput::Pick("HLS"));
    }

    #[test]
    fn test_explore_input_keeps_raw_query() {
        assert_eq!(ExploreInput::parse("h"), ExploreInput::Query("h"));
        assert_eq!(ExploreInput::parse("low latency\r"), ExploreInput::Query("low latency"));
    }
}
