//! wordfill CLI
//!
//! Autocomplete text input for the terminal, backed by a word-suggestion API.
//! Provides both TUI (ratatui) and headless modes.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use wordfill_cli::{headless, source, tui};
use wordfill_core::config::{self, Config};
use wordfill_core::{StalePolicy, tracing_init};

#[derive(Parser, Debug)]
#[command(name = "wordfill")]
#[command(version, about = "Autocomplete text input backed by a word-suggestion API", long_about = None)]
struct Cli {
    /// Complete the trailing word of this text once and exit (headless mode)
    #[arg(short, long)]
    query: Option<String>,

    /// Suggestion API endpoint (e.g. "https://api.datamuse.com/sug")
    #[arg(long)]
    api_url: Option<String>,

    /// Offline newline-delimited word list; replaces the API
    #[arg(short, long)]
    word_list: Option<PathBuf>,

    /// Quiet period before a search is issued, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Maximum suggestions per search
    #[arg(long)]
    max_results: Option<usize>,

    /// Ignore responses for searches that have been superseded
    #[arg(long)]
    drop_stale: bool,

    /// Extra settings file layered over the global one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file for interactive mode (default: ~/.wordfill/wordfill.log)
    #[arg(long, env = "WORDFILL_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Emit JSON log lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    /// Apply command-line flags on top of the resolved configuration.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url.clone_from(url);
        }
        if let Some(path) = &self.word_list {
            config.word_list = Some(path.clone());
        }
        if let Some(ms) = self.debounce_ms {
            config.input.debounce_ms = ms;
        }
        if let Some(n) = self.max_results {
            config.api.max_results = n;
        }
        if self.drop_stale {
            config.input.stale_policy = StalePolicy::DropStale;
        }
    }
}

/// Tracing filter for the `wordfill` target. Headless runs log to stderr and
/// default to `info`; the TUI logs to a file and defaults to `warn`.
fn log_filter(config: &Config, headless: bool) -> String {
    let default = if headless { "info" } else { "warn" };
    format!("wordfill={}", config.log_level.as_deref().unwrap_or(default))
}

/// Default interactive log file: `~/.wordfill/wordfill.log`.
fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wordfill").join("wordfill.log"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config::validate(&config)?;

    if let Some(text) = cli.query.as_deref() {
        // Headless: log to stderr, results to stdout
        tracing_init::init_tracing(&log_filter(&config, true), cli.log_json);
        info!(version = env!("CARGO_PKG_VERSION"), "Starting wordfill (headless)");
        let (fetcher, _) = source::build_fetcher(&config)?;
        let lines = headless::run(&fetcher, text).await?;
        let mut out = io::stdout().lock();
        for line in lines {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    // Use file-based tracing for TUI mode to avoid polluting terminal
    if let Some(path) = cli.log_file.clone().or_else(default_log_path) {
        tracing_init::init_file_tracing(&log_filter(&config, false), &path, cli.log_json)?;
    }
    info!(version = env!("CARGO_PKG_VERSION"), "Starting wordfill");

    let (fetcher, label) = source::build_fetcher(&config)?;
    if let Some(text) = tui::run(&config, fetcher, label).await? {
        writeln!(io::stdout().lock(), "{text}")?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "wordfill",
            "--api-url",
            "http://localhost:8080/sug",
            "--debounce-ms",
            "150",
            "--max-results",
            "3",
            "--drop-stale",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.base_url, "http://localhost:8080/sug");
        assert_eq!(config.input.debounce_ms, 150);
        assert_eq!(config.api.max_results, 3);
        assert_eq!(config.input.stale_policy, StalePolicy::DropStale);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["wordfill"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn query_flag_selects_headless() {
        let cli = Cli::parse_from(["wordfill", "-q", "hel wor", "-w", "/tmp/words"]);
        assert_eq!(cli.query.as_deref(), Some("hel wor"));
        assert_eq!(cli.word_list, Some(PathBuf::from("/tmp/words")));
    }

    #[test]
    fn log_filter_defaults_per_mode() {
        let config = Config::default();
        assert_eq!(log_filter(&config, true), "wordfill=info");
        assert_eq!(log_filter(&config, false), "wordfill=warn");
    }

    #[test]
    fn configured_log_level_applies_to_both_modes() {
        let config = Config {
            log_level: Some("debug".into()),
            ..Config::default()
        };
        assert_eq!(log_filter(&config, true), "wordfill=debug");
        assert_eq!(log_filter(&config, false), "wordfill=debug");
    }

    #[test]
    fn default_log_path_is_under_home() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with(".wordfill/wordfill.log"));
        }
    }
}
