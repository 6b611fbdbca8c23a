//! Suggestion source selection.

use wordfill_core::Config;
use wordfill_core::fetcher::{AnyFetcher, HttpFetcher, HttpFetcherConfig, WordListFetcher};

/// Build the suggestion source named by `config` and a short label for the
/// status bar. A configured word list takes precedence over the HTTP API.
pub fn build_fetcher(config: &Config) -> wordfill_core::Result<(AnyFetcher, String)> {
    if let Some(path) = &config.word_list {
        let fetcher = WordListFetcher::from_file(path, config.api.max_results)?;
        let label = format!("Word list: {} ({} words)", path.display(), fetcher.len());
        return Ok((AnyFetcher::WordList(fetcher), label));
    }
    let fetcher = HttpFetcher::new(&HttpFetcherConfig::from(&config.api))?;
    let label = format!("API: {}", config.api.base_url);
    Ok((AnyFetcher::Http(fetcher), label))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_http() {
        let (fetcher, label) = build_fetcher(&Config::default()).unwrap();
        assert!(matches!(fetcher, AnyFetcher::Http(_)));
        assert!(label.starts_with("API: https://"));
    }

    #[test]
    fn word_list_takes_precedence() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "world\nwork\n").unwrap();

        let config = Config {
            word_list: Some(path),
            ..Config::default()
        };
        let (fetcher, label) = build_fetcher(&config).unwrap();
        assert!(matches!(fetcher, AnyFetcher::WordList(_)));
        assert!(label.contains("(2 words)"));
    }

    #[test]
    fn missing_word_list_is_error() {
        let config = Config {
            word_list: Some("/nonexistent/wordfill/words.txt".into()),
            ..Config::default()
        };
        assert!(build_fetcher(&config).is_err());
    }
}
