//! Configuration resolution for wordfill.
//!
//! Implements hierarchical config resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/wordfill/settings.json)
//! 3. Explicit config file (`--config`)
//! 4. Environment variables
//! 5. CLI arguments (highest priority, applied by the binary)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::state::StalePolicy;

/// Complete wordfill configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub input: InputConfig,
    /// Offline word list; when set it replaces the HTTP source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_list: Option<PathBuf>,
    /// Level for the `wordfill` target. Unset means the mode's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            input: InputConfig::default(),
            word_list: None,
            log_level: None,
        }
    }
}

/// Remote suggestion API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub query_param: String,
    pub max_results: usize,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.datamuse.com/sug".to_string(),
            query_param: "s".to_string(),
            max_results: 10,
            timeout_ms: 5_000,
        }
    }
}

/// Input widget behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Quiet period before a search is issued.
    pub debounce_ms: u64,
    /// Dropdown rows shown at once.
    pub visible_options: usize,
    pub stale_policy: StalePolicy,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 400,
            visible_options: 8,
            stale_policy: StalePolicy::Accept,
        }
    }
}

/// Load configuration with hierarchical resolution.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let global = global_config_path().filter(|p| p.exists());
    let mut config = load_config_files(global.as_deref(), explicit)?;
    apply_env_overrides(&mut config);
    validate(&config)?;

    Ok(config)
}

/// Get the global config file path.
pub fn global_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|h| PathBuf::from(h).join(".wordfill").join("settings.json"))
    }
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join("Library/Application Support/wordfill/settings.json"))
    }
    #[cfg(target_os = "linux")]
    {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))
            .map(|p| p.join("wordfill").join("settings.json"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        None
    }
}

/// Layer the global and explicit files key by key, then fill the rest from
/// defaults. A later file only overrides the keys it sets.
fn load_config_files(global: Option<&Path>, explicit: Option<&Path>) -> Result<Config> {
    let mut merged = Value::Object(serde_json::Map::new());
    for path in [global, explicit].into_iter().flatten() {
        merge_values(&mut merged, load_config_value(path)?);
    }
    serde_json::from_value(merged)
        .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))
}

/// Read one settings file, checking it against [`Config`] so errors name the file.
fn load_config_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    let parse_err = |e: serde_json::Error| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    };
    let value: Value = serde_json::from_str(&content).map_err(parse_err)?;
    serde_json::from_value::<Config>(value.clone()).map_err(parse_err)?;
    Ok(value)
}

/// Recursively overlay `overlay` on `base`. Objects merge per key; any
/// other value replaces what was there.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(val) = std::env::var("WORDFILL_API_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("WORDFILL_DEBOUNCE_MS")
        && let Ok(n) = val.parse()
    {
        config.input.debounce_ms = n;
    }
    if let Ok(val) = std::env::var("WORDFILL_MAX_RESULTS")
        && let Ok(n) = val.parse()
    {
        config.api.max_results = n;
    }
    if let Ok(val) = std::env::var("WORDFILL_LOG_LEVEL") {
        config.log_level = Some(val);
    }
    if let Ok(val) = std::env::var("WORDFILL_WORD_LIST") {
        config.word_list = Some(PathBuf::from(val));
    }
}

/// Reject settings the widget cannot run with.
pub fn validate(config: &Config) -> Result<()> {
    if config.input.visible_options == 0 {
        return Err(Error::Config("input.visible_options must be at least 1".into()));
    }
    if config.api.max_results == 0 {
        return Err(Error::Config("api.max_results must be at least 1".into()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_config_debounces_400ms() {
        let config = Config::default();
        assert_eq!(config.input.debounce_ms, 400);
        assert_eq!(config.input.stale_policy, StalePolicy::Accept);
    }

    #[test]
    fn default_config_uses_http_source() {
        let config = Config::default();
        assert!(config.word_list.is_none());
        assert!(config.api.base_url.starts_with("https://"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"input":{"debounce_ms":150}}"#).unwrap();
        let config = load_config_files(None, Some(&path)).unwrap();
        assert_eq!(config.input.debounce_ms, 150);
        assert_eq!(config.input.visible_options, 8);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn stale_policy_parses_snake_case() {
        let config: Config =
            serde_json::from_str(r#"{"input":{"stale_policy":"drop_stale"}}"#).unwrap();
        assert_eq!(config.input.stale_policy, StalePolicy::DropStale);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            load_config_files(None, Some(&path)).unwrap_err(),
            Error::Config(_)
        ));
    }

    #[test]
    fn wrongly_typed_field_names_the_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"input":{"debounce_ms":"soon"}}"#).unwrap();
        let Error::Config(message) = load_config_files(None, Some(&path)).unwrap_err() else {
            panic!("expected a config error");
        };
        assert!(message.contains("settings.json"));
    }

    #[test]
    fn explicit_file_overrides_only_the_keys_it_sets() {
        let dir = tempfile::TempDir::new().unwrap();
        let global = dir.path().join("global.json");
        let explicit = dir.path().join("explicit.json");
        std::fs::write(
            &global,
            r#"{"api":{"base_url":"http://localhost:9/sug","max_results":4},
                "input":{"visible_options":3},
                "word_list":"/usr/share/dict/words",
                "log_level":"debug"}"#,
        )
        .unwrap();
        std::fs::write(&explicit, r#"{"input":{"debounce_ms":150}}"#).unwrap();

        let config = load_config_files(Some(&global), Some(&explicit)).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9/sug");
        assert_eq!(config.api.max_results, 4);
        assert_eq!(config.api.query_param, "s");
        assert_eq!(config.input.debounce_ms, 150);
        assert_eq!(config.input.visible_options, 3);
        assert_eq!(
            config.word_list.as_deref(),
            Some(Path::new("/usr/share/dict/words"))
        );
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn explicit_file_wins_over_global() {
        let dir = tempfile::TempDir::new().unwrap();
        let global = dir.path().join("global.json");
        let explicit = dir.path().join("explicit.json");
        std::fs::write(&global, r#"{"api":{"base_url":"http://a/sug"},"log_level":"debug"}"#)
            .unwrap();
        std::fs::write(&explicit, r#"{"api":{"base_url":"http://b/sug"}}"#).unwrap();

        let config = load_config_files(Some(&global), Some(&explicit)).unwrap();
        assert_eq!(config.api.base_url, "http://b/sug");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn no_files_gives_defaults() {
        assert_eq!(load_config_files(None, None).unwrap(), Config::default());
    }

    #[test]
    fn validate_rejects_zero_rows() {
        let mut config = Config::default();
        config.input.visible_options = 0;
        assert!(validate(&config).is_err());
        assert!(validate(&Config::default()).is_ok());
    }
}
