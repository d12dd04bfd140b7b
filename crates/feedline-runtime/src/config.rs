use crate::{Error, Result};
use chrono::{FixedOffset, Local, Offset};
use feedline_types::{Author, Locale};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FEEDLINE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.feedline (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FEEDLINE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("feedline"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".feedline"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

pub const DEFAULT_SEED_COMMENT: &str = "Nice post!!";
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,

    /// Text of the comment every post starts with
    #[serde(default = "default_seed_comment")]
    pub seed_comment: String,

    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Fixed UTC offset for displayed times; the system offset when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,

    /// Post data file; the built-in sample feed when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<PathBuf>,

    /// The local user, shown in the sidebar and credited for new comments
    #[serde(default = "default_profile")]
    pub profile: Author,
}

fn default_seed_comment() -> String {
    DEFAULT_SEED_COMMENT.to_string()
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

fn default_profile() -> Author {
    Author::new(
        "Leslie Alexander",
        "UI Designer",
        "https://github.com/leslie.png",
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            seed_comment: default_seed_comment(),
            tick_rate_ms: default_tick_rate_ms(),
            utc_offset_minutes: None,
            posts: None,
            profile: default_profile(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), locale = %config.locale, "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Offset used to display instants; out-of-range values fall back to the system offset
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .and_then(|minutes| minutes.checked_mul(60))
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Local::now().offset().fix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.seed_comment, "Nice post!!");
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert!(config.posts.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            locale: Locale::En,
            seed_comment: "First!".to_string(),
            utc_offset_minutes: Some(-180),
            posts: Some(PathBuf::from("/tmp/posts.json")),
            ..Config::default()
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_utc_offset_from_minutes() {
        let config = Config {
            utc_offset_minutes: Some(-180),
            ..Config::default()
        };
        assert_eq!(config.utc_offset().local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn test_huge_utc_offset_falls_back_to_system() {
        let config: Config = toml::from_str("utc_offset_minutes = 100000000").unwrap();
        let system = Local::now().offset().fix();

        assert_eq!(config.utc_offset(), system);

        let out_of_range = Config {
            utc_offset_minutes: Some(24 * 60),
            ..Config::default()
        };
        assert_eq!(out_of_range.utc_offset(), system);
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "locale = \"en\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.locale, Locale::En);
        assert_eq!(loaded.seed_comment, DEFAULT_SEED_COMMENT);
        assert_eq!(loaded.profile.name, "Leslie Alexander");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_malformed_config_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "locale = [")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_fixed_utc_offset() {
        let config = Config {
            utc_offset_minutes: Some(-180),
            ..Config::default()
        };
        assert_eq!(config.utc_offset().local_minus_utc(), -180 * 60);
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/var/feed"), PathBuf::from("/var/feed"));
    }
}
