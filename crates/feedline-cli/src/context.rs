use anyhow::{Context, Result};
use chrono::FixedOffset;
use feedline_runtime::{Config, FilePosts, PostSource, SamplePosts};
use feedline_types::Locale;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::args::Cli;

/// Shared inputs of every handler: resolved paths, lazily loaded config,
/// and the CLI overrides applied on top of it.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config_path: PathBuf,
    config: OnceCell<Config>,
    posts_override: Option<PathBuf>,
    locale_override: Option<Locale>,
}

impl ExecutionContext {
    pub fn new(
        data_dir: PathBuf,
        config_path: Option<PathBuf>,
        posts_override: Option<PathBuf>,
        locale_override: Option<Locale>,
    ) -> Self {
        let config_path = config_path.unwrap_or_else(|| data_dir.join("config.toml"));
        Self {
            data_dir,
            config_path,
            config: OnceCell::new(),
            posts_override,
            locale_override,
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = feedline_runtime::resolve_workspace_path(cli.data_dir.as_deref())?;
        Ok(Self::new(
            data_dir,
            cli.config.clone(),
            cli.posts.clone(),
            cli.locale,
        ))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            Config::load_from(&self.config_path)
                .with_context(|| format!("failed to load {}", self.config_path.display()))
        })
    }

    pub fn locale(&self) -> Result<Locale> {
        match self.locale_override {
            Some(locale) => Ok(locale),
            None => Ok(self.config()?.locale),
        }
    }

    pub fn offset(&self) -> Result<FixedOffset> {
        Ok(self.config()?.utc_offset())
    }

    /// Posts file from `--posts`, then the config; built-in samples otherwise
    pub fn post_source(&self) -> Result<Box<dyn PostSource>> {
        let path = match &self.posts_override {
            Some(path) => Some(path.clone()),
            None => self.config()?.posts.clone(),
        };

        Ok(match path {
            Some(path) => Box::new(FilePosts::new(path)),
            None => Box::new(SamplePosts),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(dir.path().to_path_buf(), None, None, None);

        assert_eq!(ctx.config_path(), dir.path().join("config.toml"));
        assert_eq!(ctx.locale().unwrap(), Locale::PtBr);
        assert!(ctx.post_source().unwrap().describe().contains("sample"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            locale: Locale::PtBr,
            posts: Some(dir.path().join("from-config.json")),
            ..Config::default()
        };
        config.save_to(&dir.path().join("config.toml")).unwrap();

        let ctx = ExecutionContext::new(
            dir.path().to_path_buf(),
            None,
            Some(dir.path().join("from-flag.json")),
            Some(Locale::En),
        );

        assert_eq!(ctx.locale().unwrap(), Locale::En);
        assert!(ctx.post_source().unwrap().describe().contains("from-flag.json"));
    }

    #[test]
    fn test_config_posts_used_without_flag() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            posts: Some(dir.path().join("from-config.json")),
            ..Config::default()
        };
        config.save_to(&dir.path().join("config.toml")).unwrap();

        let ctx = ExecutionContext::new(dir.path().to_path_buf(), None, None, None);

        assert!(ctx.post_source().unwrap().describe().contains("from-config.json"));
    }
}
