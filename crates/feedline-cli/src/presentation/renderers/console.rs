use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{CreateView, OutputFormat, ViewMode};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: !json_mode && io::stdout().is_terminal(),
        }
    }

    pub fn for_format(format: OutputFormat) -> Self {
        Self::new(format == OutputFormat::Json)
    }

    /// Render into a string instead of stdout
    pub fn render_to_string<T>(&self, result: &T, mode: ViewMode) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            let mut out = serde_json::to_string_pretty(result)?;
            out.push('\n');
            return Ok(out);
        }

        Ok(result.create_styled_view(mode, self.color).to_string())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: &T, mode: ViewMode) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let out = self.render_to_string(result, mode)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(out.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ConfigStatus, InitResultViewModel};

    fn init_result() -> InitResultViewModel {
        InitResultViewModel {
            config_path: "/tmp/feedline/config.toml".to_string(),
            status: ConfigStatus::AlreadyExists,
        }
    }

    #[test]
    fn test_json_mode_dumps_full_view_model() {
        let renderer = ConsoleRenderer::new(true);
        let out = renderer
            .render_to_string(&init_result(), ViewMode::Compact)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status"], "already_exists");
        assert_eq!(value["config_path"], "/tmp/feedline/config.toml");
    }

    #[test]
    fn test_text_mode_uses_view() {
        let renderer = ConsoleRenderer::new(false);
        let out = renderer
            .render_to_string(&init_result(), ViewMode::Standard)
            .unwrap();

        assert!(out.starts_with("Initializing feedline..."));
        assert!(out.contains("Use --force"));
    }
}
