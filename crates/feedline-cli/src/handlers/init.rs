use anyhow::{Context, Result};
use feedline_runtime::Config;

use crate::context::ExecutionContext;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::presentation::view_models::{ConfigStatus, InitResultViewModel, ViewMode};

pub fn handle(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    let existed = path.exists();

    let status = if existed && !force {
        ConfigStatus::AlreadyExists
    } else {
        Config::default()
            .save_to(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if existed {
            ConfigStatus::Overwritten
        } else {
            ConfigStatus::Created
        }
    };
    tracing::info!(path = %path.display(), ?status, "init finished");

    let result = InitResultViewModel {
        config_path: path.display().to_string(),
        status,
    };
    ConsoleRenderer::new(false).render(&result, ViewMode::Standard)
}
