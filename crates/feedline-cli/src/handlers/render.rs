use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_feed;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::presentation::view_models::{OutputFormat, ViewMode};

pub fn handle(
    ctx: &ExecutionContext,
    format: OutputFormat,
    now: DateTime<Utc>,
    mode: ViewMode,
) -> Result<()> {
    let state = super::load_feed(ctx, now)?;
    let view_model = present_feed(&state, now, ctx.locale()?, ctx.offset()?);

    ConsoleRenderer::for_format(format).render(&view_model, mode)
}
