use anyhow::{Result, bail};
use chrono::Utc;
use is_terminal::IsTerminal;
use std::io;

use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let state = super::load_feed(ctx, Utc::now())?;

    if !io::stdout().is_terminal() {
        bail!("the interactive feed needs a terminal; use `feedline render` instead");
    }

    let config = ctx.config()?;
    TuiRenderer::new(state, ctx.locale()?, ctx.offset()?, config.tick_rate()).run()
}
