pub mod init;
pub mod posts;
pub mod render;
pub mod tui;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use feedline_runtime::FeedState;

use crate::context::ExecutionContext;

/// Build the feed from the configured source, seeding comments at `now`
pub(crate) fn load_feed(ctx: &ExecutionContext, now: DateTime<Utc>) -> Result<FeedState> {
    let config = ctx.config()?;
    let source = ctx.post_source()?;

    let state = FeedState::load(source.as_ref(), config, now)
        .with_context(|| format!("failed to load posts from {}", source.describe()))?;
    tracing::info!(posts = state.len(), source = %source.describe(), "feed loaded");
    Ok(state)
}
