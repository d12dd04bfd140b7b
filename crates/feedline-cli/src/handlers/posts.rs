use anyhow::{Context, Result};

use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let source = ctx.post_source()?;
    let posts = source
        .load()
        .with_context(|| format!("failed to load posts from {}", source.describe()))?;

    println!("{}", serde_json::to_string_pretty(&posts)?);
    Ok(())
}
