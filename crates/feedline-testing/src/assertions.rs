//! Assertions over the `render --format json` document.

use anyhow::{Context, Result};
use serde_json::Value;

fn posts(json: &Value) -> Result<&Vec<Value>> {
    json["posts"]
        .as_array()
        .context("Expected 'posts' array in JSON")
}

pub fn assert_post_count(json: &Value, expected: usize) -> Result<()> {
    let posts = posts(json)?;
    if posts.len() != expected {
        anyhow::bail!("Expected {} posts, got {}", expected, posts.len());
    }
    Ok(())
}

/// Comment texts of the post at `index`, in display order.
pub fn comment_texts(json: &Value, index: usize) -> Result<Vec<String>> {
    let post = posts(json)?
        .get(index)
        .with_context(|| format!("No post at index {}", index))?;

    post["comments"]
        .as_array()
        .context("Expected 'comments' array")?
        .iter()
        .map(|c| {
            c["text"]
                .as_str()
                .map(String::from)
                .context("Comment without text")
        })
        .collect()
}

/// Assert block kinds and texts of the post at `index`, in order.
pub fn assert_blocks(json: &Value, index: usize, expected: &[(&str, &str)]) -> Result<()> {
    let post = posts(json)?
        .get(index)
        .with_context(|| format!("No post at index {}", index))?;
    let blocks = post["content"]
        .as_array()
        .context("Expected 'content' array")?;

    let actual: Vec<(String, String)> = blocks
        .iter()
        .map(|b| {
            (
                b["kind"].as_str().unwrap_or_default().to_string(),
                b["text"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(k, t)| (k.to_string(), t.to_string()))
        .collect();

    if actual != expected {
        anyhow::bail!("Expected blocks {:?}, got {:?}", expected, actual);
    }
    Ok(())
}
