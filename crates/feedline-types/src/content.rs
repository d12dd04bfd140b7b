use serde::{Deserialize, Serialize};
use std::fmt;

/// Position-derived key of a block within its post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(usize);

impl BlockId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One displayable unit of a post.
///
/// The wire form keeps the `{"type": ..., "content": ...}` shape of feed
/// exports. A link carries its destination next to its label; when `href` is
/// omitted it is derived from the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph {
        #[serde(rename = "content")]
        text: String,
    },
    Link {
        #[serde(rename = "content")]
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn link(label: impl Into<String>) -> Self {
        ContentBlock::Link {
            label: label.into(),
            href: None,
        }
    }

    pub fn link_to(label: impl Into<String>, href: impl Into<String>) -> Self {
        ContentBlock::Link {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// Text shown to the reader (paragraph text or link label)
    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Paragraph { text } => text,
            ContentBlock::Link { label, .. } => label,
        }
    }

    /// Resolved link destination, `None` for paragraphs
    pub fn destination(&self) -> Option<String> {
        match self {
            ContentBlock::Paragraph { .. } => None,
            ContentBlock::Link {
                href: Some(href), ..
            } => Some(href.clone()),
            ContentBlock::Link { label, href: None } => Some(derive_href(label)),
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, ContentBlock::Link { .. })
    }
}

fn derive_href(label: &str) -> String {
    if label.contains("://") {
        label.to_string()
    } else {
        format!("https://{}", label)
    }
}

/// A content block keyed by its [`BlockId`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub body: ContentBlock,
}
