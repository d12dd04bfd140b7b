use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::{Block, BlockId, ContentBlock};

/// Caller-assigned post identifier, unique within a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Who wrote a post or comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    #[serde(alias = "avatarUrl")]
    pub avatar_url: String,
}

impl Author {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Up to two uppercase initials, used in place of the avatar image
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A single feed entry.
///
/// Immutable once constructed. Content blocks receive their [`BlockId`]s here,
/// in display order, so two blocks with the same text stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: PostId,
    author: Author,
    content: Vec<Block>,
    published_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: impl Into<PostId>,
        author: Author,
        content: Vec<ContentBlock>,
        published_at: DateTime<Utc>,
    ) -> Self {
        let content = content
            .into_iter()
            .enumerate()
            .map(|(index, body)| Block {
                id: BlockId::new(index),
                body,
            })
            .collect();

        Self {
            id: id.into(),
            author,
            content,
            published_at,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn content(&self) -> &[Block] {
        &self.content
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_initials() {
        let author = Author::new("Gus Prado", "Web developer", "");
        assert_eq!(author.initials(), "GP");

        let single = Author::new("diego", "", "");
        assert_eq!(single.initials(), "D");

        let long = Author::new("Mario de Souza Souto", "", "");
        assert_eq!(long.initials(), "MD");

        let empty = Author::new("", "", "");
        assert_eq!(empty.initials(), "");
    }

    #[test]
    fn test_post_assigns_block_ids_in_order() {
        let post = Post::new(
            1,
            Author::new("Gus Prado", "Web developer", ""),
            vec![
                ContentBlock::paragraph("same"),
                ContentBlock::paragraph("same"),
                ContentBlock::link("example.com/x"),
            ],
            Utc.with_ymd_and_hms(2022, 6, 28, 0, 30, 0).unwrap(),
        );

        let ids: Vec<usize> = post.content().iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_ne!(post.content()[0].id, post.content()[1].id);
        assert_eq!(post.content()[0].body, post.content()[1].body);
    }
}
