use chrono::{DateTime, TimeZone, Utc};
use feedline_types::{Author, ContentBlock, Post, PostId};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Where the feed gets its posts from.
///
/// Sources only produce records; id uniqueness is checked when the records
/// are mounted into a [`crate::FeedState`].
pub trait PostSource {
    fn load(&self) -> Result<Vec<Post>>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}

/// On-disk shape of a post
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    pub id: u64,
    pub author: Author,
    pub content: Vec<ContentBlock>,
    #[serde(alias = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Post::new(
            PostId::new(record.id),
            record.author,
            record.content,
            record.published_at,
        )
    }
}

#[derive(Debug, Deserialize)]
struct TomlPostFile {
    #[serde(default)]
    posts: Vec<PostRecord>,
}

/// Posts read from a `.json` array or a `.toml` file of `[[posts]]` tables
#[derive(Debug, Clone)]
pub struct FilePosts {
    path: PathBuf,
}

impl FilePosts {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_error(&self, message: impl ToString) -> Error {
        Error::Parse {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

impl PostSource for FilePosts {
    fn load(&self) -> Result<Vec<Post>> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let records: Vec<PostRecord> = match extension.as_deref() {
            Some("json") => {
                let content = std::fs::read_to_string(&self.path)?;
                serde_json::from_str(&content).map_err(|e| self.parse_error(e))?
            }
            Some("toml") => {
                let content = std::fs::read_to_string(&self.path)?;
                toml::from_str::<TomlPostFile>(&content)
                    .map_err(|e| self.parse_error(e))?
                    .posts
            }
            _ => return Err(Error::UnsupportedFormat(self.path.clone())),
        };

        tracing::info!(path = %self.path.display(), count = records.len(), "loaded post file");
        Ok(records.into_iter().map(Post::from).collect())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory sequence of posts
#[derive(Debug, Clone, Default)]
pub struct VecPosts(pub Vec<Post>);

impl PostSource for VecPosts {
    fn load(&self) -> Result<Vec<Post>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory posts", self.0.len())
    }
}

/// The built-in sample feed
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePosts;

impl PostSource for SamplePosts {
    fn load(&self) -> Result<Vec<Post>> {
        // 2022-06-27 21:30 in UTC-3
        let published_at = Utc
            .with_ymd_and_hms(2022, 6, 28, 0, 30, 0)
            .single()
            .ok_or_else(|| Error::Config("invalid sample timestamp".to_string()))?;

        let content = || {
            vec![
                ContentBlock::paragraph("Fala galeraa 👋"),
                ContentBlock::paragraph(
                    "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz no NLW Return, evento da Rocketseat. O nome do projeto é DoctorCare 🚀",
                ),
                ContentBlock::link("jane.design/doctorcare"),
            ]
        };

        Ok(vec![
            Post::new(
                1,
                Author::new(
                    "Gus Prado",
                    "Web developer",
                    "https://github.com/gusprado.png",
                ),
                content(),
                published_at,
            ),
            Post::new(
                2,
                Author::new(
                    "Mario Souto",
                    "Content creator",
                    "https://github.com/devsoutinho.png",
                ),
                content(),
                published_at,
            ),
        ])
    }

    fn describe(&self) -> String {
        "built-in sample feed".to_string()
    }
}
