use chrono::{DateTime, Utc};
use feedline_runtime::ValidationError;
use feedline_types::Locale;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct FeedViewModel {
    pub rendered_at: DateTime<Utc>,
    pub locale: Locale,
    pub utc_offset_seconds: i32,
    pub profile: AuthorViewModel,
    pub posts: Vec<PostViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorViewModel {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostViewModel {
    pub id: u64,
    pub author: AuthorViewModel,
    pub published_at: DateTime<Utc>,
    pub published: TimestampViewModel,
    pub content: Vec<BlockViewModel>,
    pub form: CommentFormViewModel,
    pub comments: Vec<CommentViewModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Paragraph,
    Link,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockViewModel {
    pub id: usize,
    pub kind: BlockKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentFormViewModel {
    pub draft: String,
    pub can_submit: bool,
    pub validation: Option<ValidationError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentViewModel {
    pub id: String,
    pub author: AuthorViewModel,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub created: TimestampViewModel,
    pub likes: u32,
}

/// An instant as the page shows it: relative label, exact title, machine attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampViewModel {
    pub relative: String,
    pub exact: String,
    pub machine: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for FeedViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::feed::FeedView;
        Box::new(FeedView::new(self, mode))
    }

    fn create_styled_view<'a>(&'a self, mode: ViewMode, color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::feed::FeedView;
        Box::new(FeedView::new(self, mode).with_color(color))
    }
}

// --------------------------------------------------------
// Display Trait (for backward compatibility and default rendering)
// --------------------------------------------------------

impl fmt::Display for FeedViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
