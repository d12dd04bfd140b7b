//! Interaction state of a single post.
//!
//! A [`PostThread`] owns the comment list and the comment draft of one post.
//! Each [`CommentEntry`] owns its applause counter. All mutation happens
//! synchronously from a UI event handler; nothing here blocks or fails
//! except draft submission, which rejects an empty draft.

use chrono::{DateTime, Utc};
use feedline_types::{Author, Comment, CommentId, Post, PostId};
use serde::Serialize;
use std::fmt;

/// Why a draft could not be published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// The draft is empty
    Required,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "comment text is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A comment plus its like counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentEntry {
    pub comment: Comment,
    likes: u32,
}

impl CommentEntry {
    pub fn new(comment: Comment) -> Self {
        Self { comment, likes: 0 }
    }

    pub fn id(&self) -> CommentId {
        self.comment.id
    }

    pub fn text(&self) -> &str {
        &self.comment.text
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    /// Add one applause. There is no way to take it back.
    pub fn like(&mut self) -> u32 {
        self.likes = self.likes.saturating_add(1);
        self.likes
    }
}

/// The not-yet-published comment text and its validation state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    text: String,
    validation: Option<ValidationError>,
}

impl Draft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn validation(&self) -> Option<ValidationError> {
        self.validation
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the draft text; any edit clears the validation message
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.validation = None;
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.validation = None;
    }

    pub fn pop(&mut self) -> Option<char> {
        self.validation = None;
        self.text.pop()
    }

    fn take(&mut self) -> String {
        self.validation = None;
        std::mem::take(&mut self.text)
    }
}

/// One post together with its comments and draft
#[derive(Debug, Clone, Serialize)]
pub struct PostThread {
    post: Post,
    comments: Vec<CommentEntry>,
    draft: Draft,
}

impl PostThread {
    pub fn new(post: Post) -> Self {
        Self {
            post,
            comments: Vec::new(),
            draft: Draft::default(),
        }
    }

    /// A thread starting with one seeded comment
    pub fn seeded(post: Post, author: Author, seed: &str, now: DateTime<Utc>) -> Self {
        let mut thread = Self::new(post);
        thread
            .comments
            .push(CommentEntry::new(Comment::new(author, seed, now)));
        thread
    }

    pub fn id(&self) -> PostId {
        self.post.id()
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn comments(&self) -> &[CommentEntry] {
        &self.comments
    }

    pub fn comment_mut(&mut self, id: CommentId) -> Option<&mut CommentEntry> {
        self.comments.iter_mut().find(|entry| entry.id() == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft.set(text);
    }

    /// Whether the publish control is enabled. Display only; `submit_draft`
    /// enforces the rule.
    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Publish the draft as a new comment at the end of the list.
    ///
    /// The text is kept verbatim: no trimming, no dedup, no length limit.
    /// An empty draft leaves the list untouched and records
    /// [`ValidationError::Required`] on the draft.
    pub fn submit_draft(
        &mut self,
        author: Author,
        now: DateTime<Utc>,
    ) -> Result<CommentId, ValidationError> {
        if self.draft.is_empty() {
            self.draft.validation = Some(ValidationError::Required);
            tracing::debug!(post_id = %self.post.id(), "rejected empty comment");
            return Err(ValidationError::Required);
        }

        let comment = Comment::new(author, self.draft.take(), now);
        let id = comment.id;
        self.comments.push(CommentEntry::new(comment));
        tracing::debug!(post_id = %self.post.id(), comment_id = %id, "comment added");
        Ok(id)
    }

    /// Remove the comment with `id`. Returns `false` when nothing matched.
    pub fn delete_comment(&mut self, id: CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|entry| entry.id() != id);
        let removed = self.comments.len() != before;
        if removed {
            tracing::debug!(post_id = %self.post.id(), comment_id = %id, "comment deleted");
        }
        removed
    }

    /// Remove every comment whose text equals `text`, returning how many went away
    pub fn delete_comments_matching(&mut self, text: &str) -> usize {
        let before = self.comments.len();
        self.comments.retain(|entry| entry.text() != text);
        before - self.comments.len()
    }

    /// Like the comment with `id`, returning the new count
    pub fn like_comment(&mut self, id: CommentId) -> Option<u32> {
        self.comment_mut(id).map(CommentEntry::like)
    }
}
