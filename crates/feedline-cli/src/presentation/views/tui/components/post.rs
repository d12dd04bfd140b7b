//! Post Component
//!
//! Owns comment selection and compose mode for one post.
//! Browse keys move between comments and forward like/delete to the
//! selected comment; compose keys edit and submit the draft.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use feedline_runtime::{PostThread, ValidationError};
use feedline_types::{Author, CommentId};

use super::comment::{CommentAction, CommentComponent};

/// Actions that a post reports to the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Published(CommentId),
    Deleted(CommentId),
    Rejected(ValidationError),
}

#[derive(Debug, Default)]
pub struct PostComponent {
    selected_comment: usize,
    composing: bool,
    comment: CommentComponent,
}

impl PostComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Selected comment index, clamped to `len`
    pub fn selected_comment(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.selected_comment.min(len - 1))
        }
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        thread: &mut PostThread,
        author: &Author,
        now: DateTime<Utc>,
    ) -> Option<PostAction> {
        if self.composing {
            return self.handle_compose(key, thread, author, now);
        }

        let len = thread.comments().len();
        match key.code {
            KeyCode::Char('n') | KeyCode::Right => {
                if let Some(current) = self.selected_comment(len) {
                    self.selected_comment = (current + 1).min(len - 1);
                }
                None
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.selected_comment = self
                    .selected_comment(len)
                    .unwrap_or_default()
                    .saturating_sub(1);
                None
            }
            KeyCode::Char('c') | KeyCode::Char('i') | KeyCode::Enter => {
                self.composing = true;
                None
            }
            KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Delete => {
                let index = self.selected_comment(len)?;
                let id = thread.comments()[index].id();
                let entry = thread.comment_mut(id)?;

                match self.comment.handle_input(key, entry)? {
                    CommentAction::Delete(id) => {
                        if !thread.delete_comment(id) {
                            return None;
                        }
                        if let Some(clamped) = self.selected_comment(thread.comments().len()) {
                            self.selected_comment = clamped;
                        }
                        Some(PostAction::Deleted(id))
                    }
                }
            }
            _ => None,
        }
    }

    fn handle_compose(
        &mut self,
        key: KeyEvent,
        thread: &mut PostThread,
        author: &Author,
        now: DateTime<Utc>,
    ) -> Option<PostAction> {
        match key.code {
            KeyCode::Esc => {
                self.composing = false;
                None
            }
            KeyCode::Enter => match thread.submit_draft(author.clone(), now) {
                Ok(id) => {
                    self.selected_comment = thread.comments().len().saturating_sub(1);
                    Some(PostAction::Published(id))
                }
                Err(error) => Some(PostAction::Rejected(error)),
            },
            KeyCode::Backspace => {
                thread.draft_mut().pop();
                None
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                thread.draft_mut().push(c);
                None
            }
            _ => None,
        }
    }
}
