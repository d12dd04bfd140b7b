//! Comment Component
//!
//! Handles like / delete keys on the selected comment.

use crossterm::event::{KeyCode, KeyEvent};
use feedline_runtime::CommentEntry;
use feedline_types::CommentId;

/// Actions that a comment asks its post to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAction {
    /// Remove this comment from the owning post
    Delete(CommentId),
}

/// Stateless: the like counter lives on the entry itself
#[derive(Debug, Default)]
pub struct CommentComponent;

impl CommentComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_input(&self, key: KeyEvent, entry: &mut CommentEntry) -> Option<CommentAction> {
        match key.code {
            KeyCode::Char('l') => {
                let likes = entry.like();
                tracing::debug!(comment = %entry.id(), likes, "comment applauded");
                None
            }
            KeyCode::Char('d') | KeyCode::Delete => Some(CommentAction::Delete(entry.id())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;
    use feedline_types::{Author, Comment};

    fn entry() -> CommentEntry {
        CommentEntry::new(Comment::new(
            Author::new("Leslie Alexander", "UI Designer", ""),
            "Nice post!!",
            Utc::now(),
        ))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_like_increments_in_place() {
        let component = CommentComponent::new();
        let mut entry = entry();

        assert_eq!(component.handle_input(key(KeyCode::Char('l')), &mut entry), None);
        assert_eq!(component.handle_input(key(KeyCode::Char('l')), &mut entry), None);
        assert_eq!(entry.likes(), 2);
    }

    #[test]
    fn test_delete_reports_identity() {
        let component = CommentComponent::new();
        let mut entry = entry();
        let id = entry.id();

        assert_eq!(
            component.handle_input(key(KeyCode::Delete), &mut entry),
            Some(CommentAction::Delete(id))
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Char('d')), &mut entry),
            Some(CommentAction::Delete(id))
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let component = CommentComponent::new();
        let mut entry = entry();

        assert_eq!(component.handle_input(key(KeyCode::Char('x')), &mut entry), None);
        assert_eq!(entry.likes(), 0);
    }
}
