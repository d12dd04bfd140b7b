//! TUI View Components
//!
//! Ratatui Widget implementations for the interactive feed.
//! Each view is a thin wrapper around a ViewModel reference.
//!
//! ## Design Principles:
//! - Views take a reference to ViewModel (no ownership)
//! - UI state (selection, compose mode) is passed in by components, never stored
//! - Only map ViewModel data to Ratatui widgets

pub mod comment;
pub mod components;
pub mod header;
pub mod post;
pub mod sidebar;
pub mod status_bar;

pub use comment::CommentView;
pub use header::HeaderView;
pub use post::PostView;
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

use feedline_types::Locale;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::presentation::formatters::{Labels, labels};
use crate::presentation::view_models::FeedViewModel;

/// Render-time inputs shared by every view of one frame
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub locale: Locale,
}

impl ViewContext {
    pub fn from_feed(screen: &FeedViewModel) -> Self {
        Self {
            locale: screen.locale,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        labels(self.locale)
    }
}

/// Initials badge standing in for the avatar image
pub(crate) fn avatar_badge(initials: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", initials),
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}
