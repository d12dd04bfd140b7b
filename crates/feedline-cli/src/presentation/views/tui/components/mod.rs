//! TUI Components
//!
//! Components encapsulate UI State + Input Logic + Render Logic.
//! Each component owns only its private UI state (selection, compose mode);
//! the feed data lives in `FeedState` and is handed in on every call.
//!
//! ## Pattern:
//! ```rust,ignore
//! pub struct FooComponent {
//!     state: SomeState, // Private UI state
//! }
//!
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent, data: &mut Foo) -> Option<Action> {
//!         // Handle input, return action if parent needs to respond
//!     }
//!
//!     pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FooViewModel) {
//!         // Index safety checks here
//!         // Render using Views
//!     }
//! }
//! ```

pub mod comment;
pub mod feed;
pub mod post;

pub use comment::{CommentAction, CommentComponent};
pub use feed::{FeedAction, FeedComponent};
pub use post::{PostAction, PostComponent};

use feedline_runtime::ValidationError;

/// Outcome of the last handled key, shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    Published,
    Deleted,
    Rejected(ValidationError),
}
