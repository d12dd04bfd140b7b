//! # Presentation Layer
//!
//! User interface of the feedline CLI, following an adaptation of
//! **MVVM (Model-View-ViewModel)** with **Component-based UI State** for the TUI.
//!
//! ## Architecture & Data Flow
//!
//! ### For Console Output (`feedline render`):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!                                                                  ==(Text)==> [ View ] --> Output
//! ```
//!
//! ### For Interactive TUI:
//!
//! ```text
//! [ FeedState ] --> [ Presenter ] --> [ FeedViewModel ] --> [ TuiRenderer (Router) ]
//!      ^                                                            |
//!      |                                                            v
//!      +------------- mutations ------------- [ FeedComponent ] <-- Key
//!                                                   |
//!                                         [ PostComponent ] (per post id)
//!                                                   |
//!                                         [ CommentComponent ]
//! ```
//!
//! Components hold only UI state (selected post, selected comment, compose
//! mode). Feed data lives in `FeedState` and is re-presented on every frame,
//! so relative timestamps are always computed against the current clock.
//!
//! ## Rules
//!
//! 1. **Presenters format, views lay out.** Timestamps keep the raw
//!    `DateTime<Utc>` next to their relative, exact and machine labels, all
//!    produced by `formatters` in the presenter. `--format json` always dumps
//!    the full ViewModel.
//! 2. **Renderer as Router.** Key handling is delegated to components.
//! 3. **Index Safety.** Selections are clamped against the data on every use.
//! 4. **Action Boundaries.** Comments report `Delete` to their post, posts
//!    report `Published`/`Deleted`/`Rejected` to the feed, the feed reports
//!    `Quit` to the renderer.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Change how state maps to a ViewModel | `presenters/` |
//! | Change plain-text layout or colors | `views/` |
//! | Change a TUI widget | `views/tui/` |
//! | Handle a new key | `views/tui/components/` |
//! | Format a timestamp or a label | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
