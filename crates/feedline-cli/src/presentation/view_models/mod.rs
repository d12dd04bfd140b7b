pub mod common;
pub mod feed;
pub mod init;

pub use common::{CreateView, OutputFormat, ViewMode};
pub use feed::{
    AuthorViewModel, BlockKind, BlockViewModel, CommentFormViewModel, CommentViewModel,
    FeedViewModel, PostViewModel, TimestampViewModel,
};
pub use init::{ConfigStatus, InitResultViewModel};
