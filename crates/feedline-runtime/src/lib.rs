pub mod config;
pub mod error;
pub mod feed;
pub mod source;
pub mod thread;

pub use config::{Config, resolve_workspace_path};
pub use error::{Error, Result};
pub use feed::FeedState;
pub use source::{FilePosts, PostRecord, PostSource, SamplePosts, VecPosts};
pub use thread::{CommentEntry, Draft, PostThread, ValidationError};
