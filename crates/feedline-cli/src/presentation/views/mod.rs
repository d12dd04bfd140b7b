// Views contain formatting logic that works with ViewModels
// They bridge the gap between ViewModels and the final output

pub mod feed;
pub mod init;
pub mod tui;

pub use feed::FeedView;
pub use init::InitResultView;
