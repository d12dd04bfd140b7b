pub mod feed;

pub use feed::present_feed;
