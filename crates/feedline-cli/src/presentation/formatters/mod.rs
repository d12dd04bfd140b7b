pub mod labels;
pub mod text;
pub mod time;

pub use labels::{Labels, labels};
