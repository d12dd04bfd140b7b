pub mod comment;
pub mod content;
pub mod error;
pub mod locale;
pub mod post;

pub use comment::*;
pub use content::*;
pub use error::{Error, Result};
pub use locale::*;
pub use post::*;
