use anyhow::Result;
use serde::Serialize;

use crate::presentation::view_models::{CreateView, ViewMode};

pub trait Renderer {
    fn render<T>(&self, result: &T, mode: ViewMode) -> Result<()>
    where
        T: Serialize + CreateView;
}
