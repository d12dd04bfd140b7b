use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigStatus {
    Created,
    Overwritten,
    AlreadyExists,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitResultViewModel {
    pub config_path: String,
    pub status: ConfigStatus,
}

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::init::InitResultView;
        Box::new(InitResultView::new(self))
    }
}
