use std::fmt;

use crate::presentation::view_models::{ConfigStatus, InitResultViewModel};

pub struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> InitResultView<'a> {
    pub fn new(data: &'a InitResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initializing feedline...\n")?;
        writeln!(f, "Configuration:")?;

        match self.data.status {
            ConfigStatus::Created => {
                writeln!(f, "  Default configuration written to {}", self.data.config_path)?;
            }
            ConfigStatus::Overwritten => {
                writeln!(f, "  Configuration reset to defaults at {}", self.data.config_path)?;
            }
            ConfigStatus::AlreadyExists => {
                writeln!(f, "  Found existing {}", self.data.config_path)?;
                writeln!(f, "  Use --force to reset it to defaults.")?;
            }
        }

        writeln!(f, "\nNext steps:")?;
        writeln!(f, "  feedline            open the feed")?;
        writeln!(f, "  feedline render     print it once")
    }
}
