//! Check command implementation.
//!
//! The `projectwiz check` command loads everything the menu would and
//! reports what it found, without running anything.

use crate::error::Result;
use crate::ui::UserInterface;

use super::context::GlobalOptions;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    options: GlobalOptions,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = self.options.load()?;
        let catalog = &loaded.catalog;

        ui.message(&format!("Host:         {}", loaded.host.describe()));
        ui.message(&format!("Catalog:      {}", loaded.path.display()));
        ui.message(&format!("Categories:   {}", catalog.categories().len()));
        ui.message(&format!("Tools:        {}", catalog.tool_count()));
        ui.message(&format!("Dependencies: {}", catalog.dependencies().len()));
        ui.success("Catalog is valid");

        Ok(CommandResult::success())
    }
}
