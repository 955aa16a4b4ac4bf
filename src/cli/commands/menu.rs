//! Menu command implementation.
//!
//! The default command: browse the catalog and run tools.

use crate::error::Result;
use crate::menu::run_menu;
use crate::runner::ToolRunner;
use crate::shell::SystemShell;
use crate::ui::UserInterface;

use super::context::GlobalOptions;
use super::dispatcher::{Command, CommandResult};

/// The menu command implementation.
pub struct MenuCommand {
    options: GlobalOptions,
}

impl MenuCommand {
    /// Create a new menu command.
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }
}

impl Command for MenuCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = self.options.load()?;
        if loaded.catalog.is_empty() {
            ui.warning(&format!(
                "{} has no categories; nothing to show",
                loaded.path.display()
            ));
            return Ok(CommandResult::success());
        }

        let shell = SystemShell;
        let runner = ToolRunner::new(&shell, self.options.run);
        run_menu(&loaded.catalog, &runner, ui)?;

        Ok(CommandResult::success())
    }
}
