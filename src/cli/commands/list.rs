//! List command implementation.
//!
//! The `projectwiz list` command prints the catalog as a tree.

use crate::catalog::Catalog;
use crate::cli::args::ListArgs;
use crate::error::{Result, WizError};
use crate::ui::UserInterface;

use super::context::GlobalOptions;
use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    options: GlobalOptions,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(options: GlobalOptions, args: ListArgs) -> Self {
        Self { options, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = self.options.load()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&loaded.catalog)
                .map_err(|e| WizError::Other(e.into()))?;
            ui.message(&json);
        } else {
            for line in tree_lines(&loaded.catalog) {
                ui.message(&line);
            }
        }

        Ok(CommandResult::success())
    }
}

/// Render the catalog as indented lines, one per node.
fn tree_lines(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    for category in catalog.categories() {
        lines.push(category.name.clone());
        for framework in &category.frameworks {
            lines.push(format!("  {}", framework.name));
            for tool in &framework.tools {
                let mut line = format!("    {}: {}", tool.name, tool.run_command);
                if !tool.dependencies.is_empty() {
                    line.push_str(&format!(" [needs {}]", tool.dependency_names().join(", ")));
                }
                lines.push(line);
            }
        }
    }
    lines
}
