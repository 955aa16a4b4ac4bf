//! Exec command implementation.
//!
//! The `projectwiz exec` command runs one tool by name, for scripts.

use crate::cli::args::ExecArgs;
use crate::error::{Result, WizError};
use crate::runner::ToolRunner;
use crate::shell::{Shell, SystemShell};
use crate::ui::UserInterface;

use super::context::GlobalOptions;
use super::dispatcher::{Command, CommandResult};

/// The exec command implementation.
pub struct ExecCommand {
    options: GlobalOptions,
    args: ExecArgs,
}

impl ExecCommand {
    /// Create a new exec command.
    pub fn new(options: GlobalOptions, args: ExecArgs) -> Self {
        Self { options, args }
    }

    /// Run with an explicit shell.
    ///
    /// The exit code is the tool's own; a missing dependency or a tool
    /// killed by a signal exits with 1.
    pub fn execute_with(
        &self,
        shell: &dyn Shell,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let loaded = self.options.load()?;
        let args = &self.args;
        let tool = loaded
            .catalog
            .find_tool(&args.category, &args.framework, &args.tool)
            .ok_or_else(|| WizError::UnknownTool {
                path: format!("{} -> {} -> {}", args.category, args.framework, args.tool),
            })?;

        let runner = ToolRunner::new(shell, self.options.run);
        let result = runner.run(tool, args.name.as_deref(), ui)?;

        if result.ok {
            return Ok(CommandResult::success());
        }
        Ok(CommandResult::failure(match result.exit_code {
            Some(code) if code != 0 => code,
            _ => 1,
        }))
    }
}

impl Command for ExecCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&SystemShell, ui)
    }
}
