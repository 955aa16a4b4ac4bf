//! Dependency resolution and tool execution.
//!
//! Running a tool is strictly sequential: each dependency is checked in
//! declaration order, missing ones are installed, and only then is the
//! tool's own command executed. A non-zero exit anywhere is reported in the
//! [`RunResult`]; only failures to start a process are errors.

use crate::catalog::{Dependency, Tool};
use crate::error::Result;
use crate::shell::{Shell, Streams};
use crate::ui::UserInterface;

use super::sanitize::validate_project_name;
use super::substitute::build_command;

/// What to do when a dependency install can't be verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallPolicy {
    /// Stop the tool run if the install fails or the re-check still fails.
    #[default]
    Strict,
    /// Re-check after installing, but only warn if it still fails.
    Lenient,
}

/// Options for running tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub policy: InstallPolicy,
    /// Skip project name sanitization.
    pub allow_unsafe_names: bool,
}

/// Outcome of running one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Whether dependencies were satisfied and the command exited 0.
    pub ok: bool,
    /// Dependency whose install could not be verified (strict policy only).
    pub failed_dependency: Option<String>,
    /// Exit code of the tool command, if it ran and wasn't killed.
    pub exit_code: Option<i32>,
}

impl RunResult {
    /// The tool command ran and exited with `exit_code`.
    pub fn completed(exit_code: Option<i32>) -> Self {
        Self {
            ok: exit_code == Some(0),
            failed_dependency: None,
            exit_code,
        }
    }

    /// The run stopped because a dependency is still missing after install.
    pub fn dependency_install_failed(name: &str) -> Self {
        Self {
            ok: false,
            failed_dependency: Some(name.to_string()),
            exit_code: None,
        }
    }
}

/// Checks, installs and runs tools through a [`Shell`].
pub struct ToolRunner<'a> {
    shell: &'a dyn Shell,
    options: RunOptions,
}

impl<'a> ToolRunner<'a> {
    /// Create a runner.
    pub fn new(shell: &'a dyn Shell, options: RunOptions) -> Self {
        Self { shell, options }
    }

    /// Run a tool, handling its dependencies first.
    ///
    /// # Errors
    ///
    /// `MissingProjectName` if the command has a placeholder and no name was
    /// given, `UnsafeProjectName` if the name fails sanitization, and
    /// `CommandFailed` if a shell could not be started. All are raised
    /// before anything for the failing step is executed.
    pub fn run(
        &self,
        tool: &Tool,
        project_name: Option<&str>,
        ui: &mut dyn UserInterface,
    ) -> Result<RunResult> {
        if tool.requires_project_name() && !self.options.allow_unsafe_names {
            if let Some(name) = project_name {
                validate_project_name(name)?;
            }
        }
        let command = build_command(tool, project_name)?;

        for dependency in &tool.dependencies {
            if !self.ensure_dependency(dependency, ui)? {
                return Ok(RunResult::dependency_install_failed(&dependency.name));
            }
        }

        ui.show_command(&command);
        let status = self.shell.execute(&command, Streams::Inherit)?;
        let result = RunResult::completed(status.exit_code);

        if result.ok {
            ui.success(&format!("{} finished", tool.name));
        } else {
            ui.warning(&format!(
                "{} exited with {}",
                tool.name,
                describe_exit(status.exit_code)
            ));
        }
        Ok(result)
    }

    /// Make sure one dependency is present.
    ///
    /// Returns `Ok(false)` when the tool run should stop.
    fn ensure_dependency(
        &self,
        dependency: &Dependency,
        ui: &mut dyn UserInterface,
    ) -> Result<bool> {
        let mut spinner = ui.start_spinner(&format!("Checking {}", dependency.name));
        let present = self
            .shell
            .execute(&dependency.check_command, Streams::Discard)?
            .success();

        if present {
            spinner.finish_success(&format!("{} found", dependency.name));
            return Ok(true);
        }
        spinner.finish_skipped(&format!("{} missing", dependency.name));

        ui.message(&format!(
            "Installing {}: {}",
            dependency.name, dependency.install_command
        ));
        let install = self
            .shell
            .execute(&dependency.install_command, Streams::Inherit)?;

        match self.options.policy {
            InstallPolicy::Strict => {
                let verified = install.success() && self.verify(dependency, ui)?;
                if !verified {
                    tracing::debug!(
                        "Install of {} not verified (install exit {:?})",
                        dependency.name,
                        install.exit_code
                    );
                    ui.error(&format!(
                        "{} is still missing after install; not running the tool",
                        dependency.name
                    ));
                }
                Ok(verified)
            }
            InstallPolicy::Lenient => {
                if !self.verify(dependency, ui)? {
                    tracing::warn!(
                        "{} still missing after install (install exit {:?}), continuing",
                        dependency.name,
                        install.exit_code
                    );
                    ui.warning(&format!(
                        "{} is still missing after install ({}); continuing anyway",
                        dependency.name,
                        describe_exit(install.exit_code)
                    ));
                }
                Ok(true)
            }
        }
    }

    /// Re-run the check after an install.
    fn verify(&self, dependency: &Dependency, ui: &mut dyn UserInterface) -> Result<bool> {
        let mut spinner = ui.start_spinner(&format!("Verifying {}", dependency.name));
        let present = self
            .shell
            .execute(&dependency.check_command, Streams::Discard)?
            .success();

        if present {
            spinner.finish_success(&format!("{} installed", dependency.name));
        } else {
            spinner.finish_error(&format!("{} still missing", dependency.name));
        }
        Ok(present)
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "a signal".to_string(),
    }
}
