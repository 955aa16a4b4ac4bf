//! Project name substitution in run commands.
//!
//! Substitution is plain text replacement. The project name is inserted
//! verbatim with no quoting, so a name containing shell syntax becomes shell
//! syntax; see [`super::sanitize`] for the optional guard.

use crate::catalog::{Tool, PLACEHOLDER};
use crate::error::{Result, WizError};

/// Replace every occurrence of `token` in `text`.
///
/// An empty token leaves the text unchanged, as does a token that never
/// occurs.
///
/// # Example
///
/// ```
/// use projectwiz::runner::substitute;
///
/// assert_eq!(substitute("npx create-{} --ts", "{}", "demo"), "npx create-demo --ts");
/// assert_eq!(substitute("cd {} && ls {}", "{}", "app"), "cd app && ls app");
/// ```
pub fn substitute(text: &str, token: &str, replacement: &str) -> String {
    if token.is_empty() {
        return text.to_string();
    }
    text.replace(token, replacement)
}

/// The command to execute for `tool`.
///
/// Errors with `MissingProjectName` when the run command has a placeholder
/// and no name was supplied.
pub fn build_command(tool: &Tool, project_name: Option<&str>) -> Result<String> {
    if !tool.requires_project_name() {
        return Ok(tool.run_command.clone());
    }

    let name = project_name.ok_or_else(|| WizError::MissingProjectName {
        tool: tool.name.clone(),
    })?;
    Ok(substitute(&tool.run_command, PLACEHOLDER, name))
}
