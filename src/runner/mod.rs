//! Dependency resolution and tool execution.
//!
//! - [`tool`] - the check → install → run sequence
//! - [`substitute`] - project name placeholder replacement
//! - [`sanitize`] - optional guard on project names

pub mod sanitize;
pub mod substitute;
pub mod tool;

pub use sanitize::validate_project_name;
pub use substitute::{build_command, substitute};
pub use tool::{InstallPolicy, RunOptions, RunResult, ToolRunner};
