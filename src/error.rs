//! Error types for projectwiz operations.
//!
//! This module defines [`WizError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe and load errors are fatal: `main` reports them and exits non-zero
//! - Execution errors (`CommandFailed`, project name problems) are reported
//!   by the menu and control returns to the user
//! - Use `anyhow::Error` (via `WizError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for projectwiz operations.
#[derive(Debug, Error)]
pub enum WizError {
    /// The host operating system is not one of Windows, macOS or Linux.
    #[error("This operating system is not supported: {os}")]
    UnsupportedPlatform { os: String },

    /// No known package manager binary was found on a Linux host.
    #[error("No supported package manager found (looked for {searched})")]
    NoPackageManager { searched: String },

    /// Configuration document not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// The configuration document is not valid JSON.
    #[error("Syntax error in configuration: {message}")]
    Syntax { message: String },

    /// The configuration document is valid JSON but violates the catalog schema.
    #[error("Invalid configuration at {location}: {message}")]
    Schema { location: String, message: String },

    /// A run command needs a project name but none was supplied.
    #[error("Tool '{tool}' requires a project name")]
    MissingProjectName { tool: String },

    /// A project name was rejected by the sanitization layer.
    #[error("Project name '{name}' is not allowed: {reason}")]
    UnsafeProjectName { name: String, reason: String },

    /// No tool matches the requested category/framework/tool path.
    #[error("Unknown tool: {path}")]
    UnknownTool { path: String },

    /// Shell command could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WizError {
    /// Build a schema violation at a document location.
    pub fn schema(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Whether this error comes from probing the host or loading the catalog.
    ///
    /// These abort startup; everything else is reported and the session goes on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedPlatform { .. }
                | Self::NoPackageManager { .. }
                | Self::ConfigNotFound { .. }
                | Self::Syntax { .. }
                | Self::Schema { .. }
        )
    }
}

/// Result type alias for projectwiz operations.
pub type Result<T> = std::result::Result<T, WizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_displays_os() {
        let err = WizError::UnsupportedPlatform {
            os: "freebsd".into(),
        };
        assert!(err.to_string().contains("freebsd"));
    }

    #[test]
    fn no_package_manager_lists_candidates() {
        let err = WizError::NoPackageManager {
            searched: "apt, pacman, dnf".into(),
        };
        assert!(err.to_string().contains("apt, pacman, dnf"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = WizError::ConfigNotFound {
            path: PathBuf::from("/opt/wiz/config.json"),
        };
        assert!(err.to_string().contains("/opt/wiz/config.json"));
    }

    #[test]
    fn schema_error_displays_location_and_message() {
        let err = WizError::schema("categories[0]", "name must be a string");
        let msg = err.to_string();
        assert!(msg.contains("categories[0]"));
        assert!(msg.contains("name must be a string"));
    }

    #[test]
    fn missing_project_name_displays_tool() {
        let err = WizError::MissingProjectName {
            tool: "create-react-app".into(),
        };
        assert!(err.to_string().contains("create-react-app"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = WizError::CommandFailed {
            command: "npm install".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm install"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn probe_and_load_errors_are_fatal() {
        assert!(WizError::Syntax {
            message: "eof".into()
        }
        .is_fatal());
        assert!(WizError::schema("$", "bad").is_fatal());
        assert!(WizError::UnsupportedPlatform { os: "x".into() }.is_fatal());
    }

    #[test]
    fn execution_errors_are_not_fatal() {
        assert!(!WizError::MissingProjectName { tool: "t".into() }.is_fatal());
        assert!(!WizError::CommandFailed {
            command: "x".into(),
            code: None
        }
        .is_fatal());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WizError = io_err.into();
        assert!(matches!(err, WizError::Io(_)));
    }
}
