//! projectwiz - an interactive launcher for development tool scaffolding.
//!
//! A JSON catalog groups tools under categories and frameworks. The user
//! walks a three-level menu, picks a tool, and projectwiz makes sure the
//! tool's dependencies are installed with the host's package manager before
//! running the tool's command, optionally with a project name filled in.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`catalog`] - Catalog model, loading and discovery
//! - [`error`] - Error types and result aliases
//! - [`host`] - Operating system and package manager detection
//! - [`menu`] - Menu state machine and the interactive loop
//! - [`runner`] - Dependency checks, installs and tool execution
//! - [`shell`] - Shell command execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use projectwiz::catalog::load;
//! use projectwiz::host::HostEnvironment;
//! use projectwiz::runner::{RunOptions, ToolRunner};
//! use projectwiz::shell::MockShell;
//! use projectwiz::ui::MockUI;
//!
//! let doc = br#"{
//!     "dependencies": [],
//!     "categories": [{"name": "Build", "frameworks": [{"name": "Make", "tools": [
//!         {"name": "build", "command": "echo build {}", "dependencies": []}
//!     ]}]}]
//! }"#;
//! let catalog = load(doc, &HostEnvironment::linux("apt")).unwrap();
//! let tool = catalog.find_tool("Build", "Make", "build").unwrap();
//!
//! let shell = MockShell::new();
//! let runner = ToolRunner::new(&shell, RunOptions::default());
//! let result = runner.run(tool, Some("foo"), &mut MockUI::new()).unwrap();
//!
//! assert!(result.ok);
//! assert_eq!(shell.invocations(), vec!["echo build foo"]);
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod host;
pub mod menu;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, WizError};
