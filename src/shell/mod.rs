//! Shell command execution.
//!
//! Everything the launcher runs (dependency checks, installs, tool commands)
//! goes through the [`Shell`] trait so the runner can be tested without
//! spawning processes.

pub mod command;
pub mod mock;

pub use command::{CommandStatus, Shell, Streams, SystemShell};
pub use mock::MockShell;
