//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands that
//! need the catalog share the probe-then-load startup in [`context`].

pub mod check;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod exec;
pub mod list;
pub mod menu;

pub use context::{GlobalOptions, LoadedCatalog};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
