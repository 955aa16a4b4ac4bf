//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// projectwiz - pick a development tool from a menu and run it.
#[derive(Debug, Parser)]
#[command(name = "projectwiz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the catalog document (default: config.json above the executable's directory)
    #[arg(short, long, global = true, env = "PROJECTWIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Package manager to assume on Linux instead of probing for one
    #[arg(long, global = true, env = "PROJECTWIZ_PACKAGE_MANAGER", value_name = "NAME")]
    pub package_manager: Option<String>,

    /// Run the tool even if a dependency is still missing after its install
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Pass project names to commands without checking them
    #[arg(long, global = true)]
    pub allow_unsafe_names: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the catalog interactively (default if no command specified)
    Menu,

    /// Print every category, framework and tool
    List(ListArgs),

    /// Validate the catalog and show what was detected about this machine
    Check,

    /// Run one tool without the menu
    Exec(ExecArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Print the resolved catalog as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExecArgs {
    /// Category name, as shown in the main menu
    pub category: String,

    /// Framework name within the category
    pub framework: String,

    /// Tool name within the framework
    pub tool: String,

    /// Project name substituted for `{}` in the tool's command
    #[arg(short, long, value_name = "PROJECT")]
    pub name: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
