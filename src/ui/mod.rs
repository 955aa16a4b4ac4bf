//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for the interactive menu
//! - [`NonInteractiveUI`] for scripted subcommands and pipes
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use projectwiz::ui::{create_ui, UserInterface};
//!
//! let mut ui = create_ui(false);
//! ui.show_command("cargo new demo");
//! ui.success("node found");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, WizTheme};

use crate::error::Result;
use crate::menu::{MenuKey, MenuView};

/// Banner printed above every menu screen.
pub const MASTHEAD: &[&str] = &[
    " ____  ____  ____     _  _____ ____  _____    _      _  ____ ",
    "/  __\\/  __\\/  _ \\   / |/  __//   _\\/__ __\\  / \\  /|/ \\/_   \\",
    "|  \\/||  \\/|| / \\|   | ||  \\  |  /    / \\    | |  ||| | /   /",
    "|  __/|    /| \\_/|/\\_| ||  /_ |  \\_   | |    | |/\\||| |/   /_",
    "\\_/   \\_/\\_\\\\____/\\____/\\____\\\\____/  \\_/    \\_/  \\|\\_/\\____/",
];

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and return the text entered.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Echo a command about to be run.
    fn show_command(&mut self, command: &str);

    /// Show the masthead.
    fn show_banner(&mut self);

    /// Clear the screen before redrawing a menu.
    fn clear_screen(&mut self);

    /// Draw one menu screen.
    fn render_menu(&mut self, view: &MenuView);

    /// Block until a key is pressed.
    fn read_key(&mut self) -> Result<MenuKey>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);
}

/// A text prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests and env overrides).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}
