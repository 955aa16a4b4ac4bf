//! Non-interactive UI for scripted subcommands and piped stdout.

use std::collections::HashMap;

use crate::error::{Result, WizError};
use crate::menu::{MenuKey, MenuView};

use super::{Prompt, SpinnerHandle, UserInterface, MASTHEAD};

/// Prefix for environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "PROJECTWIZ_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Status goes to stdout, warnings and errors to stderr. Prompts are
/// answered from `PROJECTWIZ_PROMPT_<KEY>` or the prompt's default.
pub struct NonInteractiveUI {
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        let env_overrides = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self { env_overrides }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self {
            env_overrides: overrides,
        }
    }
}

impl Default for NonInteractiveUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned()
            .ok_or_else(|| {
                WizError::Other(anyhow::anyhow!(
                    "Cannot prompt for '{}' in non-interactive mode (set {} or pass it as a flag)",
                    prompt.key,
                    env_key
                ))
            })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("  {}", message);
        Box::new(NoopSpinner)
    }

    fn show_command(&mut self, command: &str) {
        println!("$ {}", command);
    }

    fn show_banner(&mut self) {
        for line in MASTHEAD {
            println!("{}", line);
        }
        println!();
    }

    fn clear_screen(&mut self) {}

    fn render_menu(&mut self, view: &MenuView) {
        println!("{}", view.title);
        for (i, label) in view.items.iter().enumerate() {
            let marker = if i == view.selected { ">" } else { " " };
            println!("{} {}", marker, label);
        }
    }

    fn read_key(&mut self) -> Result<MenuKey> {
        Ok(MenuKey::Quit)
    }
}

/// Spinner that prints its outcome as a plain line.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("  ✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("  ✗ {}", msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        println!("  ○ {}", msg);
    }
}
