//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;
use crate::menu::{MenuKey, MenuView};

use super::{
    prompt_user, NonInteractiveUI, ProgressSpinner, Prompt, SpinnerHandle, UserInterface,
    WizTheme, MASTHEAD,
};

/// Interactive terminal UI implementation.
///
/// Menus, prompts and status go to stdout; errors go to stderr.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: WizTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme: WizTheme::detect(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::new(message))
    }

    fn show_command(&mut self, command: &str) {
        writeln!(
            self.term,
            "{}",
            self.theme.command.apply_to(format!("$ {}", command))
        )
        .ok();
    }

    fn show_banner(&mut self) {
        for line in MASTHEAD {
            writeln!(self.term, "{}", line).ok();
        }
        writeln!(self.term).ok();
    }

    fn clear_screen(&mut self) {
        self.term.clear_screen().ok();
    }

    fn render_menu(&mut self, view: &MenuView) {
        writeln!(self.term, "{}\n", self.theme.header.apply_to(&view.title)).ok();
        for (i, label) in view.items.iter().enumerate() {
            let row = self
                .theme
                .format_menu_item(view.level, label, i == view.selected);
            writeln!(self.term, "{}", row).ok();
        }
        writeln!(self.term, "\n{}", self.theme.dim.apply_to(&view.hint)).ok();
    }

    fn read_key(&mut self) -> Result<MenuKey> {
        let key = self.term.read_key()?;
        tracing::trace!("key {:?}", key);
        Ok(MenuKey::from(key))
    }
}

/// Create the appropriate UI based on environment.
pub fn create_ui(interactive: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new())
    } else {
        Box::new(NonInteractiveUI::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use console::TermTarget;

    #[test]
    fn errors_go_to_stderr() {
        let ui = TerminalUI::new();
        assert!(matches!(ui.err.target(), TermTarget::Stderr));
        assert!(matches!(ui.term.target(), TermTarget::Stdout));
    }
}
