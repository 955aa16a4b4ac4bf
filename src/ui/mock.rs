//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses and a queue of key presses.
//!
//! # Example
//!
//! ```
//! use projectwiz::menu::MenuKey;
//! use projectwiz::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("project_name", "demo");
//! ui.queue_keys(&[MenuKey::Down, MenuKey::Enter]);
//!
//! ui.message("Starting");
//! assert_eq!(ui.read_key().unwrap(), MenuKey::Down);
//! assert!(ui.has_message("Starting"));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::error::Result;
use crate::menu::{MenuKey, MenuView};

use super::{Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// When the key queue runs dry, `read_key` returns [`MenuKey::Quit`] so a
/// menu loop under test always terminates once it is back at the main menu.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
    spinners: Vec<String>,
    spinner_outcomes: Rc<RefCell<Vec<(SpinnerStatus, String)>>>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
    keys: VecDeque<MenuKey>,
    keys_read: usize,
    menus: Vec<MenuView>,
    banners: usize,
    clears: usize,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue key presses returned by `read_key`, in order.
    pub fn queue_keys(&mut self, keys: &[MenuKey]) {
        self.keys.extend(keys.iter().copied());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Commands echoed before running, oldest first.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each started spinner finished, in finish order.
    pub fn spinner_outcomes(&self) -> Vec<(SpinnerStatus, String)> {
        self.spinner_outcomes.borrow().clone()
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Every menu screen rendered, oldest first.
    pub fn menus(&self) -> &[MenuView] {
        &self.menus
    }

    /// The most recently rendered menu.
    pub fn last_menu(&self) -> Option<&MenuView> {
        self.menus.last()
    }

    /// How many times the masthead was shown.
    pub fn banner_count(&self) -> usize {
        self.banners
    }

    /// How many times the screen was cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// How many keys were read, including the implicit trailing `Quit`.
    pub fn keys_read(&self) -> usize {
        self.keys_read
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .or(prompt.default.as_ref())
            .cloned()
            .unwrap_or_default())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            outcomes: Rc::clone(&self.spinner_outcomes),
            ..MockSpinner::default()
        })
    }

    fn show_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }

    fn show_banner(&mut self) {
        self.banners += 1;
    }

    fn clear_screen(&mut self) {
        self.clears += 1;
    }

    fn render_menu(&mut self, view: &MenuView) {
        self.menus.push(view.clone());
    }

    fn read_key(&mut self) -> Result<MenuKey> {
        self.keys_read += 1;
        Ok(self.keys.pop_front().unwrap_or(MenuKey::Quit))
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
    outcomes: Rc<RefCell<Vec<(SpinnerStatus, String)>>>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Skipped,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Get the finish status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }

    fn finish(&mut self, msg: &str, status: SpinnerStatus) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(status);
        self.outcomes.borrow_mut().push((status, msg.to_string()));
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Error);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Skipped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(key: &str, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "?".to_string(),
            default: default.map(String::from),
        }
    }

    #[test]
    fn captures_status_lines() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");

        assert!(ui.has_message("hell"));
        assert!(ui.has_success("done"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
        assert!(!ui.has_error("fine"));
    }

    #[test]
    fn prompt_prefers_configured_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("project_name", "foo");

        let answer = ui.prompt(&input("project_name", Some("bar"))).unwrap();

        assert_eq!(answer, "foo");
        assert_eq!(ui.prompts_shown(), &["project_name"]);
    }

    #[test]
    fn prompt_falls_back_to_default_then_empty() {
        let mut ui = MockUI::new();
        assert_eq!(ui.prompt(&input("a", Some("bar"))).unwrap(), "bar");
        assert_eq!(ui.prompt(&input("b", None)).unwrap(), "");
    }

    #[test]
    fn screen_calls_are_counted() {
        let mut ui = MockUI::new();
        ui.clear_screen();
        ui.show_banner();
        ui.clear_screen();
        ui.show_command("cargo new demo");

        assert_eq!(ui.clear_count(), 2);
        assert_eq!(ui.banner_count(), 1);
        assert_eq!(ui.commands(), &["cargo new demo"]);
    }

    #[test]
    fn keys_drain_then_quit() {
        let mut ui = MockUI::new();
        ui.queue_keys(&[MenuKey::Down, MenuKey::Enter]);

        assert_eq!(ui.read_key().unwrap(), MenuKey::Down);
        assert_eq!(ui.read_key().unwrap(), MenuKey::Enter);
        assert_eq!(ui.read_key().unwrap(), MenuKey::Quit);
        assert_eq!(ui.keys_read(), 3);
    }

    #[test]
    fn spinner_records_outcome() {
        let mut spinner = MockSpinner::new();
        spinner.finish_skipped("git missing");

        assert_eq!(spinner.finish_message(), Some("git missing"));
        assert_eq!(spinner.status(), Some(SpinnerStatus::Skipped));
    }
}
