//! Scripted shell for testing.
//!
//! `MockShell` implements [`Shell`] without spawning anything. Each command
//! string can be given a queue of exit codes; unscripted commands exit 0.
//! Every invocation is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use projectwiz::shell::{MockShell, Shell, Streams};
//!
//! let shell = MockShell::new();
//! shell.script("node --version", vec![1, 0]);
//!
//! assert!(!shell.execute("node --version", Streams::Discard).unwrap().success());
//! assert!(shell.execute("node --version", Streams::Discard).unwrap().success());
//! assert_eq!(shell.count("node --version"), 2);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{Result, WizError};

use super::command::{CommandStatus, Shell, Streams};

/// Mock shell implementation for testing.
#[derive(Debug, Default)]
pub struct MockShell {
    scripts: RefCell<HashMap<String, VecDeque<i32>>>,
    fallbacks: RefCell<HashMap<String, i32>>,
    unspawnable: RefCell<HashSet<String>>,
    invocations: RefCell<Vec<(String, Streams)>>,
}

impl MockShell {
    /// Create a shell where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue exit codes for a command.
    ///
    /// Codes are returned in order. Once the queue is empty the last code
    /// keeps being returned.
    pub fn script(&self, command: &str, codes: Vec<i32>) {
        if let Some(last) = codes.last() {
            self.fallbacks.borrow_mut().insert(command.to_string(), *last);
        }
        self.scripts
            .borrow_mut()
            .insert(command.to_string(), codes.into_iter().collect());
    }

    /// Make a command fail to start, as if the shell were missing.
    pub fn fail_to_spawn(&self, command: &str) {
        self.unspawnable.borrow_mut().insert(command.to_string());
    }

    /// All commands executed, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|(c, _)| c.clone())
            .collect()
    }

    /// All commands executed with the stream mode they used.
    pub fn invocations_with_streams(&self) -> Vec<(String, Streams)> {
        self.invocations.borrow().clone()
    }

    /// How many times a command was executed.
    pub fn count(&self, command: &str) -> usize {
        self.invocations
            .borrow()
            .iter()
            .filter(|(c, _)| c == command)
            .count()
    }

    /// Whether a command was executed at all.
    pub fn ran(&self, command: &str) -> bool {
        self.count(command) > 0
    }
}

impl Shell for MockShell {
    fn execute(&self, command: &str, streams: Streams) -> Result<CommandStatus> {
        self.invocations
            .borrow_mut()
            .push((command.to_string(), streams));

        if self.unspawnable.borrow().contains(command) {
            return Err(WizError::CommandFailed {
                command: command.to_string(),
                code: None,
            });
        }

        let queued = self
            .scripts
            .borrow_mut()
            .get_mut(command)
            .and_then(|q| q.pop_front());
        let code = queued
            .or_else(|| self.fallbacks.borrow().get(command).copied())
            .unwrap_or(0);

        Ok(CommandStatus::from_code(code))
    }
}
