//! Menu state machine.
//!
//! Transition table (cursor moves are clamped to the list bounds):
//!
//! | state          | Up / Down   | Enter                     | Back                | Quit |
//! |----------------|-------------|---------------------------|---------------------|------|
//! | `Main`         | move cursor | open category             | ignored             | quit |
//! | `Category`     | move cursor | open framework            | `Main`              | ignored |
//! | `Framework`    | move cursor | `ToolExecuted`, run tool  | `Category`          | ignored |
//! | `ToolExecuted` | any key returns to `Framework` with the tool still highlighted |||
//!
//! Enter on an empty list does nothing. Going back restores the parent's
//! cursor; descending starts at the first item.

use crate::catalog::{Catalog, Tool};

use super::keys::MenuKey;
use super::view::{MenuLevel, MenuView, MAIN_HINT, SUBMENU_HINT};

/// Where the user is in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main {
        selected: usize,
    },
    Category {
        category: usize,
        selected: usize,
    },
    Framework {
        category: usize,
        framework: usize,
        selected: usize,
    },
    ToolExecuted(ToolPath),
}

/// Position of a tool in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPath {
    pub category: usize,
    pub framework: usize,
    pub tool: usize,
}

/// What the driver should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Redraw and wait for the next key.
    None,
    /// Run the tool; the state is now `ToolExecuted`.
    Execute(ToolPath),
    /// Leave the menu.
    Quit,
}

/// Menu navigation over a catalog, independent of any terminal.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    catalog: &'a Catalog,
    state: MenuState,
}

impl<'a> Navigator<'a> {
    /// Start at the main menu with the first category highlighted.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            state: MenuState::Main { selected: 0 },
        }
    }

    /// Current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The tool at a path.
    pub fn tool(&self, path: ToolPath) -> Option<&'a Tool> {
        self.catalog
            .category(path.category)?
            .frameworks
            .get(path.framework)?
            .tools
            .get(path.tool)
    }

    /// Apply a key press.
    pub fn handle(&mut self, key: MenuKey) -> MenuAction {
        let (next, action) = self.transition(key);
        self.state = next;
        action
    }

    fn transition(&self, key: MenuKey) -> (MenuState, MenuAction) {
        use MenuAction::None as Stay;

        match self.state {
            MenuState::Main { selected } => match key {
                MenuKey::Up | MenuKey::Down => (
                    MenuState::Main {
                        selected: step(selected, key, self.item_count()),
                    },
                    Stay,
                ),
                MenuKey::Enter if selected < self.item_count() => (
                    MenuState::Category {
                        category: selected,
                        selected: 0,
                    },
                    Stay,
                ),
                MenuKey::Quit => (self.state, MenuAction::Quit),
                _ => (self.state, Stay),
            },
            MenuState::Category { category, selected } => match key {
                MenuKey::Up | MenuKey::Down => (
                    MenuState::Category {
                        category,
                        selected: step(selected, key, self.item_count()),
                    },
                    Stay,
                ),
                MenuKey::Enter if selected < self.item_count() => (
                    MenuState::Framework {
                        category,
                        framework: selected,
                        selected: 0,
                    },
                    Stay,
                ),
                MenuKey::Back => (MenuState::Main { selected: category }, Stay),
                _ => (self.state, Stay),
            },
            MenuState::Framework {
                category,
                framework,
                selected,
            } => match key {
                MenuKey::Up | MenuKey::Down => (
                    MenuState::Framework {
                        category,
                        framework,
                        selected: step(selected, key, self.item_count()),
                    },
                    Stay,
                ),
                MenuKey::Enter if selected < self.item_count() => {
                    let path = ToolPath {
                        category,
                        framework,
                        tool: selected,
                    };
                    (MenuState::ToolExecuted(path), MenuAction::Execute(path))
                }
                MenuKey::Back => (
                    MenuState::Category {
                        category,
                        selected: framework,
                    },
                    Stay,
                ),
                _ => (self.state, Stay),
            },
            MenuState::ToolExecuted(path) => (
                MenuState::Framework {
                    category: path.category,
                    framework: path.framework,
                    selected: path.tool,
                },
                Stay,
            ),
        }
    }

    /// Labels at the current level.
    fn labels(&self) -> Vec<String> {
        match self.state {
            MenuState::Main { .. } => self
                .catalog
                .categories()
                .iter()
                .map(|c| c.name.clone())
                .collect(),
            MenuState::Category { category, .. } => self
                .catalog
                .category(category)
                .map(|c| c.frameworks.iter().map(|f| f.name.clone()).collect())
                .unwrap_or_default(),
            MenuState::Framework {
                category,
                framework,
                ..
            }
            | MenuState::ToolExecuted(ToolPath {
                category,
                framework,
                ..
            }) => self
                .catalog
                .category(category)
                .and_then(|c| c.frameworks.get(framework))
                .map(|f| f.tools.iter().map(|t| t.name.clone()).collect())
                .unwrap_or_default(),
        }
    }

    fn item_count(&self) -> usize {
        self.labels().len()
    }

    /// Describe the current screen.
    pub fn view(&self) -> MenuView {
        let items = self.labels();
        let category_name = |index: usize| {
            self.catalog
                .category(index)
                .map(|c| c.name.clone())
                .unwrap_or_default()
        };
        let framework_name = |category: usize, framework: usize| {
            self.catalog
                .category(category)
                .and_then(|c| c.frameworks.get(framework))
                .map(|f| f.name.clone())
                .unwrap_or_default()
        };

        match self.state {
            MenuState::Main { selected } => MenuView {
                level: MenuLevel::Main,
                title: "Main Menu".to_string(),
                items,
                selected,
                hint: MAIN_HINT.to_string(),
            },
            MenuState::Category { category, selected } => MenuView {
                level: MenuLevel::Category,
                title: category_name(category),
                items,
                selected,
                hint: SUBMENU_HINT.to_string(),
            },
            MenuState::Framework {
                category,
                framework,
                selected,
            }
            | MenuState::ToolExecuted(ToolPath {
                category,
                framework,
                tool: selected,
            }) => MenuView {
                level: MenuLevel::Framework,
                title: format!(
                    "{} -> {}",
                    category_name(category),
                    framework_name(category, framework)
                ),
                items,
                selected,
                hint: SUBMENU_HINT.to_string(),
            },
        }
    }
}

/// Move a cursor one step, clamped to `[0, len)`.
fn step(selected: usize, key: MenuKey, len: usize) -> usize {
    match key {
        MenuKey::Up => selected.saturating_sub(1),
        MenuKey::Down if selected + 1 < len => selected + 1,
        _ => selected,
    }
}
