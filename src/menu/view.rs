//! Render-independent description of one menu screen.

/// Which menu level a view belongs to; selects the highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLevel {
    Main,
    Category,
    Framework,
}

/// Everything a UI needs to draw a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub level: MenuLevel,
    pub title: String,
    /// Labels in display order.
    pub items: Vec<String>,
    /// Index of the highlighted item. Meaningless when `items` is empty.
    pub selected: usize,
    /// Key help shown under the list.
    pub hint: String,
}

impl MenuView {
    /// The highlighted label, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }
}

pub(crate) const MAIN_HINT: &str =
    "Use arrow keys or 'w'/'s' to navigate. Press Enter to select, or 'q' to quit.";
pub(crate) const SUBMENU_HINT: &str =
    "Use arrow keys or 'w'/'s' to navigate. Press Enter to select, or 'b' to go back.";
