//! Visual theme and styling.

use console::Style;

use crate::menu::MenuLevel;

/// The launcher's visual theme.
#[derive(Debug, Clone)]
pub struct WizTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for menu titles and headers (bold).
    pub header: Style,
    /// Style for commands echoed before running (dim italic).
    pub command: Style,
    /// Highlight for the selected item in the main menu (blue).
    pub main_selected: Style,
    /// Highlight for the selected item in a category menu (green).
    pub category_selected: Style,
    /// Highlight for the selected item in a framework menu (red).
    pub framework_selected: Style,
}

impl Default for WizTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl WizTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
            command: Style::new().dim().italic(),
            main_selected: Style::new().blue().bold(),
            category_selected: Style::new().green().bold(),
            framework_selected: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            command: Style::new(),
            main_selected: Style::new(),
            category_selected: Style::new(),
            framework_selected: Style::new(),
        }
    }

    /// Pick the theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Style used to highlight the cursor at a menu level.
    pub fn highlight_for(&self, level: MenuLevel) -> &Style {
        match level {
            MenuLevel::Main => &self.main_selected,
            MenuLevel::Category => &self.category_selected,
            MenuLevel::Framework => &self.framework_selected,
        }
    }

    /// Format one menu row; the selected row gets a `>` marker.
    pub fn format_menu_item(&self, level: MenuLevel, label: &str, selected: bool) -> String {
        if selected {
            format!("{}", self.highlight_for(level).apply_to(format!("> {}", label)))
        } else {
            format!("  {}", label)
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_status_lines() {
        let theme = WizTheme::plain();
        assert_eq!(theme.format_success("node found"), "✓ node found");
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
        assert_eq!(theme.format_error("failed"), "✗ failed");
        assert_eq!(theme.format_skipped("git missing"), "○ git missing");
    }

    #[test]
    fn selected_item_has_marker() {
        let theme = WizTheme::plain();
        assert_eq!(
            theme.format_menu_item(MenuLevel::Main, "Web", true),
            "> Web"
        );
        assert_eq!(
            theme.format_menu_item(MenuLevel::Main, "Web", false),
            "  Web"
        );
    }

    #[test]
    fn each_level_has_its_own_highlight() {
        let theme = WizTheme::new();
        let main = theme
            .highlight_for(MenuLevel::Main)
            .clone()
            .force_styling(true)
            .apply_to("x")
            .to_string();
        let framework = theme
            .highlight_for(MenuLevel::Framework)
            .clone()
            .force_styling(true)
            .apply_to("x")
            .to_string();
        assert_ne!(main, framework);
    }

    #[test]
    fn default_impl_matches_new() {
        let default = WizTheme::default();
        let new = WizTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
