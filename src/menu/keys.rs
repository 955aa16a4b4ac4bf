//! Key mapping for menu navigation.

use console::Key;

/// A navigation intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Enter,
    Back,
    Quit,
    Other,
}

impl From<Key> for MenuKey {
    fn from(key: Key) -> Self {
        match key {
            Key::ArrowUp | Key::Char('w') => MenuKey::Up,
            Key::ArrowDown | Key::Char('s') => MenuKey::Down,
            Key::Enter => MenuKey::Enter,
            Key::Char('b') | Key::Backspace | Key::Escape => MenuKey::Back,
            Key::Char('q') => MenuKey::Quit,
            _ => MenuKey::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters_navigate() {
        assert_eq!(MenuKey::from(Key::ArrowUp), MenuKey::Up);
        assert_eq!(MenuKey::from(Key::Char('w')), MenuKey::Up);
        assert_eq!(MenuKey::from(Key::ArrowDown), MenuKey::Down);
        assert_eq!(MenuKey::from(Key::Char('s')), MenuKey::Down);
    }

    #[test]
    fn enter_back_quit() {
        assert_eq!(MenuKey::from(Key::Enter), MenuKey::Enter);
        assert_eq!(MenuKey::from(Key::Char('b')), MenuKey::Back);
        assert_eq!(MenuKey::from(Key::Escape), MenuKey::Back);
        assert_eq!(MenuKey::from(Key::Char('q')), MenuKey::Quit);
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(MenuKey::from(Key::Char('x')), MenuKey::Other);
        assert_eq!(MenuKey::from(Key::Tab), MenuKey::Other);
    }
}
