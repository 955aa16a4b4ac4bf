//! Three-level menu: categories, frameworks, tools.
//!
//! - [`keys`] - key decoding
//! - [`state`] - the navigation state machine, free of any terminal I/O
//! - [`view`] - what a UI draws for one screen
//! - [`session`] - the loop tying navigation to a [`UserInterface`](crate::ui::UserInterface)

pub mod keys;
pub mod session;
pub mod state;
pub mod view;

pub use keys::MenuKey;
pub use session::{run_menu, select_tool, PROJECT_NAME_KEY};
pub use state::{MenuAction, MenuState, Navigator, ToolPath};
pub use view::{MenuLevel, MenuView};
