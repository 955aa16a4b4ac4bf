//! The interactive menu loop.

use crate::catalog::{Catalog, Tool};
use crate::error::Result;
use crate::runner::{RunResult, ToolRunner};
use crate::ui::{Prompt, UserInterface};

use super::state::{MenuAction, Navigator};

/// Prompt key for the project name.
pub const PROJECT_NAME_KEY: &str = "project_name";

/// Drive the menu until the user quits from the main menu.
///
/// Errors from running a tool (a missing or rejected project name, a shell
/// that fails to start) are shown and the menu carries on. Only failures to
/// read the keyboard end the session early.
pub fn run_menu(
    catalog: &Catalog,
    runner: &ToolRunner<'_>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let mut nav = Navigator::new(catalog);

    loop {
        ui.clear_screen();
        ui.show_banner();
        ui.render_menu(&nav.view());

        let key = ui.read_key()?;
        match nav.handle(key) {
            MenuAction::None => {}
            MenuAction::Quit => {
                tracing::debug!("Leaving menu");
                return Ok(());
            }
            MenuAction::Execute(path) => {
                ui.clear_screen();
                ui.show_banner();

                if let Some(tool) = nav.tool(path) {
                    tracing::debug!("Selected tool {}", tool.name);
                    if let Err(e) = select_tool(tool, runner, ui) {
                        ui.error(&e.to_string());
                    }
                }

                ui.message("\nPress any key to go back.");
                let key = ui.read_key()?;
                nav.handle(key);
            }
        }
    }
}

/// Ask for a project name if the tool needs one, then run it.
///
/// Only the line ending is stripped; anything else the user typed reaches
/// the runner as is.
pub fn select_tool(
    tool: &Tool,
    runner: &ToolRunner<'_>,
    ui: &mut dyn UserInterface,
) -> Result<RunResult> {
    let project_name = if tool.requires_project_name() {
        let answer = ui.prompt(&Prompt {
            key: PROJECT_NAME_KEY.to_string(),
            question: "Enter the project name".to_string(),
            default: None,
        })?;
        Some(answer.trim_end_matches(['\r', '\n']).to_string())
    } else {
        None
    };

    runner.run(tool, project_name.as_deref(), ui)
}
