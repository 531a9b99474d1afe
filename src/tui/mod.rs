// TUI module for the interactive manual search screen
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
pub use app::App;

use terminal::TerminalManager;

/// Run the interactive search screen against the manuals in `manuals_dir`.
pub fn run_interactive(manuals_dir: PathBuf) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(manuals_dir);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
