pub mod action;
pub mod session;
pub mod view;

use crate::config::Config;
use crate::store::TaskStore;
use anyhow::Result;
use std::io::{self, IsTerminal};

pub use session::Menu;

/// Entry point of the `ticklist` binary: opens the configured store and runs
/// the menu on stdin/stdout.
pub fn run() -> Result<()> {
    let config = Config::load()?;
    let mut store = TaskStore::from_config(&config)?;
    log::info!("Text menu started on {}", store.path().display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    Menu::new(&mut store, stdin.lock(), stdout.lock())
        .with_color(color)
        .run()
}
