pub mod message;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::store::TaskStore;
use anyhow::{Result, anyhow};
use iced::Element;

use message::Message;
use state::GuiApp;

impl GuiApp {
    pub fn view(&self) -> Element<'_, Message> {
        view::root_view(self)
    }
}

/// Entry point of the `ticklist-gui` binary.
pub fn run() -> Result<()> {
    let config = Config::load()?;
    let store = TaskStore::from_config(&config)?;
    log::info!("Window started on {}", store.path().display());

    iced::application("Ticklist", GuiApp::update, GuiApp::view)
        .theme(GuiApp::theme)
        .window_size((720.0, 520.0))
        .run_with(move || GuiApp::new(store))
        .map_err(|e| anyhow!("window failed: {}", e))
}
