use anyhow::Result;

fn main() -> Result<()> {
    if let Err(e) = ticklist::logging::init() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    ticklist::gui::run()
}
