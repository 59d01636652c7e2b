use anyhow::Result;
use log::info;
use slamui::config::Config;
use slamui::logger::{self, Logger};
use slamui::{demo, ui};

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(&path);
    }

    let config = Config::load()?;
    let memory = Logger::new();
    if let Some(path) = logger::init(&config.logging, &memory)? {
        info!("Logging to {}", path.display());
    }

    // Run the TUI application
    let mut app = demo::build_app(&config, memory);
    ui::run_app(&mut app)
}
