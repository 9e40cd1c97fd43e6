//! Entry point: evaluate the configuration and print it as JSON.
//!
//! Usage: `tilerc [palette-path]`.  Without an argument the palette is
//! read from `~/.theming/colors.json`.  On any palette error the process
//! logs it and exits nonzero without emitting partial output.

use log::{error, info};
use std::path::PathBuf;
use tilerc::config::Config;
use tilerc::theme;

fn main() {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(theme::default_palette_path);

    let scheme = match theme::load(&path) {
        Ok(scheme) => {
            info!("loaded palette from {}", path.display());
            scheme
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let config = Config::new(&scheme);
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("failed to encode configuration: {e}");
            std::process::exit(1);
        }
    }
}
