//! # inputs-demo
//!
//! An interactive form showing every input widget of the crate side by side:
//! a username field, a concealed password field, an integer age field, a
//! boolean toggle and a highlighted code field. Submitting prints a report of
//! the current values in the left panel.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with default styling
//! inputs-demo
//!
//! # Load a style file and widen the scroll margin
//! inputs-demo --style style.json --edge-margin 5
//! ```
//!
//! Logs are written to `inputs-demo.log` (see `--log`); set `RUST_LOG` to
//! `tui_inputs=trace` to follow every edit.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tui_inputs::FieldStyle;

pub mod cli;
pub mod demo {
    pub mod app;
    pub mod enums;
    pub mod run;
}

use cli::Cli;
use demo::run::run_demo;

/// Send tracing output to `path` so it does not draw over the alternate screen.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tui_inputs=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log) {
        eprintln!("Failed to open log file {}: {}", cli.log.display(), e);
        std::process::exit(1);
    }

    let style = match cli.style.as_deref() {
        Some(path) => match FieldStyle::load(path) {
            Ok(style) => style,
            Err(e) => {
                eprintln!("Failed to load style {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FieldStyle::default(),
    };

    if let Err(e) = run_demo(&cli, style) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}
