use std::path::PathBuf;

use clap::Parser;
use tui_inputs::tui::viewport::DEFAULT_EDGE_MARGIN;
use tui_inputs::MaskingMode;

/// Interactive form built from the input widgets.
/// Tab/Shift+Tab move between fields, Enter submits, Esc clears focus.
#[derive(Parser)]
#[command(name = "inputs-demo", version, about = "Input widgets demo form")]
pub struct Cli {
    /// JSON file with the field style applied to every input.
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// File receiving log output.
    #[arg(long, default_value = "inputs-demo.log")]
    pub log: PathBuf,

    /// Characters of context kept around the cursor while scrolling.
    #[arg(long, default_value_t = DEFAULT_EDGE_MARGIN)]
    pub edge_margin: usize,

    /// Amount the age field changes by on up/down.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub step: i64,

    /// How the code field is displayed.
    #[arg(long, value_enum, default_value_t = MaskingMode::Highlighted)]
    pub code_masking: MaskingMode,
}
