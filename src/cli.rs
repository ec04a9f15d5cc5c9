// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-scene")]
#[command(about = "Rotating cube scene viewer", long_about = None)]
pub struct Cli {
    /// Disable the stats overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Initial window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Path to a JSON settings file
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
}
