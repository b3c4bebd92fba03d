//! tprompt - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tprompt::config::{self, CliOverrides, HexColor};
use tprompt::model::AppError;
use tracing::info;

/// tprompt - scroll a script up the terminal for reading aloud
#[derive(Parser, Debug)]
#[command(name = "tprompt")]
#[command(version)]
#[command(about = "Terminal teleprompter that scrolls a script at a controllable speed")]
pub struct Args {
    /// Script to show (reads piped stdin, or shows a welcome text, if not provided)
    pub file: Option<PathBuf>,

    /// Scroll speed in pixels per tick (clamped to 1-40)
    #[arg(long, allow_negative_numbers = true)]
    pub speed: Option<i64>,

    /// Font size in pixels (clamped to 8-200)
    #[arg(long, allow_negative_numbers = true)]
    pub font_size: Option<i64>,

    /// Text color as #RRGGBB or #RGB
    #[arg(long)]
    pub text_color: Option<HexColor>,

    /// Background color as #RRGGBB or #RGB
    #[arg(long)]
    pub bg_color: Option<HexColor>,

    /// Disable the drop shadow
    #[arg(long)]
    pub no_shadow: bool,

    /// Start scrolling immediately
    #[arg(long)]
    pub autostart: bool,

    /// Milliseconds between scroll ticks (clamped to 5-1000)
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            speed: self.speed,
            font_size: self.font_size,
            text_color: self.text_color,
            bg_color: self.bg_color,
            no_shadow: self.no_shadow,
            autostart: self.autostart,
            tick_ms: self.tick_ms,
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file)?;
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.overrides())
    };

    // Flushes buffered log lines when dropped at the end of main.
    let _log_guard = tprompt::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // An unreadable script opens the window on the welcome text with a notice.
    let (document, load_error) = tprompt::source::initial_document_or_welcome(args.file);

    tprompt::view::run_prompter(document, load_error, &config)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}
