//! histr - Entry Point

use clap::Parser;
use histr::model::AppError;
use histr::replay::ReplayMode;
use histr::view::{BrowserStyles, ColorConfig};
use std::path::PathBuf;
use tracing::info;

/// histr - browse, filter and replay interpreter command history
#[derive(Parser, Debug)]
#[command(name = "histr")]
#[command(version)]
#[command(about = "Interactive browser for Python interpreter history")]
pub struct Args {
    /// History file to browse (defaults to ~/.python_history)
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print the selected command to stdout instead of injecting it
    #[arg(long)]
    pub print: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = histr::config::load_config_with_precedence(args.config.clone())?;
        let merged = histr::config::merge_config(config_file);
        let with_env = histr::config::apply_env_overrides(merged);

        // Flags only override when explicitly set
        let no_color_override = args.no_color.then_some(true);
        let replay_override = args.print.then_some(ReplayMode::Print);

        histr::config::apply_cli_overrides(
            with_env,
            args.history.clone(),
            no_color_override,
            replay_override,
        )
    };

    histr::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // A missing history file ends the program before the terminal is touched
    let styles = BrowserStyles::with_color_config(ColorConfig::new(!config.no_color));
    let outcome = histr::view::run_session(&config.history_path, styles)?;

    if let Some(text) = outcome.replay_text() {
        let mut sink = histr::replay::sink_for(config.replay);
        sink.inject(&text)?;
    }

    Ok(())
}
