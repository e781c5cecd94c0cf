mod commands;
mod config;
mod consts;
mod dataset;
mod document;
mod events;
mod logging;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::snapshot::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::logging::get_rust_log_level;
use crate::session::headless_mode::SnapshotOptions;
use crate::session::{run_snapshot, run_tui_mode};
use crate::ui::dashboard::Tab;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive admin dashboard
    Start {
        /// Disable background colors
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_background_color: bool,
    },
    /// Render one frame of the dashboard to stdout and exit
    Snapshot {
        /// Frame width in columns
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u16,

        /// Frame height in rows
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u16,

        /// Tab to select: dashboard, queries, policies, analytics or users
        #[arg(long, value_name = "TAB")]
        tab: Option<Tab>,

        /// Render with the account menu open
        #[arg(long, action = clap::ArgAction::SetTrue)]
        menu_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(get_rust_log_level().into());

    let args = Args::parse();
    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?;

    match args.command {
        Command::Start {
            no_background_color,
        } => {
            let with_background = config.with_background_color && !no_background_color;
            run_tui_mode(config, with_background).await
        }
        Command::Snapshot {
            width,
            height,
            tab,
            menu_open,
        } => run_snapshot(
            &config,
            SnapshotOptions {
                width,
                height,
                tab,
                menu_open,
            },
        ),
    }
}
