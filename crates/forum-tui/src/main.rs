mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use forum_core::config::{ConfigOverrides, FileConfig};
use forum_core::constants::{API_BASE_ENV, LOG_FILE_ENV};
use forum_core::tracing_setup::init_tracing;
use forum_core::{ForumConfig, ForumController, HttpForumApi};
use tracing::info;

use crate::runtime::run_app;
use crate::ui::confirm::TuiConfirmer;
use crate::ui::screen::ForumScreen;
use crate::ui::App;

/// Terminal browser for the asteroid watch forum
#[derive(Parser, Debug)]
#[command(name = "forum-tui", version, about)]
struct Cli {
    /// Base URL of the forum API
    #[arg(long, env = API_BASE_ENV)]
    api_base: Option<String>,

    /// Seconds between background refreshes while the forum is open
    #[arg(long, value_name = "SECS")]
    poll_interval: Option<u64>,

    /// JSON config file (defaults to <config dir>/forum/config.json when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, env = LOG_FILE_ENV, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Create a thread with this name on startup
    #[arg(long, value_name = "NAME")]
    create: Option<String>,

    /// Start with the forum hidden
    #[arg(long)]
    start_closed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing("forum-tui", cli.log_file.as_deref())?;

    let file_config = FileConfig::load_or_default(cli.config.as_deref())?;
    let overrides = ConfigOverrides {
        api_base: cli.api_base.clone(),
        poll_interval_secs: cli.poll_interval,
    };
    let config = ForumConfig::resolve(&file_config, &overrides)?;
    info!(
        "Forum API at {} (poll every {:?})",
        config.api_base, config.poll_interval
    );

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let api = Arc::new(HttpForumApi::from_config(&config));
    let (confirmer, mut confirm_rx) = TuiConfirmer::channel();
    let controller = ForumController::new(config, api, confirmer, ForumScreen::new());
    let mut app = App::new(controller);

    if let Some(name) = cli.create.as_deref() {
        // Opens the forum itself once the thread exists.
        app.controller.create_thread(name);
    }
    if !cli.start_closed {
        app.controller.open();
    }

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, &mut confirm_rx).await;
    app.controller.close();
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
