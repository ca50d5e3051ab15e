use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{Context, Result};
use backend_bridge::commands::BackendCommand;
use clap::Parser;
use config::{load_settings, DEFAULT_CONFIG_PATH};
use controller::orchestration::dispatch_backend_command;
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;
use ui::{AdminApp, LoopControl};

/// Search, page through, select, edit and delete member records in memory.
#[derive(Parser, Debug)]
struct Args {
    /// TOML settings file; missing is fine.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Members JSON endpoint.
    #[arg(long, conflicts_with = "from_file")]
    source_url: Option<String>,
    /// Read members from a local JSON export instead of the network.
    #[arg(long)]
    from_file: Option<PathBuf>,
    #[arg(long)]
    page_size: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    settings.apply_cli(args.source_url, args.from_file, args.page_size);
    settings.validate().context("invalid settings")?;
    tracing::info!(source = ?settings.source, page_size = settings.page_size, "starting member admin");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded(64);
    let backend = backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let mut app = AdminApp::new(settings.page_size);
    let mut status = String::new();
    dispatch_backend_command(
        &cmd_tx,
        BackendCommand::FetchMembers {
            source: settings.source.clone(),
        },
        &mut status,
    );
    if status.is_empty() {
        app.wait_for_members(&ui_rx);
    } else {
        app.handle_ui_event(controller::events::UiEvent::Error(
            controller::events::UiError::from_message(
                controller::events::UiErrorContext::General,
                status,
            ),
        ));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", app.render())?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        if app.handle_line(&line) == LoopControl::Quit {
            break;
        }
        write!(out, "{}", app.render())?;
        out.flush()?;
    }

    let mut status = String::new();
    dispatch_backend_command(&cmd_tx, BackendCommand::Shutdown, &mut status);
    drop(cmd_tx);
    if backend.join().is_err() {
        tracing::warn!("backend worker panicked during shutdown");
    }
    Ok(())
}
