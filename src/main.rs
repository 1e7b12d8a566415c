mod app;
mod catalog;
mod config;
mod deferred;
mod error;
mod events;
mod log;
mod picker;
mod tui;
mod wizard;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use app::{App, PickerSettings};
use catalog::Catalog;
use config::Config;
use deferred::AdvanceTicket;
use error::RitesError;
use events::EventHandler;
use wizard::WizardSelection;

const USAGE: &str = "\
Usage: rites [OPTIONS]

Options:
  -c, --config <PATH>    Config file (default: ~/.config/rites/config.toml)
  -d, --delay <MS>       Delay before advancing after a selection
  -s, --selected <ID>    Start with this religion already selected
  -h, --help             Print this help

Prints the final selection as JSON when the wizard completes.";

/// Command line arguments
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config_path: Option<PathBuf>,
    delay_ms: Option<u64>,
    selected: Option<String>,
}

/// Parse arguments (without the program name). Returns `None` for `--help`.
fn parse_args(args: &[String]) -> error::Result<Option<CliArgs>> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| RitesError::from("--config requires a path argument"))?;
                cli.config_path = Some(PathBuf::from(path));
            }
            "--delay" | "-d" => {
                let raw = iter
                    .next()
                    .ok_or_else(|| RitesError::from("--delay requires a value in milliseconds"))?;
                cli.delay_ms = Some(config::parse_delay(raw)?);
            }
            "--selected" | "-s" => {
                let id = iter
                    .next()
                    .ok_or_else(|| RitesError::from("--selected requires a religion id"))?;
                cli.selected = Some(id.clone());
            }
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
            }
        }
    }

    Ok(Some(cli))
}

/// Resolve configuration into the catalog and picker settings.
fn load_settings(cli: &CliArgs) -> error::Result<(Arc<Catalog>, PickerSettings)> {
    let config = match &cli.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    }
    .with_overrides(cli.delay_ms);

    let settings = PickerSettings {
        advance_delay: config.advance_delay()?,
        reselect_advances: config.reselect_advances,
    };
    let catalog = config.catalog()?;

    Ok((Arc::new(catalog), settings))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(cli) = parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let (catalog, settings) = load_settings(&cli)?;
    log::log(&format!(
        "{} religions ({} featured), advance delay {}ms",
        catalog.religions().len(),
        catalog.featured().len(),
        settings.advance_delay.as_millis()
    ));

    if let Some(id) = &cli.selected {
        if catalog.find(id).is_none() {
            log::log(&format!("Preselected religion '{}' has no record", id));
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (advance_tx, advance_rx) = mpsc::unbounded_channel();
    let selection = WizardSelection {
        religion: cli.selected,
    };
    let mut app = App::new(catalog, settings, selection, advance_tx);

    // Run the app
    let result = run_app(&mut terminal, &mut app, advance_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if app.wizard.is_finished() {
        let output = serde_json::to_string(app.wizard.selection())?;
        log::log(&format!("Wizard finished: {}", output));
        println!("{}", output);
    } else {
        log::log("Wizard exited before finishing");
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut advance_rx: mpsc::UnboundedReceiver<AdvanceTicket>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            // Terminal events (keyboard, mouse, resize)
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.apply(action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            // Deferred advance after a selection
            Some(ticket) = advance_rx.recv() => {
                app.on_advance(ticket);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
