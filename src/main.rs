use std::io::stdout;
use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use scroll_picker::app::App;
use scroll_picker::config::Config;
use scroll_picker::date::PickerUi;
use scroll_picker::events::EventHandler;
use scroll_picker::{log, tui};

const USAGE: &str = "\
Usage: scroll-picker [OPTIONS]

Options:
  --picker-ui <dialog|popover>  How the date input opens its picker
  --settle-ms <MS>              Quiet period before a scrolled picker settles
  -h, --help                    Print this help";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut picker_ui: Option<PickerUi> = None;
    let mut settle_ms: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--picker-ui" => {
                match args.get(i + 1).map(|v| v.parse::<PickerUi>()) {
                    Some(Ok(ui)) => picker_ui = Some(ui),
                    Some(Err(e)) => eprintln!("Warning: {}", e),
                    None => eprintln!("Warning: --picker-ui requires a value"),
                }
                i += 2;
                continue;
            }
            "--settle-ms" => {
                match args.get(i + 1).map(|v| v.parse::<u64>()) {
                    Some(Ok(ms)) => settle_ms = Some(ms),
                    Some(Err(e)) => eprintln!("Warning: invalid --settle-ms: {}", e),
                    None => eprintln!("Warning: --settle-ms requires a value"),
                }
                i += 2;
                continue;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(());
            }
            other => {
                eprintln!("Warning: unknown argument '{}'", other);
            }
        }
        i += 1;
    }

    // Config precedence: CLI > env var > config file > defaults
    let config = Config::load().with_overrides(picker_ui, settle_ms);
    config.validate()?;
    log::log(&format!("Config: {:?}", config));

    let mut app = App::new(&config, Local::now().date_naive())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Render and pick up the mouse regions of this frame
        let mut regions = None;
        terminal.draw(|frame| regions = Some(tui::ui::render(frame, app)))?;
        if let Some(regions) = regions {
            app.interactions = regions;
        }

        let wake = app.next_wakeup(Instant::now());

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        if !app.dispatch(action, Instant::now()) {
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Terminal event error: {}", e));
                        return Err(e.into());
                    }
                    None => break,
                }
            }
            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(wake)) => {}
        }

        app.tick(Instant::now());
    }

    Ok(())
}
