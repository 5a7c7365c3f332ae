use greetdeck::app::{App, Screen};
use greetdeck::cli::{parse_args, CliCommand, RunOptions};
use greetdeck::state::default_labels;
use greetdeck::storage::{default_state_path, JsonFileStore};
use greetdeck::ui;

use color_eyre::{eyre::eyre, eyre::WrapErr, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Route tracing output to a log file in the data directory. The terminal
/// itself belongs to the UI, so nothing may log to stdout or stderr once
/// the alternate screen is up.
fn init_tracing() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let log_path = default_state_path()?.with_file_name("greetdeck.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .wrap_err_with(|| format!("Failed to open log file {:?}", log_path))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("greetdeck=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args()).map_err(|e| eyre!(e))? {
        CliCommand::Version => {
            println!("greetdeck {}", VERSION);
            Ok(())
        }
        CliCommand::RunTui(options) => run_tui(options),
    }
}

fn run_tui(options: RunOptions) -> Result<()> {
    // Logging is best-effort; a read-only data dir should not stop the UI.
    if let Err(e) = init_tracing() {
        eprintln!("warning: logging disabled: {}", e);
    }
    info!(version = VERSION, rows = options.rows, "starting greetdeck");

    let state_path = match options.state_file {
        Some(path) => path,
        None => default_state_path()?,
    };
    let mut store =
        JsonFileStore::open(&state_path).wrap_err("Failed to open saved-state store")?;
    if options.reset {
        store.clear().wrap_err("Failed to reset saved state")?;
        info!("saved state cleared");
    }

    let mut app = App::new(default_labels(options.rows), Box::new(store));

    let runtime = tokio::runtime::Runtime::new()?;

    // Restore the terminal before the default panic report prints.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal even if the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("greetdeck exited");
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    loop {
        // Draw the UI only when needed (dirty flag set by input or ticks)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // Poll keyboard events against a 16ms tick for smooth animation
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            handle_key(app, key);
                        }
                        _ => {
                            // Ignore other events (focus, mouse, etc.)
                        }
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keybinds (always active)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.screen {
        Screen::Onboarding => match key.code {
            KeyCode::Enter => app.continue_to_greetings(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        },
        Screen::Greetings => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::PageUp => app.page_up(),
            KeyCode::PageDown => app.page_down(),
            KeyCode::Home | KeyCode::Char('g') => app.select_first(),
            KeyCode::End | KeyCode::Char('G') => app.select_last(),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        },
    }
}
