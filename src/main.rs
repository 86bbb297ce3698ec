use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEventKind,
};
use folio::app::{Portfolio, FRAME_DURATION};
use folio::config::Config;
use folio::services::log_dirs;
use folio::services::terminal_modes::{self, Mode, TerminalModes};
use folio::services::time_source::RealTimeSource;
use folio::services::tracing_setup;
use folio::view::theme::ThemeRegistry;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Instant;

/// An animated portfolio that lives in your terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A terminal portfolio with an animated intro", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Theme to start with, overriding the config file
    #[arg(long, value_name = "ID")]
    theme: Option<String>,

    /// Go straight to the terminal
    #[arg(long)]
    skip_intro: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the available themes and exit
    #[arg(long)]
    list_themes: bool,
}

/// Load the config file, if any, and apply command-line overrides.
fn effective_config(args: &Args) -> AnyhowResult<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(theme) = &args.theme {
        if ThemeRegistry::builtin().get(theme).is_none() {
            anyhow::bail!(
                "Unknown theme '{}'. Run with --list-themes to see the available themes.",
                theme
            );
        }
        config.theme = theme.clone();
    }
    if args.skip_intro {
        config.skip_intro = true;
    }

    Ok(config)
}

fn initialize_logging(args: &Args) {
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: could not open log file {}: {}", log_file.display(), e);
    }

    log_dirs::cleanup_stale_logs();
    tracing::info!("Portfolio starting");
}

fn run_event_loop(
    app: &mut Portfolio,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    let mut last_render = Instant::now();
    let mut needs_render = true;

    loop {
        if app.tick() {
            needs_render = true;
        }

        if app.should_quit() {
            break;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| app.render(frame))?;
            last_render = Instant::now();
            needs_render = false;
        }

        let timeout = if needs_render {
            FRAME_DURATION.saturating_sub(last_render.elapsed())
        } else {
            app.next_wakeup()
        };

        if !event_poll(timeout)? {
            // A wakeup without input is a timer or blink deadline
            needs_render = true;
            continue;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press
                    && app.handle_key(key_event.code, key_event.modifiers)
                {
                    needs_render = true;
                }
            }
            CrosstermEvent::Mouse(mouse_event) => {
                if app.handle_mouse(mouse_event) {
                    needs_render = true;
                }
            }
            CrosstermEvent::Resize(w, h) => {
                app.resize(w, h);
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    if args.list_themes {
        println!("{}", ThemeRegistry::builtin().listing());
        return Ok(());
    }

    let config = effective_config(&args)?;

    if args.dump_config {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    initialize_logging(&args);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes =
        TerminalModes::enable().context("Failed to set up the terminal")?;
    if !terminal_modes.is_active(Mode::MouseCapture) {
        tracing::info!("Mouse capture unavailable, the ID card will not react to clicks");
    }

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    let size = terminal.size()?;
    tracing::info!("Terminal size: {}x{}", size.width, size.height);

    let mut app = Portfolio::new(
        &config,
        RealTimeSource::shared(),
        (size.width, size.height),
        rand::random(),
    );

    let result = run_event_loop(&mut app, &mut terminal);

    terminal_modes.undo();
    tracing::info!("Portfolio exiting");

    result
}
