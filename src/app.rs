//! Runtime for the extman TUI: terminal lifecycle, the awaited initial load,
//! and the event loop.

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    select,
    sync::mpsc,
    time::{Duration, interval},
};

use crate::args::Args;
use crate::events::handle_event;
use crate::logic::{clamp_selection, visible_items};
use crate::state::{AppState, Filter, ThemeMode};
use crate::store;
use crate::ui::ui;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// What: Run the extman TUI end-to-end: resolve the theme, load the
/// collection, drive the event loop, flush persistence, and restore the
/// terminal on exit.
///
/// Inputs:
/// - `args`: Parsed command-line flags (seed locator, theme override, fresh
///   re-seed, dry run)
///
/// Output:
/// - `Ok(())` on clean exit; `Err` only for terminal setup/teardown or draw
///   faults. Data-layer failures degrade internally and are logged.
///
/// Details:
/// - The initial load is awaited before the first render; nothing else runs
///   until it completes, so no coordination is needed (no timeout, no retry).
/// - Each loop iteration handles one event as an uninterrupted mutate,
///   persist, redraw sequence.
/// - `EXTMAN_TEST_HEADLESS=1` skips terminal takeover for smoke testing.
pub async fn run(args: Args) -> Result<()> {
    let headless = std::env::var("EXTMAN_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState {
        dry_run: args.dry_run,
        ..Default::default()
    };
    if let Some(seed) = args.seed {
        app.seed = seed;
    }
    if let Some(f) = args.filter.as_deref().and_then(Filter::from_config_key) {
        app.filter = f;
    }

    let saved = args
        .theme
        .as_deref()
        .and_then(ThemeMode::from_config_key)
        .or_else(crate::theme::load_saved_mode);
    app.theme_mode =
        crate::theme::resolve_theme_mode(saved, crate::theme::detect_dark_preference());
    if !app.dry_run {
        crate::theme::save_mode(app.theme_mode);
    }

    tracing::info!(
        items = %app.items_path.display(),
        seed = %app.seed,
        theme = app.theme_mode.as_config_key(),
        "resolved startup configuration"
    );

    // First render waits for the load chain; a slow seed fetch simply delays
    // startup.
    app.items = store::load_initial(&app.items_path, &app.seed, args.fresh).await;
    if !app.items.is_empty() {
        app.list_state.select(Some(0));
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    if !headless {
        std::thread::spawn(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "terminal event read failed");
                        break;
                    }
                }
            }
        });
    }

    let mut tick = interval(Duration::from_millis(250));
    loop {
        let len = visible_items(&app.items, app.filter, &app.query).len();
        clamp_selection(&mut app, len);
        if let Some(t) = terminal.as_mut() {
            t.draw(|f| ui(f, &mut app))?;
        }
        select! {
            maybe_ev = event_rx.recv() => {
                let Some(ev) = maybe_ev else { break };
                let exit = handle_event(ev, &mut app);
                store::maybe_flush_items(&mut app);
                if exit {
                    break;
                }
            }
            _ = tick.tick() => {
                if headless {
                    break;
                }
            }
        }
    }

    store::maybe_flush_items(&mut app);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
