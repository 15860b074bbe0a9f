//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! The loop is strictly sequential: read one key, apply one transition,
//! redraw, repeat. Nothing runs in the background.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::progress::PercentSource;

use super::state::{Action, App};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action, including any key
/// held with Ctrl or Alt. Shift is tolerated on characters only, since some
/// terminals report it alongside the character it produced.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    let plain = key.modifiers == KeyModifiers::NONE
        || (key.modifiers == KeyModifiers::SHIFT && matches!(key.code, KeyCode::Char(_)));
    if !plain {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter | KeyCode::Right => Some(Action::Select),
        KeyCode::Left | KeyCode::Char('m') => Some(Action::Back),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
///
/// Once raw mode is on, a later failure restores the terminal before the
/// error is returned.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let terminal = io::stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    undo_on_error(terminal, || {
        let _ = restore_terminal();
    })
}

/// Call `undo` if `result` is an error, then hand the result back.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

fn set_title(title: &str) -> io::Result<()> {
    io::stdout().execute(SetTitle(title))?;
    Ok(())
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user exits.
///
/// The terminal is restored whether or not the loop fails. Returns the
/// final App so the caller can print its farewell.
pub fn run(percents: &mut dyn PercentSource) -> io::Result<App> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, percents);
    let restored = restore_terminal();

    let app = result?;
    restored?;
    Ok(app)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    percents: &mut dyn PercentSource,
) -> io::Result<App> {
    let mut app = App::new();
    set_title(app.screen.title())?;
    tracing::info!(screen = app.screen.title(), "entered screen");

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue, // releases, repeats, resize, mouse: just redraw
        };

        if handle_key(&mut app, key, percents) {
            set_title(app.screen.title())?;
            tracing::info!(screen = app.screen.title(), "entered screen");
        }
    }

    tracing::info!(farewell = app.farewell().is_some(), "quitting");
    Ok(app)
}

/// Map and apply one key press. Returns true when a new screen was entered.
fn handle_key(app: &mut App, key: KeyEvent, percents: &mut dyn PercentSource) -> bool {
    match map_key(key) {
        Some(action) => app.dispatch(&action, percents),
        None => {
            tracing::trace!(code = ?key.code, "ignored key");
            false
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
