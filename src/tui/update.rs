//! Pure state transitions: (Screen, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each screen defines which actions it accepts. Unhandled actions
//! return the current screen unchanged (no-op).

use crate::progress::PercentSource;
use crate::types::{MenuItem, TorrentRow, MENU_ITEMS};

use super::state::{Action, App, Screen, Transition};

/// Pure state transition function.
///
/// `percents` is only consulted when a torrent list is constructed.
pub fn update(screen: Screen, action: &Action, percents: &mut dyn PercentSource) -> Transition {
    match screen {
        Screen::Home { cursor, selected } => update_home(cursor, selected, action, percents),
        Screen::AddTorrent { .. } => update_add_torrent(screen, action),
        Screen::ListTorrents { cursor, torrents } => update_torrent_list(cursor, torrents, action),
        Screen::ViewTorrent { .. } => update_view_torrent(screen, action, percents),
    }
}

impl App {
    /// Apply one action to the owned screen.
    ///
    /// Returns true when a different kind of screen was entered, which is
    /// when the effects layer updates the window title.
    pub fn dispatch(&mut self, action: &Action, percents: &mut dyn PercentSource) -> bool {
        if self.should_quit {
            return false;
        }

        let screen = std::mem::take(&mut self.screen);
        let before = std::mem::discriminant(&screen);

        let next = match update(screen, action, percents) {
            Transition::Screen(next) => next,
            Transition::Quit(last) => {
                self.should_quit = true;
                last
            }
        };

        let entered = std::mem::discriminant(&next) != before;
        self.screen = next;
        entered
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Home: move through the menu, Enter opens the highlighted item.
fn update_home(
    cursor: usize,
    selected: Option<MenuItem>,
    action: &Action,
    percents: &mut dyn PercentSource,
) -> Transition {
    match action {
        Action::MoveUp => Transition::Screen(Screen::Home {
            cursor: cursor.saturating_sub(1),
            selected,
        }),
        Action::MoveDown => Transition::Screen(Screen::Home {
            cursor: step_down(cursor, MENU_ITEMS.len()),
            selected,
        }),
        Action::Select => match MENU_ITEMS.get(cursor) {
            Some(MenuItem::ListTorrents) => Transition::Screen(Screen::list_torrents(percents)),
            Some(MenuItem::AddTorrent) => Transition::Screen(Screen::add_torrent()),
            Some(MenuItem::Exit) => Transition::Quit(Screen::Home {
                cursor,
                selected: Some(MenuItem::Exit),
            }),
            None => Transition::Screen(Screen::Home { cursor, selected }),
        },
        _ => Transition::Screen(Screen::Home { cursor, selected }),
    }
}

/// AddTorrent: only Back is meaningful.
fn update_add_torrent(screen: Screen, action: &Action) -> Transition {
    match action {
        Action::Back => Transition::Screen(Screen::home()),
        _ => Transition::Screen(screen),
    }
}

/// ListTorrents: cursor movement, drill into detail, back to Home.
fn update_torrent_list(cursor: usize, torrents: Vec<TorrentRow>, action: &Action) -> Transition {
    match action {
        Action::MoveUp => Transition::Screen(Screen::ListTorrents {
            cursor: cursor.saturating_sub(1),
            torrents,
        }),
        Action::MoveDown => Transition::Screen(Screen::ListTorrents {
            cursor: step_down(cursor, torrents.len()),
            torrents,
        }),
        Action::Select => match torrents.get(cursor) {
            Some(row) => Transition::Screen(Screen::view_torrent(row)),
            None => Transition::Screen(Screen::ListTorrents { cursor, torrents }),
        },
        Action::Back => Transition::Screen(Screen::home()),
        _ => Transition::Screen(Screen::ListTorrents { cursor, torrents }),
    }
}

/// ViewTorrent: Back returns to a freshly generated list.
fn update_view_torrent(
    screen: Screen,
    action: &Action,
    percents: &mut dyn PercentSource,
) -> Transition {
    match action {
        Action::Back => Transition::Screen(Screen::list_torrents(percents)),
        _ => Transition::Screen(screen),
    }
}

/// Advance a cursor by one, clamped to the last index of `len` items.
fn step_down(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (cursor + 1).min(len - 1) }
}

// ============================================================================
// TESTS
// ============================================================================
