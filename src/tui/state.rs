//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire navigation state space. Each screen
//! variant carries the state it renders from, and every variant change
//! constructs that state fresh. The transition function and the
//! rendering layer both program against these types.

use crate::progress::{draw_percentages, PercentSource};
use crate::types::{MenuItem, TorrentRow, TorrentSnapshot, PLACEHOLDER_MAGNET, SAMPLE_TORRENTS};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model: the one active screen.
#[derive(Debug, PartialEq)]
pub struct App {
    /// Current screen.
    pub screen: Screen,

    /// Set once a quit transition has been applied. The event loop draws
    /// one last frame and stops reading input.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
///
/// Each variant is a state in the navigation state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Main menu.
    Home {
        /// Index into [`MENU_ITEMS`](crate::types::MENU_ITEMS).
        cursor: usize,
        /// Item last confirmed with Enter. Display only.
        selected: Option<MenuItem>,
    },

    /// Placeholder for adding a torrent.
    AddTorrent {
        magnet_link: String,
    },

    /// The sample torrents with their synthetic progress.
    ListTorrents {
        cursor: usize,
        torrents: Vec<TorrentRow>,
    },

    /// Detail view of one torrent, copied from the list.
    ViewTorrent {
        snapshot: TorrentSnapshot,
    },
}

/// Default screen is Home (used as placeholder during transitions).
impl Default for Screen {
    fn default() -> Self {
        Screen::home()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// up / k
    MoveUp,
    /// down / j
    MoveDown,
    /// enter / right
    Select,
    /// m / left
    Back,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application after rendering this final screen.
    Quit(Screen),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on a fresh Home screen.
    pub fn new() -> Self {
        App {
            screen: Screen::home(),
            should_quit: false,
        }
    }

    /// Message to print once the terminal is restored, if the user left
    /// through the Exit menu item.
    pub fn farewell(&self) -> Option<&'static str> {
        self.screen.farewell()
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

impl Screen {
    /// Home with cursor on the first item and nothing selected.
    pub fn home() -> Self {
        Screen::Home {
            cursor: 0,
            selected: None,
        }
    }

    pub fn add_torrent() -> Self {
        Screen::AddTorrent {
            magnet_link: PLACEHOLDER_MAGNET.to_string(),
        }
    }

    /// Torrent list with one freshly drawn percentage per sample torrent.
    pub fn list_torrents(percents: &mut dyn PercentSource) -> Self {
        let drawn = draw_percentages(percents, SAMPLE_TORRENTS.len());
        let torrents = SAMPLE_TORRENTS
            .iter()
            .zip(drawn)
            .map(|(name, percent)| TorrentRow {
                name: (*name).to_string(),
                percent,
            })
            .collect();
        Screen::ListTorrents {
            cursor: 0,
            torrents,
        }
    }

    pub fn view_torrent(row: &TorrentRow) -> Self {
        Screen::ViewTorrent {
            snapshot: TorrentSnapshot::of(row),
        }
    }

    /// Terminal window title set when this screen is entered.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home { .. } => "Startorrent",
            Screen::AddTorrent { .. } => "Add Torrent",
            Screen::ListTorrents { .. } => "List Torrents",
            Screen::ViewTorrent { .. } => "View Torrent",
        }
    }

    /// "Bye!" on a Home screen whose selected item is Exit.
    pub fn farewell(&self) -> Option<&'static str> {
        match self {
            Screen::Home {
                selected: Some(MenuItem::Exit),
                ..
            } => Some("Bye!"),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
