//! Domain types for startorrent.
//!
//! All torrent data is synthetic: a fixed catalog of sample names, a fixed
//! download directory, and percentages drawn from a [`PercentSource`].
//!
//! [`PercentSource`]: crate::progress::PercentSource

use std::fmt;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Sample torrents shown on the list screen, in display order.
pub const SAMPLE_TORRENTS: [&str; 5] = [
    "Avengers Endgame",
    "Linux Kernel",
    "Star Wars",
    "Star Trek",
    "Forza Horizon 5",
];

/// Download directory reported for every torrent.
pub const DOWNLOAD_PATH: &str = "/home/stardust/Downloads";

/// Magnet link shown on the add-torrent screen. Never parsed.
pub const PLACEHOLDER_MAGNET: &str = "starmagnet 🧲";

/// Upper bound of a download percentage.
pub const MAX_PERCENT: u8 = 100;

// ============================================================================
// MENU
// ============================================================================

/// Entries of the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    ListTorrents,
    AddTorrent,
    Exit,
}

/// Home menu entries in display order.
pub const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem::ListTorrents,
    MenuItem::AddTorrent,
    MenuItem::Exit,
];

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::ListTorrents => "List Torrents",
            MenuItem::AddTorrent => "Add Torrent",
            MenuItem::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// TORRENTS
// ============================================================================

/// Download state derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Downloading,
    Downloaded,
}

impl DownloadStatus {
    /// `Downloaded` only at exactly 100%.
    pub fn from_percent(percent: u8) -> Self {
        if percent == MAX_PERCENT {
            DownloadStatus::Downloaded
        } else {
            DownloadStatus::Downloading
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DownloadStatus::Downloading => "Downloading",
            DownloadStatus::Downloaded => "Downloaded",
        }
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the torrent list: a sample name and its synthetic progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentRow {
    pub name: String,
    /// Always within `0..=MAX_PERCENT`.
    pub percent: u8,
}

impl TorrentRow {
    pub fn status(&self) -> DownloadStatus {
        DownloadStatus::from_percent(self.percent)
    }
}

/// By-value copy of a list row backing the detail screen.
///
/// Holds no reference into the list it came from, so the list can be
/// dropped or regenerated without affecting an open detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentSnapshot {
    pub name: String,
    pub percent: u8,
    pub download_path: String,
}

impl TorrentSnapshot {
    /// Copy a list row, attaching the fixed download path.
    pub fn of(row: &TorrentRow) -> Self {
        TorrentSnapshot {
            name: row.name.clone(),
            percent: row.percent,
            download_path: DOWNLOAD_PATH.to_string(),
        }
    }

    pub fn status(&self) -> DownloadStatus {
        DownloadStatus::from_percent(self.percent)
    }
}

// ============================================================================
// TESTS
// ============================================================================
