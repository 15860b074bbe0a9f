//! startorrent: browse a simulated torrent client from the terminal.

pub mod progress;
pub mod tui;
pub mod types;
