//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Pink to yellow gradient: progress bar fill
//! - Gray: unfilled part of a progress bar
//! - Green: finished download
//! - Yellow: download in progress
//! - Cyan: cursor row, selected menu item
//! - Dark gray: keybinding hints

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Finished download (green).
pub const STYLE_DOWNLOADED: Style = Style::new().fg(Color::Green);

/// Download in progress (yellow).
pub const STYLE_DOWNLOADING: Style = Style::new().fg(Color::Yellow);

/// Selected menu item on the home screen (cyan).
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Screen heading.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Row under the cursor.
pub const STYLE_CURSOR: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Keybinding hints in the footer.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// PROGRESS BAR
// ============================================================================

/// First gradient stop, `#FF7CCB`.
pub const GRADIENT_START: (u8, u8, u8) = (0xFF, 0x7C, 0xCB);

/// Last gradient stop, `#FDFF8C`.
pub const GRADIENT_END: (u8, u8, u8) = (0xFD, 0xFF, 0x8C);

/// Unfilled cells, `#606060`.
pub const STYLE_BAR_EMPTY: Style = Style::new().fg(Color::Rgb(0x60, 0x60, 0x60));

/// Color at position `t` (0.0 to 1.0) along the fill gradient.
pub fn gradient_color(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 {
        let (a, b) = (f32::from(a), f32::from(b));
        (a + (b - a) * t).round() as u8
    };
    Color::Rgb(
        mix(GRADIENT_START.0, GRADIENT_END.0),
        mix(GRADIENT_START.1, GRADIENT_END.1),
        mix(GRADIENT_START.2, GRADIENT_END.2),
    )
}

// ============================================================================
// TESTS
// ============================================================================
