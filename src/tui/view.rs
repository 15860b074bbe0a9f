//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated function producing its lines of text.
//! The main `render()` dispatches on the current Screen variant and
//! paints the result; that call is the only effect in this module.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::types::{DownloadStatus, MenuItem, TorrentRow, TorrentSnapshot, MENU_ITEMS};

use super::state::{App, Screen};
use super::theme;

/// Number of cells in a progress bar, excluding the percentage label.
pub const BAR_WIDTH: usize = 40;

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let paragraph = Paragraph::new(screen_lines(&app.screen));
    frame.render_widget(paragraph, frame.area());
}

/// Styled lines for a screen, top to bottom.
pub fn screen_lines(screen: &Screen) -> Vec<Line<'static>> {
    match screen {
        Screen::Home { cursor, selected } => home_lines(*cursor, *selected, screen.farewell()),
        Screen::AddTorrent { magnet_link } => add_torrent_lines(magnet_link),
        Screen::ListTorrents { cursor, torrents } => torrent_list_lines(*cursor, torrents),
        Screen::ViewTorrent { snapshot } => torrent_detail_lines(snapshot),
    }
}

/// Unstyled text of a screen, one `\n` between lines.
pub fn screen_text(screen: &Screen) -> String {
    screen_lines(screen)
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// SCREEN: HOME
// ============================================================================

fn home_lines(
    cursor: usize,
    selected: Option<MenuItem>,
    farewell: Option<&str>,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "******** Startorrent welcomes you! **********",
            theme::STYLE_TITLE,
        )),
        Line::from(""),
    ];

    for (i, item) in MENU_ITEMS.iter().enumerate() {
        if i == cursor {
            lines.push(Line::from(format!("> {}", item)).style(theme::STYLE_CURSOR));
        } else {
            lines.push(Line::from(format!("  {}", item)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Selected: "),
        Span::styled(
            selected.map(MenuItem::label).unwrap_or_default(),
            theme::STYLE_INTERACTIVE,
        ),
    ]));

    if let Some(message) = farewell {
        lines.push(Line::from(""));
        lines.push(Line::from(message.to_string()));
    }

    lines
}

// ============================================================================
// SCREEN: ADD TORRENT
// ============================================================================

fn add_torrent_lines(magnet_link: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled("Add Torrent", theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(format!("Magnet Link: {}", magnet_link)),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Press m or < to go back to main menu",
            theme::STYLE_HELP,
        )),
    ]
}

// ============================================================================
// SCREEN: LIST TORRENTS
// ============================================================================

fn torrent_list_lines(cursor: usize, torrents: &[TorrentRow]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("List Torrents", theme::STYLE_TITLE)),
        Line::from(""),
    ];

    for (i, torrent) in torrents.iter().enumerate() {
        let marker = if i == cursor { ">" } else { " " };
        let heading = format!("{} {}. {} ({}%)", marker, i + 1, torrent.name, torrent.percent);
        lines.push(if i == cursor {
            Line::from(heading).style(theme::STYLE_CURSOR)
        } else {
            Line::from(heading)
        });

        let mut progress = vec![Span::raw("     Progress: ")];
        progress.extend(progress_bar(torrent.percent));
        lines.push(Line::from(progress));

        lines.push(Line::from(vec![
            Span::raw("     Status: "),
            status_span(torrent.status()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press m or < to go back to main menu",
        theme::STYLE_HELP,
    )));
    lines
}

// ============================================================================
// SCREEN: VIEW TORRENT
// ============================================================================

fn torrent_detail_lines(snapshot: &TorrentSnapshot) -> Vec<Line<'static>> {
    let mut progress = vec![Span::raw("Progress: ")];
    progress.extend(progress_bar(snapshot.percent));

    vec![
        Line::from(""),
        Line::from(Span::styled("View Torrent", theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(format!("Torrent Name: {}", snapshot.name)),
        Line::from(format!("Download Path: {}", snapshot.download_path)),
        Line::from(format!("Download Percent: {}%", snapshot.percent)),
        Line::from(vec![Span::raw("Status: "), status_span(snapshot.status())]),
        Line::from(progress),
        Line::from(Span::styled(
            "Press m or < to go back to list torrents",
            theme::STYLE_HELP,
        )),
    ]
}

fn status_span(status: DownloadStatus) -> Span<'static> {
    let style = match status {
        DownloadStatus::Downloaded => theme::STYLE_DOWNLOADED,
        DownloadStatus::Downloading => theme::STYLE_DOWNLOADING,
    };
    Span::styled(status.label(), style)
}

// ============================================================================
// PROGRESS BAR
// ============================================================================

/// Cells of a `width`-cell bar that are filled at `percent`, rounded.
pub fn filled_cells(percent: u8, width: usize) -> usize {
    let percent = usize::from(percent.min(100));
    (width * percent + 50) / 100
}

/// A [`BAR_WIDTH`] bar whose fill carries the gradient across the filled
/// part only, followed by the percentage.
pub fn progress_bar(percent: u8) -> Vec<Span<'static>> {
    let filled = filled_cells(percent, BAR_WIDTH);
    let mut spans = Vec::with_capacity(filled + 2);

    for i in 0..filled {
        let t = if filled > 1 {
            i as f32 / (filled - 1) as f32
        } else {
            0.0
        };
        spans.push(Span::styled(BAR_FILLED, Style::new().fg(theme::gradient_color(t))));
    }

    let empty = BAR_WIDTH - filled;
    if empty > 0 {
        spans.push(Span::styled(BAR_EMPTY.repeat(empty), theme::STYLE_BAR_EMPTY));
    }

    spans.push(Span::raw(format!(" {:>3}%", percent.min(100))));
    spans
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ScriptedPercents;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 30);
        Terminal::new(backend).unwrap()
    }

    fn rendered(screen: Screen) -> String {
        let mut terminal = make_terminal();
        let app = App {
            screen,
            should_quit: false,
        };
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn sample_list(cursor: usize) -> Screen {
        let mut percents = ScriptedPercents::new(vec![0, 25, 100, 50, 75]);
        match Screen::list_torrents(&mut percents) {
            Screen::ListTorrents { torrents, .. } => Screen::ListTorrents { cursor, torrents },
            other => panic!("Expected ListTorrents, got {:?}", other),
        }
    }

    fn star_wars(percent: u8) -> Screen {
        Screen::view_torrent(&TorrentRow {
            name: "Star Wars".to_string(),
            percent,
        })
    }

    // -- Text --

    #[test]
    fn home_text_marks_cursor_row() {
        let screen = Screen::Home {
            cursor: 1,
            selected: None,
        };
        let text = screen_text(&screen);
        let expected = [
            "",
            "******** Startorrent welcomes you! **********",
            "",
            "  List Torrents",
            "> Add Torrent",
            "  Exit",
            "",
            "Selected: ",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn home_after_exit_says_bye() {
        let screen = Screen::Home {
            cursor: 2,
            selected: Some(MenuItem::Exit),
        };
        let text = screen_text(&screen);
        assert!(text.contains("> Exit"));
        assert!(text.contains("Selected: Exit"));
        assert!(text.ends_with("\n\nBye!"));
    }

    #[test]
    fn selected_item_is_cyan_and_hints_are_dark_gray() {
        let screen = Screen::Home {
            cursor: 2,
            selected: Some(MenuItem::Exit),
        };
        let lines = screen_lines(&screen);
        let selected = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content == "Exit" && span.style == theme::STYLE_INTERACTIVE);
        assert!(selected.is_some(), "selected item should be cyan");
        assert_eq!(theme::STYLE_INTERACTIVE.fg, Some(Color::Cyan));

        let hint = screen_lines(&Screen::add_torrent())
            .into_iter()
            .last()
            .and_then(|line| line.spans.into_iter().next());
        match hint {
            Some(span) => {
                assert!(span.content.starts_with("Press m"));
                assert_eq!(span.style.fg, Some(Color::DarkGray));
            }
            None => panic!("Expected a hint line"),
        }
    }

    #[test]
    fn add_torrent_text() {
        let text = screen_text(&Screen::add_torrent());
        let expected = [
            "",
            "Add Torrent",
            "",
            "Magnet Link: starmagnet 🧲",
            "",
            "",
            "Press m or < to go back to main menu",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn list_text_shows_each_torrent_with_status() {
        let text = screen_text(&sample_list(2));
        assert!(text.contains("  1. Avengers Endgame (0%)"));
        assert!(text.contains("> 3. Star Wars (100%)"));
        assert!(text.contains("  5. Forza Horizon 5 (75%)"));
        assert_eq!(text.matches("     Status: Downloaded").count(), 1);
        assert_eq!(text.matches("     Status: Downloading").count(), 4);
        assert_eq!(text.matches("     Progress: ").count(), 5);
        assert!(text.ends_with("Press m or < to go back to main menu"));
    }

    #[test]
    fn detail_text() {
        let text = screen_text(&star_wars(50));
        let bar = format!("{}{}  50%", "█".repeat(20), "░".repeat(20));
        let expected = [
            "".to_string(),
            "View Torrent".to_string(),
            "".to_string(),
            "Torrent Name: Star Wars".to_string(),
            "Download Path: /home/stardust/Downloads".to_string(),
            "Download Percent: 50%".to_string(),
            "Status: Downloading".to_string(),
            format!("Progress: {}", bar),
            "Press m or < to go back to list torrents".to_string(),
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn detail_at_full_is_downloaded() {
        let text = screen_text(&star_wars(100));
        assert!(text.contains("Status: Downloaded"));
        assert!(text.contains(&format!("{} 100%", "█".repeat(BAR_WIDTH))));
    }

    // -- Progress bar --

    #[test]
    fn filled_cells_scale_with_percent() {
        assert_eq!(filled_cells(0, 40), 0);
        assert_eq!(filled_cells(50, 40), 20);
        assert_eq!(filled_cells(100, 40), 40);
        assert_eq!(filled_cells(1, 40), 0);
        assert_eq!(filled_cells(2, 40), 1);
        assert_eq!(filled_cells(99, 40), 40);
    }

    #[test]
    fn empty_bar_has_no_fill() {
        let spans = progress_bar(0);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "░".repeat(BAR_WIDTH));
        assert_eq!(spans[0].style, theme::STYLE_BAR_EMPTY);
        assert_eq!(spans[1].content, "   0%");
    }

    #[test]
    fn full_bar_spans_the_gradient() {
        let spans = progress_bar(100);
        assert_eq!(spans.len(), BAR_WIDTH + 1);
        assert_eq!(spans[0].style.fg, Some(Color::Rgb(0xFF, 0x7C, 0xCB)));
        assert_eq!(spans[BAR_WIDTH - 1].style.fg, Some(Color::Rgb(0xFD, 0xFF, 0x8C)));
        assert_eq!(spans[BAR_WIDTH].content, " 100%");
    }

    #[test]
    fn partial_bar_scales_gradient_to_fill() {
        let spans = progress_bar(25);
        let filled = filled_cells(25, BAR_WIDTH);
        assert_eq!(spans.len(), filled + 2);
        assert_eq!(spans[filled - 1].style.fg, Some(Color::Rgb(0xFD, 0xFF, 0x8C)));
        assert_eq!(spans[filled].content.chars().count(), BAR_WIDTH - filled);
    }

    // -- Terminal rendering --

    #[test]
    fn all_screens_render_without_panic() {
        let mut terminal = make_terminal();
        let screens = vec![
            Screen::home(),
            Screen::add_torrent(),
            sample_list(0),
            star_wars(42),
        ];
        for screen in screens {
            let app = App {
                screen,
                should_quit: false,
            };
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every screen should render without panic");
        }
    }

    #[test]
    fn home_screen_renders_menu() {
        let content = rendered(Screen::home());
        assert!(content.contains("Startorrent welcomes you!"));
        assert!(content.contains("> List Torrents"));
        assert!(content.contains("Exit"));
    }

    #[test]
    fn list_screen_renders_percentages() {
        let content = rendered(sample_list(0));
        assert!(content.contains("> 1. Avengers Endgame (0%)"));
        assert!(content.contains("Star Trek (50%)"));
        assert!(content.contains("Downloaded"));
    }

    #[test]
    fn detail_screen_renders_snapshot() {
        let content = rendered(star_wars(42));
        assert!(content.contains("Torrent Name: Star Wars"));
        assert!(content.contains("/home/stardust/Downloads"));
        assert!(content.contains("42%"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let app = App {
            screen: sample_list(4),
            should_quit: false,
        };
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
