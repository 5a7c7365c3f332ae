//! UI rendering for the Greetdeck screens.
//!
//! Two screens, gated by the onboarding flag:
//! - Onboarding: centered welcome text with a single continue control
//! - Greetings: header, windowed list of expandable greeting cards, and
//!   a keybind footer
//!
//! The list is windowed: rendering starts at the app's scroll offset and
//! stops at the bottom of the viewport, so off-screen rows are never
//! materialized.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Screen};
use crate::strings;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and the selected card
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for hints and secondary labels
pub const COLOR_DIM: Color = Color::DarkGray;

/// Filler paragraph color inside expanded cards
pub const COLOR_FILLER: Color = Color::Gray;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Onboarding => render_onboarding(frame, app),
        Screen::Greetings => render_greetings(frame, app),
    }
}

// ============================================================================
// Onboarding Screen
// ============================================================================

fn render_onboarding(frame: &mut Frame, _app: &App) {
    let area = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    // Center the welcome column vertically.
    let top = area.y + area.height.saturating_sub(5) / 2;
    let content = Rect::new(area.x, top, area.width, 5.min(area.height));

    let button = format!("[ {} ]", strings::CONTINUE);
    let lines = vec![
        Line::from(Span::styled(
            strings::WELCOME,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            button,
            Style::default()
                .fg(Color::Black)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "enter continue · q quit",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, content);
}

// ============================================================================
// Greetings Screen
// ============================================================================

fn render_greetings(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(4),    // Greeting cards
            Constraint::Length(1), // Keybind hints
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_cards(frame, chunks[1], app);
    render_hints(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let summary = format!(
        "{} greetings · {} expanded",
        app.labels.len(),
        app.expansion.expanded_count()
    );
    let line = Line::from(vec![
        Span::styled(
            " GREETDECK ",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(summary, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render greeting cards from the scroll offset down, stopping at the
/// bottom edge. The final card may be clipped.
fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let mut y = area.y;
    let mut index = app.scroll;

    while index < app.labels.len() && y < area.bottom() {
        let remaining = area.bottom() - y;
        let height = app.row_height(index).min(remaining);
        let card_area = Rect::new(area.x, y, area.width, height);
        render_card(frame, card_area, app, index);
        y += height;
        index += 1;
    }
}

fn render_card(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let selected = index == app.selected;
    let expanded = app.is_expanded(index);

    let border_style = if selected {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    };

    let toggle = if expanded {
        format!(" ▲ {} ", strings::SHOW_LESS)
    } else {
        format!(" ▼ {} ", strings::SHOW_MORE)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(
            Line::from(Span::styled(toggle, Style::default().fg(COLOR_DIM)))
                .right_aligned(),
        );

    let mut lines = vec![
        Line::from(Span::styled(
            strings::GREETING_PREFIX,
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            app.labels[index].clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    // Animated padding below the label, clamped at zero by the app.
    for _ in 0..app.padding_rows(index) {
        lines.push(Line::from(""));
    }

    if expanded {
        lines.push(Line::from(Span::styled(
            strings::filler_text(),
            Style::default().fg(COLOR_FILLER),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = "↑/↓ select · enter toggle · g/G top/bottom · q quit";
    // Center the hint line by hand; it has no surrounding block.
    let pad = (area.width as usize).saturating_sub(hints.width()) / 2;
    let line = Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(hints, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
