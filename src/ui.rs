use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::digits::SLOT_COUNT;
use crate::oracle::Phase;
use crate::theme::{colors, spinner_frame, styles};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Oracle panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_oracle_panel(frame, app, chunks[0]);
    draw_status_bar(frame, app, chunks[1]);
}

fn draw_oracle_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::TEXT_MUTED))
        .title(Line::from(Span::styled(" pythia ", styles::title())).centered())
        .padding(Padding::horizontal(2));

    let lines = match app.phase() {
        Phase::AwaitingInput => entry_lines(app),
        Phase::Thinking => thinking_lines(app),
        Phase::Answer => answer_lines(app),
        Phase::Error => error_lines(app),
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Center the short content block vertically; the content region keeps
    // the remaining height so wrapped answers are never clipped.
    let height = lines.len() as u16;
    let top = inner.height.saturating_sub(height) / 2;
    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(top), Constraint::Min(height)])
        .split(inner)[1];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, content);
}

fn entry_lines(app: &App) -> Vec<Line<'static>> {
    let input = app.digit_input();

    let mut slots: Vec<Span> = Vec::new();
    for (index, slot) in input.slots().iter().enumerate() {
        let glyph = match slot {
            Some(digit) => digit.to_string(),
            None => "·".to_string(),
        };
        let style = if index == input.focus() {
            styles::slot_focused()
        } else {
            styles::slot()
        };
        slots.push(Span::styled(format!(" {glyph} "), style));
        if index + 1 < SLOT_COUNT {
            slots.push(Span::raw("  "));
        }
    }

    let submit = if input.is_complete() {
        Span::styled("Enter to consult the oracle", styles::hint_active())
    } else {
        Span::styled("Enter three digits", styles::hint())
    };

    vec![
        Line::from(Span::styled(
            "Hold your question in mind and cast three digits",
            Style::default().fg(colors::TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(slots),
        Line::from(""),
        Line::from(submit),
    ]
}

fn thinking_lines(app: &App) -> Vec<Line<'static>> {
    let spinner = spinner_frame(app.tick_count());
    vec![Line::from(vec![
        Span::styled(spinner.to_string(), Style::default().fg(colors::PRIMARY)),
        Span::styled(" The oracle ponders...", styles::hint()),
    ])]
}

fn answer_lines(app: &App) -> Vec<Line<'static>> {
    let answer = app.oracle().answer().unwrap_or_default().to_string();

    let mut lines = vec![Line::from(cast_digits_span(app)), Line::from("")];
    lines.push(Line::from(Span::styled(answer, styles::answer())));
    lines.push(Line::from(""));
    lines.push(result_hints());
    lines
}

fn error_lines(app: &App) -> Vec<Line<'static>> {
    let message = app.oracle().error().unwrap_or_default().to_string();

    vec![
        Line::from(Span::styled(message, styles::error())),
        Line::from(""),
        result_hints(),
    ]
}

fn cast_digits_span(app: &App) -> Span<'static> {
    let text = match app.digit_input().digits() {
        Some(digits) => format!("· {} {} {} ·", digits[0], digits[1], digits[2]),
        None => String::new(),
    };
    Span::styled(text, styles::hint())
}

fn result_hints() -> Line<'static> {
    Line::from(vec![
        Span::styled("Enter", styles::hint_active()),
        Span::styled(" ask again   ", styles::hint()),
        Span::styled("r", styles::hint_active()),
        Span::styled(" new digits", styles::hint()),
    ])
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.status_message() {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors::GOLD),
        )),
        None => Line::from(Span::styled("q quit", styles::hint())),
    };

    let paragraph = Paragraph::new(text).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
