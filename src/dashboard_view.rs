use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::{CLOCK_REGION, COUNTER_REGION, LOG_REGION, SPINNER_FRAMES};

pub fn draw_dashboard(f: &mut Frame, app: &App) {
    let size = f.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(size);

    let spin_char = if app.paused {
        "▮▮"
    } else {
        SPINNER_FRAMES[app.spinner_idx % SPINNER_FRAMES.len()]
    };
    let clock_text = app.sim.page().text(CLOCK_REGION).unwrap_or("--");
    let status_line = Line::from(vec![
        Span::styled(spin_char, Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled(clock_text, Style::default().fg(Color::White)),
        Span::raw(if app.paused { "  (paused)" } else { "" }),
    ]);
    let status_para = Paragraph::new(status_line)
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .alignment(Alignment::Left);
    f.render_widget(status_para, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)].as_ref())
        .split(rows[1]);

    let counter_text = app.sim.page().text(COUNTER_REGION).unwrap_or("--");
    let counter_para = Paragraph::new(Line::from(Span::styled(
        counter_text,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .title(" Records Captured ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .alignment(Alignment::Center);
    f.render_widget(counter_para, body[0]);

    let entry_count = app
        .sim
        .page()
        .lines(LOG_REGION)
        .map(|lines| lines.len())
        .unwrap_or(0);
    let logs_block = Block::default()
        .title(format!(" Logs ({}) ", entry_count))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner_logs_area = logs_block.inner(body[1]);
    f.render_widget(logs_block, body[1]);

    let mut log_lines = Vec::new();
    if let Some(entries) = app.sim.page().lines(LOG_REGION) {
        for entry in entries {
            log_lines.push(Line::from(Span::raw(entry.as_str())));
        }
    }
    let logs_para = Paragraph::new(log_lines)
        .wrap(Wrap { trim: true })
        .scroll((app.logs_scroll, 0));
    f.render_widget(logs_para, inner_logs_area);

    let hints = Paragraph::new(Line::from(Span::styled(
        " q quit · space pause · ↑/↓ scroll",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(hints, rows[2]);
}
