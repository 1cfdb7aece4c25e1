use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::StudyState;

pub fn draw(f: &mut Frame, state: &StudyState) {
    let size = f.area();

    // Main layout: header + card area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    draw_header(f, outer[0], state);
    draw_card(f, outer[1], state);
    draw_status_bar(f, outer[2]);
}

fn draw_header(f: &mut Frame, area: Rect, state: &StudyState) {
    let header = Paragraph::new(format!(
        " Study: {}  —  Card {} of {}",
        state.set.name,
        state.current + 1,
        state.card_count()
    ))
    .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn draw_card(f: &mut Frame, area: Rect, state: &StudyState) {
    let card = &state.set.cards[state.current];

    let (title, text, border_color) = if state.flipped {
        (" ANSWER ", card.answer.as_str(), Color::Green)
    } else {
        (" QUESTION ", card.question.as_str(), Color::Cyan)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    // Rough vertical centering inside the card
    let padding = (area.height.saturating_sub(4) / 2) as usize;
    let mut lines: Vec<Line> = std::iter::repeat_with(|| Line::from(""))
        .take(padding)
        .collect();
    lines.push(Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect) {
    let hints = " Space/Enter: flip  n/p: next/prev  q: quit ";
    let status = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
