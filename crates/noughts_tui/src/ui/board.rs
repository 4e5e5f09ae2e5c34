//! Board rendering for the game screen.

use noughts_core::{Cell, Coord, Mark, Phase, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Renders the 3x3 board, highlighting the cursor and any winning line.
pub fn render_board(f: &mut Frame, area: Rect, session: &Session, cursor: Coord) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], session, cursor, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], session, cursor, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], session, cursor, 6);
}

fn render_row(f: &mut Frame, area: Rect, session: &Session, cursor: Coord, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_cell(f, cols[0], session, cursor, start);
    render_vertical_sep(f, cols[1]);
    render_cell(f, cols[2], session, cursor, start + 1);
    render_vertical_sep(f, cols[3]);
    render_cell(f, cols[4], session, cursor, start + 2);
}

fn render_cell(f: &mut Frame, area: Rect, session: &Session, cursor: Coord, index: usize) {
    let Some(at) = Coord::from_index(index) else {
        return;
    };
    let (text, mut style) = match session.board().get(at) {
        Cell::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = session
        .winning_line()
        .is_some_and(|line| line.contains(at));
    if on_winning_line {
        style = style.bg(Color::Magenta).fg(Color::White);
    } else if at == cursor && session.phase() == Phase::AwaitingHuman {
        style = style.bg(Color::DarkGray).fg(Color::White);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}
