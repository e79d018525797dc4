//! TUI rendering with ratatui
//!
//! Draws the guess grid, the on-screen keyboard and the message area.

use super::app::{App, Highlight, MessageStyle, Screen, Tile};
use crate::core::{KEYBOARD_ROWS, LetterVerdict, MAX_GUESSES};
use crate::game::{GameStatus, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Header
            Constraint::Length(MAX_GUESSES as u16 * 2 + 2), // Board
            Constraint::Length(4),                         // Messages
            Constraint::Length(5),                         // Keyboard
            Constraint::Length(1),                         // Status bar
        ])
        .split(f.area());

    let screen = app.game.renderer();

    render_header(f, chunks[0]);
    render_board(f, screen, chunks[1]);
    render_messages(f, screen, chunks[2]);
    render_keyboard(f, screen, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn verdict_color(verdict: LetterVerdict) -> Color {
    match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::Present => Color::Yellow,
        LetterVerdict::Absent => Color::DarkGray,
    }
}

fn tile_span(tile: &Tile) -> Span<'static> {
    let letter = tile.letter.unwrap_or(' ');
    let mut style = match tile.revealed {
        Some(verdict) => Style::default()
            .bg(verdict_color(verdict))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        None if tile.letter.is_some() => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };

    style = match tile.highlight {
        Highlight::None => style,
        Highlight::Zoom => style.add_modifier(Modifier::REVERSED),
        Highlight::Shake => style.fg(Color::Red).add_modifier(Modifier::CROSSED_OUT),
        Highlight::Bounce => style.add_modifier(Modifier::SLOW_BLINK),
    };

    let text = if tile.letter.is_some() || tile.revealed.is_some() {
        format!(" {letter} ")
    } else {
        " · ".to_string()
    };
    Span::styled(text, style)
}

fn render_board(f: &mut Frame, screen: &Screen, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);
    for row in &screen.tiles {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for tile in row {
            spans.push(tile_span(tile));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, screen: &Screen, area: Rect) {
    let lines: Vec<Line> = screen
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::styled(msg.text.clone(), style.add_modifier(Modifier::BOLD))
        })
        .collect();

    let messages = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_keyboard(f: &mut Frame, screen: &Screen, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|label| {
                    let style = label
                        .chars()
                        .next()
                        .filter(|_| label.len() == 1)
                        .and_then(|ch| screen.keys.get(&ch))
                        .map_or_else(
                            || Style::default().fg(Color::White),
                            |&verdict| Style::default().bg(verdict_color(verdict)).fg(Color::Black),
                        );
                    [Span::styled(format!(" {label} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let screen = app.game.renderer();
    let help_text = match app.game.status() {
        None => "Loading word list... | Esc: Quit".to_string(),
        Some(GameStatus::InProgress) => format!(
            "Round {} | Type letters | Enter: Submit | Backspace: Delete | Esc: Quit",
            screen.round
        ),
        Some(_) => {
            let result = match screen.outcome {
                Some(Outcome::Won) => "Won",
                _ => "Lost",
            };
            format!("Round {} {result} | R: Play Again | Esc: Quit", screen.round)
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
