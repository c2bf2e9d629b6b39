//! Ratatui drawing for the guessing screen. Reads `App`, never mutates it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::core::{GameStatus, TargetSource, MAX_GUESS, MIN_GUESS};

const ACCENT: Color = Color::Cyan;

pub fn render<S: TargetSource>(f: &mut Frame, app: &App<S>) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1), // attempts
            Constraint::Length(1),
            Constraint::Length(3), // input or restart
            Constraint::Length(3), // feedback
            Constraint::Min(0),
            Constraint::Length(1), // help
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new("🔢 Number Guessing Game")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(format!(
            "Try to guess the number between {} and {}",
            MIN_GUESS, MAX_GUESS
        ))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Attempts remaining: "),
            Span::styled(
                view.attempts_remaining.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center),
        chunks[2],
    );

    if view.is_over {
        f.render_widget(
            Paragraph::new("🔄 Press [Enter] or [R] to play again")
                .style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[4],
        );
    } else {
        let area = chunks[4];
        f.render_widget(
            Paragraph::new(format!("> {}", app.input()))
                .block(Block::default().title(" Your guess ").borders(Borders::ALL)),
            area,
        );
        // inside the border, after the "> " prompt
        let x = area.x + 3 + app.input().chars().count() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }

    if !view.feedback.is_empty() {
        let color = match view.status {
            GameStatus::Won => Color::Green,
            GameStatus::Lost => Color::Red,
            GameStatus::InProgress => Color::Yellow,
        };
        f.render_widget(
            Paragraph::new(view.feedback.as_str())
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[5],
        );
    }

    let help = if view.is_over {
        "[Enter/R] New game  [Q/Esc] Quit"
    } else {
        "[0-9] Type  [Enter] Guess  [Backspace] Erase  [Esc] Quit"
    };
    f.render_widget(
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[7],
    );

    if let Some(message) = app.advisory() {
        let area = centered(f.area(), 50, 5);
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(message)
                .block(
                    Block::default()
                        .title(" Invalid number ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                )
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
