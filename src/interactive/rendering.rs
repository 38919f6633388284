//! TUI rendering with ratatui
//!
//! Board, score and message panels for a match.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Peg, Row};
use crate::game::{Game, Gamemode, MAX_ROUNDS, MIN_ROUNDS};
use crate::output::display::RULES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, game: Option<&Game>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board or menu
            Constraint::Percentage(40), // Score and messages
        ])
        .split(chunks[1]);

    match (app.screen, game) {
        (Screen::Playing | Screen::MatchOver, Some(game)) => render_board(f, app, game, main_chunks[0]),
        _ => render_menu(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, game, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, game, chunks[3]);
}

/// Terminal color of a peg
#[must_use]
pub const fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Red => Color::Red,
        Peg::Green => Color::Green,
        Peg::Blue => Color::Blue,
        Peg::Yellow => Color::Yellow,
        Peg::White => Color::White,
        Peg::Cyan => Color::Cyan,
        Peg::Black => Color::DarkGray,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
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

fn row_line(label: String, row: &Row) -> Line<'static> {
    let mut spans = vec![Span::styled(label, Style::default().fg(Color::DarkGray))];
    for &peg in row.pegs() {
        spans.push(Span::styled(" ●● ", Style::default().fg(peg_color(peg))));
    }
    spans.push(Span::raw(" │ "));
    for &peg in row.key_pegs() {
        spans.push(Span::styled("● ", Style::default().fg(peg_color(peg))));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, game: &Game, area: Rect) {
    let mut lines = Vec::with_capacity(game.amount_of_rows() + 2);

    if app.reveal_code {
        lines.push(row_line("Code ".to_string(), game.coded_row()));
    } else {
        lines.push(Line::from(vec![
            Span::styled("Code ", Style::default().fg(Color::DarkGray)),
            Span::styled(" ?? ".repeat(4), Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }
    lines.push(Line::from(""));

    let total = game.amount_of_rows();
    for (i, row) in game.board().enumerate() {
        lines.push(row_line(format!("{:>4} ", total - i), row));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let (title, lines): (&str, Vec<Line>) = match app.screen {
        Screen::GamemodeMenu => (
            " Game Mode ",
            Gamemode::ALL
                .iter()
                .map(|mode| Line::from(format!("{} -> {}", mode.number(), mode.description())))
                .collect(),
        ),
        Screen::Rounds => (
            " Rounds ",
            vec![
                Line::from(format!("Play between {MIN_ROUNDS} and {MAX_ROUNDS} rounds.")),
                Line::from("Every round, both players set a code once."),
            ],
        ),
        _ => (
            " Rules ",
            RULES.iter().map(|sentence| Line::from(*sentence)).collect(),
        ),
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, game: Option<&Game>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Score
            Constraint::Length(3), // Match progress
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, game, chunks[0]);
    render_progress(f, app, game, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, game: Option<&Game>, area: Rect) {
    let content: Vec<Line> = game.map_or_else(
        || vec![Line::from("No match yet")],
        |game| {
            let leader = game.winner().map(|player| player.name().to_string());
            game.players_list()
                .iter()
                .map(|player| {
                    let style = if leader.as_deref() == Some(player.name()) {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![
                        Span::styled(format!("{:<12}", player.name()), style),
                        Span::styled(
                            format!("{:>4} pts", player.points()),
                            Style::default().fg(Color::Cyan),
                        ),
                    ])
                })
                .collect()
        },
    );

    let score = Paragraph::new(content).block(
        Block::default()
            .title(" Points ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(score, area);
}

fn render_progress(f: &mut Frame, app: &App, game: Option<&Game>, area: Rect) {
    let total_turns = game.map_or(0, |game| game.rounds() as usize * 2);
    let percent = if total_turns == 0 {
        0
    } else {
        (app.turns_played * 100 / total_turns).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Match ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{}/{total_turns} turns", app.turns_played));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.screen {
        Screen::MatchOver => Color::Green,
        Screen::Playing => Color::Yellow,
        _ => Color::Cyan,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(format!(" {} ", app.prompt))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, game: Option<&Game>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mode_text = game.map_or_else(
        || "Mode: -".to_string(),
        |game| {
            format!(
                "Mode: {} | Rows: {}",
                game.gamemode().description(),
                game.amount_of_rows()
            )
        },
    );
    f.render_widget(Paragraph::new(mode_text).alignment(Alignment::Center), chunks[0]);

    let help = Paragraph::new("Enter: Submit | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
