//! TUI rendering with ratatui
//!
//! Board, message log, and statistics for the game client.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::app::{App, InputMode, MessageStyle};
use crate::api::GameApi;
use crate::core::{LetterOutcome, WORD_LEN};
use crate::session::{MAX_ATTEMPTS, Phase};

/// Main UI rendering function
pub fn ui<A: GameApi>(f: &mut Frame, app: &App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - board on the left, info on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE - Terminal Client")
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

/// The 6x5 board: scored rows, then the draft row, then empty rows
fn render_board<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let session = app.controller.session();
    let history = session.history();

    let mut lines: Vec<Line> = vec![Line::default()];

    for row in 0..MAX_ATTEMPTS as usize {
        let line = if let Some(record) = history.get(row) {
            let spans: Vec<Span> = record
                .word
                .letters()
                .zip(record.evaluation.outcomes().iter())
                .flat_map(|(letter, outcome)| {
                    [scored_tile(letter, *outcome), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        } else if row == history.len() && session.phase() == Phase::Active {
            draft_row(app)
        } else {
            empty_row()
        };

        lines.push(line.alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn scored_tile(letter: char, outcome: LetterOutcome) -> Span<'static> {
    let style = match outcome {
        LetterOutcome::Green => Style::default().fg(Color::Black).bg(Color::Green),
        LetterOutcome::Yellow => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterOutcome::Gray => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        style.add_modifier(Modifier::BOLD),
    )
}

fn draft_row<A: GameApi>(app: &App<A>) -> Line<'static> {
    let draft = app.controller.draft();

    let spans: Vec<Span> = draft
        .cells()
        .iter()
        .enumerate()
        .flat_map(|(i, cell)| {
            let text = match cell {
                Some(letter) => format!(" {} ", letter.to_ascii_uppercase()),
                None => " · ".to_string(),
            };

            let mut style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
            if i == draft.focus() {
                style = style.bg(Color::Blue).add_modifier(Modifier::UNDERLINED);
            }

            [Span::styled(text, style), Span::raw(" ")]
        })
        .collect();

    Line::from(spans)
}

fn empty_row() -> Line<'static> {
    let spans: Vec<Span> = (0..WORD_LEN)
        .flat_map(|_| {
            [
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_info_panel<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
}

fn render_messages<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_stats<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let mut lines = vec![
        Line::from(format!("Games played: {}", app.stats.total_games)),
        Line::from(format!(
            "Win rate:     {:.0}%",
            if app.stats.total_games > 0 {
                app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
            } else {
                0.0
            }
        )),
    ];

    let best = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, &count)| count > 0);
    if let Some((turns, _)) = best {
        lines.push(Line::from(format!("Best win:     {turns} guesses")));
    }

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(stats, area);
}

fn render_status<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let session = app.controller.session();

    let attempts_text = format!("Attempts left: {}", session.attempts_left());
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let game_text = match session.game_id() {
        Some(id) => format!("Game: {:.8}", id),
        None => "Game: (not started)".to_string(),
    };
    let game = Paragraph::new(game_text).alignment(Alignment::Center);
    f.render_widget(game, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "n: New Game | q: Quit",
        InputMode::Guessing => {
            if session.game_id().is_none() {
                "r: Retry Start | ESC: Quit"
            } else {
                "Type letters | Enter: Submit | Backspace: Erase | ESC: Quit"
            }
        }
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
