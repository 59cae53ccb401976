//! TUI rendering with ratatui
//!
//! Four boards in a 2x2 grid above a shared keyboard.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, TileResult, WORD_LENGTH, Word};
use crate::game::{GameStatus, LetterState};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Boards
            Constraint::Length(8), // Keyboard and messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_boards(f, app, chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_keyboard(f, app, bottom[0]);
    render_messages(f, app, bottom[1]);

    render_status(f, app, chunks[3]);

    if app.show_share {
        render_share(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let kind = if app.challenge.practice {
        "Práctica"
    } else {
        "Reto"
    };
    let title = format!("CUORDLE · {kind} #{}", app.challenge.number);
    let header = Paragraph::new(title)
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

fn render_boards(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);
        for (c, cell) in cols.iter().enumerate() {
            render_board(f, app, r * 2 + c, *cell);
        }
    }
}

fn render_board(f: &mut Frame, app: &App, board: usize, area: Rect) {
    let session = &app.session;
    let target = &session.boards()[board];

    let mut lines: Vec<Line> = session
        .guesses()
        .iter()
        .zip(session.history())
        .filter_map(|(guess, row)| row[board].map(|feedback| guess_line(guess, &feedback)))
        .collect();

    if !target.is_solved() && !session.is_over() {
        lines.push(buffer_line(session.buffer()));
    }
    while lines.len() < session.config().max_guesses {
        lines.push(Line::from(Span::styled(
            " · ".repeat(WORD_LENGTH),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let (title, color) = match target.solved_at() {
        Some(turn) => (format!(" Tablero {} ✓ {turn} ", board + 1), Color::Green),
        None if session.status() == GameStatus::Lost => (
            format!(" Tablero {} · {} ", board + 1, target.target()),
            Color::Red,
        ),
        None => (format!(" Tablero {} ", board + 1), Color::White),
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn tile_style(result: TileResult) -> Style {
    match result {
        TileResult::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TileResult::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TileResult::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn guess_line(guess: &Word, feedback: &Feedback) -> Line<'static> {
    let spans: Vec<Span> = guess
        .letters()
        .iter()
        .zip(feedback.tiles())
        .map(|(&letter, &result)| Span::styled(format!(" {letter} "), tile_style(result)))
        .collect();
    Line::from(spans)
}

fn buffer_line(buffer: &str) -> Line<'static> {
    let style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut letters = buffer.chars();
    let spans: Vec<Span> = (0..WORD_LENGTH)
        .map(|_| match letters.next() {
            Some(letter) => Span::styled(format!(" {letter} "), style),
            None => Span::styled(" _ ", style),
        })
        .collect();
    Line::from(spans)
}

fn marker_span(state: LetterState) -> Span<'static> {
    match state {
        LetterState::Correct => Span::styled("▪", Style::default().fg(Color::Green)),
        LetterState::Present => Span::styled("▪", Style::default().fg(Color::Yellow)),
        LetterState::Absent => Span::styled("▪", Style::default().fg(Color::DarkGray)),
        LetterState::Unset => Span::styled("·", Style::default().fg(Color::Gray)),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);

    for row in KEYBOARD_ROWS {
        let mut keys = Vec::new();
        let mut markers = Vec::new();
        for letter in row.chars() {
            let dimmed = session.is_disabled(letter) || session.is_letter_exhausted(letter);
            let style = if dimmed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            };
            keys.push(Span::styled(format!("  {letter}  "), style));

            markers.push(Span::raw(" "));
            markers.extend(
                session
                    .keyboard()
                    .slots(letter)
                    .into_iter()
                    .map(marker_span),
            );
        }
        lines.push(Line::from(keys));
        lines.push(Line::from(markers));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Teclado ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
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
        List::new(messages).block(Block::default().title(" Mensajes ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let help = if session.is_over() {
        "s: compartir | q: salir"
    } else {
        "Enter: enviar | ⌫: borrar | Esc: salir"
    };
    let text = format!(
        "Turno {}/{} | Puntuación {} | {help}",
        session.current_turn(),
        session.config().max_guesses,
        session.total_score()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

fn render_share(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 80, f.area());
    let share = Paragraph::new(app.share_text()).block(
        Block::default()
            .title(" Compartir (s para cerrar) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, area);
    f.render_widget(share, area);
}

/// Rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
