//! TUI application state and logic

use crate::commands::Challenge;
use crate::game::{GameSession, GameStatus, InputEvent, Submission};
use crate::output::error_message;
use crate::storage::{StateStore, save_session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub challenge: Challenge,
    store: Box<dyn StateStore + 'a>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Share summary overlay is visible
    pub show_share: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        session: GameSession<'a>,
        challenge: Challenge,
        store: Box<dyn StateStore + 'a>,
    ) -> Self {
        let mut app = Self {
            session,
            challenge,
            store,
            messages: Vec::new(),
            should_quit: false,
            show_share: false,
        };

        if app.session.is_over() {
            app.announce_result();
        } else if app.session.current_turn() > 0 {
            app.add_message("Partida recuperada. ¡Sigue jugando!", MessageStyle::Info);
        } else {
            app.add_message(
                "Cuatro palabras, un teclado. Escribe y pulsa Enter.",
                MessageStyle::Info,
            );
        }
        app
    }

    /// Map a key press to an action
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.is_over() {
            match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('s' | 'S') => self.show_share = !self.show_share,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.handle_input(InputEvent::Letter(c)),
            KeyCode::Backspace => self.handle_input(InputEvent::Delete),
            KeyCode::Enter => self.handle_input(InputEvent::Enter),
            _ => {}
        }
    }

    /// Forward one event to the session and react to its outcome
    pub fn handle_input(&mut self, event: InputEvent) {
        match self.session.handle_input(event) {
            Ok(Some(submission)) => self.on_submission(&submission),
            Ok(None) => {}
            Err(e) => self.add_message(&error_message(&e), MessageStyle::Error),
        }
    }

    fn on_submission(&mut self, submission: &Submission) {
        if let Err(e) = save_session(&self.session, self.store.as_mut(), self.challenge.date) {
            tracing::warn!(error = %e, "could not save progress");
            self.add_message("No se pudo guardar la partida", MessageStyle::Error);
        }

        for (b, cell) in submission.feedback.iter().enumerate() {
            if cell.is_some_and(|f| f.is_perfect()) {
                self.add_message(
                    &format!("¡Tablero {} resuelto!", b + 1),
                    MessageStyle::Success,
                );
            }
        }

        if !submission.newly_disabled.is_empty() {
            let letters: String = submission.newly_disabled.iter().collect();
            self.add_message(
                &format!("Letras descartadas: {letters}"),
                MessageStyle::Info,
            );
        }

        if submission.status.is_over() {
            self.announce_result();
            self.show_share = true;
        }
    }

    fn announce_result(&mut self) {
        match self.session.status() {
            GameStatus::Won => {
                let text = format!(
                    "¡Victoria total! Puntuación: {}",
                    self.session.total_score()
                );
                self.add_message(&text, MessageStyle::Success);
            }
            GameStatus::Lost => {
                let targets: Vec<&str> = self
                    .session
                    .boards()
                    .iter()
                    .map(|b| b.target().text())
                    .collect();
                let text = format!("Fin del juego. Soluciones: {}", targets.join(", "));
                self.add_message(&text, MessageStyle::Error);
            }
            GameStatus::InProgress => return,
        }
        self.add_message("s: compartir | q: salir", MessageStyle::Info);
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        self.session.share_summary(self.challenge.number)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        // Leave the summary on the normal screen once the TUI is gone
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session.is_over().then(|| app.share_text()))
}
