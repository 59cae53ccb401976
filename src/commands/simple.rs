//! Simple line-based play mode
//!
//! Plays a session without the TUI: one guess per line on stdin.

use super::challenge::Challenge;
use crate::game::GameSession;
use crate::output::{
    error_message, print_banner, print_game_over, print_history, print_keyboard, print_submission,
};
use crate::storage::{StateStore, save_session};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Words that end the line-based game early
const QUIT_WORDS: [&str; 3] = ["salir", "quit", "exit"];

/// Run the line-based game until it ends or input runs out
///
/// Progress is written to `store` after every accepted guess.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<R, S>(
    session: &mut GameSession<'_>,
    challenge: &Challenge,
    store: &mut S,
    mut input: R,
) -> Result<()>
where
    R: BufRead,
    S: StateStore + ?Sized,
{
    print_banner(challenge, session);

    if !session.guesses().is_empty() {
        println!("Partida recuperada:\n");
        print_history(session);
        print_keyboard(session);
    }

    while !session.is_over() {
        print!(
            "Turno {}/{}: ",
            session.current_turn() + 1,
            session.config().max_guesses
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let guess = line.trim();
        if guess.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&guess.to_lowercase().as_str()) {
            println!("¡Hasta luego!");
            return Ok(());
        }

        match session.submit_guess(guess) {
            Ok(submission) => {
                if let Err(e) = save_session(session, store, challenge.date) {
                    tracing::warn!(error = %e, "could not save progress");
                }
                print_submission(&submission, session);
                print_keyboard(session);
            }
            Err(e) => println!("  {}", error_message(&e)),
        }
    }

    print_game_over(session, challenge);
    Ok(())
}
