//! Display functions for game state

use super::formatters::{KEYBOARD_ROWS, blank_guess, colored_guess, keyboard_key};
use crate::commands::{Challenge, VerifyReport};
use crate::core::NUM_BOARDS;
use crate::game::{GameSession, GameStatus, Submission};
use crate::wordlists::{Dictionary, WordPool};
use colored::Colorize;

/// Print the opening banner for a challenge
pub fn print_banner(challenge: &Challenge, session: &GameSession<'_>) {
    println!("\n{}", "═".repeat(60).cyan());
    let title = if challenge.practice {
        format!("CUORDLE · práctica #{}", challenge.number)
    } else {
        format!("CUORDLE · reto #{}", challenge.number)
    };
    println!(" {}", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nCuatro palabras, un teclado. Tienes {} intentos.",
        session.config().max_guesses
    );
    println!("Escribe una palabra y pulsa Enter. 'salir' para terminar.\n");
}

/// Print every played turn, boards side by side
pub fn print_history(session: &GameSession<'_>) {
    for (guess, row) in session.guesses().iter().zip(session.history()) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(feedback) => colored_guess(guess, feedback),
                None => blank_guess(),
            })
            .collect();
        println!("  {}", cells.join("  "));
    }
}

/// Print the result of one accepted guess
pub fn print_submission(submission: &Submission, session: &GameSession<'_>) {
    println!(
        "\n{} {}/{}",
        "Turno".bright_black(),
        submission.turn,
        session.config().max_guesses
    );
    for (b, cell) in submission.feedback.iter().enumerate() {
        match cell {
            Some(feedback) => {
                let solved = if feedback.is_perfect() {
                    " ✓".green().bold().to_string()
                } else {
                    String::new()
                };
                println!(
                    "  {} {}{solved}",
                    format!("{}:", b + 1).bright_black(),
                    colored_guess(&submission.guess, feedback)
                );
            }
            None => println!("  {} {}", format!("{}:", b + 1).bright_black(), "resuelto".green()),
        }
    }
    if !submission.newly_disabled.is_empty() {
        let letters: String = submission.newly_disabled.iter().collect();
        println!("  {} {letters}", "Letras descartadas:".bright_black());
    }
}

/// Print the shared keyboard with per-board markers
pub fn print_keyboard(session: &GameSession<'_>) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| {
                let dimmed = session.is_disabled(letter) || session.is_letter_exhausted(letter);
                keyboard_key(letter, &session.keyboard().slots(letter), dimmed)
            })
            .collect();
        println!("{}{}", "   ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print the end-of-game message
pub fn print_game_over(session: &GameSession<'_>, challenge: &Challenge) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => println!("{}", "  ¡VICTORIA TOTAL! 🎉".bright_green().bold()),
        GameStatus::Lost => {
            let targets: Vec<&str> = session.boards().iter().map(|b| b.target().text()).collect();
            println!("{}", "  Fin del juego 💀".red().bold());
            println!("  Soluciones: {}", targets.join(", ").bright_yellow());
        }
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n{}\n", session.share_summary(challenge.number));
}

/// Print challenge and resource details
pub fn print_info(challenge: &Challenge, pool: &WordPool, dictionary: &Dictionary) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", "CUORDLE".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("   Fecha:        {}", challenge.date);
    println!(
        "   Reto:         #{}",
        challenge.number.to_string().bright_yellow().bold()
    );
    println!("   Retos:        {}", pool.len());
    println!("   Diccionario:  {} palabras", dictionary.len());
    println!("   Tableros:     {NUM_BOARDS}");
}

/// Print the outcome of a pool verification
pub fn print_verify_report(report: &VerifyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "POOL VERIFICATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n   Puzzles checked:  {}", report.checked);

    if report.problems.is_empty() {
        println!("   {}", "✅ All targets are valid guesses".green().bold());
        return;
    }

    println!(
        "   {}",
        format!("❌ {} problems found", report.problems.len())
            .red()
            .bold()
    );
    for problem in &report.problems {
        println!(
            "     #{:<4} {:<6} {}",
            problem.challenge,
            problem.word,
            problem.kind.to_string().yellow()
        );
    }
}
