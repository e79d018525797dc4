//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::game::{GameController, GameStatus, GuessError, Submission};
use crate::output::{ConsoleRenderer, guess_summary};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// What the player asked for on a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    Guess(String),
}

impl Command {
    /// Interpret a trimmed input line
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "r" | "new" | "n" | "yes" | "y" => Self::Reset,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Replace the active row with `word` and submit it
///
/// # Errors
///
/// Returns the controller's `GuessError` when the row is refused.
pub fn play_word(
    game: &mut GameController<ConsoleRenderer>,
    word: &str,
) -> Result<Submission, GuessError> {
    while game.submit_backspace() {}
    for ch in word.chars().take(WORD_LENGTH) {
        game.submit_letter(ch);
    }
    game.submit_enter()
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut game: GameController<ConsoleRenderer>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Wordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the hidden {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.");
    println!("Commands: 'quit' to exit, 'r' for a new game once a round is over\n");

    let started = Instant::now();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        game.tick(started.elapsed());

        let prompt = match game.status() {
            None => {
                println!("No word list loaded.");
                return Ok(());
            }
            Some(GameStatus::InProgress) => {
                let row = game.session().map_or(0, |s| s.cursor().row);
                format!("Guess {}/{MAX_GUESSES}", row + 1)
            }
            Some(_) => "Play again? (r/quit)".to_string(),
        };

        print!("{prompt}: ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        match (Command::parse(line.trim()), game.status()) {
            (Command::Quit, _) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            (Command::Reset, Some(status)) if status.is_terminal() => {
                game.submit_reset();
            }
            (Command::Guess(word), Some(GameStatus::InProgress)) => {
                if word.chars().count() != WORD_LENGTH {
                    println!("❌ Guesses must be {WORD_LENGTH} letters\n");
                    continue;
                }
                match play_word(&mut game, &word) {
                    Ok(Submission::Won | Submission::Lost(_)) => print_round_summary(&game),
                    Ok(_) | Err(GuessError::InvalidWord(_)) => {}
                    Err(err) => println!("❌ {err}\n"),
                }
            }
            (_, status) => println!("{}\n", idle_hint(status)),
        }
    }
}

/// What to tell a player whose line did nothing in the current state
#[must_use]
pub const fn idle_hint(status: Option<GameStatus>) -> &'static str {
    match status {
        Some(GameStatus::InProgress) => "A new game can only start once this round is over",
        _ => "Type 'r' to play again or 'quit' to exit",
    }
}

fn print_round_summary(game: &GameController<ConsoleRenderer>) {
    let Some(session) = game.session() else {
        return;
    };

    println!("\n  The word was {}", session.target().to_string().bright_green().bold());
    println!("\n{}\n", guess_summary(session.guesses()));
}
