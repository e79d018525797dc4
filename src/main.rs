//! Wordle Clone - CLI
//!
//! Play in a full-screen TUI (default) or a plain line-based console mode.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_clone::{
    commands::run_simple,
    core::Word,
    game::{GameController, Renderer},
    interactive::{App, Screen, run_tui},
    output::ConsoleRenderer,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line, or a JSON array); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Fix the first round's target word
    #[arg(long, global = true)]
    target: Option<String>,

    /// Seed for target selection, for repeatable rounds
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

/// Load the word list selected by the -w flag
fn load_words(path: Option<&PathBuf>) -> Result<WordSource> {
    use wordle_clone::wordlists::loader::load_from_file;

    let words = match path {
        Some(path) => WordSource::new(load_from_file(path)?),
        None => WordSource::embedded(),
    };
    log::debug!("Loaded {} words", words.len());
    Ok(words)
}

/// Build a controller and start the first round
fn start_game<R: Renderer>(renderer: R, cli: &Cli, words: WordSource) -> Result<GameController<R>> {
    let mut game = match cli.seed {
        Some(seed) => GameController::with_seed(renderer, seed),
        None => GameController::new(renderer),
    };

    match &cli.target {
        Some(text) => {
            if !words.contains_text(text) {
                bail!("Target word {text} is not in the word list");
            }
            game.load_with_target(words, Word::new(text)?)?;
        }
        None => game.load(words)?,
    }
    Ok(game)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let words = load_words(cli.wordlist.as_ref())?;

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => {
            let game = start_game(Screen::default(), &cli, words)?;
            run_tui(App::new(game))
        }
        Commands::Simple => {
            let game = start_game(ConsoleRenderer::new(), &cli, words)?;
            run_simple(game)?;
            Ok(())
        }
    }
}
