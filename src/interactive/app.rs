//! TUI application state and event loop

use crate::core::{LetterVerdict, MAX_GUESSES, WORD_LENGTH};
use crate::game::{CellState, Effect, EffectKind, GameController, Key, Outcome, Renderer};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input before advancing animations
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Transient styling on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    Zoom,
    Shake,
    Bounce,
}

/// What one board tile currently shows
#[derive(Debug, Clone, Copy, Default)]
pub struct Tile {
    pub letter: Option<char>,
    /// Verdict waiting for its flip
    pending: Option<LetterVerdict>,
    /// Verdict already revealed
    pub revealed: Option<LetterVerdict>,
    pub highlight: Highlight,
}

/// A line in the message area
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Screen model fed by the game controller
#[derive(Debug, Default)]
pub struct Screen {
    pub tiles: [[Tile; WORD_LENGTH]; MAX_GUESSES],
    pub keys: FxHashMap<char, LetterVerdict>,
    pub messages: Vec<Message>,
    pub outcome: Option<Outcome>,
    pub round: u64,
}

impl Screen {
    fn tile_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(row).and_then(|tiles| tiles.get_mut(col))
    }
}

impl Renderer for Screen {
    fn cell_updated(&mut self, row: usize, col: usize, letter: Option<char>, state: CellState) {
        if let Some(tile) = self.tile_mut(row, col) {
            tile.letter = match state {
                CellState::Filled => letter,
                CellState::Empty => None,
            };
            tile.highlight = Highlight::None;
        }
    }

    fn letter_verdict(&mut self, row: usize, col: usize, verdict: LetterVerdict) {
        if let Some(tile) = self.tile_mut(row, col) {
            tile.pending = Some(verdict);
        }
    }

    fn key_verdict(&mut self, letter: char, verdict: LetterVerdict) {
        self.keys.insert(letter, verdict);
    }

    fn message(&mut self, text: &str, _duration: Duration, append: bool) {
        if !append {
            self.messages.clear();
        }
        let style = match self.outcome {
            Some(Outcome::Won) => MessageStyle::Success,
            _ if text == crate::game::NOT_IN_WORD_LIST => MessageStyle::Error,
            _ => MessageStyle::Info,
        };
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
    }

    fn game_ended(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        if outcome == Outcome::Won {
            for message in &mut self.messages {
                message.style = MessageStyle::Success;
            }
        }
    }

    fn round_started(&mut self, generation: u64) {
        *self = Self {
            round: generation,
            ..Self::default()
        };
    }

    fn effect(&mut self, effect: &Effect) {
        let Some((row, col)) = effect.cell else {
            if effect.kind == EffectKind::ClearMessage {
                self.messages.clear();
            }
            return;
        };
        let Some(tile) = self.tile_mut(row, col) else {
            return;
        };

        match effect.kind {
            EffectKind::Zoom => tile.highlight = Highlight::Zoom,
            EffectKind::Shake => tile.highlight = Highlight::Shake,
            EffectKind::Bounce => tile.highlight = Highlight::Bounce,
            EffectKind::Settle => tile.highlight = Highlight::None,
            EffectKind::Flip(verdict) => {
                tile.revealed = tile.pending.take().or(Some(verdict));
            }
            EffectKind::ClearMessage => {}
        }
    }
}

/// Application state
pub struct App {
    pub game: GameController<Screen>,
    pub should_quit: bool,
    started: Instant,
}

impl App {
    #[must_use]
    pub fn new(game: GameController<Screen>) -> Self {
        Self {
            game,
            should_quit: false,
            started: Instant::now(),
        }
    }

    /// Route a terminal key press into the game
    pub fn handle_key_code(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let key = match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Char(ch) => Key::from_char(ch),
            _ => None,
        };

        if let Some(key) = key {
            self.game.handle_key(key);
        }
    }

    /// Deliver effects that are due
    pub fn tick(&mut self) {
        self.game.tick(self.started.elapsed());
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_code(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
