//! Game state machine
//!
//! The controller owns the word list and the current round, turns key input
//! into board changes, judges submitted rows, and reports everything visible
//! to an injected `Renderer`.
//!
//! # States
//! - Loading: no word list yet; all input is ignored
//! - `InProgress` → `Won` | `Lost`; terminal states only accept Reset,
//!   which starts a fresh round with a new target

use super::effects::{
    BOUNCE_DELAY, BOUNCE_STAGGER, Effect, EffectKind, EffectQueue, FLIP_STAGGER, SHAKE_DURATION,
    ZOOM_DURATION,
};
use super::input::Key;
use super::renderer::{CellState, Outcome, Renderer};
use crate::core::{Board, Cursor, Feedback, KeyState, WORD_LENGTH, Word};
use crate::wordlists::{WordListError, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::time::Duration;

/// Default time a message stays up
pub const MESSAGE_DURATION: Duration = Duration::from_millis(2000);
/// Time end-of-round messages are meant to stay up
pub const END_MESSAGE_DURATION: Duration = Duration::from_millis(5000);

pub const NOT_IN_WORD_LIST: &str = "Not in Word List!";
pub const WIN_MESSAGE: &str = "🎊You win!🎊";
pub const LOSS_MESSAGE: &str = "👾Game Over!👾";
pub const PLAY_AGAIN_MESSAGE: &str = "Press R to play again!";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load the word list.";

/// Status of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a submitted row was not judged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The active row has fewer than five letters
    IncompleteRow { filled: usize },
    /// The row spells a word that is not in the list
    InvalidWord(Word),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRow { filled } => {
                write!(f, "Row has {filled} of {WORD_LENGTH} letters")
            }
            Self::InvalidWord(word) => write!(f, "{word} is not in the word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Result of pressing Enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// No round is accepting guesses
    Ignored,
    /// The row was judged and play moves to the next row
    Continued(Feedback),
    /// The row matched the target
    Won,
    /// The final row missed the target
    Lost(Feedback),
}

/// Everything that belongs to a single round
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    board: Board,
    keys: KeyState,
    status: GameStatus,
    guesses: Vec<(Word, Feedback)>,
    generation: u64,
}

impl GameSession {
    fn new(target: Word, generation: u64) -> Self {
        Self {
            target,
            board: Board::new(),
            keys: KeyState::new(),
            status: GameStatus::InProgress,
            guesses: Vec::new(),
            generation,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.board.cursor()
    }

    #[must_use]
    pub const fn keys(&self) -> &KeyState {
        &self.keys
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Judged rows in submission order
    #[must_use]
    pub fn guesses(&self) -> &[(Word, Feedback)] {
        &self.guesses
    }

    /// Round identifier; bumped on every reset
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Orchestrates input, evaluation and rendering for one player
pub struct GameController<R: Renderer> {
    renderer: R,
    words: WordSource,
    session: Option<GameSession>,
    effects: EffectQueue,
    rng: StdRng,
    clock: Duration,
}

impl<R: Renderer> GameController<R> {
    /// Create a controller in the Loading state
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self::with_rng(renderer, StdRng::from_os_rng())
    }

    /// Create a controller whose target selection is reproducible
    #[must_use]
    pub fn with_seed(renderer: R, seed: u64) -> Self {
        Self::with_rng(renderer, StdRng::seed_from_u64(seed))
    }

    fn with_rng(renderer: R, rng: StdRng) -> Self {
        Self {
            renderer,
            words: WordSource::default(),
            session: None,
            effects: EffectQueue::new(),
            rng,
            clock: Duration::ZERO,
        }
    }

    /// Install the word list and start the first round
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if the list has no words; the controller
    /// stays in Loading and a blocking message is shown.
    pub fn load(&mut self, words: WordSource) -> Result<(), WordListError> {
        let target = match words.pick_random_with(&mut self.rng) {
            Ok(word) => word.clone(),
            Err(err) => {
                log::error!("Cannot start a round: {err}");
                self.renderer.message(LOAD_FAILED_MESSAGE, Duration::MAX, false);
                return Err(err);
            }
        };

        log::info!("Loaded {} words", words.len());
        self.words = words;
        self.start_round(target);
        Ok(())
    }

    /// Install the word list and start the first round against `target`
    ///
    /// Later rounds draw their targets at random. The target should be in the
    /// list, otherwise it can never be guessed.
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if the list has no words.
    pub fn load_with_target(&mut self, words: WordSource, target: Word) -> Result<(), WordListError> {
        if words.is_empty() {
            self.renderer.message(LOAD_FAILED_MESSAGE, Duration::MAX, false);
            return Err(WordListError::Empty);
        }
        if !words.is_valid(&target) {
            log::warn!("Target {target} is not in the word list");
        }

        self.words = words;
        self.start_round(target);
        Ok(())
    }

    /// Whether the word list is still missing
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.session.is_none()
    }

    /// Status of the current round, `None` while loading
    #[must_use]
    pub fn status(&self) -> Option<GameStatus> {
        self.session.as_ref().map(GameSession::status)
    }

    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn words(&self) -> &WordSource {
        &self.words
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of effects waiting to fire
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.effects.len()
    }

    /// Dispatch a key press the way the on-screen keyboard does
    ///
    /// While a round is running, letters, Enter and Backspace go to the board.
    /// Once it has ended, only `R` is honoured and starts a new round.
    pub fn handle_key(&mut self, key: Key) {
        match self.status() {
            None => log::debug!("Ignoring {key:?} while loading"),
            Some(GameStatus::InProgress) => match key {
                Key::Letter(letter) => {
                    self.submit_letter(char::from(letter));
                }
                Key::Backspace => {
                    self.submit_backspace();
                }
                Key::Enter => match self.submit_enter() {
                    Ok(submission) => log::debug!("Submitted row: {submission:?}"),
                    Err(err) => log::debug!("Row not accepted: {err}"),
                },
            },
            Some(_) if key.is_reset() => {
                self.submit_reset();
            }
            Some(_) => {}
        }
    }

    /// Type a letter at the cursor
    ///
    /// Returns `false` if the input was ignored: not a letter, no round in
    /// progress, or the row is already full.
    pub fn submit_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.status != GameStatus::InProgress {
            return false;
        }

        let row = session.board.cursor().row;
        let Some(col) = session.board.place_letter(letter as u8) else {
            return false;
        };

        self.renderer.cell_updated(
            row,
            col,
            Some(letter.to_ascii_uppercase()),
            CellState::Filled,
        );
        self.effects
            .schedule(self.clock, Duration::ZERO, Effect::cell(EffectKind::Zoom, row, col));
        self.effects
            .schedule(self.clock, ZOOM_DURATION, Effect::cell(EffectKind::Settle, row, col));
        true
    }

    /// Delete the last letter of the active row
    ///
    /// Returns `false` if the row is empty or no round is in progress.
    pub fn submit_backspace(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.status != GameStatus::InProgress {
            return false;
        }

        let row = session.board.cursor().row;
        let Some(col) = session.board.remove_letter() else {
            return false;
        };

        self.renderer.cell_updated(row, col, None, CellState::Empty);
        true
    }

    /// Submit the active row
    ///
    /// # Errors
    /// Returns `GuessError::IncompleteRow` (nothing is shown) if the row is not
    /// full, and `GuessError::InvalidWord` (the row shakes and a notice is
    /// shown) if it is not a listed word. Either way the player keeps the row.
    pub fn submit_enter(&mut self) -> Result<Submission, GuessError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(Submission::Ignored);
        };
        if session.status != GameStatus::InProgress {
            return Ok(Submission::Ignored);
        }

        let cursor = session.board.cursor();
        let guess = session
            .board
            .current_row_text()
            .map_err(|_| GuessError::IncompleteRow { filled: cursor.col })?;

        if !self.words.is_valid(&guess) {
            for col in 0..cursor.col {
                self.effects.schedule(
                    self.clock,
                    Duration::ZERO,
                    Effect::cell(EffectKind::Shake, cursor.row, col),
                );
                self.effects.schedule(
                    self.clock,
                    SHAKE_DURATION,
                    Effect::cell(EffectKind::Settle, cursor.row, col),
                );
            }
            self.show_message(NOT_IN_WORD_LIST, MESSAGE_DURATION, false);
            return Err(GuessError::InvalidWord(guess));
        }

        if guess == session.target {
            self.finish_winning_row(cursor.row, &guess);
            return Ok(Submission::Won);
        }

        let feedback = Feedback::evaluate(&guess, &session.target);
        log::debug!(
            "Row {}: {guess} {} ({} green, {} yellow)",
            cursor.row + 1,
            feedback.to_emoji(),
            feedback.greens(),
            feedback.yellows()
        );
        self.reveal_row(cursor.row, &guess, &feedback);

        let Some(session) = self.session.as_mut() else {
            return Ok(Submission::Ignored);
        };
        session.guesses.push((guess, feedback));

        if session.board.on_last_row() {
            session.status = GameStatus::Lost;
            log::info!("Round lost; the word was {}", session.target);
            self.end_round(Outcome::Lost, LOSS_MESSAGE);
            return Ok(Submission::Lost(feedback));
        }

        session
            .board
            .advance_row()
            .expect("final row is resolved before advancing");

        if let Some(tier) = feedback.tier() {
            self.show_message(tier.message(), MESSAGE_DURATION, false);
        }
        Ok(Submission::Continued(feedback))
    }

    /// Start a new round after the current one has ended
    ///
    /// Returns `false` (and changes nothing) while a round is in progress or
    /// the word list is not loaded.
    pub fn submit_reset(&mut self) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        if !session.status.is_terminal() {
            return false;
        }

        let target = match self.words.pick_random_with(&mut self.rng) {
            Ok(word) => word.clone(),
            Err(err) => {
                log::error!("Cannot start a new round: {err}");
                return false;
            }
        };

        log::info!("Starting a new round");
        self.start_round(target);
        true
    }

    /// Advance the clock and deliver every visual effect now due
    ///
    /// `now` is the time elapsed since the caller's epoch; it never moves
    /// backwards.
    pub fn tick(&mut self, now: Duration) {
        self.clock = self.clock.max(now);
        for effect in self.effects.drain_due(self.clock) {
            self.renderer.effect(&effect);
        }
    }

    fn start_round(&mut self, target: Word) {
        let generation = self.effects.advance_generation();
        log::debug!("Round {generation} target: {target}");
        self.session = Some(GameSession::new(target, generation));
        self.renderer.round_started(generation);
    }

    fn finish_winning_row(&mut self, row: usize, guess: &Word) {
        self.reveal_row(row, guess, &Feedback::SOLVED);

        for col in 0..WORD_LENGTH {
            let delay = BOUNCE_DELAY + BOUNCE_STAGGER * col as u32;
            self.effects
                .schedule(self.clock, delay, Effect::cell(EffectKind::Bounce, row, col));
        }

        if let Some(session) = self.session.as_mut() {
            session.guesses.push((guess.clone(), Feedback::SOLVED));
            session.status = GameStatus::Won;
            log::info!("Round won in {} guesses", session.guesses.len());
        }
        self.end_round(Outcome::Won, WIN_MESSAGE);
    }

    /// Report verdicts for a row, flip its tiles and colour the keyboard
    fn reveal_row(&mut self, row: usize, guess: &Word, feedback: &Feedback) {
        for (col, &verdict) in feedback.verdicts().iter().enumerate() {
            self.renderer.letter_verdict(row, col, verdict);
            self.effects.schedule(
                self.clock,
                FLIP_STAGGER * col as u32,
                Effect::cell(EffectKind::Flip(verdict), row, col),
            );
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        for (letter, verdict) in session.keys.record_row(guess, feedback.verdicts()) {
            self.renderer.key_verdict(char::from(letter), verdict);
        }
    }

    fn end_round(&mut self, outcome: Outcome, headline: &str) {
        self.show_message(headline, END_MESSAGE_DURATION, false);
        self.show_message(PLAY_AGAIN_MESSAGE, END_MESSAGE_DURATION, true);
        self.renderer.game_ended(outcome);
    }

    /// Show a message; short ones clear themselves, longer ones stay until
    /// replaced
    fn show_message(&mut self, text: &str, duration: Duration, append: bool) {
        if !append {
            self.effects
                .cancel(|effect| effect.kind == EffectKind::ClearMessage);
        }
        self.renderer.message(text, duration, append);
        if duration <= MESSAGE_DURATION {
            self.effects
                .schedule(self.clock, duration, Effect::clear_message());
        }
    }
}

impl<R: Renderer> fmt::Debug for GameController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("words", &self.words.len())
            .field("session", &self.session)
            .field("pending_effects", &self.effects.len())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict;
    use crate::wordlists::loader::words_from_slice;

    #[derive(Debug, Default)]
    struct Recorder {
        cells: Vec<(usize, usize, Option<char>)>,
        verdicts: Vec<(usize, usize, LetterVerdict)>,
        keys: Vec<(char, LetterVerdict)>,
        messages: Vec<(String, bool)>,
        outcomes: Vec<Outcome>,
        rounds: Vec<u64>,
        effects: Vec<Effect>,
    }

    impl Renderer for Recorder {
        fn cell_updated(&mut self, row: usize, col: usize, letter: Option<char>, _: CellState) {
            self.cells.push((row, col, letter));
        }

        fn letter_verdict(&mut self, row: usize, col: usize, verdict: LetterVerdict) {
            self.verdicts.push((row, col, verdict));
        }

        fn key_verdict(&mut self, letter: char, verdict: LetterVerdict) {
            self.keys.push((letter, verdict));
        }

        fn message(&mut self, text: &str, _: Duration, append: bool) {
            self.messages.push((text.to_string(), append));
        }

        fn game_ended(&mut self, outcome: Outcome) {
            self.outcomes.push(outcome);
        }

        fn round_started(&mut self, generation: u64) {
            self.rounds.push(generation);
        }

        fn effect(&mut self, effect: &Effect) {
            self.effects.push(*effect);
        }
    }

    fn controller(target: &str) -> GameController<Recorder> {
        let words = WordSource::new(words_from_slice(&[
            "crane", "stale", "lemon", "llama", "bumpy", "fjord", "glyph",
        ]));
        let mut game = GameController::with_seed(Recorder::default(), 1);
        game.load_with_target(words, Word::new(target).unwrap())
            .unwrap();
        game
    }

    fn type_word(game: &mut GameController<Recorder>, word: &str) {
        for ch in word.chars() {
            game.submit_letter(ch);
        }
    }

    fn guess(game: &mut GameController<Recorder>, word: &str) -> Result<Submission, GuessError> {
        type_word(game, word);
        game.submit_enter()
    }

    #[test]
    fn input_is_ignored_while_loading() {
        let mut game = GameController::with_seed(Recorder::default(), 1);
        assert!(game.is_loading());
        assert!(!game.submit_letter('a'));
        assert!(!game.submit_backspace());
        assert_eq!(game.submit_enter(), Ok(Submission::Ignored));
        assert!(!game.submit_reset());
        assert!(game.renderer().cells.is_empty());
    }

    #[test]
    fn empty_word_list_keeps_loading() {
        let mut game = GameController::with_seed(Recorder::default(), 1);
        let result = game.load(WordSource::default());
        assert!(matches!(result, Err(WordListError::Empty)));
        assert!(game.is_loading());
        assert_eq!(game.renderer().messages[0].0, LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn load_picks_target_from_list() {
        let words = WordSource::new(words_from_slice(&["crane", "stale"]));
        let mut game = GameController::with_seed(Recorder::default(), 9);
        game.load(words).unwrap();

        let session = game.session().unwrap();
        assert!(game.words().is_valid(session.target()));
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(game.renderer().rounds, vec![1]);
    }

    #[test]
    fn letters_fill_row_and_stop_when_full() {
        let mut game = controller("crane");
        type_word(&mut game, "stalex");

        let session = game.session().unwrap();
        assert_eq!(session.cursor(), Cursor { row: 0, col: 5 });
        assert_eq!(game.renderer().cells.len(), 5);
        assert_eq!(game.renderer().cells[0], (0, 0, Some('S')));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut game = controller("crane");
        assert!(!game.submit_letter('1'));
        assert!(!game.submit_letter(' '));
        assert_eq!(game.session().unwrap().cursor().col, 0);
    }

    #[test]
    fn backspace_clears_last_letter() {
        let mut game = controller("crane");
        type_word(&mut game, "cr");
        assert!(game.submit_backspace());
        assert!(game.submit_backspace());
        assert!(!game.submit_backspace());

        assert_eq!(game.session().unwrap().cursor().col, 0);
        assert_eq!(game.renderer().cells.last(), Some(&(0, 0, None)));
    }

    #[test]
    fn incomplete_row_is_silent() {
        let mut game = controller("crane");
        type_word(&mut game, "cra");
        assert_eq!(
            game.submit_enter(),
            Err(GuessError::IncompleteRow { filled: 3 })
        );
        assert!(game.renderer().messages.is_empty());
        assert_eq!(game.pending_effects(), 6); // zoom + settle per letter
    }

    #[test]
    fn unknown_word_shakes_and_keeps_row() {
        let mut game = controller("crane");
        let result = guess(&mut game, "abcde");
        assert_eq!(
            result,
            Err(GuessError::InvalidWord(Word::new("abcde").unwrap()))
        );
        assert_eq!(
            game.renderer().messages,
            vec![(NOT_IN_WORD_LIST.to_string(), false)]
        );

        game.tick(Duration::from_millis(1));
        let shakes = game
            .renderer()
            .effects
            .iter()
            .filter(|e| e.kind == EffectKind::Shake)
            .count();
        assert_eq!(shakes, 5);

        // Same row, player may edit
        assert_eq!(game.session().unwrap().cursor(), Cursor { row: 0, col: 5 });
        assert!(game.submit_backspace());
    }

    #[test]
    fn wrong_guess_reports_verdicts_and_tier() {
        let mut game = controller("crane");
        let result = guess(&mut game, "stale").unwrap();
        let Submission::Continued(feedback) = result else {
            panic!("expected the round to continue, got {result:?}");
        };
        assert_eq!(feedback.score(), 4);

        let recorder = game.renderer();
        assert_eq!(recorder.verdicts.len(), 5);
        assert_eq!(recorder.verdicts[2], (0, 2, LetterVerdict::Correct));
        assert_eq!(recorder.messages, vec![("Great🌟".to_string(), false)]);
        assert_eq!(game.session().unwrap().cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn zero_score_row_shows_no_message() {
        let mut game = controller("crane");
        guess(&mut game, "glyph").unwrap();
        assert!(game.renderer().messages.is_empty());
    }

    #[test]
    fn winning_row_ends_round() {
        let mut game = controller("crane");
        assert_eq!(guess(&mut game, "crane"), Ok(Submission::Won));

        let recorder = game.renderer();
        assert!(
            recorder
                .verdicts
                .iter()
                .all(|&(_, _, v)| v == LetterVerdict::Correct)
        );
        assert_eq!(recorder.outcomes, vec![Outcome::Won]);
        assert_eq!(
            recorder.messages,
            vec![
                (WIN_MESSAGE.to_string(), false),
                (PLAY_AGAIN_MESSAGE.to_string(), true),
            ]
        );
        assert_eq!(game.session().unwrap().keys().get(b'C'), Some(LetterVerdict::Correct));
    }

    #[test]
    fn terminal_round_ignores_play_input() {
        let mut game = controller("crane");
        guess(&mut game, "crane").unwrap();

        assert!(!game.submit_letter('a'));
        assert!(!game.submit_backspace());
        assert_eq!(game.submit_enter(), Ok(Submission::Ignored));
    }

    #[test]
    fn reset_only_accepted_when_round_over() {
        let mut game = controller("crane");
        type_word(&mut game, "cr");
        assert!(!game.submit_reset());
        assert_eq!(game.session().unwrap().cursor().col, 2);
    }

    #[test]
    fn handle_key_routes_r_by_state() {
        let mut game = controller("crane");
        game.handle_key(Key::Letter(b'R'));
        assert_eq!(game.session().unwrap().cursor().col, 1);

        game.handle_key(Key::Backspace);
        for key in ["C", "R", "A", "N", "E", "ENTER"] {
            game.handle_key(Key::parse(key).unwrap());
        }
        assert_eq!(game.status(), Some(GameStatus::Won));

        game.handle_key(Key::Enter);
        assert_eq!(game.status(), Some(GameStatus::Won));

        game.handle_key(Key::Letter(b'R'));
        assert_eq!(game.status(), Some(GameStatus::InProgress));
        assert_eq!(game.session().unwrap().generation(), 2);
    }

    #[test]
    fn short_messages_clear_and_long_ones_stay() {
        let mut game = controller("crane");
        guess(&mut game, "stale").unwrap();
        game.tick(MESSAGE_DURATION);
        assert!(game.renderer().effects.contains(&Effect::clear_message()));

        let mut game = controller("crane");
        guess(&mut game, "crane").unwrap();
        game.tick(Duration::from_secs(60));
        assert!(!game.renderer().effects.contains(&Effect::clear_message()));
    }

    #[test]
    fn end_message_outlives_earlier_clear_timer() {
        let mut game = controller("crane");
        guess(&mut game, "stale").unwrap();
        game.tick(Duration::from_millis(1500));

        // The tier message's clear is still pending when the round is won
        assert_eq!(guess(&mut game, "crane"), Ok(Submission::Won));
        game.tick(Duration::from_secs(10));

        assert!(!game.renderer().effects.contains(&Effect::clear_message()));
        let last = game.renderer().messages.last().map(|(text, _)| text.as_str());
        assert_eq!(last, Some(PLAY_AGAIN_MESSAGE));
    }

    #[test]
    fn flips_are_staggered_per_column() {
        let mut game = controller("crane");
        guess(&mut game, "stale").unwrap();

        game.tick(Duration::from_millis(499));
        let flips = |game: &GameController<Recorder>| {
            game.renderer()
                .effects
                .iter()
                .filter(|e| matches!(e.kind, EffectKind::Flip(_)))
                .count()
        };
        assert_eq!(flips(&game), 1);

        game.tick(Duration::from_millis(2000));
        assert_eq!(flips(&game), 5);
    }
}
