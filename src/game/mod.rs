//! Game orchestration
//!
//! The controller state machine, the renderer it reports to, the keys it
//! accepts, and the queue of timed visual effects.

mod controller;
pub mod effects;
mod input;
mod renderer;

pub use controller::{
    END_MESSAGE_DURATION, GameController, GameSession, GameStatus, GuessError, LOAD_FAILED_MESSAGE,
    LOSS_MESSAGE, MESSAGE_DURATION, NOT_IN_WORD_LIST, PLAY_AGAIN_MESSAGE, Submission, WIN_MESSAGE,
};
pub use effects::{Effect, EffectKind, EffectQueue};
pub use input::Key;
pub use renderer::{CellState, Outcome, Renderer};
