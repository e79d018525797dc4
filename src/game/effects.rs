//! Timed visual feedback
//!
//! Animations and message expiry are scheduled on an `EffectQueue` and handed
//! to the renderer when due. They never touch game state. Every entry carries
//! the generation of the round that scheduled it; once a reset bumps the
//! generation, older entries are dropped instead of delivered.

use crate::core::LetterVerdict;
use std::time::Duration;

/// Zoom on a freshly typed letter lasts this long
pub const ZOOM_DURATION: Duration = Duration::from_millis(300);
/// Shake on a rejected row lasts this long
pub const SHAKE_DURATION: Duration = Duration::from_millis(1000);
/// Delay between tile flips within a row
pub const FLIP_STAGGER: Duration = Duration::from_millis(500);
/// Winning row starts bouncing after this delay
pub const BOUNCE_DELAY: Duration = Duration::from_millis(2500);
/// Delay between tile bounces within the winning row
pub const BOUNCE_STAGGER: Duration = Duration::from_millis(150);

/// What happens to a cell (or the message area) when an effect fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Letter pops in
    Zoom,
    /// Rejected row wiggles
    Shake,
    /// Tile turns over to reveal its verdict
    Flip(LetterVerdict),
    /// Winning tile bounces
    Bounce,
    /// Transient zoom/shake styling ends
    Settle,
    /// Message area empties
    ClearMessage,
}

/// A visual effect for one cell, or for the message area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub kind: EffectKind,
    /// Target cell as (row, col); `None` for the message area
    pub cell: Option<(usize, usize)>,
}

impl Effect {
    #[must_use]
    pub const fn cell(kind: EffectKind, row: usize, col: usize) -> Self {
        Self {
            kind,
            cell: Some((row, col)),
        }
    }

    #[must_use]
    pub const fn clear_message() -> Self {
        Self {
            kind: EffectKind::ClearMessage,
            cell: None,
        }
    }
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Duration,
    generation: u64,
    seq: u64,
    effect: Effect,
}

/// Effects waiting for their due time
#[derive(Debug, Default)]
pub struct EffectQueue {
    pending: Vec<Scheduled>,
    generation: u64,
    next_seq: u64,
}

impl EffectQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation; effects from earlier ones will never fire
    pub fn advance_generation(&mut self) -> u64 {
        self.generation += 1;
        let current = self.generation;
        let before = self.pending.len();
        self.pending.retain(|entry| entry.generation == current);
        let dropped = before - self.pending.len();
        if dropped > 0 {
            log::warn!("Dropped {dropped} pending effects from earlier rounds");
        }
        current
    }

    /// Schedule an effect `delay` after `now`
    pub fn schedule(&mut self, now: Duration, delay: Duration, effect: Effect) {
        self.pending.push(Scheduled {
            due: now + delay,
            generation: self.generation,
            seq: self.next_seq,
            effect,
        });
        self.next_seq += 1;
    }

    /// Remove and return every effect due at `now`, oldest first
    pub fn drain_due(&mut self, now: Duration) -> Vec<Effect> {
        let mut due = Vec::new();
        self.pending.retain(|entry| {
            if entry.due <= now {
                due.push(entry.clone());
                return false;
            }
            true
        });

        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.effect).collect()
    }

    /// Drop every pending effect of the current generation matching `predicate`
    pub fn cancel(&mut self, predicate: impl Fn(&Effect) -> bool) {
        self.pending.retain(|entry| !predicate(&entry.effect));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
