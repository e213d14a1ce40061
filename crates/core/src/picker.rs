//! Piece selection - a small deterministic RNG and the bomb-aware picker
//!
//! Selection is memoryless: every draw is independent, with a fixed
//! one-in-ten chance of a bomb and a uniform choice over the standard
//! kinds otherwise. There is no bag, so droughts and repeats happen.

use tui_bombtris_types::{PieceKind, BOMB_CHANCE_PERCENT, STANDARD_KINDS};

/// Linear congruential generator; deterministic and seedable, not crypto.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed of zero is remapped to one so the generator never sticks.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-ish value in 0..max. `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draws the next piece kind for a session
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
}

impl PiecePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw one kind: bomb with `BOMB_CHANCE_PERCENT` odds, otherwise a
    /// uniform pick over the eight standard kinds. Two independent draws,
    /// matching the memoryless selection rule.
    pub fn next_kind(&mut self) -> PieceKind {
        if self.rng.next_range(100) < BOMB_CHANCE_PERCENT {
            PieceKind::Bomb
        } else {
            STANDARD_KINDS[self.rng.next_range(STANDARD_KINDS.len() as u32) as usize]
        }
    }
}
