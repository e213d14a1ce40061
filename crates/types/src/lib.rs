//! Shared types module - plain data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, making them usable
//! in any context (simulation core, terminal rendering, input mapping).
//!
//! # Arena Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Cell Values
//!
//! Arena cells and shape-matrix cells share one `u8` value space:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0` | empty |
//! | `1..=8` | settled color, one per standard piece kind |
//! | `9` | flash marker (only present while a row clear animates) |
//! | `10` | bomb marker (never settles; resolved at merge time) |
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity at stage 1 |
//! | `STAGE_DROP_STEP_MS` | 100 | Gravity speedup per stage |
//! | `MIN_DROP_MS` | 100 | Gravity floor (stage 10+) |
//! | `ROW_FLASH_MS` | 100 | Flash duration before a cleared row is removed |
//! | `STAGE_POPUP_MS` | 1500 | Lifetime of the stage-up popup |
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROW_BASE_AWARD` | 10 | First row cleared in a sweep |
//! | `BOMB_AWARD` | 30 | Flat bonus per exploded bomb |
//! | `STAGE_SCORE_STEP` | 100 | Score span of one stage |
//!
//! The per-sweep row award doubles with every row cleared in the same sweep
//! (10, 20, 40, ...).
//!
//! # Examples
//!
//! ```
//! use tui_bombtris_types::{PieceKind, GameCommand, ARENA_WIDTH, ARENA_HEIGHT};
//!
//! assert_eq!(ARENA_WIDTH, 10);
//! assert_eq!(ARENA_HEIGHT, 20);
//!
//! // Each standard kind owns one color index; the bomb uses its marker value.
//! assert_eq!(PieceKind::T.fill_value(), 1);
//! assert_eq!(PieceKind::Bomb.fill_value(), 10);
//!
//! let cmd = GameCommand::MoveLeft;
//! assert_ne!(cmd, GameCommand::MoveRight);
//! ```

/// Arena width in cells (10 columns)
pub const ARENA_WIDTH: usize = 10;

/// Arena height in cells (20 rows)
pub const ARENA_HEIGHT: usize = 20;

/// Empty arena cell
pub const EMPTY_CELL: u8 = 0;

/// Transient marker a clearing row is filled with while it flashes
pub const FLASH_CELL: u8 = 9;

/// Bomb cell marker; resolved to an explosion at merge time, never settles
pub const BOMB_CELL: u8 = 10;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at stage 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speedup per stage beyond the first
pub const STAGE_DROP_STEP_MS: u32 = 100;

/// Gravity floor; stages 10 and above all drop at this interval
pub const MIN_DROP_MS: u32 = 100;

/// How long a clearing row stays filled with [`FLASH_CELL`] before removal
pub const ROW_FLASH_MS: u32 = 100;

/// Lifetime of the stage-up popup drawn by the view
pub const STAGE_POPUP_MS: u32 = 1500;

/// Score awarded for the first row cleared in a sweep (doubles per row)
pub const ROW_BASE_AWARD: u32 = 10;

/// Flat score bonus per exploded bomb
pub const BOMB_AWARD: u32 = 30;

/// Score span of one stage: `stage = score / 100 + 1`
pub const STAGE_SCORE_STEP: u32 = 100;

/// Bomb draw probability in percent (memoryless, per draw)
pub const BOMB_CHANCE_PERCENT: u32 = 10;

/// Row occupancy percentage at or above which a row is cleared
pub const CLEAR_THRESHOLD_PERCENT: usize = 90;

/// The nine piece kinds
///
/// Eight standard shapes plus the single-cell bomb. Each standard kind fills
/// its matrix with a distinct color index; the bomb fills its one cell with
/// the bomb marker:
///
/// - **T**: 1 (purple)
/// - **O**: 2 (yellow), 2x2 square
/// - **L**: 3 (orange)
/// - **J**: 4 (blue)
/// - **I**: 5 (aqua), 4-wide bar
/// - **S**: 6 (green)
/// - **Z**: 7 (red)
/// - **U**: 8 (pink), open-top cup
/// - **Bomb**: 10, single cell that clears its 3x3 neighborhood on landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    T,
    S,
    Z,
    U,
    Bomb,
}

/// The eight standard kinds, in selector draw order
pub const STANDARD_KINDS: [PieceKind; 8] = [
    PieceKind::I,
    PieceKind::L,
    PieceKind::J,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::U,
];

impl PieceKind {
    /// The cell value this kind's matrix is filled with
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bombtris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.fill_value(), 5);
    /// assert_eq!(PieceKind::U.fill_value(), 8);
    /// ```
    pub fn fill_value(self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
            PieceKind::U => 8,
            PieceKind::Bomb => BOMB_CELL,
        }
    }

    /// True for the single-cell bomb
    pub fn is_bomb(self) -> bool {
        matches!(self, PieceKind::Bomb)
    }
}

/// Rotation direction for the rotation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDir {
    /// Transpose, then reverse each row
    Cw,
    /// Transpose, then reverse the row order
    Ccw,
}

impl RotationDir {
    /// The direction that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            RotationDir::Cw => RotationDir::Ccw,
            RotationDir::Ccw => RotationDir::Cw,
        }
    }
}

/// Session phases driven by the loop controller
///
/// `Running` ⇄ `Paused` via the pause command; `Running` → `GameOver` when a
/// fresh spawn collides; `GameOver` → `Running` only via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

/// Player commands applied to the session
///
/// Each command maps 1:1 to a session operation. Commands other than
/// `Restart` are ignored outside the `Running` phase; `Restart` is accepted
/// only in `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, resetting the gravity accumulator
    SoftDrop,
    /// Rotate piece 90° clockwise with wall-kick search
    Rotate,
    /// Drop piece to the lowest non-colliding row and land it
    HardDrop,
    /// Toggle between `Running` and `Paused`
    TogglePause,
    /// Start a fresh game after game over
    Restart,
}

/// Sound effects reported to the audio collaborator
///
/// Fire-and-forget; background music start/stop is a player-level concern,
/// not an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A row finished clearing
    Clear,
    /// The stage number went up
    StageUp,
    /// A spawn collided; the session ended
    GameOver,
    /// A bomb cleared its neighborhood
    Bomb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_values_are_distinct_per_standard_kind() {
        let mut seen = [false; 9];
        for kind in STANDARD_KINDS {
            let v = kind.fill_value() as usize;
            assert!((1..=8).contains(&v), "{:?} outside color range", kind);
            assert!(!seen[v], "duplicate fill value {}", v);
            seen[v] = true;
        }
    }

    #[test]
    fn bomb_uses_the_bomb_marker() {
        assert_eq!(PieceKind::Bomb.fill_value(), BOMB_CELL);
        assert!(PieceKind::Bomb.is_bomb());
        assert!(!PieceKind::T.is_bomb());
    }

    #[test]
    fn rotation_inverse_round_trips() {
        assert_eq!(RotationDir::Cw.inverse(), RotationDir::Ccw);
        assert_eq!(RotationDir::Ccw.inverse(), RotationDir::Cw);
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(MIN_DROP_MS, 100);
        assert_eq!(ROW_FLASH_MS, 100);
        assert_eq!(STAGE_POPUP_MS, 1500);
    }
}
