//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`arena`]: 10x20 cell grid with collision detection and row bookkeeping
//! - [`session`]: Complete session state including active piece, scoring, timing
//! - [`shape`]: Piece matrices, pure rotation, and the oscillating wall kick
//! - [`picker`]: Seeded piece selection with the bomb chance
//! - [`progression`]: Stage, gravity interval, and the high score record
//! - [`events`]: Change notifications the frontend drains each frame
//!
//! # Game Rules
//!
//! This implementation deliberately departs from modern guideline Tetris:
//!
//! - **Memoryless Selection**: Every draw is independent; 10% bomb, otherwise
//!   uniform over eight standard shapes (including the non-standard U).
//!   No bag, so droughts and repeats happen.
//! - **Bomb Pieces**: A single-cell bomb that detonates a 3x3 area on
//!   landing instead of settling, worth a flat 30 points
//! - **90% Row Rule**: A row clears when at least nine of its ten cells are
//!   filled; cleared rows flash white for 100ms before removal
//! - **Doubling Awards**: 10 points for the first row in a sweep, doubling
//!   per row (10, 20, 40, ...)
//! - **Score-Driven Stages**: One stage per 100 points; each stage shaves
//!   100ms off the gravity interval down to a 100ms floor
//!
//! # Example
//!
//! ```
//! use tui_bombtris_core::GameSession;
//! use tui_bombtris_types::{GameCommand, PieceKind};
//!
//! // Create a session and steer a piece to the floor
//! let mut session = GameSession::new(12345, 0);
//! session.spawn_kind(PieceKind::T);
//! session.apply_command(GameCommand::MoveLeft);
//! session.apply_command(GameCommand::Rotate);
//! session.apply_command(GameCommand::HardDrop);
//!
//! // The landed piece wrote its color values into the arena
//! assert!(session.arena().cells().iter().any(|&v| v != 0));
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Gravity**: 1000ms at stage one, 100ms less per stage, floor of 100ms
//! - **Row Flash**: 100ms per cleared row, counted on its own clock
//!
//! Call [`GameSession::tick`](session::GameSession::tick) every frame with
//! elapsed time. Row flashes keep counting while the session is paused;
//! gravity does not.

pub mod arena;
pub mod events;
pub mod picker;
pub mod progression;
pub mod session;
pub mod shape;

pub use tui_bombtris_types as types;

// Re-export commonly used types for convenience
pub use arena::Arena;
pub use events::GameEvent;
pub use picker::{PiecePicker, SimpleRng};
pub use progression::{drop_interval_ms, stage_for_score, Progression, ProgressionDelta};
pub use session::{ActivePiece, GameSession, MAX_PENDING_EVENTS};
pub use shape::{rotated, shape_for, try_rotate, ShapeMatrix, MAX_SHAPE_SIDE};
