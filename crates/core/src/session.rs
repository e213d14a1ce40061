//! Game session - one complete play session behind a single type
//!
//! `GameSession` owns the arena, the falling piece, piece selection,
//! scoring, and the row-clear state machine. Callers drive it with
//! [`GameSession::tick`] and [`GameSession::apply_command`] and read the
//! rest through accessors; rendering and audio live entirely outside.
//!
//! Timing model: gravity accumulates elapsed milliseconds and steps the
//! piece once the stage interval is exceeded. Row flashes run on their own
//! clock and keep counting even while the session is paused; gravity does
//! not.

use arrayvec::ArrayVec;

use crate::arena::Arena;
use crate::events::GameEvent;
use crate::picker::PiecePicker;
use crate::progression::Progression;
use crate::shape::{self, ShapeMatrix};
use tui_bombtris_types::{
    GameCommand, GamePhase, PieceKind, RotationDir, ARENA_HEIGHT, ARENA_WIDTH, BOMB_AWARD,
    BOMB_CELL, EMPTY_CELL, FLASH_CELL, ROW_BASE_AWARD, ROW_FLASH_MS,
};

/// Queue capacity for undrained events; overflow drops the newest.
pub const MAX_PENDING_EVENTS: usize = 32;

/// The falling piece: a shape matrix at an arena-space position.
///
/// Coordinates address the matrix's top-left corner and may sit outside
/// the arena as long as every non-zero cell stays inside.
#[derive(Debug, Clone)]
pub struct ActivePiece {
    matrix: ShapeMatrix,
    x: i32,
    y: i32,
}

impl ActivePiece {
    pub fn matrix(&self) -> &ShapeMatrix {
        &self.matrix
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Bottom-up row clearing in progress.
///
/// While a sweep runs there is no active piece, so movement commands are
/// naturally inert. `row` scans upward; a qualifying row flashes for
/// `flash_ms` before removal, and the same index is re-checked afterwards
/// because rows above have shifted into it.
#[derive(Debug, Clone)]
struct Sweep {
    row: usize,
    flash_ms: Option<u32>,
    /// Award for the next removed row; doubles with each row in one sweep
    award: u32,
}

pub struct GameSession {
    arena: Arena,
    active: Option<ActivePiece>,
    next_matrix: ShapeMatrix,
    picker: PiecePicker,
    progression: Progression,
    sweep: Option<Sweep>,
    score: u32,
    phase: GamePhase,
    drop_acc_ms: u32,
    events: ArrayVec<GameEvent, MAX_PENDING_EVENTS>,
}

impl GameSession {
    /// Start a session with the given RNG seed and stored best score.
    pub fn new(seed: u32, high_score: u32) -> Self {
        let mut picker = PiecePicker::new(seed);
        let first = shape::shape_for(picker.next_kind());
        let next = shape::shape_for(picker.next_kind());
        let mut session = Self {
            arena: Arena::new(),
            active: None,
            next_matrix: next,
            picker,
            progression: Progression::new(high_score),
            sweep: None,
            score: 0,
            phase: GamePhase::Running,
            drop_acc_ms: 0,
            events: ArrayVec::new(),
        };
        session.place_piece(first);
        session
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Mutable arena access for scripted setups and benchmarks.
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// The piece that spawns after the current one lands.
    pub fn next_matrix(&self) -> &ShapeMatrix {
        &self.next_matrix
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn stage(&self) -> u32 {
        self.progression.stage()
    }

    pub fn high_score(&self) -> u32 {
        self.progression.high_score()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.progression.drop_interval_ms()
    }

    pub fn is_sweeping(&self) -> bool {
        self.sweep.is_some()
    }

    /// Drain the events queued since the last call.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, MAX_PENDING_EVENTS> {
        std::mem::take(&mut self.events)
    }

    /// Advance the simulation by `elapsed_ms` of wall time.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        if self.sweep.is_some() {
            // Flashes keep their own clock and ignore the pause gate.
            self.advance_sweep(elapsed_ms);
            return;
        }
        if self.phase != GamePhase::Running {
            return;
        }
        self.drop_acc_ms += elapsed_ms;
        if self.drop_acc_ms > self.progression.drop_interval_ms() {
            self.soft_drop_step();
        }
    }

    /// Apply one player command, honoring the phase gates: restart works
    /// only after a game over, pause toggles outside of game over, and
    /// everything else requires a running session.
    pub fn apply_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.restart();
                }
            }
            GameCommand::TogglePause => self.toggle_pause(),
            _ if self.phase != GamePhase::Running => {}
            GameCommand::MoveLeft => self.move_horizontal(-1),
            GameCommand::MoveRight => self.move_horizontal(1),
            GameCommand::SoftDrop => self.soft_drop_step(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Rotate => self.rotate_piece(RotationDir::Cw),
        }
    }

    /// Replace the falling piece with a freshly spawned one of the given
    /// kind. Scripted scenarios and benchmarks drive the session this way.
    pub fn spawn_kind(&mut self, kind: PieceKind) {
        self.place_piece(shape::shape_for(kind));
    }

    /// Zero the 3x3 neighborhood centered on (x, y), clipped to the arena
    /// edges, and bank the bomb bonus. The arena effect is idempotent.
    pub fn explode_bomb(&mut self, x: i32, y: i32) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                self.arena.set(x + dx, y + dy, EMPTY_CELL);
            }
        }
        self.score += BOMB_AWARD;
        self.push_event(GameEvent::BombExploded { x, y });
    }

    fn move_horizontal(&mut self, dx: i32) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let x = active.x + dx;
        if !self.arena.collides(&active.matrix, x, active.y) {
            active.x = x;
        }
    }

    fn rotate_piece(&mut self, dir: RotationDir) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let arena = &self.arena;
        let y = active.y;
        let kicked = shape::try_rotate(&active.matrix, active.x, dir, |matrix, x| {
            arena.collides(matrix, x, y)
        });
        if let Some((matrix, x)) = kicked {
            active.matrix = matrix;
            active.x = x;
        }
    }

    /// One gravity step: move the piece down a row, merging it on contact.
    /// Resets the gravity clock, so manual soft drops delay the next
    /// automatic one.
    fn soft_drop_step(&mut self) {
        self.drop_acc_ms = 0;
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.y += 1;
        if self.arena.collides(&active.matrix, active.x, active.y) {
            active.y -= 1;
            self.merge_active();
        }
    }

    fn hard_drop(&mut self) {
        self.drop_acc_ms = 0;
        let Some(active) = self.active.as_mut() else {
            return;
        };
        while !self.arena.collides(&active.matrix, active.x, active.y + 1) {
            active.y += 1;
        }
        self.merge_active();
    }

    /// Stamp the landed piece into the arena. Each cell dispatches on its
    /// value: the bomb marker detonates instead of settling, everything
    /// else is written as-is. A sweep follows; the replacement piece
    /// spawns once the sweep finishes.
    fn merge_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        for (dx, dy, value) in piece.matrix.cells() {
            if value == EMPTY_CELL {
                continue;
            }
            let (cx, cy) = (piece.x + dx, piece.y + dy);
            if value == BOMB_CELL {
                self.explode_bomb(cx, cy);
            } else {
                self.arena.set(cx, cy, value);
            }
        }
        self.report_progress();
        self.start_sweep();
    }

    fn start_sweep(&mut self) {
        self.sweep = Some(Sweep {
            row: ARENA_HEIGHT - 1,
            flash_ms: None,
            award: ROW_BASE_AWARD,
        });
        self.scan_sweep();
    }

    /// Walk the scan cursor upward until a row qualifies (start its flash)
    /// or the top is passed (end the sweep and spawn the next piece).
    fn scan_sweep(&mut self) {
        let Some(sweep) = self.sweep.as_mut() else {
            return;
        };
        loop {
            if self.arena.is_row_clearable(sweep.row) {
                self.arena.fill_row(sweep.row, FLASH_CELL);
                sweep.flash_ms = Some(ROW_FLASH_MS);
                return;
            }
            if sweep.row == 0 {
                break;
            }
            sweep.row -= 1;
        }
        self.sweep = None;
        self.spawn_next();
    }

    /// Count down the current flash; on expiry remove the row, bank its
    /// award, and resume the scan at the same index since everything above
    /// has shifted down into it. Leftover tick time is not carried over;
    /// each row flashes for its full duration.
    fn advance_sweep(&mut self, elapsed_ms: u32) {
        let Some(sweep) = self.sweep.as_mut() else {
            return;
        };
        let Some(flash_ms) = sweep.flash_ms.as_mut() else {
            return;
        };
        if *flash_ms > elapsed_ms {
            *flash_ms -= elapsed_ms;
            return;
        }
        sweep.flash_ms = None;
        let row = sweep.row;
        let award = sweep.award;
        sweep.award = award * 2;
        self.arena.remove_row_shift_down(row);
        self.score += award;
        self.push_event(GameEvent::RowCleared { row });
        self.report_progress();
        self.scan_sweep();
    }

    fn spawn_next(&mut self) {
        let matrix = std::mem::replace(
            &mut self.next_matrix,
            shape::shape_for(self.picker.next_kind()),
        );
        self.place_piece(matrix);
    }

    /// Put a piece at its spawn position: horizontally centered on the top
    /// row. A spawn that already collides ends the game.
    fn place_piece(&mut self, matrix: ShapeMatrix) {
        let x = (ARENA_WIDTH / 2) as i32 - (matrix.width() / 2) as i32;
        if self.arena.collides(&matrix, x, 0) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            self.push_event(GameEvent::GameOver);
        } else {
            self.active = Some(ActivePiece { matrix, x, y: 0 });
        }
    }

    fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    /// Fresh arena and score, same record and same queued next piece. The
    /// stage drops back to one without a notification.
    fn restart(&mut self) {
        self.arena.clear();
        self.score = 0;
        self.drop_acc_ms = 0;
        self.sweep = None;
        self.progression.reset_stage();
        self.phase = GamePhase::Running;
        self.spawn_next();
    }

    fn report_progress(&mut self) {
        let delta = self.progression.update(self.score);
        if let Some(stage) = delta.stage_changed {
            self.push_event(GameEvent::StageChanged { stage });
        }
        if let Some(score) = delta.new_high_score {
            self.push_event(GameEvent::HighScore { score });
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        let _ = self.events.try_push(event);
    }
}
