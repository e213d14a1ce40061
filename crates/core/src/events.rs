//! Events the frontend drains after each simulation step

/// One observable change produced by the simulation.
///
/// The session queues these as they happen; callers drain the queue once
/// per frame and react (sound, persistence, popups) without the core
/// knowing any of that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A row finished flashing and was removed
    RowCleared { row: usize },
    /// A bomb detonated centered on the given arena cell
    BombExploded { x: i32, y: i32 },
    /// The score crossed a stage boundary; carries the new stage
    StageChanged { stage: u32 },
    /// The score passed the stored record
    HighScore { score: u32 },
    /// A fresh piece had nowhere to spawn
    GameOver,
}
