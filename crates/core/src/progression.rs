//! Stage and record progression
//!
//! Stage is derived from score alone: one stage per hundred points, with
//! the gravity interval shrinking a tenth of a second per stage down to a
//! floor. The high score only ever rises.

use tui_bombtris_types::{
    BASE_DROP_MS, MIN_DROP_MS, STAGE_DROP_STEP_MS, STAGE_SCORE_STEP,
};

/// Stage for a score total: every full hundred points is one stage up.
pub fn stage_for_score(score: u32) -> u32 {
    score / STAGE_SCORE_STEP + 1
}

/// Gravity interval for a stage, clamped to the minimum.
pub fn drop_interval_ms(stage: u32) -> u32 {
    let reduction = stage.saturating_sub(1).saturating_mul(STAGE_DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(reduction).max(MIN_DROP_MS)
}

/// What a score update changed, for event reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressionDelta {
    /// New stage when the score crossed a boundary
    pub stage_changed: Option<u32>,
    /// New record when the score passed the previous best
    pub new_high_score: Option<u32>,
}

/// Tracks the current stage and the best score seen so far
#[derive(Debug, Clone)]
pub struct Progression {
    stage: u32,
    high_score: u32,
}

impl Progression {
    pub fn new(high_score: u32) -> Self {
        Self {
            stage: 1,
            high_score,
        }
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.stage)
    }

    /// Fold in a new score total. Each stage boundary and each fresh record
    /// is reported exactly once.
    pub fn update(&mut self, score: u32) -> ProgressionDelta {
        let mut delta = ProgressionDelta::default();
        let stage = stage_for_score(score);
        if stage != self.stage {
            self.stage = stage;
            delta.stage_changed = Some(stage);
        }
        if score > self.high_score {
            self.high_score = score;
            delta.new_high_score = Some(score);
        }
        delta
    }

    /// Drop back to stage one without reporting a change. The record stays.
    pub fn reset_stage(&mut self) {
        self.stage = 1;
    }
}
