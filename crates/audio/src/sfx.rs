//! Note tables for the game's sound effects.

use crate::types::SoundEffect;

/// Notes as (frequency Hz, duration ms) pairs, played back to back.
pub(crate) fn notes_for(effect: SoundEffect) -> Vec<(f32, u32)> {
    match effect {
        SoundEffect::Clear => vec![(523.0, 40), (659.0, 40), (784.0, 60)],
        SoundEffect::StageUp => vec![(523.0, 50), (659.0, 50), (784.0, 50), (1047.0, 80)],
        SoundEffect::Bomb => vec![(180.0, 40), (120.0, 60), (80.0, 90)],
        SoundEffect::GameOver => vec![(440.0, 150), (370.0, 150), (311.0, 150), (247.0, 300)],
    }
}
