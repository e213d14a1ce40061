//! Square-wave audio for the terminal game.
//!
//! Every sound is synthesized on the fly; there are no asset files. Audio
//! is strictly optional: when no output device exists [`AudioPlayer::new`]
//! returns `None` and the game runs silent.

mod bgm;
mod player;
mod sfx;
mod synth;

pub use player::AudioPlayer;
pub use tui_bombtris_types as types;

const SAMPLE_RATE: u32 = 44100;
const BPM: f32 = 140.0;
const BEAT_DURATION: f32 = 60.0 / BPM;
const GAP_SAMPLES: u32 = (SAMPLE_RATE as f32 * 0.003) as u32;
const DUTY_CYCLE: f32 = 0.25;
const SFX_AMPLITUDE: f32 = 0.35;
const TOTAL_BEATS: f32 = 16.0;
