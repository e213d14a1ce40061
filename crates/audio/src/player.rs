//! rodio playback: one sink for music, one for effects.

use rodio::{OutputStream, Sink};

use crate::sfx;
use crate::synth::{BgmSource, SfxSource};
use crate::types::SoundEffect;

/// Owns the output stream and the two sinks playing on it.
///
/// The stream handle must outlive the sinks, so it is kept even though
/// nothing reads it after construction.
pub struct AudioPlayer {
    _stream: OutputStream,
    bgm_sink: Sink,
    sfx_sink: Sink,
}

impl AudioPlayer {
    /// `None` when the host has no usable audio device.
    pub fn new() -> Option<Self> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        let bgm_sink = Sink::try_new(&handle).ok()?;
        let sfx_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream: stream,
            bgm_sink,
            sfx_sink,
        })
    }

    /// Start the music loop from the top, replacing whatever is queued.
    pub fn play_bgm(&self) {
        self.bgm_sink.clear();
        self.bgm_sink.append(BgmSource::new());
        self.bgm_sink.play();
    }

    pub fn stop_bgm(&self) {
        self.bgm_sink.clear();
    }

    /// Cut any running effect short and play this one.
    pub fn play_sfx(&self, effect: SoundEffect) {
        self.sfx_sink.clear();
        self.sfx_sink.append(SfxSource::new(sfx::notes_for(effect)));
        self.sfx_sink.play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_is_fallible_not_panicky() {
        // Headless machines have no output device; new() must return None
        // there rather than abort.
        let _ = AudioPlayer::new();
    }
}
