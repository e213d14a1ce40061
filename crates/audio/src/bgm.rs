//! Background music: a 16-beat chiptune loop.
//!
//! Am - F - C - G, a held bass root under an eighth-note arpeggio lead.
//! The synth mixes overlapping notes, so bass and lead are just entries in
//! the same table.

/// Lead line, one note per half beat.
const LEAD: [f32; 32] = [
    // Am
    440.00, 523.25, 659.25, 523.25, 440.00, 659.25, 523.25, 440.00,
    // F
    349.23, 440.00, 523.25, 440.00, 349.23, 523.25, 440.00, 349.23,
    // C
    261.63, 329.63, 392.00, 329.63, 523.25, 392.00, 329.63, 261.63,
    // G
    392.00, 493.88, 587.33, 493.88, 392.00, 587.33, 493.88, 392.00,
];

/// Bass roots, one per chord.
const BASS: [(f32, f32); 4] = [(0.0, 110.00), (4.0, 87.31), (8.0, 130.81), (12.0, 98.00)];

/// Build the loop as (start beat, duration beats, frequency) entries,
/// sorted by start beat as the synth's scan expects.
pub(crate) fn build_notes() -> Vec<(f32, f32, f32)> {
    let mut notes = Vec::with_capacity(LEAD.len() + BASS.len());
    for (start, freq) in BASS {
        notes.push((start, 4.0, freq));
    }
    for (i, freq) in LEAD.iter().enumerate() {
        notes.push((i as f32 * 0.5, 0.5, *freq));
    }
    notes.sort_by(|a, b| a.0.total_cmp(&b.0));
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TOTAL_BEATS;

    #[test]
    fn loop_fills_the_full_length_without_spilling() {
        let notes = build_notes();
        assert_eq!(notes.len(), 36);
        for (start, dur, freq) in &notes {
            assert!(*start >= 0.0);
            assert!(start + dur <= TOTAL_BEATS);
            assert!(*freq > 0.0);
        }
        assert!(notes.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
