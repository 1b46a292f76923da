//! Mapping from grid events to audio parameters.
//!
//! Nothing here makes sound. The functions turn positions, births and collisions into
//! note and chord cues that a synthesiser can play.

use std::time::Duration;

use crate::config::{
    CHORD_DURATION, FULL_VELOCITY_INTENSITY, MAX_MIDI_NOTE, MAX_NOTES_PER_TICK, MAX_NOTE_DURATION,
    MAX_VOLUME_DB, MIN_MIDI_NOTE, MIN_NOTE_DURATION, MIN_VOLUME_DB, NOISE_RELEASE, NOISE_VOLUME_DB,
    NOTE_STAGGER, NOTE_THROTTLE,
};
use crate::field::FieldPattern;
use crate::simulation::{BirthEvent, Collision};

/// Column to MIDI note, spread linearly over C3..C6
pub fn x_to_midi_note(x: usize, width: usize) -> u8 {
    let normalized = x as f64 / width as f64;
    let span = f64::from(MAX_MIDI_NOTE - MIN_MIDI_NOTE);
    (f64::from(MIN_MIDI_NOTE) + normalized * span).floor() as u8
}

/// Equal-tempered frequency in Hz, A4 = 440
pub fn midi_to_frequency(note: u8) -> f64 {
    440.0 * 2f64.powf((f64::from(note) - 69.0) / 12.0)
}

/// Row to note length in seconds, 0.1 at the top to 0.5 at the bottom
pub fn y_to_duration(y: usize, height: usize) -> f64 {
    let normalized = y as f64 / height as f64;
    MIN_NOTE_DURATION + normalized * (MAX_NOTE_DURATION - MIN_NOTE_DURATION)
}

/// Major pentatonic scale over one octave, root included at both ends.
/// Degrees past the top of the u8 range pin at 255.
pub fn pentatonic_scale(root: u8) -> [u8; 6] {
    [0, 2, 4, 7, 9, 12].map(|step| root.saturating_add(step))
}

/// Closest note in `scale`; ties go to the earlier entry
pub fn quantize_to_scale(note: u8, scale: &[u8]) -> u8 {
    scale
        .iter()
        .copied()
        .min_by_key(|&candidate| (i16::from(note) - i16::from(candidate)).abs())
        .unwrap_or(note)
}

/// Population density in [0, 1] to an ambient volume in dB
pub fn density_to_volume(density: f64) -> f64 {
    MIN_VOLUME_DB + density * (MAX_VOLUME_DB - MIN_VOLUME_DB)
}

/// Triad played when a visual mode is entered or a collision fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chord {
    CMajor,
    DMinor,
    EMinor,
    FMajor,
    GMajor,
}

impl Chord {
    /// Chord for a field pattern; `None` selects the automaton's chord
    pub fn for_mode(pattern: Option<FieldPattern>) -> Self {
        match pattern {
            Some(FieldPattern::Balance) => Chord::CMajor,
            Some(FieldPattern::Duality) => Chord::DMinor,
            Some(FieldPattern::Flow) => Chord::EMinor,
            Some(FieldPattern::Chaos) => Chord::FMajor,
            None => Chord::GMajor,
        }
    }

    /// Note names in scientific pitch notation
    pub fn notes(self) -> [&'static str; 3] {
        match self {
            Chord::CMajor => ["C4", "E4", "G4"],
            Chord::DMinor => ["D4", "F4", "A4"],
            Chord::EMinor => ["E4", "G4", "B4"],
            Chord::FMajor => ["F4", "A4", "C5"],
            Chord::GMajor => ["G4", "B4", "D5"],
        }
    }
}

/// One note to trigger
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteCue {
    pub midi_note: u8,
    pub frequency: f64,
    /// Seconds
    pub duration: f64,
    /// Offset from the start of the tick
    pub delay: Duration,
}

impl NoteCue {
    /// Cue for a grid position
    pub fn at(x: usize, y: usize, width: usize, height: usize) -> Self {
        let midi_note = x_to_midi_note(x, width);
        Self {
            midi_note,
            frequency: midi_to_frequency(midi_note),
            duration: y_to_duration(y, height),
            delay: Duration::ZERO,
        }
    }
}

/// One chord to trigger
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChordCue {
    pub chord: Chord,
    /// Seconds
    pub duration: f64,
    /// 0..=1
    pub velocity: f64,
}

impl ChordCue {
    pub fn full(chord: Chord) -> Self {
        Self {
            chord,
            duration: CHORD_DURATION,
            velocity: 1.0,
        }
    }
}

/// Start or stop of the pink-noise texture held under a field-mode pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoiseCue {
    Start { volume_db: f64 },
    /// Fade out over `release`
    Stop { release: Duration },
}

impl NoiseCue {
    pub fn start() -> Self {
        NoiseCue::Start {
            volume_db: NOISE_VOLUME_DB,
        }
    }

    pub fn stop() -> Self {
        NoiseCue::Stop {
            release: NOISE_RELEASE,
        }
    }
}

/// Notes for the first few births of a tick, staggered so they do not stack
pub fn births_to_cues(births: &[BirthEvent], width: usize, height: usize) -> Vec<NoteCue> {
    births
        .iter()
        .take(MAX_NOTES_PER_TICK)
        .zip(0u32..)
        .map(|(birth, i)| NoteCue {
            delay: NOTE_STAGGER * i,
            ..NoteCue::at(birth.x, birth.y, width, height)
        })
        .collect()
}

/// Chord cues for collisions, louder for bigger clusters
pub fn collisions_to_cues(collisions: &[Collision], chord: Chord) -> Vec<ChordCue> {
    collisions
        .iter()
        .map(|collision| ChordCue {
            chord,
            duration: CHORD_DURATION,
            velocity: (collision.intensity as f64 / FULL_VELOCITY_INTENSITY as f64).min(1.0),
        })
        .collect()
}

/// Enforces a minimum gap between notes
#[derive(Debug, Clone)]
pub struct NoteThrottle {
    min_gap: Duration,
    last: Option<Duration>,
}

impl Default for NoteThrottle {
    fn default() -> Self {
        Self::new(NOTE_THROTTLE)
    }
}

impl NoteThrottle {
    pub fn new(min_gap: Duration) -> Self {
        Self { min_gap, last: None }
    }

    /// Whether a note may play at `now`, measured from any fixed start; records it if so
    pub fn admit(&mut self, now: Duration) -> bool {
        match self.last {
            Some(last) if now.saturating_sub(last) < self.min_gap => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_range() {
        assert_eq!(x_to_midi_note(0, 60), 48);
        assert_eq!(x_to_midi_note(30, 60), 66);
        assert_eq!(x_to_midi_note(59, 60), 83);
    }

    #[test]
    fn test_frequency() {
        assert!((midi_to_frequency(69) - 440.0).abs() < 1e-9);
        assert!((midi_to_frequency(81) - 880.0).abs() < 1e-9);
        assert!((midi_to_frequency(60) - 261.625_565).abs() < 1e-5);
    }

    #[test]
    fn test_duration_range() {
        assert!((y_to_duration(0, 35) - 0.1).abs() < 1e-12);
        assert!(y_to_duration(34, 35) < 0.5);
        assert!((y_to_duration(10, 20) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_scale_quantize() {
        let scale = pentatonic_scale(60);
        assert_eq!(scale, [60, 62, 64, 67, 69, 72]);
        assert_eq!(quantize_to_scale(61, &scale), 60);
        assert_eq!(quantize_to_scale(66, &scale), 67);
        assert_eq!(quantize_to_scale(90, &scale), 72);
        assert_eq!(quantize_to_scale(50, &[]), 50);
    }

    #[test]
    fn test_scale_saturates_at_top() {
        assert_eq!(pentatonic_scale(243), [243, 245, 247, 250, 252, 255]);
        assert_eq!(pentatonic_scale(250), [250, 252, 254, 255, 255, 255]);
        assert_eq!(pentatonic_scale(255), [255; 6]);
    }

    #[test]
    fn test_noise_cues() {
        assert_eq!(NoiseCue::start(), NoiseCue::Start { volume_db: -20.0 });
        assert_eq!(
            NoiseCue::stop(),
            NoiseCue::Stop {
                release: Duration::from_millis(200)
            }
        );
    }

    #[test]
    fn test_volume_range() {
        assert_eq!(density_to_volume(0.0), -40.0);
        assert_eq!(density_to_volume(1.0), -10.0);
    }

    #[test]
    fn test_chords() {
        assert_eq!(Chord::for_mode(None).notes(), ["G4", "B4", "D5"]);
        assert_eq!(Chord::for_mode(Some(FieldPattern::Balance)), Chord::CMajor);
    }

    #[test]
    fn test_birth_cues_capped_and_staggered() {
        let births: Vec<_> = (0..8).map(|x| BirthEvent { x, y: 0 }).collect();
        let cues = births_to_cues(&births, 60, 35);
        assert_eq!(cues.len(), MAX_NOTES_PER_TICK);
        assert_eq!(cues[0].delay, Duration::ZERO);
        assert_eq!(cues[2].delay, Duration::from_millis(40));
        assert_eq!(cues[1].midi_note, x_to_midi_note(1, 60));
    }

    #[test]
    fn test_collision_velocity() {
        let collisions = [
            Collision { x: 1, y: 1, intensity: 4 },
            Collision { x: 9, y: 9, intensity: 20 },
        ];
        let cues = collisions_to_cues(&collisions, Chord::GMajor);
        assert_eq!(cues.len(), 2);
        assert!((cues[0].velocity - 0.5).abs() < 1e-12);
        assert_eq!(cues[1].velocity, 1.0);
    }

    #[test]
    fn test_throttle() {
        let mut throttle = NoteThrottle::default();
        assert!(throttle.admit(Duration::from_millis(0)));
        assert!(!throttle.admit(Duration::from_millis(30)));
        assert!(throttle.admit(Duration::from_millis(50)));
        assert!(!throttle.admit(Duration::from_millis(99)));
        assert!(throttle.admit(Duration::from_millis(120)));
    }

    #[test]
    fn test_throttled_stagger_keeps_first_and_fourth() {
        let births: Vec<_> = (0..5).map(|x| BirthEvent { x, y: 0 }).collect();
        let mut throttle = NoteThrottle::default();
        let now = Duration::from_secs(3);
        let played: Vec<_> = births_to_cues(&births, 60, 35)
            .into_iter()
            .filter(|cue| throttle.admit(now + cue.delay))
            .map(|cue| cue.delay)
            .collect();
        assert_eq!(played, [Duration::ZERO, Duration::from_millis(60)]);
    }
}
