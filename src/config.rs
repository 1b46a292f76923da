use std::time::Duration;

/// Grid dimensions (60x35 = 2100 cells, sized for a terminal or <pre> block)
pub const GRID_WIDTH: usize = 60;
pub const GRID_HEIGHT: usize = 35;

// ============================================
// Seeding
// ============================================

/// Number of seed patterns stamped per reset, inclusive range
pub const MIN_SEED_PATTERNS: usize = 3;
pub const MAX_SEED_PATTERNS: usize = 5;

/// Placement origins are drawn from [0, size - SEED_EDGE_BUFFER).
/// Only the origin is constrained; a pattern may still run past the buffer and wrap.
pub const SEED_EDGE_BUFFER: usize = 10;

/// Uniform noise density overlaid on dead cells after stamping, half-open range
pub const NOISE_DENSITY_MIN: f64 = 0.10;
pub const NOISE_DENSITY_MAX: f64 = 0.15;

/// Probability checked (twice, short-circuiting) when choosing a flip axis.
/// P(horizontal) = 0.3, P(vertical) = 0.7 * 0.3 = 0.21, P(none) = 0.49
pub const FLIP_PROBABILITY: f64 = 0.3;

// ============================================
// Collision detection
// ============================================

/// Smallest birth cluster reported as a collision
pub const MIN_CLUSTER_SIZE: usize = 3;

/// Maximum Euclidean distance from the cluster seed for a birth to join
pub const MAX_CLUSTER_DISTANCE: f64 = 5.0;

// ============================================
// Animation
// ============================================

/// Frames per unit of field time (higher = slower)
pub const SLOWDOWN_FACTOR: f64 = 12.0;

/// Frame counter wraps here
pub const FRAME_WRAP: u32 = 2880;

/// The automaton advances once every this many frames
pub const LIFE_UPDATE_INTERVAL: u32 = 6;

/// Clamp ranges for the playback modifiers
pub const SPEED_RANGE: (f64, f64) = (0.1, 2.0);
pub const FIELD_GAIN_RANGE: (f64, f64) = (0.5, 2.0);

/// Weight and falloff of pointer influence on field patterns
pub const POINTER_INFLUENCE: f64 = 0.5;
pub const POINTER_FALLOFF: f64 = 0.1;

/// Runtime multiplier on the pointer ripple, its clamp range and starting value.
/// 1.0 keeps the full 0.5 ripple of the standalone visualizer.
pub const POINTER_INFLUENCE_RANGE: (f64, f64) = (0.0, 1.0);
pub const DEFAULT_POINTER_INFLUENCE: f64 = 1.0;

// ============================================
// Audio mapping
// ============================================

/// MIDI note range mapped across the grid width (C3..C6)
pub const MIN_MIDI_NOTE: u8 = 48;
pub const MAX_MIDI_NOTE: u8 = 84;

/// Note duration range mapped down the grid height, in seconds
pub const MIN_NOTE_DURATION: f64 = 0.1;
pub const MAX_NOTE_DURATION: f64 = 0.5;

/// Minimum gap between note batches
pub const NOTE_THROTTLE: Duration = Duration::from_millis(50);

/// Births beyond this many per tick are not voiced
pub const MAX_NOTES_PER_TICK: usize = 5;

/// Stagger between consecutive notes of one batch
pub const NOTE_STAGGER: Duration = Duration::from_millis(20);

/// Pink-noise texture level while the pointer is held in a field mode, in dB
pub const NOISE_VOLUME_DB: f64 = -20.0;

/// Tail after the noise texture is released
pub const NOISE_RELEASE: Duration = Duration::from_millis(200);

/// Chord length in seconds
pub const CHORD_DURATION: f64 = 0.5;

/// Ambient volume range driven by population density, in dB
pub const MIN_VOLUME_DB: f64 = -40.0;
pub const MAX_VOLUME_DB: f64 = -10.0;

/// Collision intensity at which a chord cue reaches full velocity
pub const FULL_VELOCITY_INTENSITY: usize = 8;
