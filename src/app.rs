use std::time::{Duration, Instant};

use rand::Rng;

use crate::audio::{
    births_to_cues, collisions_to_cues, density_to_volume, Chord, ChordCue, NoiseCue, NoteCue,
    NoteThrottle,
};
use crate::config::{
    DEFAULT_POINTER_INFLUENCE, FIELD_GAIN_RANGE, FRAME_WRAP, LIFE_UPDATE_INTERVAL,
    POINTER_INFLUENCE_RANGE, SLOWDOWN_FACTOR, SPEED_RANGE,
};
use crate::error::Result;
use crate::field::{render_field, FieldPattern, FieldStyle};
use crate::render::to_ascii;
use crate::simulation::{detect_collisions, initialize_grid, BirthEvent, Collision, Grid};

/// What the visualizer is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Field(FieldPattern),
    Life,
}

impl Mode {
    /// Number of selectable modes: the four field patterns, then the automaton
    pub const COUNT: usize = FieldPattern::ALL.len() + 1;

    pub fn from_index(index: usize) -> Option<Self> {
        match FieldPattern::ALL.get(index) {
            Some(&pattern) => Some(Mode::Field(pattern)),
            None if index == FieldPattern::ALL.len() => Some(Mode::Life),
            None => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Field(pattern) => pattern.name(),
            Mode::Life => "Conway",
        }
    }

    pub fn chord(self) -> Chord {
        match self {
            Mode::Field(pattern) => Chord::for_mode(Some(pattern)),
            Mode::Life => Chord::for_mode(None),
        }
    }
}

/// User input, already mapped to grid coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    TogglePause,
    /// Reseed the automaton (life mode only)
    Reset,
    /// Rewind the frame counter and forget the pointer; in life mode also empties the grid
    Clear,
    /// Select a mode by index, see [`Mode::from_index`]
    Select(usize),
    /// Cycle to the next field pattern (field mode only)
    NextPattern,
    PointerDown { x: isize, y: isize },
    PointerMove { x: isize, y: isize },
    PointerUp,
    SetSpeed(f64),
    SetFieldGain(f64),
    /// Weight of the pointer ripple on field patterns, 0..=1
    SetPointerInfluence(f64),
}

/// Everything produced by one tick
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub number: u32,
    pub text: String,
    pub births: Vec<BirthEvent>,
    pub collisions: Vec<Collision>,
    pub notes: Vec<NoteCue>,
    pub chords: Vec<ChordCue>,
    pub noise: Vec<NoiseCue>,
    /// Ambient volume in dB, life mode only
    pub volume: Option<f64>,
}

/// Visualizer state driven by an external periodic tick
pub struct App<R: Rng> {
    rng: R,
    mode: Mode,
    grid: Grid,
    frame_number: u32,
    paused: bool,
    speed: f64,
    field_gain: f64,
    pointer_influence: f64,
    pointer: Option<(isize, isize)>,
    pointer_down: bool,
    noise_playing: bool,
    throttle: NoteThrottle,
    pending_notes: Vec<NoteCue>,
    pending_chords: Vec<ChordCue>,
    pending_noise: Vec<NoiseCue>,
}

impl<R: Rng> App<R> {
    pub fn new(width: usize, height: usize, mode: Mode, mut rng: R) -> Result<Self> {
        let grid = initialize_grid(width, height, &mut rng)?;
        log::info!("Visualizer {}x{} starting in {} mode", width, height, mode.name());

        Ok(Self {
            rng,
            mode,
            grid,
            frame_number: 0,
            paused: false,
            speed: 1.0,
            field_gain: 1.0,
            pointer_influence: DEFAULT_POINTER_INFLUENCE,
            pointer: None,
            pointer_down: false,
            noise_playing: false,
            throttle: NoteThrottle::default(),
            pending_notes: Vec::new(),
            pending_chords: Vec::new(),
            pending_noise: Vec::new(),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Swap in a new automaton state; the field size follows the new grid
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame_number(&self) -> u32 {
        self.frame_number
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn field_gain(&self) -> f64 {
        self.field_gain
    }

    pub fn pointer_influence(&self) -> f64 {
        self.pointer_influence
    }

    pub fn pointer(&self) -> Option<(isize, isize)> {
        self.pointer
    }

    /// Apply one input. `now` is time since any fixed start and feeds the note throttle.
    pub fn handle(&mut self, command: Command, now: Duration) -> Result<()> {
        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                log::info!("Playback {}", if self.paused { "paused" } else { "resumed" });
            }
            Command::Reset => {
                if self.mode == Mode::Life {
                    let (width, height) = (self.grid.width(), self.grid.height());
                    self.grid = initialize_grid(width, height, &mut self.rng)?;
                    log::info!("Grid reseeded, {} alive", self.grid.population());
                }
            }
            Command::Clear => {
                self.frame_number = 0;
                self.pointer = None;
                if self.mode == Mode::Life {
                    self.grid = Grid::new(self.grid.width(), self.grid.height())?;
                    log::info!("Grid cleared");
                }
            }
            Command::Select(index) => match Mode::from_index(index) {
                Some(mode) => self.switch_mode(mode),
                None => log::warn!("No mode at index {}", index),
            },
            Command::NextPattern => {
                if let Mode::Field(pattern) = self.mode {
                    self.switch_mode(Mode::Field(pattern.next()));
                }
            }
            Command::PointerDown { x, y } => {
                self.pointer = Some((x, y));
                self.pointer_down = true;
                self.pointer_note(x, y, now);
                match self.mode {
                    Mode::Life => self.grid = self.grid.toggled(x, y),
                    Mode::Field(_) => {
                        if !self.noise_playing {
                            self.noise_playing = true;
                            self.pending_noise.push(NoiseCue::start());
                        }
                    }
                }
            }
            Command::PointerMove { x, y } => {
                self.pointer = Some((x, y));
                if self.pointer_down && matches!(self.mode, Mode::Field(_)) {
                    self.pointer_note(x, y, now);
                }
            }
            Command::PointerUp => {
                self.pointer_down = false;
                if self.noise_playing {
                    self.noise_playing = false;
                    self.pending_noise.push(NoiseCue::stop());
                }
            }
            Command::SetSpeed(speed) => {
                self.speed = speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1);
                log::debug!("Speed: {:.2}", self.speed);
            }
            Command::SetFieldGain(gain) => {
                self.field_gain = gain.clamp(FIELD_GAIN_RANGE.0, FIELD_GAIN_RANGE.1);
                log::debug!("Field gain: {:.2}", self.field_gain);
            }
            Command::SetPointerInfluence(influence) => {
                let (min, max) = POINTER_INFLUENCE_RANGE;
                self.pointer_influence = influence.clamp(min, max);
                log::debug!("Pointer influence: {:.2}", self.pointer_influence);
            }
        }

        Ok(())
    }

    /// Advance one frame (unless paused) and render it
    pub fn tick(&mut self, now: Duration) -> Frame {
        let number = self.frame_number;
        let mut births = Vec::new();
        let mut collisions = Vec::new();
        let mut notes = std::mem::take(&mut self.pending_notes);
        let mut chords = std::mem::take(&mut self.pending_chords);
        let noise = std::mem::take(&mut self.pending_noise);

        if !self.paused {
            if self.mode == Mode::Life && number % LIFE_UPDATE_INTERVAL == 0 {
                let result = self.grid.step();
                self.grid = result.next;
                births = result.births;
                collisions = detect_collisions(&births);

                // Each staggered note faces the throttle at the time it would sound
                let cues = births_to_cues(&births, self.grid.width(), self.grid.height());
                for cue in cues {
                    if self.throttle.admit(now + cue.delay) {
                        notes.push(cue);
                    }
                }
                chords.extend(collisions_to_cues(&collisions, self.mode.chord()));
            }
            self.frame_number = (self.frame_number + 1) % FRAME_WRAP;
        }

        let (text, volume) = match self.mode {
            Mode::Life => {
                let volume = density_to_volume(self.grid.density());
                (to_ascii(&self.grid), Some(volume))
            }
            Mode::Field(pattern) => {
                let t = f64::from(number) / (SLOWDOWN_FACTOR / self.speed);
                let pointer = self
                    .pointer
                    .filter(|_| self.pointer_down)
                    .map(|(x, y)| (x as f64, y as f64));
                let text = render_field(
                    pattern,
                    self.grid.width(),
                    self.grid.height(),
                    t,
                    pointer,
                    FieldStyle {
                        gain: self.field_gain,
                        pointer_influence: self.pointer_influence,
                    },
                );
                (text, None)
            }
        };

        Frame {
            number,
            text,
            births,
            collisions,
            notes,
            chords,
            noise,
            volume,
        }
    }

    fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.pending_chords.push(ChordCue::full(mode.chord()));
        log::info!("Switched to {} mode", mode.name());
    }

    fn pointer_note(&mut self, x: isize, y: isize, now: Duration) {
        if !self.grid.contains(x, y) || !self.throttle.admit(now) {
            return;
        }
        self.pending_notes.push(NoteCue::at(
            x as usize,
            y as usize,
            self.grid.width(),
            self.grid.height(),
        ));
    }
}

/// Simple FPS counter
pub struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    pub fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
