use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ascii_life::app::{App, FpsCounter, Mode};
use ascii_life::config::{GRID_HEIGHT, GRID_WIDTH};
use ascii_life::field::FieldPattern;

/// Terminal ASCII visualizer: wave fields or Conway's Game of Life
#[derive(Parser)]
#[command(name = "ascii-life", about = "Render an ASCII field or Game of Life in the terminal")]
struct Args {
    /// What to draw
    #[arg(long, value_enum, default_value_t = ModeArg::Life)]
    mode: ModeArg,

    /// Grid width in cells
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: usize,

    /// Frames to render before exiting
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Balance,
    Duality,
    Flow,
    Chaos,
    Life,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Balance => Mode::Field(FieldPattern::Balance),
            ModeArg::Duality => Mode::Field(FieldPattern::Duality),
            ModeArg::Flow => Mode::Field(FieldPattern::Flow),
            ModeArg::Chaos => Mode::Field(FieldPattern::Chaos),
            ModeArg::Life => Mode::Life,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut app = App::new(args.width, args.height, args.mode.into(), rng)?;
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
    let start = Instant::now();
    let mut fps_counter = FpsCounter::new();
    let mut stdout = io::stdout().lock();

    for _ in 0..args.ticks {
        let tick_start = Instant::now();
        let frame = app.tick(start.elapsed());

        // Clear screen and home the cursor before each frame
        write!(stdout, "\x1b[2J\x1b[H{}", frame.text)?;
        writeln!(stdout)?;
        stdout.flush()?;

        for note in &frame.notes {
            log::debug!(
                "note {} ({:.1} Hz) for {:.2}s after {:?}",
                note.midi_note,
                note.frequency,
                note.duration,
                note.delay
            );
        }
        for cue in &frame.noise {
            log::debug!("noise {:?}", cue);
        }
        for collision in &frame.collisions {
            log::debug!(
                "collision at ({}, {}) intensity {}",
                collision.x,
                collision.y,
                collision.intensity
            );
        }

        if let Some(fps) = fps_counter.tick() {
            log::debug!("{:.0} FPS, frame {}", fps, frame.number);
        }

        if let Some(remaining) = frame_time.checked_sub(tick_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    log::info!("Finished after {} frames, {} cells alive", args.ticks, app.grid().population());
    Ok(())
}
