use rand::Rng;

use crate::config::{
    MAX_SEED_PATTERNS, MIN_SEED_PATTERNS, NOISE_DENSITY_MAX, NOISE_DENSITY_MIN, SEED_EDGE_BUFFER,
};
use crate::error::{LifeError, Result};
use crate::simulation::cell::Cell;
use crate::simulation::grid::Grid;
use crate::simulation::patterns::{PatternKind, SeedPattern};

/// Build a fresh grid: 3-5 randomly oriented seed patterns, then 10-15% noise.
///
/// Fails with `InvalidDimension` for a zero dimension and `TooSmallToSeed` when either
/// axis is below the edge buffer, where the origin range would be empty.
pub fn initialize_grid<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::new(width, height)?;
    if width < SEED_EDGE_BUFFER || height < SEED_EDGE_BUFFER {
        return Err(LifeError::TooSmallToSeed {
            width,
            height,
            min: SEED_EDGE_BUFFER,
        });
    }

    let pattern_count = rng.gen_range(MIN_SEED_PATTERNS..=MAX_SEED_PATTERNS);
    for _ in 0..pattern_count {
        let kind = PatternKind::random(rng);
        let pattern = kind.pattern().oriented(rng);
        let x = origin(width, rng);
        let y = origin(height, rng);
        log::trace!(
            "Stamping {} ({}x{}) at ({}, {})",
            kind.name(),
            pattern.cols(),
            pattern.rows(),
            x,
            y
        );
        stamp(&mut grid, &pattern, x, y);
    }

    let density = rng.gen_range(NOISE_DENSITY_MIN..NOISE_DENSITY_MAX);
    add_noise(&mut grid, density, rng);

    log::debug!(
        "Seeded {}x{} grid: {} patterns, noise {:.3}, {} alive",
        width,
        height,
        pattern_count,
        density,
        grid.population()
    );

    Ok(grid)
}

/// Origin drawn from [0, size - buffer); a size equal to the buffer always yields 0
fn origin<R: Rng + ?Sized>(size: usize, rng: &mut R) -> isize {
    let span = size - SEED_EDGE_BUFFER;
    if span == 0 {
        0
    } else {
        rng.gen_range(0..span) as isize
    }
}

/// Copy every pattern cell, dead ones included, onto the grid with wraparound
fn stamp(grid: &mut Grid, pattern: &SeedPattern, x: isize, y: isize) {
    for dy in 0..pattern.rows() {
        for dx in 0..pattern.cols() {
            grid.set(x + dx as isize, y + dy as isize, pattern.get(dy, dx));
        }
    }
}

/// Bring each dead cell to life with probability `density`; live cells are kept
fn add_noise<R: Rng + ?Sized>(grid: &mut Grid, density: f64, rng: &mut R) {
    for y in 0..grid.height() as isize {
        for x in 0..grid.width() as isize {
            if !grid.is_alive(x, y) && rng.gen_bool(density) {
                grid.set(x, y, Cell::Alive);
            }
        }
    }
}
