//! ASCII visualizer driven by closed-form field patterns or a toroidal Game of Life.
//!
//! The automaton core lives in [`simulation`]: build a grid with
//! [`simulation::initialize_grid`], advance it with [`simulation::step`], and cluster the
//! births into collisions with [`simulation::detect_collisions`]. [`app::App`] wires that
//! core, the field patterns and the audio mapping into a tick-driven state machine.
//!
//! ```
//! use ascii_life::simulation::{detect_collisions, initialize_grid, step};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut grid = initialize_grid(60, 35, &mut rng)?;
//! for _ in 0..10 {
//!     let result = step(&grid);
//!     let _collisions = detect_collisions(&result.births);
//!     grid = result.next;
//! }
//! assert_eq!(grid.to_string().lines().count(), 35);
//! # Ok::<(), ascii_life::LifeError>(())
//! ```

pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod field;
pub mod render;
pub mod simulation;

pub use error::{LifeError, Result};
