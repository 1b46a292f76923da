mod cell;
mod collision;
mod grid;
mod patterns;
mod seeder;
mod stepper;

pub use cell::Cell;
pub use collision::{detect_collisions, detect_collisions_with, Collision};
pub use grid::Grid;
pub use patterns::{Flip, Orientation, PatternKind, SeedPattern};
pub use seeder::initialize_grid;
pub use stepper::{next_state, step, BirthEvent, StepResult};
