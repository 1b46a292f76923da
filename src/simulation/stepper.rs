use crate::simulation::cell::Cell;
use crate::simulation::grid::Grid;

/// A cell that went from dead to alive during one step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BirthEvent {
    pub x: usize,
    pub y: usize,
}

/// Output of one transition: the successor grid and its births in row-major order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    pub next: Grid,
    pub births: Vec<BirthEvent>,
}

/// B3/S23 successor state for a cell with `neighbors` live neighbours
pub fn next_state(current: Cell, neighbors: u8) -> Cell {
    Cell::from(matches!(
        (current, neighbors),
        (Cell::Alive, 2) | (Cell::Alive, 3) | (Cell::Dead, 3)
    ))
}

/// Apply one generation of Conway's rule. The input grid is left untouched.
pub fn step(grid: &Grid) -> StepResult {
    let mut next = grid.clone();
    let mut births = Vec::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let (cx, cy) = (x as isize, y as isize);
            let current = grid.get(cx, cy);
            let state = next_state(current, grid.count_live_neighbors(cx, cy));

            if !current.is_alive() && state.is_alive() {
                births.push(BirthEvent { x, y });
            }
            next.set(cx, cy, state);
        }
    }

    log::trace!("Step: {} births, {} alive", births.len(), next.population());

    StepResult { next, births }
}

impl Grid {
    /// Shorthand for [`step`]
    pub fn step(&self) -> StepResult {
        step(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(grid: &Grid, generations: usize) -> Grid {
        (0..generations).fold(grid.clone(), |current, _| step(&current).next)
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            let survives = n == 2 || n == 3;
            assert_eq!(next_state(Cell::Alive, n).is_alive(), survives, "alive with {n}");
            assert_eq!(next_state(Cell::Dead, n).is_alive(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_live_cell_with_two_neighbors_survives() {
        let grid = Grid::with_alive(6, 6, &[(1, 1), (2, 1), (3, 1)]).unwrap();
        assert!(step(&grid).next.is_alive(2, 1));
    }

    #[test]
    fn test_live_cell_with_three_neighbors_survives() {
        let grid = Grid::with_alive(6, 6, &[(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
        assert!(step(&grid).next.is_alive(1, 1));
    }

    #[test]
    fn test_lonely_cell_dies() {
        let grid = Grid::with_alive(6, 6, &[(2, 2), (3, 2)]).unwrap();
        let result = step(&grid);
        assert!(!result.next.is_alive(2, 2));
        assert_eq!(result.next.population(), 0);
        assert!(result.births.is_empty());
    }

    #[test]
    fn test_crowded_cell_dies() {
        // (2, 2) has four live neighbours
        let grid = Grid::with_alive(6, 6, &[(1, 1), (2, 1), (3, 1), (1, 2), (2, 2)]).unwrap();
        assert_eq!(grid.count_live_neighbors(2, 2), 4);
        assert!(!step(&grid).next.is_alive(2, 2));
    }

    #[test]
    fn test_dead_cell_with_three_neighbors_is_born() {
        let grid = Grid::with_alive(6, 6, &[(1, 1), (2, 1), (1, 2)]).unwrap();
        let result = step(&grid);
        assert!(result.next.is_alive(2, 2));
        assert_eq!(result.births, vec![BirthEvent { x: 2, y: 2 }]);
    }

    #[test]
    fn test_block_is_still() {
        let grid = Grid::with_alive(8, 8, &[(3, 3), (4, 3), (3, 4), (4, 4)]).unwrap();
        let result = step(&grid);
        assert_eq!(result.next, grid);
        assert!(result.births.is_empty());
    }

    #[test]
    fn test_blinker_period_two() {
        let grid = Grid::with_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();

        let first = step(&grid);
        let vertical = Grid::with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        assert_eq!(first.next, vertical);
        assert_eq!(
            first.births,
            vec![BirthEvent { x: 2, y: 1 }, BirthEvent { x: 2, y: 3 }]
        );

        assert_eq!(step(&first.next).next, grid);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = Grid::with_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();
        let snapshot = grid.clone();
        let _ = grid.step();
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_glider_moves_one_cell_diagonally() {
        let cells = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let grid = Grid::with_alive(10, 10, &cells).unwrap();

        let moved = advance(&grid, 4);
        assert_eq!(moved.population(), 5);

        let shifted: Vec<_> = cells.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(moved, Grid::with_alive(10, 10, &shifted).unwrap());
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        let cells = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let grid = Grid::with_alive(8, 8, &cells).unwrap();

        // One diagonal cell per 4 generations; 8 shifts bring it home
        let home = advance(&grid, 32);
        assert_eq!(home, grid);

        let across_edge = advance(&grid, 24);
        let shifted: Vec<_> = cells.iter().map(|&(x, y)| (x + 6, y + 6)).collect();
        assert_eq!(across_edge, Grid::with_alive(8, 8, &shifted).unwrap());
    }
}
