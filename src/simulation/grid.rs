use crate::error::{LifeError, Result};
use crate::simulation::cell::Cell;

/// Toroidal field of alive/dead cells.
///
/// Dimensions are fixed at construction. Every coordinate taken by the public API is
/// normalised with wraparound, so out-of-range values never index outside the field.
/// Operations that produce a new state return a fresh `Grid`; nothing hands out a view
/// into another grid's storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cell storage, `width * height` long
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Create a grid with the listed `(x, y)` cells alive; coordinates wrap
    pub fn with_alive(width: usize, height: usize, alive: &[(isize, isize)]) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)` after wrapping both coordinates
    pub fn get(&self, x: isize, y: isize) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.get(x, y).is_alive()
    }

    /// Count alive cells among the 8 toroidal neighbours of `(x, y)`
    pub fn count_live_neighbors(&self, x: isize, y: isize) -> u8 {
        let mut count = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                if self.is_alive(x + dx, y + dy) {
                    count += 1;
                }
            }
        }

        count
    }

    /// New grid with the cell at `(x, y)` inverted.
    ///
    /// Unlike the rest of the API this does not wrap: pointer input that lands outside
    /// the field yields an unchanged copy.
    pub fn toggled(&self, x: isize, y: isize) -> Self {
        let mut next = self.clone();
        if self.contains(x, y) {
            let index = self.index(x, y);
            next.cells[index] = next.cells[index].toggled();
        }
        next
    }

    /// Whether `(x, y)` lies inside the field without wrapping
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fraction of alive cells in [0, 1]
    pub fn density(&self) -> f64 {
        self.population() as f64 / self.cells.len() as f64
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Coordinates of alive cells in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(i, _)| (i % self.width, i / self.width))
    }

    /// Overwrite a cell; used while a grid is still being built
    pub(crate) fn set(&mut self, x: isize, y: isize, cell: Cell) {
        let index = self.index(x, y);
        self.cells[index] = cell;
    }

    fn index(&self, x: isize, y: isize) -> usize {
        let col = x.rem_euclid(self.width as isize) as usize;
        let row = y.rem_euclid(self.height as isize) as usize;
        row * self.width + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(5, 3).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 5));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(LifeError::InvalidDimension { width: 0, height: 4 })
        );
        assert_eq!(
            Grid::new(4, 0),
            Err(LifeError::InvalidDimension { width: 4, height: 0 })
        );
    }

    #[test]
    fn test_neighbors_without_wraparound() {
        let grid = Grid::with_alive(5, 5, &[(1, 1), (2, 1), (1, 2)]).unwrap();
        assert_eq!(grid.count_live_neighbors(2, 2), 3);
        assert_eq!(grid.count_live_neighbors(1, 1), 2);
    }

    #[test]
    fn test_neighbors_wrap_to_far_edges() {
        let grid = Grid::with_alive(3, 3, &[(0, 0), (0, 2), (2, 0)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 2);
    }

    #[test]
    fn test_corner_sees_opposite_corner() {
        let grid = Grid::with_alive(10, 10, &[(9, 9), (9, 0), (0, 9)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(5, 5), 0);
    }

    #[test]
    fn test_coordinates_are_normalised() {
        let grid = Grid::with_alive(4, 4, &[(-1, -1)]).unwrap();
        assert!(grid.is_alive(3, 3));
        assert!(grid.is_alive(7, -5));
        assert_eq!(grid.count_live_neighbors(4, 4), 1);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let grid = Grid::with_alive(6, 4, &[(1, 1), (5, 3)]).unwrap();
        for y in 0..4 {
            for x in 0..6 {
                let once = grid.toggled(x, y);
                assert_ne!(once, grid, "toggle at ({x}, {y}) should change the grid");
                assert_eq!(once.toggled(x, y), grid);
            }
        }
    }

    #[test]
    fn test_toggle_out_of_bounds_is_ignored() {
        let grid = Grid::with_alive(4, 4, &[(2, 2)]).unwrap();
        assert_eq!(grid.toggled(-1, 0), grid);
        assert_eq!(grid.toggled(4, 0), grid);
        assert_eq!(grid.toggled(0, 99), grid);
    }

    #[test]
    fn test_toggle_leaves_source_untouched() {
        let grid = Grid::new(3, 3).unwrap();
        let toggled = grid.toggled(1, 1);
        assert!(toggled.is_alive(1, 1));
        assert!(!grid.is_alive(1, 1));
    }

    #[test]
    fn test_population_and_density() {
        let grid = Grid::with_alive(4, 5, &[(0, 0), (1, 1), (2, 2), (3, 3)]).unwrap();
        assert_eq!(grid.population(), 4);
        assert!((grid.density() - 0.2).abs() < 1e-12);
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }
}
