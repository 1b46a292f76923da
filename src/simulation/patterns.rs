use rand::Rng;

use crate::config::FLIP_PROBABILITY;
use crate::simulation::cell::Cell;

const STANDARD_GLIDER: &[&[u8]] = &[
    &[0, 1, 0],
    &[0, 0, 1],
    &[1, 1, 1],
];

const LIGHTWEIGHT_SPACESHIP: &[&[u8]] = &[
    &[0, 1, 0, 0, 1],
    &[1, 0, 0, 0, 0],
    &[1, 0, 0, 0, 1],
    &[1, 1, 1, 1, 0],
];

/// Seed shapes stamped onto a fresh grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// 3x3 glider, travels diagonally
    Standard,
    /// 4x5 lightweight spaceship, travels orthogonally
    Lwss,
}

impl PatternKind {
    pub const ALL: [PatternKind; 2] = [PatternKind::Standard, PatternKind::Lwss];

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Standard => "standard",
            PatternKind::Lwss => "lwss",
        }
    }

    /// The pattern in its catalog orientation
    pub fn pattern(self) -> SeedPattern {
        let bits = match self {
            PatternKind::Standard => STANDARD_GLIDER,
            PatternKind::Lwss => LIGHTWEIGHT_SPACESHIP,
        };
        SeedPattern::from_bits(self, bits)
    }

    /// Uniform pick over the catalog
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Which axis, if any, to mirror after rotating
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flip {
    None,
    Horizontal,
    Vertical,
}

/// A rotation count and flip applied to a catalog pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Quarter turns clockwise, 0..=3
    pub rotations: u8,
    pub flip: Flip,
}

impl Orientation {
    /// Draw a random orientation.
    ///
    /// The horizontal check runs first and short-circuits the vertical one, so the
    /// flip odds are 0.3 / 0.21 / 0.49 (horizontal / vertical / none), not symmetric.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rotations = rng.gen_range(0..4u8);

        let flip = if rng.gen::<f64>() < FLIP_PROBABILITY {
            Flip::Horizontal
        } else if rng.gen::<f64>() < FLIP_PROBABILITY {
            Flip::Vertical
        } else {
            Flip::None
        };

        Self { rotations, flip }
    }
}

/// Fixed-size binary sub-grid. Transforms always build a new pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeedPattern {
    kind: PatternKind,
    rows: usize,
    cols: usize,
    /// Row-major, `rows * cols` long
    cells: Vec<Cell>,
}

impl SeedPattern {
    fn from_bits(kind: PatternKind, bits: &[&[u8]]) -> Self {
        let rows = bits.len();
        let cols = bits.first().map_or(0, |row| row.len());
        let cells = bits
            .iter()
            .flat_map(|row| row.iter().map(|&bit| Cell::from_bit(bit)))
            .collect();

        Self {
            kind,
            rows,
            cols,
            cells,
        }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `row`, `col`; panics outside the pattern
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "pattern index out of range");
        self.cells[row * self.cols + col]
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Rotate 90 degrees clockwise; an R x C pattern becomes C x R
    pub fn rotate90(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        let mut cells = vec![Cell::Dead; rows * cols];

        // rotated[x][rows - 1 - y] = original[y][x], rotated rows are `rows` wide
        for y in 0..rows {
            for x in 0..cols {
                cells[x * rows + (rows - 1 - y)] = self.get(y, x);
            }
        }

        Self {
            kind: self.kind,
            rows: cols,
            cols: rows,
            cells,
        }
    }

    /// Reverse each row
    pub fn flip_horizontal(&self) -> Self {
        let cells = self
            .cells
            .chunks(self.cols)
            .flat_map(|row| row.iter().rev().copied())
            .collect();

        Self {
            cells,
            ..self.clone()
        }
    }

    /// Reverse the order of rows
    pub fn flip_vertical(&self) -> Self {
        let cells = self
            .cells
            .chunks(self.cols)
            .rev()
            .flat_map(|row| row.iter().copied())
            .collect();

        Self {
            cells,
            ..self.clone()
        }
    }

    /// Apply a rotation count then a flip
    pub fn apply(&self, orientation: Orientation) -> Self {
        let mut oriented = self.clone();
        for _ in 0..orientation.rotations {
            oriented = oriented.rotate90();
        }

        match orientation.flip {
            Flip::None => oriented,
            Flip::Horizontal => oriented.flip_horizontal(),
            Flip::Vertical => oriented.flip_vertical(),
        }
    }

    /// This pattern in a random orientation
    pub fn oriented<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        self.apply(Orientation::random(rng))
    }
}
