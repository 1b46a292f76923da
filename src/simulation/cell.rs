/// State of a single automaton cell.
///
/// Layout: one byte, `Dead = 0` and `Alive = 1`, so a cell can be read back as the
/// 0/1 value the audio and render layers expect.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Decode a 0/1 bit; any non-zero value counts as alive
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            Cell::Dead
        } else {
            Cell::Alive
        }
    }

    /// Encode as a 0/1 bit
    pub fn bit(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
