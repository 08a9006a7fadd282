use crate::error::BoardParseError;
use crate::outcome::{GameOutcome, evaluate};
use derive_more::Display;
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The eight winning lines: rows top-to-bottom, columns left-to-right, then both diagonals.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The symbol a player puts on the board.
#[derive(Debug, Display, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Mark {
    /// Moves first. The human plays this mark against the computer.
    X,
    /// Moves second. The computer plays this mark unless configured otherwise.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Holds the given mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns `true` if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// A 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order: index 0 is the top-left corner and index 8 the
/// bottom-right one. The board is a plain value, so trying a move on a copy never affects
/// the original.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from cells in row-major order.
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell at `index`, or `None` if the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns `true` if `index` is on the board and nobody has played there.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns the indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns `true` once every cell is taken.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of moves played so far.
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    ///
    /// The receiver is left untouched. An occupied cell is overwritten, so callers pass the
    /// index of an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`CELL_COUNT`].
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = Cell::Occupied(mark);
        next
    }

    /// Puts `mark` at `index` in place.
    ///
    /// No legality checks are made; [`Session::play`](crate::session::Session::play) is the
    /// checked way to make a move.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`CELL_COUNT`].
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Occupied(mark);
    }

    /// Shorthand for [`evaluate`].
    pub fn outcome(&self) -> GameOutcome {
        evaluate(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let symbol = match cell {
                    Cell::Empty => '_',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

/// Parses a board from nine cell characters, e.g. `"OO_XX____"` or `"OO_|XX_|___"`.
///
/// `X` and `O` (any case) are marks, `_`, `.`, `-` and space are empty cells. `|`, `/` and
/// line breaks are treated as row separators and skipped.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '_' | '.' | '-' | ' ' => Cell::Empty,
                '|' | '/' | '\n' | '\r' => continue,
                other => return Err(BoardParseError::InvalidChar(other)),
            };
            cells.push(cell);
        }

        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|rest: Vec<Cell>| BoardParseError::WrongCellCount(rest.len()))?;
        Ok(Board::from_cells(cells))
    }
}
