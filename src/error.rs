//! Error types.

use derive_more::{Display, Error, From};

/// Returned when the computer is asked to move on a board where no move can be made.
#[derive(Debug, Display, Error, PartialEq, Eq, Copy, Clone)]
pub enum SelectError {
    /// Somebody already has three in a row.
    #[display("the game is already won")]
    GameOver,
    /// Every cell is taken.
    #[display("no empty cells left on the board")]
    NoMovesAvailable,
}

/// A move rejected by a [`Session`](crate::session::Session).
#[derive(Debug, Display, Error, From, PartialEq, Eq, Copy, Clone)]
pub enum SessionError {
    #[display("cell {_0} is off the board")]
    OutOfRange(#[error(not(source))] usize),
    #[display("cell {_0} is already taken")]
    CellOccupied(#[error(not(source))] usize),
    #[display("the game is over")]
    GameOver,
    /// A human tried to move while the computer is due.
    #[display("it is the computer's turn")]
    NotYourTurn,
    #[display("it is not the computer's turn")]
    NotComputerTurn,
    #[display("computer could not pick a move: {_0}")]
    #[from]
    Select(SelectError),
}

#[derive(Debug, Display, Error, PartialEq, Eq, Copy, Clone)]
pub enum BoardParseError {
    #[display("unexpected character {_0:?} in board")]
    InvalidChar(#[error(not(source))] char),
    #[display("expected 9 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}
