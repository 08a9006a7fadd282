use crate::board::{Board, Cell, Mark, WIN_PATTERNS};

/// The state of a game as seen from a single board snapshot.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// Nobody has won and there are empty cells left.
    InProgress,
    /// `mark` has three in a row along `line`.
    Win {
        mark: Mark,
        /// The winning pattern, as listed in [`WIN_PATTERNS`].
        line: [usize; 3],
    },
    /// Every cell is taken and nobody has won.
    Draw,
}

impl GameOutcome {
    /// The winning mark, or `None` while in progress or drawn.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns `true` for a win or a draw.
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }
}

/// Determines whether someone has won, the game is drawn, or play continues.
///
/// Patterns are checked in the order of [`WIN_PATTERNS`] and the first complete line is reported.
pub fn evaluate(board: &Board) -> GameOutcome {
    let cells = board.cells();
    for line in WIN_PATTERNS {
        let [a, b, c] = line;
        if let Cell::Occupied(mark) = cells[a] {
            if cells[a] == cells[b] && cells[a] == cells[c] {
                return GameOutcome::Win { mark, line };
            }
        }
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
