use crate::board::{Board, Mark};
use crate::error::SelectError;
use crate::outcome::{GameOutcome, evaluate};
use crate::random::{RandomGenerator, StandardRandomGenerator};
use tracing::{debug, instrument, trace};

/// Score of a win reached on the very first ply. Wins found deeper score less.
const WIN_SCORE: i32 = 10;

/// How hard the computer tries.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Difficulty {
    /// Any empty cell, picked uniformly at random.
    #[default]
    Easy,
    /// The game-theoretically best move, found by exhaustive minimax.
    Hard,
}

/// Chooses moves for the computer player.
pub struct MoveSelector<K: RandomGenerator = StandardRandomGenerator> {
    random: K,
    computer: Mark,
}

/// A builder for creating instances of `MoveSelector`.
pub struct MoveSelectorBuilder<K: RandomGenerator> {
    random_generator: K,
    computer_mark: Mark,
}

impl<K: RandomGenerator> MoveSelectorBuilder<K> {
    /// Sets the random number generator used on Easy difficulty.
    pub fn with_random_generator<R: RandomGenerator>(self, rg: R) -> MoveSelectorBuilder<R> {
        MoveSelectorBuilder {
            random_generator: rg,
            computer_mark: self.computer_mark,
        }
    }

    /// Sets the mark the computer plays. Defaults to `O`.
    pub fn with_computer_mark(mut self, mark: Mark) -> Self {
        self.computer_mark = mark;
        self
    }

    /// Builds the `MoveSelector` with the configured parameters.
    pub fn build(self) -> MoveSelector<K> {
        MoveSelector::with_parts(self.random_generator, self.computer_mark)
    }
}

impl<K: RandomGenerator> Default for MoveSelector<K> {
    fn default() -> Self {
        MoveSelector::with_parts(K::default(), Mark::O)
    }
}

impl MoveSelector<StandardRandomGenerator> {
    /// Creates a selector playing `O` with the standard random generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new builder for `MoveSelector`.
    pub fn builder() -> MoveSelectorBuilder<StandardRandomGenerator> {
        MoveSelectorBuilder {
            random_generator: StandardRandomGenerator,
            computer_mark: Mark::O,
        }
    }
}

impl<K: RandomGenerator> MoveSelector<K> {
    /// Creates a selector from a random generator and the mark the computer plays.
    pub fn with_parts(rg: K, computer: Mark) -> Self {
        Self {
            random: rg,
            computer,
        }
    }

    /// The mark this selector plays for.
    pub fn computer_mark(&self) -> Mark {
        self.computer
    }

    /// Picks the computer's next move on `board`.
    ///
    /// The returned index is always an empty cell. The board itself is never modified.
    ///
    /// # Errors
    ///
    /// [`SelectError::GameOver`] if somebody has already won and
    /// [`SelectError::NoMovesAvailable`] if the board is full.
    #[instrument(skip(self, board), fields(computer = %self.computer, moves = board.move_count()))]
    pub fn select_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
    ) -> Result<usize, SelectError> {
        match evaluate(board) {
            GameOutcome::Win { .. } => return Err(SelectError::GameOver),
            GameOutcome::Draw => return Err(SelectError::NoMovesAvailable),
            GameOutcome::InProgress => {}
        }

        let chosen = match difficulty {
            Difficulty::Easy => random_move(board, &mut self.random),
            Difficulty::Hard => best_move(board, self.computer),
        }
        .ok_or(SelectError::NoMovesAvailable)?;

        debug!(index = chosen, "computer chose move");
        Ok(chosen)
    }

    /// Minimax score of every empty cell, in index order, from the computer's point of view.
    pub fn score_moves(&self, board: &Board) -> Vec<(usize, i32)> {
        score_moves(board, self.computer)
    }
}

/// Uniformly random empty cell.
pub fn random_move<K: RandomGenerator>(board: &Board, rg: &mut K) -> Option<usize> {
    rg.choose(&board.empty_cells()).copied()
}

/// The empty cell with the highest minimax score for `computer`.
///
/// Ties go to the lowest index.
pub fn best_move(board: &Board, computer: Mark) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, score) in score_moves(board, computer) {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

fn score_moves(board: &Board, computer: Mark) -> Vec<(usize, i32)> {
    board
        .empty_cells()
        .into_iter()
        .map(|index| {
            let score = minimax(board.with_mark(index, computer), 0, false, computer);
            trace!(index, score, "scored candidate");
            (index, score)
        })
        .collect()
}

/// Exhaustive minimax value of `board` for `computer`.
///
/// `depth` is the number of plies played since the real position and `maximizing` tells
/// whether `computer` is the side to move. A win scores `10 - depth`, a loss `depth - 10`
/// and a draw `0`, so quicker wins and slower losses are preferred.
pub fn minimax(board: Board, depth: i32, maximizing: bool, computer: Mark) -> i32 {
    match evaluate(&board) {
        GameOutcome::Win { mark, .. } if mark == computer => return WIN_SCORE - depth,
        GameOutcome::Win { .. } => return depth - WIN_SCORE,
        GameOutcome::Draw => return 0,
        GameOutcome::InProgress => {}
    }

    let to_move = if maximizing {
        computer
    } else {
        computer.opponent()
    };
    let scores = board
        .empty_cells()
        .into_iter()
        .map(|index| minimax(board.with_mark(index, to_move), depth + 1, !maximizing, computer));

    let best = if maximizing { scores.max() } else { scores.min() };
    // in progress implies at least one empty cell
    best.unwrap_or(0)
}
