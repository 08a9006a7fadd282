use crate::board::{Board, CELL_COUNT, Mark};
use crate::error::SessionError;
use crate::outcome::{GameOutcome, evaluate};
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::selector::{Difficulty, MoveSelector};
use tracing::{debug, instrument};

/// Who sits on the other side of the board.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    PlayerVsPlayer,
    /// A human plays against the computer.
    PlayerVsComputer,
}

/// A single game in progress, without any presentation.
///
/// X always starts. In [`GameMode::PlayerVsComputer`] the computer plays the selector's mark
/// and the caller drives its turns through [`Session::play_computer_turn`].
pub struct Session<K: RandomGenerator = StandardRandomGenerator> {
    board: Board,
    current_player: Mark,
    outcome: GameOutcome,
    mode: GameMode,
    difficulty: Difficulty,
    selector: MoveSelector<K>,
}

impl Session<StandardRandomGenerator> {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Session::with_selector(mode, difficulty, MoveSelector::new())
    }
}

impl<K: RandomGenerator> Default for Session<K> {
    fn default() -> Self {
        Session::with_selector(
            GameMode::default(),
            Difficulty::default(),
            MoveSelector::default(),
        )
    }
}

impl<K: RandomGenerator> Session<K> {
    /// Creates a session whose computer turns are decided by `selector`.
    pub fn with_selector(mode: GameMode, difficulty: Difficulty, selector: MoveSelector<K>) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            outcome: GameOutcome::InProgress,
            mode,
            difficulty,
            selector,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == GameOutcome::Draw
    }

    /// The three cells to highlight once somebody has won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.outcome {
            GameOutcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Starts over with an empty board. Mode and difficulty are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::X;
        self.outcome = GameOutcome::InProgress;
        debug!("session reset");
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer
            && !self.outcome.is_over()
            && self.current_player == self.selector.computer_mark()
    }

    /// Plays a human move for the current player.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, `index` is off the board or taken, or the computer is due
    /// to move.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, index: usize) -> Result<GameOutcome, SessionError> {
        if self.is_computer_turn() {
            return Err(SessionError::NotYourTurn);
        }
        self.apply(index)
    }

    /// Lets the computer make its move and returns the chosen cell.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotComputerTurn`] unless [`Session::is_computer_turn`] holds.
    #[instrument(skip(self), fields(difficulty = ?self.difficulty))]
    pub fn play_computer_turn(&mut self) -> Result<usize, SessionError> {
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        let index = self.selector.select_move(&self.board, self.difficulty)?;
        self.apply(index)?;
        Ok(index)
    }

    fn apply(&mut self, index: usize) -> Result<GameOutcome, SessionError> {
        if self.outcome.is_over() {
            return Err(SessionError::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(SessionError::OutOfRange(index));
        }
        if !self.board.is_empty_at(index) {
            return Err(SessionError::CellOccupied(index));
        }

        self.board.place(index, self.current_player);
        self.outcome = evaluate(&self.board);
        match self.outcome {
            GameOutcome::InProgress => self.current_player = self.current_player.opponent(),
            GameOutcome::Win { mark, line } => debug!(%mark, ?line, "game won"),
            GameOutcome::Draw => debug!("game drawn"),
        }
        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Cell, Mark};
    use crate::error::SessionError;
    use crate::outcome::GameOutcome;
    use crate::random::SeededGenerator;
    use crate::selector::{Difficulty, MoveSelector};
    use crate::session::{GameMode, Session};

    fn versus_computer(difficulty: Difficulty) -> Session<SeededGenerator> {
        let selector = MoveSelector::builder()
            .with_random_generator(SeededGenerator::new(42))
            .build();
        Session::with_selector(GameMode::PlayerVsComputer, difficulty, selector)
    }

    #[test]
    fn players_alternate() {
        // arrange
        let mut session = Session::new(GameMode::PlayerVsPlayer, Difficulty::Easy);

        // act
        session.play(4).unwrap();
        session.play(0).unwrap();

        // assert
        assert_eq!(session.board().get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(session.board().get(0), Some(Cell::Occupied(Mark::O)));
        assert_eq!(session.current_player(), Mark::X);
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn win_ends_the_game() {
        // arrange
        let mut session = Session::new(GameMode::PlayerVsPlayer, Difficulty::Easy);
        for index in [0, 3, 1, 4] {
            session.play(index).unwrap();
        }

        // act
        let outcome = session.play(2).unwrap();

        // assert
        assert_eq!(
            outcome,
            GameOutcome::Win {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
        assert_eq!(session.winner(), Some(Mark::X));
        assert_eq!(session.winning_line(), Some([0, 1, 2]));
        assert_eq!(session.current_player(), Mark::X);
        assert_eq!(session.play(5), Err(SessionError::GameOver));
    }

    #[test]
    fn full_board_is_a_draw() {
        let mut session = Session::new(GameMode::PlayerVsPlayer, Difficulty::Easy);
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(session.play(index), Ok(GameOutcome::InProgress));
        }
        assert_eq!(session.play(8), Ok(GameOutcome::Draw));
        assert!(session.is_draw());
        assert_eq!(session.winner(), None);
        assert_eq!(session.winning_line(), None);
    }

    #[test]
    fn illegal_moves_are_rejected() {
        let mut session = Session::new(GameMode::PlayerVsPlayer, Difficulty::Easy);
        session.play(4).unwrap();
        assert_eq!(session.play(4), Err(SessionError::CellOccupied(4)));
        assert_eq!(session.play(9), Err(SessionError::OutOfRange(9)));
        assert_eq!(session.current_player(), Mark::O);
        assert_eq!(session.board().move_count(), 1);
    }

    #[test]
    fn computer_answers_in_pvc() {
        // arrange
        let mut session = versus_computer(Difficulty::Hard);
        assert_eq!(session.play_computer_turn(), Err(SessionError::NotComputerTurn));

        // act
        session.play(0).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(session.play(1), Err(SessionError::NotYourTurn));
        let reply = session.play_computer_turn().unwrap();

        // assert
        assert_eq!(reply, 4);
        assert_eq!(session.board().get(4), Some(Cell::Occupied(Mark::O)));
        assert_eq!(session.current_player(), Mark::X);
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn easy_computer_replies_on_empty_cell() {
        let mut session = versus_computer(Difficulty::Easy);
        session.play(4).unwrap();
        let reply = session.play_computer_turn().unwrap();
        assert_ne!(reply, 4);
        assert_eq!(session.board().get(reply), Some(Cell::Occupied(Mark::O)));
        assert_eq!(session.board().move_count(), 2);
    }

    #[test]
    fn reset_keeps_settings() {
        let mut session = versus_computer(Difficulty::Easy);
        session.set_difficulty(Difficulty::Hard);
        session.play(0).unwrap();
        session.play_computer_turn().unwrap();

        session.reset();

        assert_eq!(session.board().move_count(), 0);
        assert_eq!(session.current_player(), Mark::X);
        assert_eq!(session.outcome(), GameOutcome::InProgress);
        assert_eq!(session.mode(), GameMode::PlayerVsComputer);
        assert_eq!(session.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn switching_to_pvp_hands_o_to_a_human() {
        let mut session = versus_computer(Difficulty::Hard);
        session.play(0).unwrap();
        session.set_mode(GameMode::PlayerVsPlayer);
        assert!(!session.is_computer_turn());
        assert_eq!(session.play(8), Ok(GameOutcome::InProgress));
        assert_eq!(session.board().get(8), Some(Cell::Occupied(Mark::O)));
    }
}
