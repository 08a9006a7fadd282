//! Tic-tac-toe rules and a computer opponent.
//!
//! The crate has two layers. [`outcome::evaluate`] tells whether a board is won, drawn or still
//! in progress. [`selector::MoveSelector`] picks the computer's next move, either uniformly at
//! random ([`Difficulty::Easy`](selector::Difficulty::Easy)) or by exhaustive minimax search
//! ([`Difficulty::Hard`](selector::Difficulty::Hard)). A headless [`session::Session`] ties both
//! together for callers that want the turn bookkeeping done for them.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_lib::board::Board;
//! use tictactoe_lib::outcome::{evaluate, GameOutcome};
//! use tictactoe_lib::random::SeededGenerator;
//! use tictactoe_lib::selector::{Difficulty, MoveSelector};
//!
//! // O to move, with two in a row on top
//! let board: Board = "OO_|XX_|___".parse().unwrap();
//! assert_eq!(evaluate(&board), GameOutcome::InProgress);
//!
//! let mut selector = MoveSelector::builder()
//!     .with_random_generator(SeededGenerator::default())
//!     .build();
//!
//! let best = selector.select_move(&board, Difficulty::Hard).unwrap();
//! assert_eq!(best, 2);
//! ```

/// The board, its cells and marks, and the winning lines.
pub mod board;
/// Error types returned by the crate.
pub mod error;
/// Win and draw detection.
pub mod outcome;
/// Contains traits and implementations for random number generation.
pub mod random;
/// The computer opponent.
pub mod selector;
/// Turn bookkeeping for a single game.
pub mod session;
