extern crate tictactoe_lib;

use tictactoe_lib::board::Mark;
use tictactoe_lib::outcome::GameOutcome;
use tictactoe_lib::random::StandardRandomGenerator;
use tictactoe_lib::selector::{Difficulty, MoveSelector};
use tictactoe_lib::session::{GameMode, Session};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The session's own selector plays O, a second one plays X on the human's behalf
    let mut session = Session::with_selector(
        GameMode::PlayerVsComputer,
        Difficulty::Hard,
        MoveSelector::builder()
            .with_random_generator(StandardRandomGenerator)
            .build(),
    );
    let mut stand_in = MoveSelector::builder().with_computer_mark(Mark::X).build();

    while !session.outcome().is_over() {
        let index = if session.is_computer_turn() {
            session.play_computer_turn().unwrap()
        } else {
            let index = stand_in
                .select_move(session.board(), Difficulty::Hard)
                .unwrap();
            session.play(index).unwrap();
            index
        };
        println!("Move: {index}\n{}\n", session.board());
    }

    match session.outcome() {
        GameOutcome::Win { mark, line } => println!("{mark} wins along {line:?}"),
        GameOutcome::Draw => println!("Draw"),
        GameOutcome::InProgress => unreachable!(),
    }

    // perfect play from both sides always draws
    assert!(session.is_draw());
}
