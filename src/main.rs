extern crate exercises;
extern crate rand;

use std::env;
use std::process;

use exercises::board::{Board, Mark};
use exercises::game::{Game, Outcome};
use exercises::player::{HumanPlayer, Player, RandomPlayer, SearchPlayer};

fn player_for(kind: &str, mark: Mark) -> Option<Box<Player>> {
    match kind {
        "human" => Some(Box::new(HumanPlayer::new(mark))),
        "random" => Some(Box::new(RandomPlayer::new(mark, rand::thread_rng()))),
        "search" => Some(Box::new(SearchPlayer::new(mark))),
        _ => None,
    }
}

fn usage() -> ! {
    eprintln!("usage: tictactoe [human|random|search] [human|random|search]");
    process::exit(2)
}

fn main() {
    let args = env::args().collect::<Vec<_>>();
    let kind1 = args.get(1).map(String::as_str).unwrap_or("human");
    let kind2 = args.get(2).map(String::as_str).unwrap_or("search");
    let mut player1 = player_for(kind1, Mark::X).unwrap_or_else(|| usage());
    let mut player2 = player_for(kind2, Mark::O).unwrap_or_else(|| usage());

    println!("This is a Tic Tac Toe game.");
    let mut board = Board::new(3);
    let outcome = {
        let mut game = Game::new(&mut *player1, &mut *player2, &mut board);
        game.play()
    };
    println!("{}", board);
    match outcome {
        Ok(Outcome::Win(mark)) => println!("Player {} wins!", mark),
        Ok(Outcome::Draw) => println!("Draw game!"),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        },
    }
}
