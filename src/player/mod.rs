mod human;
mod random;
mod search;

use board::{Board, Mark, Result};

pub trait Player {
    fn mark(&self) -> Mark;
    fn make_move(&mut self, b: &Board) -> Result<(usize, usize)>;
}

pub use self::human::HumanPlayer;
pub use self::random::RandomPlayer;
pub use self::search::SearchPlayer;
