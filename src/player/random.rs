use rand::Rng;

use board::{Board, Mark, Result};
use player::Player;

pub struct RandomPlayer<R> {
    mark: Mark,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(mark: Mark, rng: R) -> Self {
        RandomPlayer { mark, rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn make_move(&mut self, b: &Board) -> Result<(usize, usize)> {
        let n = b.size();
        loop {
            let row = self.rng.gen_range(0, n);
            let col = self.rng.gen_range(0, n);
            if b.get(row, col)?.is_none() {
                return Ok((row, col));
            }
        }
    }
}
