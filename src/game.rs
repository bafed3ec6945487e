use board::{Board, Mark, Result};
use player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

pub struct Game<'a> {
    player1: &'a mut Player,
    player2: &'a mut Player,
    board: &'a mut Board,
}

impl<'a> Game<'a> {
    pub fn new(player1: &'a mut Player, player2: &'a mut Player, board: &'a mut Board)
               -> Game<'a> {
        Game { player1, player2, board }
    }

    pub fn play(&mut self) -> Result<Outcome> {
        let mut turn = 0;
        loop {
            println!("{}", self.board);
            if !self.board.empty_cell_exists() {
                return Ok(Outcome::Draw);
            }
            let player: &mut Player = if turn % 2 == 0 {
                &mut *self.player1
            } else {
                &mut *self.player2
            };
            let (row, col) = player.make_move(self.board)?;
            let mark = player.mark();
            println!("Player {} move: {}, {}", mark, row, col);
            if self.board.set(row, col, mark)? {
                return Ok(Outcome::Win(mark));
            }
            turn += 1;
        }
    }
}
