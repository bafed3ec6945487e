use board::{Board, Error, Mark, Result};
use player::Player;

pub struct SearchPlayer {
    mark: Mark,
}

impl SearchPlayer {
    pub fn new(mark: Mark) -> Self {
        SearchPlayer { mark }
    }

    // Forward win-count, not minimax: a placement scores 1 the moment it
    // completes a line, and continuations are summed without alternating
    // sign. Continuations that would hand the simulated turn back to this
    // player's own mark contribute nothing.
    fn calc_wins(&self, row: usize, col: usize, mark: Mark, mut board: Board) -> Result<u32> {
        if !board.empty_cell_exists() {
            return Ok(0);
        }
        if board.set(row, col, mark)? {
            return Ok(1);
        }
        let other = mark.flip();
        let mut wins = 0;
        for (i, j) in board.empty_cells() {
            wins += if other == self.mark {
                0
            } else {
                self.calc_wins(i, j, other, board.clone())?
            };
        }
        Ok(wins)
    }
}

impl Player for SearchPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn make_move(&mut self, b: &Board) -> Result<(usize, usize)> {
        let mut best: Option<(u32, (usize, usize))> = None;
        for (i, j) in b.empty_cells() {
            let wins = self.calc_wins(i, j, self.mark, b.clone())?;
            let improved = match best {
                None => true,
                Some((max, _)) => wins > max,
            };
            if improved {
                best = Some((wins, (i, j)));
            }
        }
        best.map(|(_, cell)| cell).ok_or(Error::NoMoveAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::{Board, Error, Mark};

    fn board_from(rows: &[&str]) -> Board {
        let mut b = Board::new(rows.len());
        for (i, row) in rows.iter().enumerate() {
            for (j, ch) in row.chars().enumerate() {
                match ch {
                    'X' => { b.set(i, j, Mark::X).unwrap(); },
                    'O' => { b.set(i, j, Mark::O).unwrap(); },
                    _ => (),
                }
            }
        }
        b
    }

    #[test]
    fn calc_wins_is_deterministic() {
        let b = board_from(&[
            "X..",
            ".O.",
            "...",
        ]);
        let player = SearchPlayer::new(Mark::X);
        let first = player.calc_wins(1, 0, Mark::X, b.clone());
        let second = player.calc_wins(1, 0, Mark::X, b.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn calc_wins_scores_completion_as_one() {
        let b = board_from(&[
            "XX.",
            "OO.",
            "...",
        ]);
        let player = SearchPlayer::new(Mark::X);
        assert_eq!(Ok(1), player.calc_wins(0, 2, Mark::X, b.clone()));
    }

    #[test]
    fn calc_wins_does_not_mutate_the_caller_board() {
        let b = board_from(&[
            "XX.",
            "OO.",
            "...",
        ]);
        let before = b.clone();
        let player = SearchPlayer::new(Mark::X);
        player.calc_wins(0, 2, Mark::X, b.clone()).unwrap();
        assert_eq!(before, b);
    }

    #[test]
    fn calc_wins_counts_opponent_continuations() {
        let b = board_from(&[
            "OO.",
            "OX.",
            "..X",
        ]);
        let player = SearchPlayer::new(Mark::X);
        assert_eq!(Ok(1), player.calc_wins(0, 2, Mark::X, b.clone()));
        assert_eq!(Ok(2), player.calc_wins(1, 2, Mark::X, b.clone()));
        assert_eq!(Ok(1), player.calc_wins(2, 0, Mark::X, b.clone()));
        assert_eq!(Ok(2), player.calc_wins(2, 1, Mark::X, b.clone()));
    }

    #[test]
    fn search_prefers_cell_opponent_wins_through() {
        let b = board_from(&[
            "OO.",
            "OX.",
            "..X",
        ]);
        let mut player = SearchPlayer::new(Mark::X);
        assert_eq!(Ok((1, 2)), player.make_move(&b));
    }

    #[test]
    fn search_takes_immediate_win() {
        let b = board_from(&[
            "OO.",
            "XX.",
            "...",
        ]);
        let mut player = SearchPlayer::new(Mark::X);
        assert_eq!(Ok((1, 2)), player.make_move(&b));
    }

    #[test]
    fn search_on_empty_board_picks_first_cell() {
        let b = Board::new(3);
        let mut player = SearchPlayer::new(Mark::X);
        assert_eq!(Ok((0, 0)), player.make_move(&b));
    }

    #[test]
    fn search_returns_the_single_empty_cell() {
        let b = board_from(&[
            "XOX",
            "XOO",
            "OX.",
        ]);
        let mut player = SearchPlayer::new(Mark::X);
        assert_eq!(Ok((2, 2)), player.make_move(&b));
    }

    #[test]
    fn search_fails_on_full_board() {
        let b = board_from(&[
            "XOX",
            "XOO",
            "OXX",
        ]);
        let mut player = SearchPlayer::new(Mark::O);
        assert_eq!(Err(Error::NoMoveAvailable), player.make_move(&b));
    }
}
