use std::io::{self, BufRead, Write};

use board::{Board, Mark, Result};
use player::Player;

pub struct HumanPlayer<R, W> {
    mark: Mark,
    input: R,
    output: W,
}

impl HumanPlayer<io::BufReader<io::Stdin>, io::Stdout> {
    pub fn new(mark: Mark) -> Self {
        HumanPlayer::with_io(mark, io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn with_io(mark: Mark, input: R, output: W) -> Self {
        HumanPlayer { mark, input, output }
    }

    fn read_coords(&mut self) -> Option<(i64, i64)> {
        let mut buffer = String::new();
        self.input.read_line(&mut buffer).unwrap();
        let mut nums = buffer.split_whitespace().map(str::parse::<i64>);
        match (nums.next(), nums.next()) {
            (Some(Ok(row)), Some(Ok(col))) => Some((row, col)),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn make_move(&mut self, b: &Board) -> Result<(usize, usize)> {
        loop {
            write!(self.output, "Player {}, enter your move (row and column): ", self.mark)
                .unwrap();
            self.output.flush().unwrap();
            let (row, col) = match self.read_coords() {
                Some(pair) => pair,
                None => {
                    writeln!(self.output, "Invalid input. Please enter two integers.").unwrap();
                    continue;
                },
            };
            if row < 0 || col < 0 {
                writeln!(self.output, "Invalid cell coordinates. Try again.").unwrap();
                continue;
            }
            match b.get(row as usize, col as usize) {
                Ok(None) => return Ok((row as usize, col as usize)),
                Ok(Some(..)) =>
                    writeln!(self.output, "Cell is already occupied. Try again.").unwrap(),
                Err(..) =>
                    writeln!(self.output, "Invalid cell coordinates. Try again.").unwrap(),
            }
        }
    }
}
