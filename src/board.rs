use std::error;
use std::fmt;
use std::iter;

use itertools::Itertools;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    OutOfRange(usize, usize),
    Occupied(usize, usize),
    NoMoveAvailable,
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange(row, col) =>
                write!(f, "Error: ({}, {}): cell out of range", row, col),
            Error::Occupied(row, col) =>
                write!(f, "Error: ({}, {}): cell is already occupied", row, col),
            Error::NoMoveAvailable =>
                write!(f, "Error: no empty cell available"),
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match *self {
            Error::OutOfRange(..) => "Cell out of range",
            Error::Occupied(..) => "Cell is already occupied",
            Error::NoMoveAvailable => "No empty cell available",
        }
    }

    fn cause(&self) -> Option<&error::Error> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn flip(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

pub type Cell = Option<Mark>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    data: SmallVec<[Cell; 16]>,
}

impl Board {
    pub fn new(size: usize) -> Board {
        assert!(size >= 1);
        let data = iter::repeat(None).take(size * size).collect();
        Board { size, data }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index_for(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(Error::OutOfRange(row, col))
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.index_for(row, col).map(|i| self.data[i])
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<bool> {
        let i = self.index_for(row, col)?;
        if self.data[i].is_some() {
            return Err(Error::Occupied(row, col));
        }
        self.data[i] = Some(mark);
        Ok(self.completes_line(row, col, mark))
    }

    pub fn empty_cell_exists(&self) -> bool {
        self.data.iter().any(Cell::is_none)
    }

    pub fn empty_cells(&self) -> EmptyCellsIter {
        EmptyCellsIter { board: self, index: 0 }
    }

    // All four counts run on every move; the off-line counts cannot reach
    // `size` before the line they belong to is actually full.
    fn completes_line(&self, row: usize, col: usize, mark: Mark) -> bool {
        let played = Some(mark);
        let mut ncol = 0;
        let mut nrow = 0;
        let mut ndiag = 0;
        let mut nanti = 0;
        for i in 0..self.size {
            if self.data[i * self.size + col] == played { ncol += 1; }
            if self.data[row * self.size + i] == played { nrow += 1; }
            if self.data[i * self.size + i] == played { ndiag += 1; }
            if self.data[i * self.size + (self.size - i - 1)] == played { nanti += 1; }
        }
        ncol == self.size || nrow == self.size || ndiag == self.size || nanti == self.size
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.data.iter().chunks(self.size).into_iter() {
            for cell in row {
                match *cell {
                    Some(mark) => write!(f, "{} ", mark)?,
                    None => write!(f, ". ")?,
                }
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

pub struct EmptyCellsIter<'a> {
    board: &'a Board,
    index: usize,
}

impl<'a> Iterator for EmptyCellsIter<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.board.data.len() {
            let i = self.index;
            self.index += 1;
            if self.board.data[i].is_none() {
                return Some((i / self.board.size, i % self.board.size));
            }
        }
        None
    }
}
