extern crate itertools;
extern crate rand;
extern crate smallvec;

pub mod anagram;
pub mod board;
pub mod game;
pub mod intervals;
pub mod player;
pub mod shortest_path;
