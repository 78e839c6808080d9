// vim: set ai et ts=4 sts=4:
use std::convert::TryFrom;
use std::fmt;

use super::util::Direction;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum CellStatus {
    Filled,
    Empty,
    Unknown,
}
impl CellStatus {
    // one-character rendering, also accepted back by TryFrom<char>
    pub fn as_char(&self) -> char {
        match *self {
            CellStatus::Filled  => '*',
            CellStatus::Empty   => '.',
            CellStatus::Unknown => '_',
        }
    }
}
impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            CellStatus::Filled  => "Filled",
            CellStatus::Empty   => "Empty",
            CellStatus::Unknown => "Unknown",
        })
    }
}
impl TryFrom<char> for CellStatus {
    type Error = char;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '*' => Ok(CellStatus::Filled),
            '.' => Ok(CellStatus::Empty),
            '_' => Ok(CellStatus::Unknown),
            _   => Err(value),
        }
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug, Clone)]
pub struct StatusChange {
    pub index: usize,
    pub old: CellStatus,
    pub new: CellStatus,
}
impl StatusChange {
    pub fn new(index: usize, old: CellStatus, new: CellStatus) -> Self {
        Self { index, old, new }
    }
}
impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Change: in cell {}, status was changed from {} to {}",
            self.index,
            self.old,
            self.new)
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug)]
pub enum Error {
    Contradiction(StatusChange),        // cell already held the opposite concrete value
    Unsatisfiable(Direction, usize),    // no placement of the clue agrees with the known cells
    InvalidClue(String),
    InvalidPattern(char),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Contradiction(change) =>
                write!(f, "In cell {}, attempt to change status from {} to {} was rejected: conflicting information",
                    change.index, change.old, change.new),
            Error::Unsatisfiable(direction, index) =>
                write!(f, "No valid placement exists for {} line {}", direction, index),
            Error::InvalidClue(msg) =>
                write!(f, "Invalid clue: {}", msg),
            Error::InvalidPattern(c) =>
                write!(f, "Not a valid cell character: {:?}", c),
        }
    }
}
impl std::error::Error for Error {}
