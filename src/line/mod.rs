// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

use std::convert::TryFrom;
use std::fmt;
use ansi_term::{Colour, Style};

use super::cell::{CellStatus, CellStatus::{Filled, Empty, Unknown}, Error};
use super::util::{maybe_color, Direction};

// One row or column of a puzzle: the clue (ordered block lengths) plus the
// current cell values. The cells are the engine's output surface; the clue is
// immutable for the lifetime of the line.
#[derive(Debug)]
pub struct Line {
    pub direction: Direction,
    pub index:     usize,
    clue:          Vec<usize>,
    cells:         Vec<CellStatus>,
    changed:       Vec<bool>,
    self_changed:  bool,
}

impl Line {
    pub fn new(direction: Direction,
               index: usize,
               clue: Vec<usize>,
               cells: Vec<CellStatus>) -> Result<Self, Error>
    {
        Self::validate_clue(&clue, cells.len())?;
        let changed = vec![false; cells.len()];
        Ok(Line {
            direction,
            index,
            clue,
            cells,
            changed,
            self_changed: false,
        })
    }

    // Builds a line from a cell pattern in the same alphabet Display emits:
    // '*' filled, '.' empty, '_' unknown.
    pub fn from_pattern(direction: Direction,
                        index: usize,
                        clue: Vec<usize>,
                        pattern: &str) -> Result<Self, Error>
    {
        let cells = pattern.chars()
                           .map(|c| CellStatus::try_from(c).map_err(Error::InvalidPattern))
                           .collect::<Result<Vec<_>, _>>()?;
        Self::new(direction, index, clue, cells)
    }

    fn validate_clue(clue: &[usize], length: usize) -> Result<(), Error> {
        if clue.iter().any(|&b| b == 0) {
            return Err(Error::InvalidClue(
                format!("clue {:?} contains a zero-length block", clue)));
        }
        if !clue.is_empty() {
            // blocks plus at least one separating space between each pair
            let needed = clue.iter().sum::<usize>() + clue.len() - 1;
            if needed > length {
                return Err(Error::InvalidClue(
                    format!("clue {:?} needs {} cells but the line has {}", clue, needed, length)));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
    pub fn clue(&self) -> &[usize] { &self.clue }
    pub fn cells(&self) -> &[CellStatus] { &self.cells }

    // change set of the most recent infer() call
    pub fn changed(&self) -> bool { self.self_changed }
    pub fn cell_changed(&self, index: usize) -> bool { self.changed[index] }

    pub fn to_colored_string(&self, emit_color: bool) -> String {
        let cells = self.cells.iter()
                              .map(|cell| {
                                  let style = match cell {
                                      Filled  => Colour::Cyan.bold(),
                                      Empty   => Style::new().fg(Colour::Fixed(241)),
                                      Unknown => Style::default(),
                                  };
                                  maybe_color(&style.paint(cell.as_char().to_string()), emit_color)
                              })
                              .collect::<Vec<_>>()
                              .concat();
        format!("clue=[{}] cells=[{}]", self.fmt_clue(), cells)
    }

    fn fmt_clue(&self) -> String {
        self.clue.iter()
                 .map(|b| b.to_string())
                 .collect::<Vec<_>>()
                 .join(" ")
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells: String = self.cells.iter().map(|c| c.as_char()).collect();
        write!(f, "clue=[{}] cells=[{}]", self.fmt_clue(), cells)
    }
}
