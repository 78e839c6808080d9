// vim: set ai et ts=4 sts=4 sw=4:
use log::{debug, trace};

use super::Line;
use super::super::cell::{CellStatus, CellStatus::{Filled, Empty, Unknown}, StatusChange, Error};

impl Line {
    // Runs the line solver: enumerates every placement of the clue that is
    // compatible with the known cells, intersects them, and writes the cells
    // that came out the same in all of them back into the line.
    //
    // Returns whether any cell changed. If no placement is compatible at all,
    // the known cells already rule out every arrangement of the clue and
    // Error::Unsatisfiable is returned with the cells untouched.
    pub fn infer(&mut self) -> Result<bool, Error> {
        self.self_changed = false;
        for flag in self.changed.iter_mut() {
            *flag = false;
        }

        let mut pos = vec![0usize; self.clue.len()];
        let mut accumulator = vec![Unknown; self.cells.len()];
        let mut first = true;
        self.enumerate(0, &mut pos, &mut accumulator, &mut first);

        if first {
            debug!("no valid placement for {} line {}: {}", self.direction, self.index, self);
            return Err(Error::Unsatisfiable(self.direction, self.index));
        }

        for (i, &status) in accumulator.iter().enumerate() {
            if status != Unknown {
                self.assign(i, status)?;
            }
        }

        debug!("inferred {} line {}: {}", self.direction, self.index, self);
        Ok(self.self_changed)
    }

    // Enumerates all possible starting positions for blocks b.. given the
    // fixed starts of blocks 0..b, skipping any candidate that disagrees with
    // a cell whose value is already known. Each complete arrangement is folded
    // into the accumulator as it is found.
    fn enumerate(&self,
                 b: usize,
                 pos: &mut [usize],
                 accumulator: &mut [CellStatus],
                 first: &mut bool)
    {
        if b == self.clue.len() {
            // found a valid arrangement of all blocks; an empty clue counts as
            // the single vacuous arrangement (everything empty)
            trace!("{} line {}: valid placement {:?}", self.direction, self.index, pos);
            self.accumulate(pos, accumulator, first);
            return;
        }

        let prev_space_start = match b {
            0 => 0,
            _ => pos[b-1] + self.clue[b-1],
        };
        let start = match b {
            0 => 0,
            _ => prev_space_start + 1,
        };

        let len = self.cells.len();
        for i in start..len {
            if i + self.clue[b] > len {
                // the block no longer fits; later starts won't either
                break;
            }
            pos[b] = i;

            // between the previous block's end and this block's start,
            // no cell may already be known to be filled
            if self.cells[prev_space_start..i].iter().any(|&c| c == Filled) {
                continue;
            }
            // from this block's start to its end, no cell may already be
            // known to be empty
            if self.cells[i..i + self.clue[b]].iter().any(|&c| c == Empty) {
                continue;
            }
            // the last block must also leave no known-filled cell behind it
            if b == self.clue.len() - 1
                && self.cells[i + self.clue[b]..].iter().any(|&c| c == Filled)
            {
                continue;
            }

            self.enumerate(b + 1, pos, accumulator, first);
        }
    }

    // Intersects filled/empty status over every valid arrangement seen so
    // far. Because complete arrangements are enumerated, there is no need to
    // track which block a filled cell belongs to.
    fn accumulate(&self, pos: &[usize], accumulator: &mut [CellStatus], first: &mut bool) {
        let mut arrangement = vec![Empty; self.cells.len()];
        for (b, &start) in pos.iter().enumerate() {
            for cell in arrangement[start..start + self.clue[b]].iter_mut() {
                *cell = Filled;
            }
        }

        for (acc, val) in accumulator.iter_mut().zip(arrangement) {
            if *first {
                *acc = val;
            } else if *acc != val {
                *acc = Unknown;
            }
        }
        *first = false;
    }

    // Commits one concrete value to a cell and records the change. Writing
    // over the other concrete value is a contradiction: the line as given
    // cannot be consistent with its clue.
    fn assign(&mut self, index: usize, new_status: CellStatus) -> Result<bool, Error> {
        let old = self.cells[index];
        if old == new_status {
            return Ok(false);
        }
        if old != Unknown {
            return Err(Error::Contradiction(StatusChange::new(index, old, new_status)));
        }
        self.cells[index] = new_status;
        self.changed[index] = true;
        self.self_changed = true;
        Ok(true)
    }
}
