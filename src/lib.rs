// vim: set ai et ts=4 sw=4 sts=4:
//! Line inference engine for nonogram puzzles.
//!
//! Given one row or column (its cells, each unknown/filled/empty, and the
//! ordered block lengths it must contain), [`Line::infer`] writes back every
//! cell value that is logically forced by the clue, or reports that the
//! current partial assignment cannot be completed. Grid-level orchestration,
//! backtracking and puzzle file formats are the caller's business.

mod cell;
mod line;
mod util;

pub use self::cell::{CellStatus, Error, StatusChange};
pub use self::line::Line;
pub use self::util::Direction;
