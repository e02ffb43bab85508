//! Solver for peg solitaire on the 15-hole triangular board.
//!
//! Holes are numbered row by row from the apex:
//!
//! ```text
//!         0
//!       1   2
//!     3   4   5
//!   6   7   8   9
//! 10  11  12  13  14
//! ```
//!
//! [`coord::Geometry`] maps holes to coordinates, [`jump::JumpTable`] lists
//! every jump derived from it, and [`search::Solver`] explores all boards
//! reachable from the chosen initial boards, collecting every path that
//! leaves a single peg.

pub mod board;
pub mod coord;
pub mod jump;
pub mod report;
pub mod search;
pub mod visit_map;

pub use board::{Board, ParseBoardError};
pub use coord::{Geometry, Hole, NR_HOLES, NR_ROWS, Position};
pub use jump::{Jump, JumpTable, NR_JUMPS};
pub use search::{SearchOutcome, SearchStats, Solution, Solver};
