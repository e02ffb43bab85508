use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    coord::{Hole, NR_HOLES, NR_ROWS},
    jump::Jump,
};

const FULL_MASK: u16 = (1u16 << NR_HOLES) - 1;

/// Which holes hold a peg. Bit `i` is set iff hole `i` is occupied.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Board(pub u16);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("invalid character {0:?} in board, expected '#' or '.'")]
    InvalidChar(char),

    #[error("too many holes in board, expected {NR_HOLES}")]
    TooManyHoles,

    #[error("not enough holes in board: got {0}, expected {NR_HOLES}")]
    NotEnoughHoles(usize),
}

impl Board {
    /// The full board with a single peg taken out.
    pub fn full_without(hole: Hole) -> Board {
        Board(FULL_MASK & !hole.bitmask())
    }

    /// Number of occupied holes
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_occupied(&self, hole: Hole) -> bool {
        self.0 & hole.bitmask() != 0
    }

    pub fn occupied(&self) -> impl Iterator<Item = Hole> + '_ {
        Hole::all().filter(|&hole| self.is_occupied(hole))
    }

    /// `start` and `middle` hold pegs and `end` is empty.
    pub fn can_jump(&self, jump: &Jump) -> bool {
        (self.0 & jump.add_bits()) == 0 && (self.0 & jump.remove_bits()).count_ones() == 2
    }

    pub fn apply_jump(&self, jump: &Jump) -> Board {
        debug_assert!(self.can_jump(jump), "{jump} is not playable on {self:?}");
        let mut next = self.0;
        next &= !jump.remove_bits();
        next |= jump.add_bits();
        Board(next)
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse `#` (peg) and `.` (empty) in hole order, ignoring whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = 0u16;
        let mut counted = 0;
        for c in s.chars() {
            let peg = match c {
                '#' => true,
                '.' => false,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::InvalidChar(c)),
            };

            if counted == NR_HOLES {
                return Err(ParseBoardError::TooManyHoles);
            }
            if peg {
                board |= 1 << counted;
            }
            counted += 1;
        }

        if counted < NR_HOLES {
            return Err(ParseBoardError::NotEnoughHoles(counted));
        }
        Ok(Board(board))
    }
}

impl fmt::Display for Board {
    /// Draws the triangle with the apex on top, e.g. for the board missing
    /// only hole 4:
    ///
    /// ```text
    ///     #
    ///    # #
    ///   # . #
    ///  # # # #
    /// # # # # #
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut holes = Hole::all();
        for row in 0..NR_ROWS {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{:width$}", "", width = NR_ROWS - 1 - row)?;
            for column in 0..=row {
                let Some(hole) = holes.next() else {
                    return Err(fmt::Error);
                };
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if self.is_occupied(hole) { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
