use bitvec::{bitbox, boxed::BitBox, prelude::Lsb0};

use crate::{board::Board, coord::NR_HOLES};

/// One bit per possible board, set once the board has been expanded.
pub struct VisitMap {
    bits: BitBox<u32>,
}

impl Default for VisitMap {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitMap {
    pub fn new() -> Self {
        Self {
            bits: bitbox![u32, Lsb0; 0; 1usize << NR_HOLES],
        }
    }

    pub fn is_visited(&self, board: Board) -> bool {
        self.bits[board.0 as usize]
    }

    pub fn visit(&mut self, board: Board) {
        self.bits.set(board.0 as usize, true);
    }

    /// Number of distinct boards visited so far
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
