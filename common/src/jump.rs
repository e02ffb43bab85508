use std::fmt;

use crate::coord::{Geometry, Hole};

/// Number of jumps on the 5-row triangle: 18 lines of three holes, each
/// playable in both directions.
pub const NR_JUMPS: usize = 36;

/// The six directions a peg can jump in, as seen on the triangle drawn with
/// the apex on top.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Direction {
    Left,
    Right,
    DownLeft,
    DownRight,
    UpLeft,
    UpRight,
}

impl Direction {
    /// Generation order of the jumps of a single hole.
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::UpRight,
    ];

    /// Single step as (rows, columns).
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::DownLeft => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Jump {
    remove_bits: u16,
    add_bits: u16,
    start: Hole,
    middle: Hole,
    end: Hole,
}

impl Jump {
    fn new(start: Hole, middle: Hole, end: Hole) -> Self {
        Jump {
            remove_bits: start.bitmask() | middle.bitmask(),
            add_bits: end.bitmask(),
            start,
            middle,
            end,
        }
    }

    /// Build the jump from `start` in the given direction, if both the jumped
    /// over hole and the landing hole exist.
    pub fn in_direction(geometry: &Geometry, start: Hole, direction: Direction) -> Option<Jump> {
        let (rows, columns) = direction.delta();
        let from = geometry.position(start);
        let middle = geometry.hole(from.shift(rows, columns)?)?;
        let end = geometry.hole(from.shift(2 * rows, 2 * columns)?)?;
        Some(Jump::new(start, middle, end))
    }

    pub fn start(&self) -> Hole {
        self.start
    }
    pub fn middle(&self) -> Hole {
        self.middle
    }
    pub fn end(&self) -> Hole {
        self.end
    }

    /// Holes that lose their peg
    pub(crate) fn remove_bits(&self) -> u16 {
        self.remove_bits
    }
    /// Hole that gains a peg
    pub(crate) fn add_bits(&self) -> u16 {
        self.add_bits
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.start, self.end)
    }
}

/// Every jump that fits on the board, ordered by start hole and then by
/// [`Direction::ALL`].
#[derive(Debug, Clone)]
pub struct JumpTable {
    jumps: [Jump; NR_JUMPS],
}

impl JumpTable {
    pub fn new(geometry: &Geometry) -> Self {
        let jumps: Vec<Jump> = geometry
            .holes()
            .flat_map(|(hole, _)| {
                Direction::ALL
                    .into_iter()
                    .filter_map(move |direction| Jump::in_direction(geometry, hole, direction))
            })
            .collect();

        log::debug!("generated {} jumps", jumps.len());

        JumpTable {
            jumps: jumps.try_into().expect("should find exactly 36 jumps"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Jump> {
        self.jumps.iter()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, jump: &Jump) -> bool {
        self.jumps.contains(jump)
    }
}
