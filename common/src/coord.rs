use std::fmt;

/// Number of rows of the triangular board.
pub const NR_ROWS: usize = 5;
/// Number of holes on the board, row `r` holds `r + 1` of them.
pub const NR_HOLES: usize = NR_ROWS * (NR_ROWS + 1) / 2;

/// A hole on the board, numbered row-major starting at the apex.
///
/// Invariant: can only represent valid hole indices
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Hole(u8);

impl Hole {
    pub fn new(index: u8) -> Option<Self> {
        if (index as usize) < NR_HOLES {
            Some(Hole(index))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn bitmask(self) -> u16 {
        1u16 << self.0
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..NR_HOLES as u8).map(Hole)
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Row and column of a hole. The apex is row 0, column 0.
///
/// Invariant: `column <= row < NR_ROWS`
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    pub fn new(row: u8, column: u8) -> Option<Self> {
        if (row as usize) < NR_ROWS && column <= row {
            Some(Position { row, column })
        } else {
            None
        }
    }

    pub fn shift(self, rows: i8, columns: i8) -> Option<Position> {
        let row = u8::try_from(self.row as i8 + rows).ok()?;
        let column = u8::try_from(self.column as i8 + columns).ok()?;
        Self::new(row, column)
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn column(self) -> u8 {
        self.column
    }
}

/// Lookup tables between hole indices and board coordinates.
///
/// Built once before searching and only read afterwards.
#[derive(Debug, Clone)]
pub struct Geometry {
    positions: [Position; NR_HOLES],
    holes: [[Option<Hole>; NR_ROWS]; NR_ROWS],
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

impl Geometry {
    pub fn new() -> Self {
        let mut positions = [Position { row: 0, column: 0 }; NR_HOLES];
        let mut holes = [[None; NR_ROWS]; NR_ROWS];

        let mut hole = 0;
        for row in 0..NR_ROWS {
            for column in 0..=row {
                positions[hole] = Position {
                    row: row as u8,
                    column: column as u8,
                };
                holes[row][column] = Some(Hole(hole as u8));
                hole += 1;
            }
        }
        debug_assert_eq!(hole, NR_HOLES);

        Geometry { positions, holes }
    }

    pub fn position(&self, hole: Hole) -> Position {
        self.positions[hole.index()]
    }

    pub fn hole(&self, position: Position) -> Option<Hole> {
        self.holes[position.row as usize][position.column as usize]
    }

    /// All holes in index order together with their coordinates.
    pub fn holes(&self) -> impl Iterator<Item = (Hole, Position)> + '_ {
        Hole::all().map(|hole| (hole, self.position(hole)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_round_trip() {
        let geometry = Geometry::new();
        for hole in Hole::all() {
            let position = geometry.position(hole);
            assert_eq!(geometry.hole(position), Some(hole));
        }
    }

    #[test]
    // holes must be handed out row by row, left to right
    fn test_row_major_order() {
        let geometry = Geometry::new();
        let mut expected = Hole::all();
        for row in 0..NR_ROWS as u8 {
            for column in 0..=row {
                let position = Position::new(row, column).unwrap();
                assert_eq!(geometry.hole(position), expected.next());
            }
        }
        assert_eq!(expected.next(), None);
    }

    #[test]
    fn test_row_starts() {
        let geometry = Geometry::new();
        let starts: Vec<_> = (0..NR_ROWS as u8)
            .map(|row| geometry.hole(Position::new(row, 0).unwrap()).unwrap().index())
            .collect();
        assert_eq!(starts, vec![0, 1, 3, 6, 10]);
    }

    #[test]
    fn test_invalid_holes_and_positions() {
        assert_eq!(Hole::new(15), None);
        assert!(Hole::new(14).is_some());
        assert_eq!(Position::new(5, 0), None);
        assert_eq!(Position::new(2, 3), None);
    }

    #[test]
    fn test_shift_stays_on_board() {
        let apex = Position::new(0, 0).unwrap();
        assert_eq!(apex.shift(-1, 0), None);
        assert_eq!(apex.shift(0, 1), None);
        assert_eq!(apex.shift(2, 2), Position::new(2, 2));

        let corner = Position::new(4, 4).unwrap();
        assert_eq!(corner.shift(1, 0), None);
        assert_eq!(corner.shift(-2, -2), Position::new(2, 2));
        assert_eq!(corner.shift(-1, 0), None);
    }
}
