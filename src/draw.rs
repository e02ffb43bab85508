use std::io::{self, Write};

use colored::Colorize;
use common::{Board, Geometry, Jump, NR_ROWS, Solution, report::SEPARATOR};

/// Draw `board` like its `Display` form, marking the hole a peg just landed
/// in red and the two holes it emptied in blue.
pub fn draw_with_jump(geometry: &Geometry, board: Board, jump: &Jump) -> String {
    let mut out = String::new();
    for (hole, position) in geometry.holes() {
        let row = position.row() as usize;
        if position.column() == 0 {
            if row > 0 {
                out.push('\n');
            }
            out.push_str(&" ".repeat(NR_ROWS - 1 - row));
        } else {
            out.push(' ');
        }

        let cell = if board.is_occupied(hole) {
            if hole == jump.end() {
                "#".on_red().to_string()
            } else {
                "#".to_string()
            }
        } else if hole == jump.start() || hole == jump.middle() {
            ".".on_blue().to_string()
        } else {
            ".".to_string()
        };
        out.push_str(&cell);
    }
    out
}

/// Print every solution as its initial board followed by each jump and the
/// board it leaves behind.
pub fn write_replays(
    out: &mut impl Write,
    geometry: &Geometry,
    solutions: &[Solution],
) -> io::Result<()> {
    for (i, solution) in solutions.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{SEPARATOR}")?;
        }

        let mut board = solution.initial();
        writeln!(out, "{board}")?;
        for jump in solution.jumps() {
            board = board.apply_jump(jump);
            writeln!(out)?;
            writeln!(out, "{jump}")?;
            writeln!(out, "{}", draw_with_jump(geometry, board, jump))?;
        }
    }
    Ok(())
}
