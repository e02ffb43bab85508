use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use common::{Board, Geometry, Hole, JumpTable, Solver, report};
use log::info;

use crate::draw;

/// Find every way to clear the 15-hole triangular peg solitaire board down
/// to a single peg.
///
/// Holes are numbered row by row, 0 at the apex and 10..14 along the base.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Only start from the full board missing this hole. Can be repeated.
    #[arg(long = "start", value_name = "HOLE", value_parser = clap::value_parser!(u8).range(0..15))]
    pub starts: Vec<u8>,

    /// Start from a single custom board: '#' for a peg and '.' for an empty
    /// hole, in hole order. Whitespace is ignored.
    #[arg(long, value_name = "CELLS", conflicts_with = "starts")]
    pub board: Option<String>,

    /// Replay each solution board by board.
    #[arg(long)]
    pub draw: bool,
}

impl Args {
    fn initial_boards(&self) -> Result<Vec<Board>> {
        if let Some(cells) = &self.board {
            let board = cells
                .parse::<Board>()
                .with_context(|| format!("invalid board {cells:?}"))?;
            return Ok(vec![board]);
        }

        if self.starts.is_empty() {
            return Ok(Solver::single_hole_starts().collect());
        }

        self.starts
            .iter()
            .map(|&start| {
                Hole::new(start)
                    .map(Board::full_without)
                    .with_context(|| format!("hole {start} is not on the board"))
            })
            .collect()
    }
}

pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let geometry = Geometry::new();
    let jumps = JumpTable::new(&geometry);

    let initial = args.initial_boards()?;
    info!("searching from {} initial boards", initial.len());

    let outcome = Solver::new(&jumps).solve(initial);
    info!("{:?}", outcome.stats);

    if args.draw {
        draw::write_replays(out, &geometry, &outcome.solutions)
            .context("failed to write solutions")?;
    } else {
        writeln!(out, "{}", report::format_solutions(&outcome.solutions))
            .context("failed to write solutions")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}
