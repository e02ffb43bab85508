//! Exhaustive search over all boards reachable from a set of initial boards.
//!
//! Every board is expanded at most once over the whole run, no matter from
//! which initial board or along which path it is reached. Whenever a freshly
//! expanded board has a single peg left, the path that led there is recorded
//! as a [`Solution`].

use log::{debug, info, trace};

use crate::{
    board::Board,
    coord::Hole,
    jump::{Jump, JumpTable},
    visit_map::VisitMap,
};

/// A sequence of jumps that reduces `initial` to a single peg.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    initial: Board,
    jumps: Vec<Jump>,
}

impl Solution {
    pub fn initial(&self) -> Board {
        self.initial
    }

    pub fn jumps(&self) -> &[Jump] {
        &self.jumps
    }

    /// Board after playing all jumps
    pub fn final_board(&self) -> Board {
        self.jumps
            .iter()
            .fold(self.initial, |board, jump| board.apply_jump(jump))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards expanded, i.e. distinct boards reached.
    pub explored: u64,
    /// Pending states dropped because their board was already expanded.
    pub skipped: u64,
    /// Largest size of the pending stack.
    pub max_pending: usize,
}

pub struct SearchOutcome {
    pub solutions: Vec<Solution>,
    pub stats: SearchStats,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct PathId(usize);

struct PathNode {
    parent: Option<PathId>,
    jump: Jump,
}

/// Append-only store of jump sequences. Paths that share a prefix share the
/// nodes of that prefix, so extending a path by one jump costs one node.
#[derive(Default)]
struct PathArena {
    nodes: Vec<PathNode>,
}

impl PathArena {
    fn extend(&mut self, parent: Option<PathId>, jump: Jump) -> PathId {
        self.nodes.push(PathNode { parent, jump });
        PathId(self.nodes.len() - 1)
    }

    fn collect(&self, mut tip: Option<PathId>) -> Vec<Jump> {
        let mut jumps = Vec::new();
        while let Some(PathId(idx)) = tip {
            let node = &self.nodes[idx];
            jumps.push(node.jump);
            tip = node.parent;
        }
        jumps.reverse();
        jumps
    }
}

#[derive(Clone, Copy)]
struct SearchState {
    board: Board,
    initial: Board,
    path: Option<PathId>,
}

/// Runs the search with a fixed set of jumps.
pub struct Solver<'a> {
    jumps: &'a JumpTable,
}

impl<'a> Solver<'a> {
    pub fn new(jumps: &'a JumpTable) -> Self {
        Self { jumps }
    }

    /// The full board with one hole taken out, for every hole in order.
    pub fn single_hole_starts() -> impl Iterator<Item = Board> {
        Hole::all().map(Board::full_without)
    }

    pub fn solve(&self, initial: impl IntoIterator<Item = Board>) -> SearchOutcome {
        self.solve_observed(initial, |_| {})
    }

    /// Like [`Solver::solve`], calling `on_expand` with every board right
    /// before its successors are generated.
    pub fn solve_observed(
        &self,
        initial: impl IntoIterator<Item = Board>,
        mut on_expand: impl FnMut(Board),
    ) -> SearchOutcome {
        let mut visited = VisitMap::new();
        let mut paths = PathArena::default();
        let mut solutions = Vec::new();
        let mut stats = SearchStats::default();

        // last in, first out: the last initial board is searched first
        let mut pending: Vec<SearchState> = initial
            .into_iter()
            .map(|board| SearchState {
                board,
                initial: board,
                path: None,
            })
            .collect();

        while let Some(state) = pending.pop() {
            let board = state.board;
            if visited.is_visited(board) {
                trace!("skipping known board {board:?}");
                stats.skipped += 1;
                continue;
            }
            visited.visit(board);
            stats.explored += 1;
            on_expand(board);

            if board.count() == 1 {
                let jumps = paths.collect(state.path);
                debug!(
                    "solution #{} with {} jumps, ending on hole {:?}",
                    solutions.len(),
                    jumps.len(),
                    board.occupied().next()
                );
                solutions.push(Solution {
                    initial: state.initial,
                    jumps,
                });
            }

            for jump in self.jumps.iter() {
                if !board.can_jump(jump) {
                    continue;
                }
                pending.push(SearchState {
                    board: board.apply_jump(jump),
                    initial: state.initial,
                    path: Some(paths.extend(state.path, *jump)),
                });
            }
            stats.max_pending = stats.max_pending.max(pending.len());
        }

        info!(
            "explored {} boards. skipped {}. found {} solutions",
            stats.explored,
            stats.skipped,
            solutions.len()
        );
        debug_assert_eq!(visited.count() as u64, stats.explored);

        SearchOutcome { solutions, stats }
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use crate::coord::{Geometry, NR_HOLES};

    use super::*;

    fn hole(index: u8) -> Hole {
        Hole::new(index).unwrap()
    }

    fn final_holes(solutions: &[Solution]) -> Vec<usize> {
        let mut holes: Vec<_> = solutions
            .iter()
            .map(|s| {
                let board = s.final_board();
                assert_eq!(board.count(), 1);
                board.occupied().next().unwrap().index()
            })
            .collect();
        holes.sort();
        holes
    }

    /// Replay the solution, checking that every jump is known and playable.
    fn assert_valid(solution: &Solution, jumps: &JumpTable) {
        let mut board = solution.initial();
        for jump in solution.jumps() {
            assert!(jumps.contains(jump));
            assert!(board.can_jump(jump), "{jump} not playable on\n{board}");
            board = board.apply_jump(jump);
        }
        assert_eq!(board.count(), 1);
    }

    #[test]
    fn test_apex_start_is_solvable() {
        let jumps = JumpTable::new(&Geometry::new());
        let outcome = Solver::new(&jumps).solve([Board::full_without(hole(0))]);

        assert!(!outcome.solutions.is_empty());
        for solution in &outcome.solutions {
            assert_eq!(solution.initial(), Board::full_without(hole(0)));
            assert_eq!(solution.jumps().len(), NR_HOLES - 2);
            assert_valid(solution, &jumps);
        }
    }

    #[test]
    fn test_apex_start_counts() {
        let jumps = JumpTable::new(&Geometry::new());
        let outcome = Solver::new(&jumps).solve([Board::full_without(hole(0))]);

        assert_eq!(outcome.stats.explored, 3016);
        assert_eq!(outcome.solutions.len(), 4);
        assert_eq!(final_holes(&outcome.solutions), vec![0, 6, 9, 12]);
    }

    #[test]
    fn test_all_starts() {
        let jumps = JumpTable::new(&Geometry::new());
        let outcome = Solver::new(&jumps).solve(Solver::single_hole_starts());

        assert_eq!(outcome.stats.explored, 13935);
        assert_eq!(outcome.solutions.len(), 15);
        // every single-peg board is reachable, and each is recorded once
        assert_eq!(final_holes(&outcome.solutions), (0..NR_HOLES).collect::<Vec<_>>());
        for solution in &outcome.solutions {
            assert_valid(solution, &jumps);
        }
    }

    #[test]
    fn test_last_start_is_searched_first() {
        let jumps = JumpTable::new(&Geometry::new());
        let outcome = Solver::new(&jumps).solve(Solver::single_hole_starts());

        let first = &outcome.solutions[0];
        assert_eq!(first.initial(), Board::full_without(hole(14)));
        let moves: Vec<_> = first.jumps().iter().map(|j| j.to_string()).collect();
        assert_eq!(
            moves,
            [
                "12 --> 14", "10 --> 12", "4 --> 13", "13 --> 11", "6 --> 8", "9 --> 7",
                "11 --> 4", "2 --> 9", "14 --> 5", "1 --> 6", "5 --> 3", "6 --> 1", "0 --> 3",
            ]
        );
    }

    #[test]
    fn test_boards_are_expanded_once() {
        let jumps = JumpTable::new(&Geometry::new());
        let mut seen = FxHashSet::default();
        let outcome = Solver::new(&jumps).solve_observed(Solver::single_hole_starts(), |board| {
            assert!(seen.insert(board), "expanded {board:?} twice");
        });

        assert_eq!(seen.len() as u64, outcome.stats.explored);
        assert!(outcome.stats.skipped > 0);
        assert!(outcome.stats.max_pending > 0);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let jumps = JumpTable::new(&Geometry::new());
        let solver = Solver::new(&jumps);

        let a = solver.solve(Solver::single_hole_starts());
        let b = solver.solve(Solver::single_hole_starts());
        assert_eq!(a.stats, b.stats);

        let a: FxHashSet<_> = a.solutions.into_iter().collect();
        let b: FxHashSet<_> = b.solutions.into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_order_changes_only_enumeration() {
        let jumps = JumpTable::new(&Geometry::new());
        let solver = Solver::new(&jumps);

        let forward = solver.solve(Solver::single_hole_starts());
        let backward = solver.solve(Solver::single_hole_starts().collect::<Vec<_>>().into_iter().rev());
        assert_eq!(forward.stats.explored, backward.stats.explored);
        assert_eq!(final_holes(&forward.solutions), final_holes(&backward.solutions));
    }

    #[test]
    fn test_single_peg_start() {
        let jumps = JumpTable::new(&Geometry::new());
        let outcome = Solver::new(&jumps).solve([Board(1 << 7)]);

        assert_eq!(outcome.stats.explored, 1);
        assert_eq!(outcome.solutions.len(), 1);
        assert!(outcome.solutions[0].jumps().is_empty());
    }

    #[test]
    fn test_dead_end() {
        let jumps = JumpTable::new(&Geometry::new());
        // two pegs far apart can't reach each other
        let outcome = Solver::new(&jumps).solve([Board(1 | 1 << 14)]);

        assert_eq!(outcome.stats.explored, 1);
        assert!(outcome.solutions.is_empty());
    }

    #[test]
    fn test_path_arena_shares_prefixes() {
        let jumps = JumpTable::new(&Geometry::new());
        let first: Vec<Jump> = jumps.iter().copied().take(3).collect();
        let (a, b, c) = (first[0], first[1], first[2]);

        let mut arena = PathArena::default();
        let root = arena.extend(None, a);
        let left = arena.extend(Some(root), b);
        let right = arena.extend(Some(root), c);

        assert_eq!(arena.nodes.len(), 3);
        assert_eq!(arena.collect(Some(left)), vec![a, b]);
        assert_eq!(arena.collect(Some(right)), vec![a, c]);
        assert_eq!(arena.collect(None), vec![]);
    }
}
