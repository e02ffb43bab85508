use crate::search::Solution;

/// Line printed between two solutions.
pub const SEPARATOR: &str = "----------";

/// One `start --> end` line per jump.
pub fn format_solution(solution: &Solution) -> String {
    solution
        .jumps()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_solutions(solutions: &[Solution]) -> String {
    solutions
        .iter()
        .map(format_solution)
        .collect::<Vec<_>>()
        .join(&format!("\n{SEPARATOR}\n"))
}
