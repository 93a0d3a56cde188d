use crate::engine::{Board, Move};
use crate::heuristics::{order_moves, MoveOrdering};
use log::{debug, info, trace};
use rayon::prelude::*;
use std::collections::HashSet;

/// Represents a solution found by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Moves that clear the board, in the order they must be played.
    pub moves: Vec<Move>,
    /// Number of distinct boards the search expanded before succeeding.
    /// For [`SearchStrategy::Parallel`] only the winning worker's boards are counted.
    pub states_visited: usize,
}

/// How the depth-first search is driven. Every strategy returns the same moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Native recursion.
    #[default]
    Recursive,
    /// An explicit stack of frames, for callers that cannot afford deep recursion.
    Iterative,
    /// First-level moves are spread over rayon workers, each with its own visited set.
    Parallel,
}

/// Solver configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Search driver.
    pub strategy: SearchStrategy,
    /// Order in which candidate moves are tried.
    pub ordering: MoveOrdering,
}

/// Solves `board` with the default configuration (recursive, heuristic ordering).
///
/// # Returns
/// * `Some(solution)` whose moves empty the board. A board that is already solved
///   yields an empty move list.
/// * `None` if every reachable board has been explored without clearing it.
///
/// # Examples
/// ```
/// use sigmar_solver::coord::Point;
/// use sigmar_solver::engine::{Board, Move};
/// use sigmar_solver::solver::solve;
/// use sigmar_solver::tile::Tile;
///
/// let mut board = Board::new_empty();
/// board.set_tile(Point::new(0, 0), Tile::Fire);
/// board.set_tile(Point::new(10, 5), Tile::Fire);
///
/// let solution = solve(&board).unwrap();
/// assert_eq!(solution.moves, vec![Move::pair(Point::new(0, 0), Point::new(10, 5))]);
/// ```
pub fn solve(board: &Board) -> Option<Solution> {
    solve_with_config(board, &SolverConfig::default())
}

/// Solves `board` with an explicit configuration. See [`solve`] for the result.
pub fn solve_with_config(board: &Board, config: &SolverConfig) -> Option<Solution> {
    debug!(
        "Solving board with {} tiles ({:?}, {:?})",
        board.tile_count(),
        config.strategy,
        config.ordering
    );

    if board.is_solved() {
        return Some(Solution {
            moves: Vec::new(),
            states_visited: 0,
        });
    }

    let result = match config.strategy {
        SearchStrategy::Recursive => solve_recursive(board, config.ordering),
        SearchStrategy::Iterative => solve_iterative(board, config.ordering),
        SearchStrategy::Parallel => solve_parallel(board, config.ordering),
    };

    match &result {
        Some(solution) => info!(
            "Found a {}-move solution after visiting {} boards",
            solution.moves.len(),
            solution.states_visited
        ),
        None => info!("No solution exists"),
    }
    result
}

fn solve_recursive(board: &Board, ordering: MoveOrdering) -> Option<Solution> {
    let mut visited = HashSet::new();
    let mut path = Vec::new();
    if search(board, ordering, &mut visited, &mut path) {
        Some(Solution {
            moves: path,
            states_visited: visited.len(),
        })
    } else {
        debug!("Exhausted {} boards", visited.len());
        None
    }
}

fn search(
    board: &Board,
    ordering: MoveOrdering,
    visited: &mut HashSet<Board>,
    path: &mut Vec<Move>,
) -> bool {
    if board.is_solved() {
        return true;
    }
    if !visited.insert(board.clone()) {
        trace!("Pruned a visited board at depth {}", path.len());
        return false;
    }

    for mv in order_moves(board, board.get_moves(), ordering) {
        let next = board.apply_move(&mv);
        path.push(mv);
        if search(&next, ordering, visited, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// One level of the explicit search stack: a board and the candidates not yet tried.
struct Frame {
    board: Board,
    candidates: std::vec::IntoIter<Move>,
}

impl Frame {
    fn new(board: Board, ordering: MoveOrdering) -> Self {
        let candidates = order_moves(&board, board.get_moves(), ordering).into_iter();
        Frame { board, candidates }
    }
}

// Mirrors `search` step for step: `path` always holds one move per frame above the root.
fn solve_iterative(board: &Board, ordering: MoveOrdering) -> Option<Solution> {
    let mut visited = HashSet::new();
    let mut path: Vec<Move> = Vec::new();
    visited.insert(board.clone());
    let mut stack = vec![Frame::new(board.clone(), ordering)];

    while let Some(frame) = stack.last_mut() {
        let Some(mv) = frame.candidates.next() else {
            stack.pop();
            path.pop();
            continue;
        };

        let next = frame.board.apply_move(&mv);
        if next.is_solved() {
            path.push(mv);
            return Some(Solution {
                moves: path,
                states_visited: visited.len(),
            });
        }
        if !visited.insert(next.clone()) {
            trace!("Pruned a visited board at depth {}", path.len() + 1);
            continue;
        }
        path.push(mv);
        stack.push(Frame::new(next, ordering));
    }

    debug!("Exhausted {} boards", visited.len());
    None
}

fn solve_parallel(board: &Board, ordering: MoveOrdering) -> Option<Solution> {
    let candidates = order_moves(board, board.get_moves(), ordering);
    debug!("Spreading {} first moves over rayon workers", candidates.len());

    candidates.into_par_iter().find_map_first(|first| {
        let mut visited = HashSet::new();
        visited.insert(board.clone());
        let next = board.apply_move(&first);
        let mut path = vec![first];
        search(&next, ordering, &mut visited, &mut path).then(|| Solution {
            moves: path,
            states_visited: visited.len(),
        })
    })
}
