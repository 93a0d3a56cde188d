//! Move ordering heuristics for the solver.
//!
//! Scores only decide the order in which the solver tries candidate moves. The
//! search stays exhaustive, so a different ordering changes how fast a solution is
//! found, never whether one is.
use crate::engine::{Board, Move};
use crate::tile::Tile;

/// How the solver orders candidate moves at each board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Highest [`move_score`] first, ties kept in generation order.
    #[default]
    Heuristic,
    /// Plain [`Board::get_moves`] order.
    Generation,
}

/// Score contributed by a single tile.
pub fn tile_score(tile: Tile) -> u32 {
    match tile {
        Tile::Fire | Tile::Water | Tile::Air | Tile::Earth => 4,
        Tile::Mors | Tile::Vitae | Tile::Salt | Tile::Quicksilver => 3,
        Tile::Lead | Tile::Tin | Tile::Iron | Tile::Copper | Tile::Silver | Tile::Gold => 2,
        Tile::Empty => 0,
    }
}

/// Scores a move on `board`.
///
/// The score is the sum of [`tile_score`] over the tiles the move clears, except
/// that a pair spending exactly one Salt (Salt against an element) scores a flat 1.
///
/// # Examples
/// ```
/// use sigmar_solver::coord::Point;
/// use sigmar_solver::engine::{Board, Move};
/// use sigmar_solver::heuristics::move_score;
/// use sigmar_solver::tile::Tile;
///
/// let mut board = Board::new_empty();
/// board.set_tile(Point::new(0, 0), Tile::Fire);
/// board.set_tile(Point::new(0, 5), Tile::Fire);
/// board.set_tile(Point::new(10, 0), Tile::Salt);
///
/// assert_eq!(move_score(&board, &Move::pair(Point::new(0, 0), Point::new(0, 5))), 8);
/// assert_eq!(move_score(&board, &Move::pair(Point::new(0, 0), Point::new(10, 0))), 1);
/// ```
pub fn move_score(board: &Board, mv: &Move) -> u32 {
    let tiles: Vec<Tile> = mv.points().iter().map(|&p| board.get_tile(p)).collect();
    let salts = tiles.iter().filter(|&&tile| tile == Tile::Salt).count();
    if tiles.len() == 2 && salts == 1 {
        return 1;
    }
    tiles.into_iter().map(tile_score).sum()
}

/// Returns `moves` in the order the solver should try them.
///
/// With [`MoveOrdering::Heuristic`] the sort is stable, so moves with equal scores
/// keep their generation order.
pub fn order_moves(board: &Board, moves: Vec<Move>, ordering: MoveOrdering) -> Vec<Move> {
    match ordering {
        MoveOrdering::Generation => moves,
        MoveOrdering::Heuristic => {
            let mut scored: Vec<(u32, Move)> = moves
                .into_iter()
                .map(|mv| (move_score(board, &mv), mv))
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            scored.into_iter().map(|(_, mv)| mv).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Point;

    fn rim_board(tiles: &[Tile]) -> (Board, Vec<Point>) {
        // Corners and row-end cells are always exposed.
        let points = [
            Point::new(0, 0),
            Point::new(0, 5),
            Point::new(10, 0),
            Point::new(10, 5),
            Point::new(5, 0),
            Point::new(5, 10),
        ];
        let mut board = Board::new_empty();
        for (&point, &tile) in points.iter().zip(tiles) {
            board.set_tile(point, tile);
        }
        (board, points[..tiles.len()].to_vec())
    }

    #[test]
    fn test_tile_scores() {
        assert_eq!(tile_score(Tile::Earth), 4);
        assert_eq!(tile_score(Tile::Vitae), 3);
        assert_eq!(tile_score(Tile::Quicksilver), 3);
        assert_eq!(tile_score(Tile::Salt), 3);
        assert_eq!(tile_score(Tile::Copper), 2);
        assert_eq!(tile_score(Tile::Gold), 2);
        assert_eq!(tile_score(Tile::Empty), 0);
    }

    #[test]
    fn test_move_scores() {
        let (board, p) = rim_board(&[
            Tile::Water,
            Tile::Salt,
            Tile::Salt,
            Tile::Mors,
            Tile::Vitae,
            Tile::Gold,
        ]);
        assert_eq!(move_score(&board, &Move::pair(p[0], p[1])), 1);
        assert_eq!(move_score(&board, &Move::pair(p[1], p[0])), 1);
        assert_eq!(move_score(&board, &Move::pair(p[1], p[2])), 6);
        assert_eq!(move_score(&board, &Move::pair(p[3], p[4])), 6);
        assert_eq!(move_score(&board, &Move::single(p[5])), 2);
    }

    #[test]
    fn test_order_moves_descending_and_stable() {
        let (board, p) = rim_board(&[Tile::Fire, Tile::Salt, Tile::Fire, Tile::Salt]);
        let moves = board.get_moves();
        // Generation order: (0,1) salt, (0,2) fire pair, (0,3) salt, (1,2) salt, (1,3) salt-salt, (2,3) salt.
        assert_eq!(moves.len(), 6);

        let ordered = order_moves(&board, moves.clone(), MoveOrdering::Heuristic);
        assert_eq!(ordered[0], Move::pair(p[0], p[2]));
        assert_eq!(ordered[1], Move::pair(p[1], p[3]));
        let salt_spends: Vec<Move> = moves
            .iter()
            .filter(|mv| move_score(&board, mv) == 1)
            .cloned()
            .collect();
        assert_eq!(ordered[2..].to_vec(), salt_spends);

        assert_eq!(order_moves(&board, moves.clone(), MoveOrdering::Generation), moves);
    }
}
