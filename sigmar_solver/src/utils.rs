use crate::coord::CELL_COUNT;
use crate::engine::{Board, BoardError};
use crate::tile::Tile;

/// Symbol marking a cell that could not be recognized.
pub const UNRESOLVED_SYMBOL: char = '?';

/// Parses a board from text.
///
/// Whitespace is ignored, so both the indented layout printed by the board's
/// `Display` implementation and a bare 91-character string are accepted. Every
/// other character is one cell, in row-major order, using the tile symbols of
/// [`Tile::to_char`]. A `?` marks a cell the recognizer could not classify.
///
/// The returned board has Lead as its active metal.
///
/// # Errors
/// * `BoardError::UnknownSymbol` for a character that names no tile.
/// * `BoardError::CellCount` if there are not exactly 91 cells.
/// * `BoardError::UnresolvedCell` for the first `?`.
///
/// # Examples
/// ```
/// use sigmar_solver::coord::Point;
/// use sigmar_solver::tile::Tile;
/// use sigmar_solver::utils::board_from_str;
///
/// let text = format!("G{}", "-".repeat(90));
/// let board = board_from_str(&text).unwrap();
/// assert_eq!(board.get_tile(Point::new(0, 0)), Tile::Gold);
///
/// assert!(board_from_str("F F").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, BoardError> {
    let mut cells: Vec<Option<Tile>> = Vec::with_capacity(CELL_COUNT);
    for symbol in s.chars().filter(|c| !c.is_whitespace()) {
        if symbol == UNRESOLVED_SYMBOL {
            cells.push(None);
            continue;
        }
        match Tile::from_char(symbol) {
            Some(tile) => cells.push(Some(tile)),
            None => {
                return Err(BoardError::UnknownSymbol {
                    symbol,
                    index: cells.len(),
                })
            }
        }
    }
    Board::from_recognized(&cells)
}
