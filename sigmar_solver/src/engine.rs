//! Core game engine for the alchemical garden.
//!
//! This module defines the game's fundamental components:
//! - `Board`: the 91-cell hexagonal grid plus the currently matchable metal, with
//!   active-tile detection, legal move generation and (pure) move application.
//! - `Move`: one removal of one or two tiles.
//! - `Game`: an interactive session with move validation and undo history.
//! - `BoardError` / `MoveError`: the errors raised while building boards or playing.
use crate::coord::{all_points, Point, CELL_COUNT, MID_ROW, ROW_COUNT, ROW_WIDTHS};
use crate::rules::matches;
use crate::tile::Tile;
use std::fmt;
use thiserror::Error;

/// Errors raised while building a [`Board`] from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The number of rows differs from [`ROW_COUNT`].
    #[error("expected {expected} rows, found {found}")]
    RowCount {
        /// Required row count.
        expected: usize,
        /// Row count that was supplied.
        found: usize,
    },
    /// A row does not have the width the hexagon requires.
    #[error("row {row} must hold {expected} cells, found {found}")]
    RowWidth {
        /// Offending row.
        row: usize,
        /// Width required for that row.
        expected: usize,
        /// Width that was supplied.
        found: usize,
    },
    /// A flat cell list does not have exactly [`CELL_COUNT`] entries.
    #[error("expected {expected} cells, found {found}")]
    CellCount {
        /// Required cell count.
        expected: usize,
        /// Cell count that was supplied.
        found: usize,
    },
    /// The recognizer could not classify a cell.
    #[error("cell {index} at {point} could not be recognized")]
    UnresolvedCell {
        /// Row-major index of the cell.
        index: usize,
        /// Position of the cell.
        point: Point,
    },
    /// A text board contained a symbol that names no tile.
    #[error("unknown tile symbol '{symbol}' for cell {index}")]
    UnknownSymbol {
        /// The symbol as read.
        symbol: char,
        /// Row-major index of the cell.
        index: usize,
    },
}

/// Error returned by [`Game::play`] when the requested move is not currently legal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move is not among the board's legal moves.
    #[error("{0} is not a legal move on the current board")]
    Illegal(Move),
}

/// One removal action: one or two points cleared together.
///
/// The point list is private so that a `Move` can only ever hold one or two points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    points: Vec<Point>,
}

impl Move {
    /// A move removing a single tile (only Gold can be removed alone).
    pub fn single(point: Point) -> Self {
        Move {
            points: vec![point],
        }
    }

    /// A move removing two tiles together.
    pub fn pair(first: Point, second: Point) -> Self {
        Move {
            points: vec![first, second],
        }
    }

    /// The points cleared by this move, in application order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` if both moves clear the same cells, regardless of point order.
    pub fn same_cells(&self, other: &Move) -> bool {
        let mut mine = self.points.clone();
        let mut theirs = other.points.clone();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move(")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, ")")
    }
}

/// The garden board: every cell's tile plus the metal that may currently be matched.
///
/// Boards are plain values. [`Board::apply_move`] returns a new board and never
/// touches `self`, so a search can backtrack by keeping the old value around.
/// Equality and hashing cover both the cells and the active metal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Tile; CELL_COUNT],
    active_metal: Option<Tile>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new_empty()
    }
}

impl Board {
    /// Creates an all-empty board whose active metal is Lead.
    ///
    /// # Examples
    /// ```
    /// use sigmar_solver::engine::Board;
    /// use sigmar_solver::tile::Tile;
    ///
    /// let board = Board::new_empty();
    /// assert!(board.is_solved());
    /// assert!(board.get_moves().is_empty());
    /// assert_eq!(board.active_metal(), Some(Tile::Lead));
    /// ```
    pub fn new_empty() -> Self {
        Board {
            cells: [Tile::Empty; CELL_COUNT],
            active_metal: Some(Tile::Lead),
        }
    }

    /// Builds a board from 11 jagged rows.
    ///
    /// # Arguments
    /// * `rows`: one slice per board row, top to bottom. Row `i` must hold exactly
    ///   `ROW_WIDTHS[i]` tiles.
    ///
    /// # Returns
    /// * `Ok(Board)` with the active metal set to Lead.
    /// * `Err(BoardError::RowCount)` if there are not exactly 11 rows.
    /// * `Err(BoardError::RowWidth)` for the first row with the wrong width.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, BoardError> {
        if rows.len() != ROW_COUNT {
            return Err(BoardError::RowCount {
                expected: ROW_COUNT,
                found: rows.len(),
            });
        }
        let mut board = Board::new_empty();
        let mut index = 0;
        for (row, (tiles, &expected)) in rows.iter().zip(ROW_WIDTHS.iter()).enumerate() {
            let tiles = tiles.as_ref();
            if tiles.len() != expected {
                return Err(BoardError::RowWidth {
                    row,
                    expected,
                    found: tiles.len(),
                });
            }
            board.cells[index..index + expected].copy_from_slice(tiles);
            index += expected;
        }
        Ok(board)
    }

    /// Builds a board from the output of a tile recognizer.
    ///
    /// `cells` holds one entry per row-major cell index; `None` marks a cell the
    /// recognizer could not classify. Such cells are reported, never guessed.
    pub fn from_recognized(cells: &[Option<Tile>]) -> Result<Self, BoardError> {
        if cells.len() != CELL_COUNT {
            return Err(BoardError::CellCount {
                expected: CELL_COUNT,
                found: cells.len(),
            });
        }
        let mut board = Board::new_empty();
        for (index, (point, cell)) in all_points().zip(cells).enumerate() {
            match cell {
                Some(tile) => board.set_tile(point, *tile),
                None => return Err(BoardError::UnresolvedCell { index, point }),
            }
        }
        Ok(board)
    }

    /// Returns the tile at `point`. Points off the board read as `Tile::Empty`.
    pub fn get_tile(&self, point: Point) -> Tile {
        match point.to_index() {
            Some(index) => self.cells[index],
            None => Tile::Empty,
        }
    }

    /// Sets the tile at `point`.
    ///
    /// # Panics
    /// Panics if `point` is not on the board.
    pub fn set_tile(&mut self, point: Point, tile: Tile) {
        match point.to_index() {
            Some(index) => self.cells[index] = tile,
            None => panic!("cannot set tile at off-board point {}", point),
        }
    }

    /// Tiles of one row, left to right. Rows outside `0..ROW_COUNT` are empty slices.
    pub fn row(&self, row: usize) -> &[Tile] {
        if row >= ROW_COUNT {
            return &[];
        }
        match Point::new(row as i32, 0).to_index() {
            Some(start) => &self.cells[start..start + ROW_WIDTHS[row]],
            None => &[],
        }
    }

    /// The metal currently eligible for matching; `None` once Gold has been removed.
    pub fn active_metal(&self) -> Option<Tile> {
        self.active_metal
    }

    /// Overrides the active metal.
    pub fn set_active_metal(&mut self, metal: Option<Tile>) {
        self.active_metal = metal;
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile != Tile::Empty).count()
    }

    /// A board is solved once every cell is empty.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&tile| tile == Tile::Empty)
    }

    /// Decides whether the tile at `point` can currently be clicked.
    ///
    /// A cell is active when it is not empty, is not a metal other than the active
    /// metal, and three circularly consecutive neighbours are empty. Off-board
    /// neighbours count as empty, so rim cells open up easily.
    pub fn is_active(&self, point: Point) -> bool {
        let tile = self.get_tile(point);
        if tile == Tile::Empty {
            return false;
        }
        if tile.is_metal() && Some(tile) != self.active_metal {
            return false;
        }

        let neighbours = point.adj_circle().map(|p| self.get_tile(p) == Tile::Empty);
        (0..neighbours.len()).any(|start| {
            (0..3).all(|offset| neighbours[(start + offset) % neighbours.len()])
        })
    }

    /// Every active point, in ascending index order.
    pub fn active_points(&self) -> Vec<Point> {
        all_points().filter(|&p| self.is_active(p)).collect()
    }

    /// Enumerates every legal move.
    ///
    /// Single-tile moves come first, in ascending point index. Pairs follow, ordered
    /// by the index of their first point and then of their second. The order only
    /// depends on the board, so repeated calls return identical lists.
    ///
    /// # Examples
    /// ```
    /// use sigmar_solver::coord::Point;
    /// use sigmar_solver::engine::{Board, Move};
    /// use sigmar_solver::tile::Tile;
    ///
    /// let mut board = Board::new_empty();
    /// board.set_tile(Point::new(5, 5), Tile::Gold);
    /// // Gold is not the active metal yet.
    /// assert!(board.get_moves().is_empty());
    /// board.set_active_metal(Some(Tile::Gold));
    /// assert_eq!(board.get_moves(), vec![Move::single(Point::new(5, 5))]);
    /// ```
    pub fn get_moves(&self) -> Vec<Move> {
        let points = self.active_points();
        let mut moves: Vec<Move> = points
            .iter()
            .filter(|&&p| matches(&[self.get_tile(p)]))
            .map(|&p| Move::single(p))
            .collect();

        for (i, &first) in points.iter().enumerate() {
            for &second in &points[i + 1..] {
                if matches(&[self.get_tile(first), self.get_tile(second)]) {
                    moves.push(Move::pair(first, second));
                }
            }
        }
        moves
    }

    /// Applies a move and returns the resulting board; `self` is left unchanged.
    ///
    /// Points are cleared in the move's order. Clearing the active metal advances
    /// the active metal to its successor (Quicksilver never does).
    ///
    /// The move must come from [`Board::get_moves`] on this board. Anything else
    /// breaks the contract; it is only checked in debug builds.
    pub fn apply_move(&self, mv: &Move) -> Board {
        debug_assert!(
            mv.points().iter().all(|&p| self.is_active(p)),
            "{} touches an inactive cell",
            mv
        );
        debug_assert!(
            matches(&mv.points().iter().map(|&p| self.get_tile(p)).collect::<Vec<_>>()),
            "{} is not a match",
            mv
        );

        let mut next = self.clone();
        for &point in mv.points() {
            let tile = next.get_tile(point);
            if Some(tile) == next.active_metal {
                next.active_metal = tile.next_metal();
            }
            next.set_tile(point, Tile::Empty);
        }
        next
    }
}

impl fmt::Display for Board {
    /// One line per row, each indented by its distance from the middle row so the
    /// text traces the hexagon. Tiles are separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROW_COUNT {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", " ".repeat(row.abs_diff(MID_ROW)))?;
            for (col, tile) in self.row(row).iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile.to_char())?;
            }
        }
        Ok(())
    }
}

/// Manages an interactive session on one board.
///
/// Unlike [`Board::apply_move`], [`Game::play`] checks the move against the legal
/// moves first, which makes it suitable for user input. Every played move is kept
/// so it can be undone.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<(Board, Move)>,
}

impl Game {
    /// Starts a session on `board`.
    pub fn new_with_board(board: Board) -> Self {
        Game {
            board,
            history: Vec::new(),
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played and not undone.
    pub fn steps(&self) -> usize {
        self.history.len()
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.history.iter().map(|(_, mv)| mv)
    }

    /// Plays `mv` if it is legal.
    ///
    /// A pair may be given in either point order; the generated order is what gets
    /// recorded.
    ///
    /// # Errors
    /// Returns `MoveError::Illegal` if no legal move clears the same cells.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveError> {
        let legal = self
            .board
            .get_moves()
            .into_iter()
            .find(|candidate| candidate.same_cells(mv))
            .ok_or_else(|| MoveError::Illegal(mv.clone()))?;

        let next = self.board.apply_move(&legal);
        let previous = std::mem::replace(&mut self.board, next);
        self.history.push((previous, legal));
        Ok(())
    }

    /// Reverts the last move. Returns `false` if there is nothing to undo.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some((previous, _)) => {
                self.board = previous;
                true
            }
            None => false,
        }
    }

    /// The board is cleared.
    pub fn is_won(&self) -> bool {
        self.board.is_solved()
    }

    /// No legal move remains while tiles are still on the board.
    pub fn is_stuck(&self) -> bool {
        !self.board.is_solved() && self.board.get_moves().is_empty()
    }
}
