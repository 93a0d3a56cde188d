//! Coordinates on the hexagonal garden.
//!
//! The garden is stored as 11 jagged rows whose widths grow from 6 to 11 and then
//! shrink back to 6. Cells are addressed either by a [`Point`] (row, column) or by
//! a row-major linear index in `0..CELL_COUNT`.
use std::fmt;

/// Number of rows on the board.
pub const ROW_COUNT: usize = 11;

/// Width of every row, top to bottom.
pub const ROW_WIDTHS: [usize; ROW_COUNT] = [6, 7, 8, 9, 10, 11, 10, 9, 8, 7, 6];

/// Total number of cells.
pub const CELL_COUNT: usize = cell_count();

/// Index of the widest row.
pub const MID_ROW: usize = 5;

/// Linear index of the first cell of each row.
const ROW_STARTS: [usize; ROW_COUNT] = row_starts();

const fn cell_count() -> usize {
    let mut total = 0;
    let mut row = 0;
    while row < ROW_COUNT {
        total += ROW_WIDTHS[row];
        row += 1;
    }
    total
}

const fn row_starts() -> [usize; ROW_COUNT] {
    let mut starts = [0; ROW_COUNT];
    let mut row = 1;
    while row < ROW_COUNT {
        starts[row] = starts[row - 1] + ROW_WIDTHS[row - 1];
        row += 1;
    }
    starts
}

/// A (row, column) address.
///
/// Points are signed so that neighbours of rim cells can be represented; such
/// points are simply not [`valid`](Point::is_valid) and read as empty on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row, 0 is the top row.
    pub row: i32,
    /// Column within the row, 0 is the leftmost cell.
    pub col: i32,
}

impl Point {
    /// Creates a point. No bounds checking is done.
    pub const fn new(row: i32, col: i32) -> Self {
        Point { row, col }
    }

    /// Returns `true` if the point addresses a cell of the board.
    pub fn is_valid(self) -> bool {
        self.row >= 0
            && (self.row as usize) < ROW_COUNT
            && self.col >= 0
            && (self.col as usize) < ROW_WIDTHS[self.row as usize]
    }

    /// Converts a row-major cell index into a point.
    ///
    /// # Returns
    /// `None` if `index >= CELL_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use sigmar_solver::coord::Point;
    /// assert_eq!(Point::from_index(0), Some(Point::new(0, 0)));
    /// assert_eq!(Point::from_index(6), Some(Point::new(1, 0)));
    /// assert_eq!(Point::from_index(90), Some(Point::new(10, 5)));
    /// assert_eq!(Point::from_index(91), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Point> {
        let mut remaining = index;
        for (row, &width) in ROW_WIDTHS.iter().enumerate() {
            if remaining < width {
                return Some(Point::new(row as i32, remaining as i32));
            }
            remaining -= width;
        }
        None
    }

    /// Converts the point into its row-major cell index, or `None` if it lies off the board.
    pub fn to_index(self) -> Option<usize> {
        if self.is_valid() {
            Some(ROW_STARTS[self.row as usize] + self.col as usize)
        } else {
            None
        }
    }

    /// Returns the six neighbours in circular order: top-left, top-right, right,
    /// bottom-right, bottom-left, left.
    ///
    /// Rows above the middle are narrower than the row below them, so the cell
    /// straight "up-left" sits one column further left; the mirror holds below the
    /// middle. The middle row is narrower-on-both-sides and takes both shifts.
    /// Neighbours of rim cells may be off the board.
    pub fn adj_circle(self) -> [Point; 6] {
        let mid = MID_ROW as i32;
        let top_left_dx = if self.row <= mid { -1 } else { 0 };
        let bottom_left_dx = if self.row >= mid { -1 } else { 0 };
        [
            Point::new(self.row - 1, self.col + top_left_dx),
            Point::new(self.row - 1, self.col + top_left_dx + 1),
            Point::new(self.row, self.col + 1),
            Point::new(self.row + 1, self.col + bottom_left_dx + 1),
            Point::new(self.row + 1, self.col + bottom_left_dx),
            Point::new(self.row, self.col - 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterates over every valid point in ascending index order.
pub fn all_points() -> impl Iterator<Item = Point> {
    ROW_WIDTHS
        .iter()
        .enumerate()
        .flat_map(|(row, &width)| (0..width).map(move |col| Point::new(row as i32, col as i32)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_sum_to_cell_count() {
        assert_eq!(ROW_WIDTHS.iter().sum::<usize>(), CELL_COUNT);
        assert_eq!(CELL_COUNT, 91);
        assert_eq!(ROW_STARTS[MID_ROW], 6 + 7 + 8 + 9 + 10);
    }

    #[test]
    fn test_index_point_inverse() {
        for index in 0..CELL_COUNT {
            let point = Point::from_index(index).unwrap();
            assert!(point.is_valid());
            assert_eq!(point.to_index(), Some(index));
        }
        assert_eq!(Point::from_index(CELL_COUNT), None);
    }

    #[test]
    fn test_all_points_in_index_order() {
        let points: Vec<Point> = all_points().collect();
        assert_eq!(points.len(), CELL_COUNT);
        for (index, point) in points.iter().enumerate() {
            assert_eq!(point.to_index(), Some(index));
        }
    }

    #[test]
    fn test_off_board_points_have_no_index() {
        for point in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(0, 6),
            Point::new(5, 11),
            Point::new(11, 0),
        ] {
            assert!(!point.is_valid());
            assert_eq!(point.to_index(), None);
        }
    }

    #[test]
    fn test_adj_circle_upper_half() {
        let circle = Point::new(2, 3).adj_circle();
        assert_eq!(
            circle,
            [
                Point::new(1, 2),
                Point::new(1, 3),
                Point::new(2, 4),
                Point::new(3, 4),
                Point::new(3, 3),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_adj_circle_middle_row() {
        let circle = Point::new(5, 4).adj_circle();
        assert_eq!(
            circle,
            [
                Point::new(4, 3),
                Point::new(4, 4),
                Point::new(5, 5),
                Point::new(6, 4),
                Point::new(6, 3),
                Point::new(5, 3),
            ]
        );
    }

    #[test]
    fn test_adj_circle_lower_half() {
        let circle = Point::new(8, 2).adj_circle();
        assert_eq!(
            circle,
            [
                Point::new(7, 2),
                Point::new(7, 3),
                Point::new(8, 3),
                Point::new(9, 2),
                Point::new(9, 1),
                Point::new(8, 1),
            ]
        );
    }

    #[test]
    fn test_adjacency_is_mutual() {
        for point in all_points() {
            let circle = point.adj_circle();
            assert_eq!(circle.len(), 6);
            for neighbour in circle.iter().filter(|p| p.is_valid()) {
                assert!(
                    neighbour.adj_circle().contains(&point),
                    "{} lists {} but not the reverse",
                    point,
                    neighbour
                );
            }
        }
    }

    #[test]
    fn test_corner_has_three_off_board_neighbours() {
        let off_board = Point::new(0, 0)
            .adj_circle()
            .iter()
            .filter(|p| !p.is_valid())
            .count();
        assert_eq!(off_board, 3);
    }
}
