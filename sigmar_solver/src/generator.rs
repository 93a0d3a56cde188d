//! Reproducible, always-solvable garden layouts.
//!
//! A layout is dealt backwards: a removal sequence for the standard 55-tile set is
//! shuffled, then its groups are placed onto an empty board from the last removal
//! to the first, each one only on cells where it will be active at the moment it
//! is removed. Playing the sequence forwards therefore clears the board.
use crate::coord::{all_points, Point};
use crate::engine::Board;
use crate::tile::{Tile, ELEMENTS, METALS};
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Number of shuffles tried before giving up on a seed.
const MAX_ATTEMPTS: usize = 32;

/// Error returned when no layout could be dealt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Every attempt ran out of cells where a group could be placed.
    #[error("could not deal a layout for seed {seed} after {attempts} attempts")]
    NoRoom {
        /// Seed that was used.
        seed: u64,
        /// Attempts made.
        attempts: usize,
    },
}

/// The removal groups of a standard game, metals excluded.
fn free_groups() -> Vec<Vec<Tile>> {
    let mut groups = Vec::new();
    for element in ELEMENTS {
        for _ in 0..4 {
            groups.push(vec![element, element]);
        }
    }
    for _ in 0..2 {
        groups.push(vec![Tile::Salt, Tile::Salt]);
    }
    for _ in 0..4 {
        groups.push(vec![Tile::Mors, Tile::Vitae]);
    }
    groups
}

/// The metal groups in the order they must be removed.
fn metal_groups() -> Vec<Vec<Tile>> {
    METALS
        .iter()
        .map(|&metal| {
            if metal == Tile::Gold {
                vec![metal]
            } else {
                vec![metal, Tile::Quicksilver]
            }
        })
        .collect()
}

/// Shuffles the free groups and threads the metal groups through them, keeping
/// the metals in their required order.
fn removal_sequence(rng: &mut impl Rng) -> Vec<Vec<Tile>> {
    let mut sequence = free_groups();
    sequence.shuffle(rng);
    let mut earliest = 0;
    for group in metal_groups() {
        let position = rng.gen_range(earliest..=sequence.len());
        sequence.insert(position, group);
        earliest = position + 1;
    }
    sequence
}

/// Every placement of `group` onto empty cells of `board` that leaves all of the
/// group's cells active.
fn placements(board: &Board, group: &[Tile]) -> Vec<Vec<Point>> {
    let empty: Vec<Point> = all_points()
        .filter(|&p| board.get_tile(p) == Tile::Empty)
        .collect();
    let mut found = Vec::new();

    match *group {
        [tile] => {
            for &point in &empty {
                let mut trial = board.clone();
                trial.set_tile(point, tile);
                if trial.is_active(point) {
                    found.push(vec![point]);
                }
            }
        }
        [first_tile, second_tile] => {
            for (i, &first) in empty.iter().enumerate() {
                let mut trial = board.clone();
                trial.set_tile(first, first_tile);
                if !trial.is_active(first) {
                    // Adding a second tile can only close arcs, never open them.
                    continue;
                }
                for (j, &second) in empty.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let mut pair = trial.clone();
                    pair.set_tile(second, second_tile);
                    if pair.is_active(first) && pair.is_active(second) {
                        found.push(vec![first, second]);
                    }
                }
            }
        }
        _ => {}
    }
    found
}

fn try_deal(rng: &mut SmallRng) -> Option<Board> {
    let sequence = removal_sequence(rng);
    let mut board = Board::new_empty();
    board.set_active_metal(None);

    for group in sequence.iter().rev() {
        if let Some(&metal) = group.iter().find(|tile| tile.is_metal()) {
            board.set_active_metal(Some(metal));
        }
        let options = placements(&board, group);
        let chosen = options.choose(rng)?;
        for (&point, &tile) in chosen.iter().zip(group) {
            board.set_tile(point, tile);
        }
    }
    Some(board)
}

/// Deals a solvable standard layout from `seed`. The same seed always yields the
/// same board.
///
/// # Errors
/// Returns `GenerateError::NoRoom` if no attempt managed to place every group.
///
/// # Examples
/// ```
/// use sigmar_solver::generator::deal;
/// use sigmar_solver::tile::Tile;
///
/// let board = deal(7).unwrap();
/// assert_eq!(board.tile_count(), 55);
/// assert_eq!(board.active_metal(), Some(Tile::Lead));
/// assert_eq!(board, deal(7).unwrap());
/// ```
pub fn deal(seed: u64) -> Result<Board, GenerateError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    for attempt in 1..=MAX_ATTEMPTS {
        if let Some(board) = try_deal(&mut rng) {
            debug!("Dealt seed {} on attempt {}", seed, attempt);
            return Ok(board);
        }
    }
    Err(GenerateError::NoRoom {
        seed,
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_standard_set_composition() {
        let board = deal(0).unwrap();
        let mut counts: HashMap<Tile, usize> = HashMap::new();
        for point in all_points() {
            *counts.entry(board.get_tile(point)).or_default() += 1;
        }
        for element in ELEMENTS {
            assert_eq!(counts[&element], 8);
        }
        assert_eq!(counts[&Tile::Salt], 4);
        assert_eq!(counts[&Tile::Mors], 4);
        assert_eq!(counts[&Tile::Vitae], 4);
        assert_eq!(counts[&Tile::Quicksilver], 5);
        for metal in METALS {
            assert_eq!(counts[&metal], 1);
        }
        assert_eq!(counts[&Tile::Empty], crate::coord::CELL_COUNT - 55);
        assert_eq!(counts[&Tile::Empty], 36);
    }

    #[test]
    fn test_deal_is_reproducible() {
        assert_eq!(deal(42).unwrap(), deal(42).unwrap());
        assert_ne!(deal(1).unwrap(), deal(2).unwrap());
    }

    #[test]
    fn test_removal_sequence_keeps_metal_order() {
        let mut rng = SmallRng::seed_from_u64(5);
        let sequence = removal_sequence(&mut rng);
        assert_eq!(sequence.len(), 28);
        let metals: Vec<Tile> = sequence
            .iter()
            .flatten()
            .copied()
            .filter(|tile| tile.is_metal())
            .collect();
        assert_eq!(metals, METALS.to_vec());
    }

    #[test]
    fn test_dealt_board_has_opening_moves() {
        for seed in 0..5 {
            let board = deal(seed).unwrap();
            assert!(!board.get_moves().is_empty(), "seed {}", seed);
        }
    }
}
