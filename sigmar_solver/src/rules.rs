//! Matching rules: which combinations of one or two tiles can be removed together.
use crate::tile::{Tile, ALL_TILES, ELEMENTS, METALS};
use std::sync::LazyLock;

const TILE_KINDS: usize = ALL_TILES.len();

struct MatchTable {
    singles: [bool; TILE_KINDS],
    pairs: [[bool; TILE_KINDS]; TILE_KINDS],
}

impl MatchTable {
    fn build() -> Self {
        let mut table = MatchTable {
            singles: [false; TILE_KINDS],
            pairs: [[false; TILE_KINDS]; TILE_KINDS],
        };
        for element in ELEMENTS {
            table.allow_pair(element, element);
            table.allow_pair(element, Tile::Salt);
        }
        table.allow_pair(Tile::Salt, Tile::Salt);
        table.allow_pair(Tile::Mors, Tile::Vitae);
        for metal in METALS.into_iter().filter(|&m| m != Tile::Gold) {
            table.allow_pair(metal, Tile::Quicksilver);
        }
        table.singles[Tile::Gold.ordinal()] = true;
        table
    }

    // Both orders are always inserted together, which keeps the table symmetric.
    fn allow_pair(&mut self, a: Tile, b: Tile) {
        self.pairs[a.ordinal()][b.ordinal()] = true;
        self.pairs[b.ordinal()][a.ordinal()] = true;
    }
}

static MATCHES: LazyLock<MatchTable> = LazyLock::new(MatchTable::build);

/// Decides whether the given tiles form a removable match.
///
/// Only one- and two-tile combinations can ever match; any other length returns `false`.
///
/// # Examples
/// ```
/// use sigmar_solver::rules::matches;
/// use sigmar_solver::tile::Tile;
///
/// assert!(matches(&[Tile::Gold]));
/// assert!(matches(&[Tile::Fire, Tile::Salt]));
/// assert!(matches(&[Tile::Quicksilver, Tile::Lead]));
/// assert!(!matches(&[Tile::Fire, Tile::Water]));
/// assert!(!matches(&[Tile::Gold, Tile::Quicksilver]));
/// ```
pub fn matches(tiles: &[Tile]) -> bool {
    match *tiles {
        [single] => MATCHES.singles[single.ordinal()],
        [a, b] => MATCHES.pairs[a.ordinal()][b.ordinal()],
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_pair(a: Tile, b: Tile) -> bool {
        let one_way = |x: Tile, y: Tile| {
            (x.is_element() && (y == x || y == Tile::Salt))
                || (x == Tile::Salt && y == Tile::Salt)
                || (x == Tile::Mors && y == Tile::Vitae)
                || (x.is_metal() && x != Tile::Gold && y == Tile::Quicksilver)
        };
        one_way(a, b) || one_way(b, a)
    }

    #[test]
    fn test_matches_is_symmetric() {
        for a in ALL_TILES {
            for b in ALL_TILES {
                assert_eq!(matches(&[a, b]), matches(&[b, a]), "{:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_pair_table_is_exhaustive() {
        for a in ALL_TILES {
            for b in ALL_TILES {
                assert_eq!(matches(&[a, b]), expected_pair(a, b), "{:?} + {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_only_gold_matches_alone() {
        for tile in ALL_TILES {
            assert_eq!(matches(&[tile]), tile == Tile::Gold, "{:?}", tile);
        }
    }

    #[test]
    fn test_specific_pairs() {
        assert!(matches(&[Tile::Earth, Tile::Earth]));
        assert!(matches(&[Tile::Salt, Tile::Air]));
        assert!(matches(&[Tile::Salt, Tile::Salt]));
        assert!(matches(&[Tile::Vitae, Tile::Mors]));
        assert!(matches(&[Tile::Silver, Tile::Quicksilver]));
        assert!(!matches(&[Tile::Mors, Tile::Mors]));
        assert!(!matches(&[Tile::Quicksilver, Tile::Quicksilver]));
        assert!(!matches(&[Tile::Gold, Tile::Gold]));
        assert!(!matches(&[Tile::Lead, Tile::Tin]));
        assert!(!matches(&[Tile::Empty, Tile::Empty]));
    }

    #[test]
    fn test_other_lengths_never_match() {
        assert!(!matches(&[]));
        assert!(!matches(&[Tile::Gold, Tile::Gold, Tile::Gold]));
    }
}
