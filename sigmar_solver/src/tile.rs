//! Tile types of the alchemical garden.
//!
//! Every board cell holds exactly one [`Tile`]. Besides the `Empty` marker there
//! are four elements, the three "cardinal" tiles (Salt, Mors, Vitae), Quicksilver
//! and six metals which must be cleared in a fixed order, Lead first and Gold last.

/// Represents the type of a tile on the garden board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    /// An empty cell.
    Empty,
    /// Element: fire.
    Fire,
    /// Element: water.
    Water,
    /// Element: air.
    Air,
    /// Element: earth.
    Earth,
    /// Salt matches any element, or another Salt.
    Salt,
    /// Mors matches Vitae.
    Mors,
    /// Vitae matches Mors.
    Vitae,
    /// Quicksilver matches any metal except Gold.
    Quicksilver,
    /// First metal in the progression.
    Lead,
    /// Second metal.
    Tin,
    /// Third metal.
    Iron,
    /// Fourth metal.
    Copper,
    /// Fifth metal.
    Silver,
    /// Last metal. Removable on its own.
    Gold,
}

/// Every tile type, `Empty` included, in declaration order.
pub const ALL_TILES: [Tile; 15] = [
    Tile::Empty,
    Tile::Fire,
    Tile::Water,
    Tile::Air,
    Tile::Earth,
    Tile::Salt,
    Tile::Mors,
    Tile::Vitae,
    Tile::Quicksilver,
    Tile::Lead,
    Tile::Tin,
    Tile::Iron,
    Tile::Copper,
    Tile::Silver,
    Tile::Gold,
];

/// The four elements.
pub const ELEMENTS: [Tile; 4] = [Tile::Fire, Tile::Water, Tile::Air, Tile::Earth];

/// The metals in the order they have to be removed.
pub const METALS: [Tile; 6] = [
    Tile::Lead,
    Tile::Tin,
    Tile::Iron,
    Tile::Copper,
    Tile::Silver,
    Tile::Gold,
];

impl Tile {
    /// Returns `true` for Fire, Water, Air and Earth.
    pub fn is_element(self) -> bool {
        matches!(self, Tile::Fire | Tile::Water | Tile::Air | Tile::Earth)
    }

    /// Returns `true` for the six metals, Gold included.
    pub fn is_metal(self) -> bool {
        matches!(
            self,
            Tile::Lead | Tile::Tin | Tile::Iron | Tile::Copper | Tile::Silver | Tile::Gold
        )
    }

    /// Returns the metal that becomes active once `self` has been removed.
    ///
    /// Gold is the last metal, so it has no successor; non-metals have none either.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigmar_solver::tile::Tile;
    /// assert_eq!(Tile::Lead.next_metal(), Some(Tile::Tin));
    /// assert_eq!(Tile::Gold.next_metal(), None);
    /// assert_eq!(Tile::Fire.next_metal(), None);
    /// ```
    pub fn next_metal(self) -> Option<Tile> {
        match self {
            Tile::Lead => Some(Tile::Tin),
            Tile::Tin => Some(Tile::Iron),
            Tile::Iron => Some(Tile::Copper),
            Tile::Copper => Some(Tile::Silver),
            Tile::Silver => Some(Tile::Gold),
            Tile::Gold
            | Tile::Empty
            | Tile::Fire
            | Tile::Water
            | Tile::Air
            | Tile::Earth
            | Tile::Salt
            | Tile::Mors
            | Tile::Vitae
            | Tile::Quicksilver => None,
        }
    }

    /// Converts the tile to its single-character debug symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigmar_solver::tile::Tile;
    /// assert_eq!(Tile::Salt.to_char(), 'O');
    /// assert_eq!(Tile::Empty.to_char(), '-');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Tile::Empty => '-',
            Tile::Fire => 'F',
            Tile::Water => 'W',
            Tile::Air => 'A',
            Tile::Earth => 'E',
            Tile::Salt => 'O',
            Tile::Mors => 'M',
            Tile::Vitae => 'V',
            Tile::Quicksilver => 'Q',
            Tile::Lead => 'L',
            Tile::Tin => 'T',
            Tile::Iron => 'I',
            Tile::Copper => 'C',
            Tile::Silver => 'S',
            Tile::Gold => 'G',
        }
    }

    /// Parses a debug symbol back into a tile. Returns `None` for unknown symbols.
    pub fn from_char(c: char) -> Option<Tile> {
        ALL_TILES.into_iter().find(|tile| tile.to_char() == c)
    }

    /// Position of the tile in [`ALL_TILES`], used to index lookup tables.
    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tiles_ordinals_match_positions() {
        for (i, tile) in ALL_TILES.iter().enumerate() {
            assert_eq!(tile.ordinal(), i);
        }
    }

    #[test]
    fn test_char_symbols_round_trip_and_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for tile in ALL_TILES {
            assert!(seen.insert(tile.to_char()), "duplicate symbol for {:?}", tile);
            assert_eq!(Tile::from_char(tile.to_char()), Some(tile));
        }
        assert_eq!(Tile::from_char('?'), None);
        assert_eq!(Tile::from_char('f'), None);
    }

    #[test]
    fn test_metal_progression_walks_every_metal_once() {
        let mut current = Some(Tile::Lead);
        let mut walked = Vec::new();
        while let Some(metal) = current {
            walked.push(metal);
            current = metal.next_metal();
        }
        assert_eq!(walked, METALS.to_vec());
    }

    #[test]
    fn test_classification() {
        for tile in ELEMENTS {
            assert!(tile.is_element());
            assert!(!tile.is_metal());
        }
        for tile in METALS {
            assert!(tile.is_metal());
            assert!(!tile.is_element());
        }
        for tile in [Tile::Empty, Tile::Salt, Tile::Mors, Tile::Vitae, Tile::Quicksilver] {
            assert!(!tile.is_metal());
            assert!(!tile.is_element());
        }
    }
}
