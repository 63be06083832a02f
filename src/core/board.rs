//=========================================================================
// Game Board
//
// The 3×3 board model: tile symbols, placement, and win detection.
//
// Responsibilities:
// - Hold the nine cells as value-typed tiles (no shared state)
// - Accept placements only on empty cells
// - Scan the eight fixed win lines in a fixed order
//
// Notes:
// The board is created once per game, mutated by placement, and never
// resized. The win scan declares victory only on an exact 3-in-a-row
// and does not distinguish a full-board draw.
//
//=========================================================================

use std::fmt;

//=== Tile ================================================================

/// Symbol held by one board cell.
///
/// `flip` toggles between the two player symbols; flipping `Empty`
/// yields `Naught`, the fixed first mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Naught,
    Cross,
}

impl Tile {
    /// Human-readable symbol name, used for the win banner and logs.
    pub fn label(self) -> &'static str {
        match self {
            Tile::Empty => "Empty",
            Tile::Naught => "Naught",
            Tile::Cross => "Cross",
        }
    }

    /// Sprite slot for this symbol (stable across the three variants).
    pub fn index(self) -> usize {
        match self {
            Tile::Empty => 0,
            Tile::Naught => 1,
            Tile::Cross => 2,
        }
    }

    /// Switches to the other player symbol in place.
    pub fn flip(&mut self) {
        *self = match *self {
            Tile::Naught => Tile::Cross,
            _ => Tile::Naught,
        };
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//=== Board ===============================================================

/// Number of cells along each board axis.
pub const BOARD_CELLS: usize = 3;

//--- Win Lines -----------------------------------------------------------
//
// The eight fixed (column, row) triples checked for a win, in scan
// order: rows top to bottom, columns left to right, the diagonal from
// the top-left, the diagonal from the bottom-left. The first all-equal
// non-empty line wins.
//
const WIN_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (1, 0), (2, 0)], // Across from top
    [(0, 1), (1, 1), (2, 1)], // Across from middle
    [(0, 2), (1, 2), (2, 2)], // Across from bottom
    [(0, 0), (0, 1), (0, 2)], // Down from left
    [(1, 0), (1, 1), (1, 2)], // Down from middle
    [(2, 0), (2, 1), (2, 2)], // Down from right
    [(0, 0), (1, 1), (2, 2)], // Diagonally from top-left
    [(0, 2), (1, 1), (2, 0)], // Diagonally from bottom-left
];

/// Fixed 3×3 grid of tiles, indexed by (column, row).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Tile; BOARD_CELLS]; BOARD_CELLS],
}

impl Board {
    //--- Construction -----------------------------------------------------

    /// Creates a board with all cells empty.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Access -----------------------------------------------------------

    /// Returns the tile at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` is outside `0..BOARD_CELLS`.
    pub fn tile(&self, col: usize, row: usize) -> Tile {
        self.cells[col][row]
    }

    //--- Placement --------------------------------------------------------

    /// Places `tile` at the given cell.
    ///
    /// Succeeds (mutates the cell, returns `true`) only if the target
    /// cell is currently empty; otherwise leaves the board untouched
    /// and returns `false`.
    pub fn place(&mut self, tile: Tile, col: usize, row: usize) -> bool {
        if self.cells[col][row] != Tile::Empty {
            return false;
        }
        self.cells[col][row] = tile;
        true
    }

    //--- Win Detection ----------------------------------------------------

    /// Scans the eight win lines and returns the first winning symbol
    /// found, or `None` if no line is complete.
    ///
    /// A line wins when all three of its cells hold the same non-empty
    /// symbol. A full board without such a line is still `None`.
    pub fn winner(&self) -> Option<Tile> {
        for line in &WIN_LINES {
            let (c0, r0) = line[0];
            let first = self.cells[c0][r0];
            if first == Tile::Empty {
                continue;
            }
            if line[1..].iter().all(|&(c, r)| self.cells[c][r] == first) {
                return Some(first);
            }
        }
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn board_with_line(tile: Tile, line: &[(usize, usize); 3]) -> Board {
        let mut board = Board::new();
        for &(c, r) in line {
            assert!(board.place(tile, c, r));
        }
        board
    }

    //=====================================================================
    // Tile Tests
    //=====================================================================

    #[test]
    fn tile_default_is_empty() {
        assert_eq!(Tile::default(), Tile::Empty);
    }

    #[test]
    fn flip_toggles_between_players() {
        let mut tile = Tile::Naught;
        tile.flip();
        assert_eq!(tile, Tile::Cross);
        tile.flip();
        assert_eq!(tile, Tile::Naught);
    }

    #[test]
    fn flip_of_empty_yields_first_mover() {
        let mut tile = Tile::Empty;
        tile.flip();
        assert_eq!(tile, Tile::Naught);
    }

    #[test]
    fn labels_match_symbols() {
        assert_eq!(Tile::Naught.to_string(), "Naught");
        assert_eq!(Tile::Cross.to_string(), "Cross");
        assert_eq!(Tile::Empty.to_string(), "Empty");
    }

    //=====================================================================
    // Placement Tests
    //=====================================================================

    #[test]
    fn new_board_is_all_empty() {
        let board = Board::new();
        for col in 0..BOARD_CELLS {
            for row in 0..BOARD_CELLS {
                assert_eq!(board.tile(col, row), Tile::Empty);
            }
        }
    }

    #[test]
    fn place_on_empty_cell_sets_exactly_that_cell() {
        let mut board = Board::new();
        assert!(board.place(Tile::Cross, 1, 2));

        for col in 0..BOARD_CELLS {
            for row in 0..BOARD_CELLS {
                let expected = if (col, row) == (1, 2) {
                    Tile::Cross
                } else {
                    Tile::Empty
                };
                assert_eq!(board.tile(col, row), expected);
            }
        }
    }

    #[test]
    fn place_on_occupied_cell_is_rejected_and_unchanged() {
        let mut board = Board::new();
        assert!(board.place(Tile::Naught, 0, 0));

        let before = board.clone();
        assert!(!board.place(Tile::Cross, 0, 0));
        assert_eq!(board, before, "Rejected placement must not alter any cell");
    }

    //=====================================================================
    // Win Detection Tests
    //=====================================================================

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(Board::new().winner(), None);
    }

    #[test]
    fn every_win_line_is_detected_for_both_symbols() {
        for line in &WIN_LINES {
            for tile in [Tile::Naught, Tile::Cross] {
                let board = board_with_line(tile, line);
                assert_eq!(
                    board.winner(),
                    Some(tile),
                    "Line {:?} filled with {} must win",
                    line,
                    tile
                );
            }
        }
    }

    #[test]
    fn incomplete_line_does_not_win() {
        let mut board = Board::new();
        assert!(board.place(Tile::Naught, 0, 0));
        assert!(board.place(Tile::Naught, 1, 0));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn mixed_line_does_not_win() {
        let mut board = Board::new();
        assert!(board.place(Tile::Naught, 0, 0));
        assert!(board.place(Tile::Cross, 1, 0));
        assert!(board.place(Tile::Naught, 2, 0));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn scan_order_returns_first_completed_line() {
        // Top row (Naught) is scanned before the bottom row (Cross).
        let mut board = Board::new();
        for col in 0..BOARD_CELLS {
            assert!(board.place(Tile::Naught, col, 0));
            assert!(board.place(Tile::Cross, col, 2));
        }
        assert_eq!(board.winner(), Some(Tile::Naught));
    }

    #[test]
    fn full_board_without_line_is_not_a_win() {
        // N C N / C N C / C N C, no three in a row anywhere.
        let layout = [
            (Tile::Naught, 0, 0),
            (Tile::Cross, 1, 0),
            (Tile::Naught, 2, 0),
            (Tile::Cross, 0, 1),
            (Tile::Naught, 1, 1),
            (Tile::Cross, 2, 1),
            (Tile::Cross, 0, 2),
            (Tile::Naught, 1, 2),
            (Tile::Cross, 2, 2),
        ];
        let mut board = Board::new();
        for (tile, col, row) in layout {
            assert!(board.place(tile, col, row));
        }
        assert_eq!(board.winner(), None);
    }
}
