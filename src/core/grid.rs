//=========================================================================
// Coordinate Grid
//
// Maps window pixels to board cells and back.
//
// Responsibilities:
// - Divide the board's pixel area into three equal spans per axis
// - Reject clicks that land outside the board area
// - Provide the inverse mapping to a cell's top-left pixel
//
// Notes:
// The span is fixed at construction from the logical board side
// length; window resizes do not change the mapping, so the board
// stays anchored at the top-left corner of the window.
//
//=========================================================================

use crate::core::board::BOARD_CELLS;

//=== Grid ================================================================

/// Pixel-to-cell mapping for a square board anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    span: u32,
}

impl Grid {
    //--- Construction -----------------------------------------------------

    /// Creates a grid for a board of the given side length in pixels.
    ///
    /// The cell span is `side / 3` (integer division), matching the
    /// sprite placement used by the renderer.
    ///
    /// # Panics
    ///
    /// Panics if `side` is smaller than the number of cells per axis.
    pub fn new(side: u32) -> Self {
        assert!(
            side >= BOARD_CELLS as u32,
            "Board side must be at least {} pixels, got {}",
            BOARD_CELLS,
            side
        );
        Self {
            span: side / BOARD_CELLS as u32,
        }
    }

    /// Width and height of one cell in pixels.
    pub fn span(&self) -> u32 {
        self.span
    }

    //--- Mapping ----------------------------------------------------------

    /// Maps a window pixel to the cell containing it.
    ///
    /// Returns `None` for pixels outside the board area (e.g. clicks
    /// in the margin of an enlarged window).
    pub fn screen_to_board(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        let col = (x / self.span) as usize;
        let row = (y / self.span) as usize;
        if col >= BOARD_CELLS || row >= BOARD_CELLS {
            return None;
        }
        Some((col, row))
    }

    /// Maps a cell to its top-left pixel.
    pub fn board_to_screen(&self, col: usize, row: usize) -> (u32, u32) {
        (col as u32 * self.span, row as u32 * self.span)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SIDE: u32 = 224;

    #[test]
    fn span_is_side_over_three() {
        assert_eq!(Grid::new(SIDE).span(), 74);
    }

    #[test]
    fn top_left_pixel_maps_to_first_cell() {
        let grid = Grid::new(SIDE);
        assert_eq!(grid.screen_to_board(0, 0), Some((0, 0)));
    }

    #[test]
    fn round_trip_maps_back_to_cell_origin() {
        let grid = Grid::new(SIDE);
        let span = grid.span();

        for col in 0..BOARD_CELLS {
            for row in 0..BOARD_CELLS {
                let (ox, oy) = grid.board_to_screen(col, row);

                // Sample pixels across the cell's bounds, edges included.
                for dx in [0, span / 2, span - 1] {
                    for dy in [0, span / 2, span - 1] {
                        let cell = grid.screen_to_board(ox + dx, oy + dy);
                        assert_eq!(cell, Some((col, row)));
                    }
                }
            }
        }
    }

    #[test]
    fn pixels_outside_board_are_rejected() {
        let grid = Grid::new(SIDE);
        let edge = grid.span() * BOARD_CELLS as u32;

        assert_eq!(grid.screen_to_board(edge, 0), None);
        assert_eq!(grid.screen_to_board(0, edge), None);
        assert_eq!(grid.screen_to_board(10_000, 10_000), None);
    }

    #[test]
    #[should_panic(expected = "Board side must be at least")]
    fn degenerate_side_panics() {
        Grid::new(2);
    }
}
