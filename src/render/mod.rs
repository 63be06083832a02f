//=========================================================================
// Render Subsystem
//
// CPU-side frame buffer and scene composition.
//
// Responsibilities:
// - Maintain the pixel buffer presented through the window surface
// - Blit sprites with alpha blending and window-edge clipping
// - Compose one frame: background, tile sprites, status overlay
//
// Notes:
// The frame stores `0x00RRGGBB` pixels, the format the presentation
// surface consumes. Sprite alpha is applied during the blit.
//
//=========================================================================

pub mod text;

//=== Standard Library Imports ============================================

use std::rc::Rc;

//=== Internal Modules ====================================================

use crate::assets::Sprite;
use crate::core::{Board, Grid, BOARD_CELLS};

//=== Colors ==============================================================

/// Frame clear color (white), applied before every redraw.
pub const CLEAR_COLOR: u32 = 0x00FF_FFFF;

//=== Frame ===============================================================

/// Resizable pixel buffer the scene is drawn into.
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Frame {
    //--- Construction -----------------------------------------------------

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    /// Resizes the buffer, discarding previous contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize((width * height) as usize, 0);
    }

    //--- Access -----------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    //--- Drawing ----------------------------------------------------------

    /// Fills the whole frame with one color.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Blits a sprite with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the frame are clipped. Sprite alpha is
    /// honored: transparent pixels are skipped, opaque pixels
    /// overwrite, intermediate values blend with the destination.
    pub fn blit(&mut self, sprite: &Sprite, x: u32, y: u32) {
        let cols = sprite.width().min(self.width.saturating_sub(x));
        let rows = sprite.height().min(self.height.saturating_sub(y));

        for sy in 0..rows {
            for sx in 0..cols {
                let src = sprite.pixel(sx, sy);
                let alpha = src >> 24;
                if alpha == 0 {
                    continue;
                }

                let idx = ((y + sy) * self.width + (x + sx)) as usize;
                self.pixels[idx] = if alpha == 0xFF {
                    src & 0x00FF_FFFF
                } else {
                    blend(src, self.pixels[idx], alpha)
                };
            }
        }
    }
}

/// Linear blend of one source pixel over the destination.
fn blend(src: u32, dst: u32, alpha: u32) -> u32 {
    let mut out = 0u32;
    for shift in [16, 8, 0] {
        let s = (src >> shift) & 0xFF;
        let d = (dst >> shift) & 0xFF;
        let channel = (s * alpha + d * (0xFF - alpha)) / 0xFF;
        out |= channel << shift;
    }
    out
}

//=== Scene ===============================================================

/// The drawable game scene: background, tile sprites, and an optional
/// status overlay in the top-left corner.
///
/// Sprite handles come from the image cache; the scene keeps its own
/// references so the pixels stay alive for the life of the loop.
pub struct Scene {
    background: Rc<Sprite>,
    tiles: [Rc<Sprite>; 3],
    overlay: Option<Sprite>,
}

impl Scene {
    //--- Construction -----------------------------------------------------

    /// Creates a scene from the background and the three tile sprites,
    /// indexed by `Tile::index()`.
    pub fn new(background: Rc<Sprite>, tiles: [Rc<Sprite>; 3]) -> Self {
        Self {
            background,
            tiles,
            overlay: None,
        }
    }

    //--- Overlay ----------------------------------------------------------

    /// Replaces the status overlay (pass `None` to clear it).
    pub fn set_overlay(&mut self, overlay: Option<Sprite>) {
        self.overlay = overlay;
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Sprite drawn for the cross symbol; doubles as the window icon.
    pub fn cross_sprite(&self) -> &Rc<Sprite> {
        &self.tiles[2]
    }

    //--- Composition ------------------------------------------------------

    /// Draws one complete frame: clear, background, tiles, overlay.
    pub fn draw(&self, frame: &mut Frame, board: &Board, grid: &Grid) {
        frame.clear(CLEAR_COLOR);
        frame.blit(&self.background, 0, 0);

        for col in 0..BOARD_CELLS {
            for row in 0..BOARD_CELLS {
                let sprite = &self.tiles[board.tile(col, row).index()];
                let (x, y) = grid.board_to_screen(col, row);
                frame.blit(sprite, x, y);
            }
        }

        if let Some(overlay) = &self.overlay {
            frame.blit(overlay, 0, 0);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    //--- Test Helpers -----------------------------------------------------

    fn solid(width: u32, height: u32, color: u32) -> Sprite {
        Sprite::new(width, height, vec![color; (width * height) as usize])
    }

    fn pixel(frame: &Frame, x: u32, y: u32) -> u32 {
        frame.pixels()[(y * frame.width() + x) as usize]
    }

    //=====================================================================
    // Frame Tests
    //=====================================================================

    #[test]
    fn clear_fills_every_pixel() {
        let mut frame = Frame::new(4, 4);
        frame.clear(CLEAR_COLOR);
        assert!(frame.pixels().iter().all(|&p| p == CLEAR_COLOR));
    }

    #[test]
    fn resize_changes_dimensions_and_zeroes() {
        let mut frame = Frame::new(2, 2);
        frame.clear(CLEAR_COLOR);
        frame.resize(3, 5);

        assert_eq!((frame.width(), frame.height()), (3, 5));
        assert_eq!(frame.pixels().len(), 15);
        assert!(frame.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn opaque_blit_overwrites_at_offset() {
        let mut frame = Frame::new(4, 4);
        frame.clear(CLEAR_COLOR);
        frame.blit(&solid(2, 2, 0xFF00_00FF), 1, 2);

        assert_eq!(pixel(&frame, 1, 2), 0x0000_00FF);
        assert_eq!(pixel(&frame, 2, 3), 0x0000_00FF);
        assert_eq!(pixel(&frame, 0, 0), CLEAR_COLOR);
        assert_eq!(pixel(&frame, 3, 2), CLEAR_COLOR);
    }

    #[test]
    fn transparent_pixels_are_skipped() {
        let mut frame = Frame::new(2, 1);
        frame.clear(CLEAR_COLOR);
        frame.blit(&solid(2, 1, 0x0000_0000), 0, 0);
        assert_eq!(pixel(&frame, 0, 0), CLEAR_COLOR);
    }

    #[test]
    fn partial_alpha_blends_with_destination() {
        let mut frame = Frame::new(1, 1);
        frame.clear(0x0000_0000);

        // Half-transparent white over black lands mid-grey.
        frame.blit(&solid(1, 1, 0x80FF_FFFF), 0, 0);
        let p = pixel(&frame, 0, 0);
        for shift in [16, 8, 0] {
            let channel = (p >> shift) & 0xFF;
            assert!((0x7F..=0x81).contains(&channel), "channel {:#x}", channel);
        }
    }

    #[test]
    fn blit_clips_at_frame_edges() {
        let mut frame = Frame::new(3, 3);
        frame.clear(CLEAR_COLOR);
        frame.blit(&solid(3, 3, 0xFF00_FF00), 2, 2);

        assert_eq!(pixel(&frame, 2, 2), 0x0000_FF00);
        assert_eq!(pixel(&frame, 1, 1), CLEAR_COLOR);
    }

    #[test]
    fn blit_entirely_outside_is_a_noop() {
        let mut frame = Frame::new(2, 2);
        frame.clear(CLEAR_COLOR);
        frame.blit(&solid(2, 2, 0xFF12_3456), 5, 5);
        assert!(frame.pixels().iter().all(|&p| p == CLEAR_COLOR));
    }

    //=====================================================================
    // Scene Tests
    //=====================================================================

    fn scene(span: u32) -> Scene {
        let side = span * 3;
        Scene::new(
            Rc::new(solid(side, side, 0xFF10_1010)),
            [
                Rc::new(solid(span, span, 0x0000_0000)), // empty: transparent
                Rc::new(solid(span, span, 0xFF00_00FF)), // naught: blue
                Rc::new(solid(span, span, 0xFFFF_0000)), // cross: red
            ],
        )
    }

    #[test]
    fn draw_places_tile_sprites_at_mapped_cells() {
        let grid = Grid::new(6);
        let mut board = Board::new();
        board.place(Tile::Naught, 0, 0);
        board.place(Tile::Cross, 2, 2);

        let mut frame = Frame::new(6, 6);
        scene(2).draw(&mut frame, &board, &grid);

        assert_eq!(pixel(&frame, 0, 0), 0x0000_00FF, "naught at top-left");
        assert_eq!(pixel(&frame, 4, 4), 0x00FF_0000, "cross at bottom-right");
        assert_eq!(pixel(&frame, 2, 2), 0x0010_1010, "background shows through");
    }

    #[test]
    fn overlay_is_drawn_last_at_origin() {
        let grid = Grid::new(6);
        let board = Board::new();

        let mut scene = scene(2);
        scene.set_overlay(Some(solid(1, 1, 0xFFAB_CDEF)));
        assert!(scene.has_overlay());

        let mut frame = Frame::new(6, 6);
        scene.draw(&mut frame, &board, &grid);
        assert_eq!(pixel(&frame, 0, 0), 0x00AB_CDEF);
    }
}
