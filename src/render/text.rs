//=========================================================================
// Text Rendering
//
// Rasterizes the status banner into a sprite via fontdue.
//
// Responsibilities:
// - Load and parse the banner font at startup (fail fast)
// - Lay out and rasterize a line of text at a fixed pixel size
// - Apply the banner style: solid color with an underline bar
//
// Notes:
// Glyph coverage becomes the sprite's alpha channel, so the banner
// blends over whatever the board shows underneath.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::path::Path;

//=== External Crates =====================================================

use fontdue::layout::{CoordinateSystem, Layout, TextStyle};
use fontdue::{Font, FontSettings};
use log::debug;

//=== Internal Modules ====================================================

use crate::assets::{AssetError, Sprite};

//=== Banner Style ========================================================

/// Banner text color (red), matching the win message style.
pub const BANNER_COLOR: [u8; 3] = [0xFF, 0x00, 0x00];

/// Banner text size in pixels.
pub const BANNER_SIZE_PX: f32 = 36.0;

/// Thickness of the underline bar in pixels.
const UNDERLINE_PX: u32 = 2;

/// Gap between the text block and the underline in pixels.
const UNDERLINE_GAP_PX: u32 = 1;

//=== TextRenderer ========================================================

/// Rasterizes single-line banner text with an underline.
pub struct TextRenderer {
    font: Font,
    size_px: f32,
}

impl TextRenderer {
    //--- Construction -----------------------------------------------------

    /// Loads and parses the font file.
    pub fn from_file(path: &Path, size_px: f32) -> Result<Self, AssetError> {
        let bytes = fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let font =
            Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| AssetError::Font {
                path: path.to_path_buf(),
                reason: reason.to_string(),
            })?;

        debug!(target: "render", "Loaded font {} at {}px", path.display(), size_px);
        Ok(Self { font, size_px })
    }

    //--- Rasterization ----------------------------------------------------

    /// Renders one line of underlined text in the given color.
    ///
    /// Returns `None` for text that produces no visible glyphs.
    pub fn render(&self, text: &str, color: [u8; 3]) -> Option<Sprite> {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.append(&[&self.font], &TextStyle::new(text, self.size_px, 0));

        let glyphs = layout.glyphs();

        // Text block bounds across all glyph bitmaps.
        let mut text_width = 0u32;
        let mut text_height = 0u32;
        for glyph in glyphs {
            let right = glyph.x.max(0.0) as u32 + glyph.width as u32;
            let bottom = glyph.y.max(0.0) as u32 + glyph.height as u32;
            text_width = text_width.max(right);
            text_height = text_height.max(bottom);
        }
        if text_width == 0 {
            return None;
        }

        let height = text_height + UNDERLINE_GAP_PX + UNDERLINE_PX;
        let mut pixels = vec![0u32; (text_width * height) as usize];

        let [r, g, b] = color;
        let rgb = (r as u32) << 16 | (g as u32) << 8 | b as u32;

        // Glyph coverage drives the alpha channel.
        for glyph in glyphs {
            let (metrics, coverage) = self.font.rasterize_config(glyph.key);
            let gx = glyph.x.max(0.0) as u32;
            let gy = glyph.y.max(0.0) as u32;

            for row in 0..metrics.height as u32 {
                for col in 0..metrics.width as u32 {
                    let alpha = coverage[(row * metrics.width as u32 + col) as usize];
                    if alpha == 0 {
                        continue;
                    }
                    let x = gx + col;
                    let y = gy + row;
                    if x >= text_width || y >= text_height {
                        continue;
                    }
                    pixels[(y * text_width + x) as usize] = (alpha as u32) << 24 | rgb;
                }
            }
        }

        // Underline bar spanning the full text width.
        for y in (height - UNDERLINE_PX)..height {
            for x in 0..text_width {
                pixels[(y * text_width + x) as usize] = 0xFF00_0000 | rgb;
            }
        }

        Some(Sprite::new(text_width, height, pixels))
    }
}
