//=========================================================================
// Sprite
//
// A decoded image held in memory as packed 0xAARRGGBB pixels.
//
// Responsibilities:
// - Store pixel data in the format the frame buffer blits from
// - Convert to and from the byte-per-channel RGBA layout used by the
//   image decoder and the window-icon API
//
//=========================================================================

//=== Sprite ==============================================================

/// An immutable image with premixed alpha information per pixel.
///
/// Pixels are packed as `0xAARRGGBB`. The renderer consults the alpha
/// byte when blitting; fully transparent pixels are skipped, fully
/// opaque pixels overwrite, anything in between is blended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Sprite {
    //--- Construction -----------------------------------------------------

    /// Wraps packed pixels into a sprite.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        assert_eq!(
            pixels.len(),
            (width * height) as usize,
            "Sprite pixel count must match dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Packs byte-per-channel RGBA data (as produced by the image
    /// decoder) into a sprite.
    ///
    /// # Panics
    ///
    /// Panics if `rgba.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        assert_eq!(
            rgba.len(),
            (width * height * 4) as usize,
            "RGBA byte count must match dimensions"
        );

        let pixels = rgba
            .chunks_exact(4)
            .map(|px| {
                let [r, g, b, a] = [px[0], px[1], px[2], px[3]];
                (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
            })
            .collect();

        Self {
            width,
            height,
            pixels,
        }
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

    /// Returns the packed pixel at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the sprite.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Unpacks into byte-per-channel RGBA, the layout expected by the
    /// window-icon API.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for &px in &self.pixels {
            rgba.push((px >> 16) as u8);
            rgba.push((px >> 8) as u8);
            rgba.push(px as u8);
            rgba.push((px >> 24) as u8);
        }
        rgba
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_packs_channels() {
        let sprite = Sprite::from_rgba(1, 1, &[0x11, 0x22, 0x33, 0x44]);
        assert_eq!(sprite.pixel(0, 0), 0x44112233);
    }

    #[test]
    fn rgba_round_trip_preserves_bytes() {
        let bytes = [
            0xFF, 0x00, 0x00, 0xFF, // opaque red
            0x00, 0xFF, 0x00, 0x80, // half-transparent green
        ];
        let sprite = Sprite::from_rgba(2, 1, &bytes);
        assert_eq!(sprite.to_rgba(), bytes);
    }

    #[test]
    fn pixel_indexing_is_row_major() {
        let sprite = Sprite::new(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(sprite.pixel(0, 0), 1);
        assert_eq!(sprite.pixel(1, 0), 2);
        assert_eq!(sprite.pixel(0, 1), 3);
        assert_eq!(sprite.pixel(1, 1), 4);
    }

    #[test]
    #[should_panic(expected = "Sprite pixel count must match dimensions")]
    fn mismatched_pixel_count_panics() {
        Sprite::new(2, 2, vec![0; 3]);
    }
}
