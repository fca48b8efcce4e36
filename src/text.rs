use std::{fs, path::Path};

use fontdue::{
    layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle},
    Font, FontSettings,
};
use sdl2::pixels::Color;

use crate::texture::{LoadError, RgbaImage};

/// A TrueType/OpenType font opened at a fixed pixel size.
pub struct FontFace {
    font: Font,
    px_size: f32,
}

impl FontFace {
    pub fn open(path: &Path, px_size: f32) -> Result<Self, LoadError> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes, px_size)
    }

    /// Collections (`.ttc`) use their first face.
    pub fn from_bytes(bytes: &[u8], px_size: f32) -> Result<Self, LoadError> {
        let settings = FontSettings {
            collection_index: 0,
            scale: px_size,
            ..FontSettings::default()
        };
        let font =
            Font::from_bytes(bytes, settings).map_err(|err| LoadError::Font(err.to_string()))?;

        Ok(Self { font, px_size })
    }

    pub fn px_size(&self) -> f32 {
        self.px_size
    }

    /// Lays out `text` on one line and renders it into straight-alpha RGBA pixels.
    pub fn rasterize(&self, text: &str, color: Color) -> Result<RgbaImage, LoadError> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &TextStyle::new(text, self.px_size, 0));

        let glyphs: Vec<(GlyphPlacement, Vec<u8>)> = layout
            .glyphs()
            .iter()
            .filter(|glyph| glyph.width > 0 && glyph.height > 0)
            .map(|glyph| {
                let placement = GlyphPlacement {
                    x: glyph.x.round() as i32,
                    y: glyph.y.round() as i32,
                    width: glyph.width,
                    height: glyph.height,
                };
                (placement, self.font.rasterize_config(glyph.key).1)
            })
            .collect();
        if glyphs.is_empty() {
            return Err(LoadError::EmptyImage);
        }

        let line_height = layout.height().ceil() as i32;
        let coverage = CoverageMap::compose(&glyphs, line_height);

        Ok(coverage.to_rgba(color))
    }
}

/// Top-left corner and bitmap size of one glyph, in layout pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GlyphPlacement {
    x: i32,
    y: i32,
    width: usize,
    height: usize,
}

/// Smallest box holding the line box `0..line_height` and every glyph bitmap,
/// as `(min_x, min_y, width, height)`.
fn ink_bounds<'g, I>(placements: I, line_height: i32) -> (i32, i32, usize, usize)
where
    I: IntoIterator<Item = &'g GlyphPlacement>,
{
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (0, 0, 0, line_height.max(0));
    for placement in placements {
        min_x = min_x.min(placement.x);
        min_y = min_y.min(placement.y);
        max_x = max_x.max(placement.x + placement.width as i32);
        max_y = max_y.max(placement.y + placement.height as i32);
    }

    (min_x, min_y, (max_x - min_x) as usize, (max_y - min_y) as usize)
}

/// Single channel glyph coverage, combined by taking the maximum.
struct CoverageMap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl CoverageMap {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Sized so that no glyph bitmap is cut off, even with negative bearings.
    fn compose(glyphs: &[(GlyphPlacement, Vec<u8>)], line_height: i32) -> Self {
        let (min_x, min_y, width, height) =
            ink_bounds(glyphs.iter().map(|(placement, _)| placement), line_height);

        let mut coverage = Self::new(width, height);
        for (placement, bitmap) in glyphs {
            coverage.blit(placement.x - min_x, placement.y - min_y, placement.width, bitmap);
        }
        coverage
    }

    fn blit(&mut self, x: i32, y: i32, bitmap_width: usize, bitmap: &[u8]) {
        if bitmap_width == 0 {
            return;
        }

        for (row, line) in bitmap.chunks_exact(bitmap_width).enumerate() {
            let target_y = y + row as i32;
            if target_y < 0 || target_y as usize >= self.height {
                continue;
            }
            for (column, &value) in line.iter().enumerate() {
                let target_x = x + column as i32;
                if target_x < 0 || target_x as usize >= self.width {
                    continue;
                }
                let cell = &mut self.data[target_y as usize * self.width + target_x as usize];
                *cell = (*cell).max(value);
            }
        }
    }

    fn to_rgba(&self, color: Color) -> RgbaImage {
        let mut data = Vec::with_capacity(self.data.len() * RgbaImage::BYTES_PER_PIXEL);
        for &value in self.data.iter() {
            let alpha = (value as u16 * color.a as u16 / 255) as u8;
            data.extend_from_slice(&[color.r, color.g, color.b, alpha]);
        }

        RgbaImage {
            width: self.width as u32,
            height: self.height as u32,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use sdl2::pixels::Color;

    use super::{ink_bounds, CoverageMap, FontFace, GlyphPlacement};
    use crate::texture::LoadError;

    #[test]
    fn overlapping_glyphs_keep_strongest_coverage() {
        let mut coverage = CoverageMap::new(3, 1);
        coverage.blit(0, 0, 2, &[10, 200]);
        coverage.blit(1, 0, 2, &[50, 70]);
        assert_eq!(coverage.data, vec![10, 200, 70]);
    }

    #[test]
    fn blit_clips_to_bounds() {
        let mut coverage = CoverageMap::new(2, 2);
        coverage.blit(-1, 1, 2, &[1, 2, 3, 4]);
        assert_eq!(coverage.data, vec![0, 0, 2, 0]);
    }

    #[test]
    fn coverage_scales_color_alpha() {
        let mut coverage = CoverageMap::new(2, 1);
        coverage.blit(0, 0, 2, &[255, 0]);

        let image = coverage.to_rgba(Color::RGBA(10, 20, 30, 128));
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.data, vec![10, 20, 30, 128, 10, 20, 30, 0]);
    }

    #[test]
    fn invalid_font_data_is_rejected() {
        let result = FontFace::from_bytes(b"not a font", 28.0);
        assert!(matches!(result, Err(LoadError::Font(_))));
    }

    #[test]
    fn bounds_cover_negative_bearings_and_descenders() {
        let placements = [
            GlyphPlacement {
                x: -3,
                y: 10,
                width: 8,
                height: 24,
            },
            GlyphPlacement {
                x: 40,
                y: 4,
                width: 15,
                height: 20,
            },
        ];
        assert_eq!(ink_bounds(&placements, 33), (-3, 0, 58, 34));
    }

    #[test]
    fn empty_line_keeps_line_height() {
        assert_eq!(ink_bounds(std::iter::empty(), 33), (0, 0, 0, 33));
    }

    #[test]
    fn composing_keeps_every_inked_pixel() {
        let leading = GlyphPlacement {
            x: -2,
            y: 3,
            width: 4,
            height: 3,
        };
        let trailing = GlyphPlacement {
            x: 9,
            y: -1,
            width: 3,
            height: 2,
        };
        let glyphs = vec![(leading, vec![255; 12]), (trailing, vec![128; 6])];

        let coverage = CoverageMap::compose(&glyphs, 5);
        assert_eq!((coverage.width, coverage.height), (14, 7));

        let inked = coverage.data.iter().filter(|&&value| value > 0).count();
        assert_eq!(inked, 12 + 6);
        assert_eq!(coverage.data.iter().filter(|&&value| value == 255).count(), 12);
        // The leading glyph lands on the left edge, the raised one on the top row.
        assert_eq!(coverage.data[4 * 14], 255);
        assert_eq!(coverage.data[13], 128);
    }
}
