//! Fixed pixel metrics shared by the word renderer, line packer and page compositor.

use image::Rgb;

/// Height of every glyph, in pixels.
pub const GLYPH_HEIGHT: u32 = 8;

/// White gap inserted between two adjacent glyphs of a word.
pub const GLYPH_PADDING: u32 = 1;

/// White gap inserted after every word on a line.
pub const SPACE_WIDTH: u32 = 3;

/// White strip placed above every line of the page.
pub const LINE_SEPARATOR: u32 = 1;

/// Maximum line width used when none is configured.
pub const DEFAULT_MAX_WIDTH: u32 = 80;

/// Background color of words, spaces and the page.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Ink color counted by the pixel counter.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Pixel metrics for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Height every glyph must have.
    pub glyph_height: u32,
    /// Padding between adjacent glyphs (suppressed next to `l`).
    pub glyph_padding: u32,
    /// Space appended after each word.
    pub space_width: u32,
    /// Separator strip above each line.
    pub line_separator: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            glyph_height: GLYPH_HEIGHT,
            glyph_padding: GLYPH_PADDING,
            space_width: SPACE_WIDTH,
            line_separator: LINE_SEPARATOR,
        }
    }
}

impl LayoutMetrics {
    /// Vertical distance between the tops of two consecutive lines.
    pub fn line_pitch(&self) -> u32 {
        self.glyph_height + self.line_separator
    }

    /// Page height for the given number of lines.
    pub fn page_height(&self, line_count: usize) -> u32 {
        self.line_pitch() * line_count as u32
    }
}
