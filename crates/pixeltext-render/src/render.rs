//! End-to-end text rendering: words, lines, page, ink count.

use image::RgbImage;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::glyph::{GlyphError, GlyphSource};
use crate::line::pack_lines;
use crate::metrics::LayoutMetrics;
use crate::page::compose_page;
use crate::pixels::count_black_pixels;
use crate::text::tokenize;
use crate::word::render_word;

/// Errors that abort a render.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Glyph lookup or decoding failed.
    #[error(transparent)]
    Glyph(#[from] GlyphError),
}

/// A character dropped because it had no glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedChar {
    /// The unmapped character.
    pub character: char,
    /// Word it appeared in.
    pub word: String,
}

/// Layout facts about one line of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    /// Words on the line.
    pub words: Vec<String>,
    /// Width in pixels, trailing space included.
    pub width: u32,
}

/// Result of rendering a text.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Final page image.
    pub image: RgbImage,
    /// Words the text was split into.
    pub words: Vec<String>,
    /// One entry per page line.
    pub lines: Vec<LineSummary>,
    /// Unmapped characters in order of appearance.
    pub skipped: Vec<SkippedChar>,
    /// Number of pure black pixels on the page.
    pub black_pixels: u64,
}

impl RenderResult {
    /// Page width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Page height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns true if the page has no area and cannot be encoded.
    pub fn is_degenerate(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }
}

/// Renders `text` with glyphs from `glyphs`, wrapping at `max_width`.
pub fn render_text<G: GlyphSource + ?Sized>(
    text: &str,
    glyphs: &G,
    metrics: &LayoutMetrics,
    max_width: u32,
) -> Result<RenderResult, RenderError> {
    let words = tokenize(text);
    debug!(words = words.len(), max_width, "rendering text");

    let mut rendered = Vec::with_capacity(words.len());
    let mut skipped = Vec::new();
    for word in &words {
        let image = render_word(word, glyphs, metrics)?;
        skipped.extend(image.skipped.iter().map(|&character| SkippedChar {
            character,
            word: word.clone(),
        }));
        rendered.push(image);
    }

    let packed = pack_lines(rendered, max_width, metrics);
    let image = compose_page(&packed.lines, packed.widest, metrics);
    let black_pixels = count_black_pixels(&image);

    let lines = packed
        .lines
        .iter()
        .map(|line| LineSummary {
            words: line.words().map(|w| w.text.clone()).collect(),
            width: line.width(),
        })
        .collect();

    Ok(RenderResult {
        image,
        words,
        lines,
        skipped,
        black_pixels,
    })
}
