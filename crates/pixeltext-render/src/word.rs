//! Rendering a single word into one strip of glyphs.

use image::{imageops, RgbImage};
use tracing::warn;

use crate::glyph::{GlyphError, GlyphSource};
use crate::metrics::{LayoutMetrics, WHITE};

/// Character whose glyph already carries its own side bearing.
const UNPADDED: char = 'l';

/// A word rendered onto a white strip.
#[derive(Debug, Clone)]
pub struct WordImage {
    /// Source text of the word.
    pub text: String,
    /// Rendered pixels; zero-sized when no character had a glyph.
    pub image: RgbImage,
    /// Characters that had no glyph, in order of appearance.
    pub skipped: Vec<char>,
}

impl WordImage {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Returns true if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.image.width() == 0
    }
}

/// Returns true if a padding gap belongs after `ch` when `next` follows it in
/// the word, whether or not `next` has a glyph.
pub fn needs_padding(ch: char, next: char) -> bool {
    ch != UNPADDED && next != UNPADDED
}

/// A glyph placed in a word, with the character that follows it.
struct Placed {
    ch: char,
    next: Option<char>,
    glyph: RgbImage,
}

/// Renders `word` using glyphs from `glyphs`.
///
/// Padding follows every rendered glyph except the last one, unless the glyph
/// or the next character of the word is `l`. Unmapped characters are skipped and reported in
/// [`WordImage::skipped`]; a glyph file that fails to decode, or a glyph of
/// the wrong height, is an error.
pub fn render_word<G: GlyphSource + ?Sized>(
    word: &str,
    glyphs: &G,
    metrics: &LayoutMetrics,
) -> Result<WordImage, GlyphError> {
    let mut parts: Vec<Placed> = Vec::with_capacity(word.len());
    let mut skipped = Vec::new();

    let mut chars = word.chars().peekable();
    while let Some(ch) = chars.next() {
        let next = chars.peek().copied();
        match glyphs.glyph(ch)? {
            Some(glyph) => {
                if glyph.height() != metrics.glyph_height {
                    return Err(GlyphError::HeightMismatch {
                        ch,
                        expected: metrics.glyph_height,
                        actual: glyph.height(),
                    });
                }
                parts.push(Placed { ch, next, glyph });
            }
            None => {
                warn!(character = ?ch, word, "character not in glyph mapping, skipping");
                skipped.push(ch);
            }
        }
    }

    if parts.is_empty() {
        return Ok(WordImage {
            text: word.to_owned(),
            image: RgbImage::new(0, 0),
            skipped,
        });
    }

    let last = parts.len() - 1;
    let gap = |i: usize| -> u32 {
        match parts[i].next {
            Some(next) if i < last && needs_padding(parts[i].ch, next) => metrics.glyph_padding,
            _ => 0,
        }
    };

    let width: u32 = (0..parts.len())
        .map(|i| parts[i].glyph.width() + gap(i))
        .sum();
    let height = parts
        .iter()
        .map(|part| part.glyph.height())
        .max()
        .unwrap_or(metrics.glyph_height);

    let mut image = RgbImage::from_pixel(width, height, WHITE);
    let mut x = 0u32;
    for (i, part) in parts.iter().enumerate() {
        imageops::replace(&mut image, &part.glyph, i64::from(x), 0);
        x += part.glyph.width() + gap(i);
    }

    Ok(WordImage {
        text: word.to_owned(),
        image,
        skipped,
    })
}
