//! Stacking packed lines into the final page image.

use image::{imageops, RgbImage};
use tracing::debug;

use crate::line::{Line, LineItem};
use crate::metrics::{LayoutMetrics, WHITE};

/// Composes `lines` onto a white page `width` pixels wide.
///
/// Every line occupies a separator strip followed by one glyph row, so the
/// page is `lines.len() * (glyph_height + line_separator)` pixels tall.
/// Items that extend past `width` are clipped.
pub fn compose_page(lines: &[Line], width: u32, metrics: &LayoutMetrics) -> RgbImage {
    let height = metrics.page_height(lines.len());
    debug!(width, height, lines = lines.len(), "composing page");

    let mut page = RgbImage::from_pixel(width, height, WHITE);
    let separator = RgbImage::from_pixel(width, metrics.line_separator, WHITE);

    for (i, line) in lines.iter().enumerate() {
        let top = i64::from(metrics.line_pitch()) * i as i64;
        imageops::replace(&mut page, &separator, 0, top);

        let row = top + i64::from(metrics.line_separator);
        let mut x = 0i64;
        for item in &line.items {
            match item {
                LineItem::Word(word) => imageops::replace(&mut page, &word.image, x, row),
                LineItem::Space(space) => {
                    let blank = RgbImage::from_pixel(*space, metrics.glyph_height, WHITE);
                    imageops::replace(&mut page, &blank, x, row);
                }
            }
            x += i64::from(item.width());
        }
    }

    page
}
