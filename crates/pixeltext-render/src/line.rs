//! Greedy line breaking of rendered words.

use tracing::debug;

use crate::metrics::LayoutMetrics;
use crate::word::WordImage;

/// One horizontal element of a line.
#[derive(Debug, Clone)]
pub enum LineItem {
    /// A rendered word.
    Word(WordImage),
    /// White space after a word.
    Space(u32),
}

impl LineItem {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            LineItem::Word(word) => word.width(),
            LineItem::Space(width) => *width,
        }
    }
}

/// A row of words and spaces.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub items: Vec<LineItem>,
}

impl Line {
    /// Sum of all item widths, trailing space included.
    pub fn width(&self) -> u32 {
        self.items.iter().map(LineItem::width).sum()
    }

    /// Width without a trailing space, if there is one.
    pub fn content_width(&self) -> u32 {
        match self.items.last() {
            Some(LineItem::Space(width)) => self.width() - width,
            _ => self.width(),
        }
    }

    /// Words on this line, in order.
    pub fn words(&self) -> impl Iterator<Item = &WordImage> {
        self.items.iter().filter_map(|item| match item {
            LineItem::Word(word) => Some(word),
            LineItem::Space(_) => None,
        })
    }

    /// Returns true if the line holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn drop_trailing_space(&mut self) {
        if let Some(LineItem::Space(_)) = self.items.last() {
            self.items.pop();
        }
    }
}

/// Output of [`pack_lines`].
#[derive(Debug, Clone, Default)]
pub struct PackedLines {
    /// Lines from top to bottom. Always at least one, possibly empty.
    pub lines: Vec<Line>,
    /// Largest running line width observed, trailing space included.
    pub widest: u32,
}

/// Packs `words` into lines narrower than `max_width`.
///
/// A word starts a new line when the running width plus the word reaches
/// `max_width` and the current line already has content; the closed line
/// loses its trailing space. A word that alone exceeds `max_width` gets a
/// line of its own and is never split. Zero-width words are dropped.
pub fn pack_lines<I>(words: I, max_width: u32, metrics: &LayoutMetrics) -> PackedLines
where
    I: IntoIterator<Item = WordImage>,
{
    let mut lines = Vec::new();
    let mut line = Line::default();
    let mut line_width = 0u32;
    let mut widest = 0u32;

    for word in words {
        if word.is_empty() {
            debug!(word = %word.text, "dropping word with no renderable glyphs");
            continue;
        }

        let word_width = word.width();
        if line_width + word_width >= max_width && !line.is_empty() {
            line.drop_trailing_space();
            debug!(
                line = lines.len(),
                width = line.width(),
                "line full, wrapping"
            );
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        line.items.push(LineItem::Word(word));
        line.items.push(LineItem::Space(metrics.space_width));
        line_width += word_width + metrics.space_width;
        widest = widest.max(line_width);
    }

    lines.push(line);

    PackedLines { lines, widest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn word(width: u32) -> WordImage {
        WordImage {
            text: "w".repeat(width as usize),
            image: RgbImage::new(width, 8),
            skipped: Vec::new(),
        }
    }

    fn widths(packed: &PackedLines) -> Vec<u32> {
        packed.lines.iter().map(Line::width).collect()
    }

    #[test]
    fn test_single_line() {
        let packed = pack_lines(vec![word(9)], 80, &LayoutMetrics::default());
        assert_eq!(packed.lines.len(), 1);
        assert_eq!(packed.lines[0].words().count(), 1);
        assert_eq!(packed.lines[0].width(), 12, "final line keeps trailing space");
        assert_eq!(packed.widest, 12);
    }

    #[test]
    fn test_wrap_drops_trailing_space() {
        let packed = pack_lines(vec![word(10), word(10)], 20, &LayoutMetrics::default());
        assert_eq!(packed.lines.len(), 2);
        assert_eq!(widths(&packed), vec![10, 13]);
        assert!(matches!(packed.lines[0].items.last(), Some(LineItem::Word(_))));
    }

    #[test]
    fn test_wrap_is_inclusive_of_max_width() {
        // 10 + 3 + 7 == 20 reaches the limit and wraps.
        let packed = pack_lines(vec![word(10), word(7)], 20, &LayoutMetrics::default());
        assert_eq!(packed.lines.len(), 2);

        // 10 + 3 + 6 == 19 fits.
        let packed = pack_lines(vec![word(10), word(6)], 20, &LayoutMetrics::default());
        assert_eq!(packed.lines.len(), 1);
        assert_eq!(packed.lines[0].content_width(), 19);
    }

    #[test]
    fn test_over_width_word_not_split() {
        let packed = pack_lines(vec![word(50)], 20, &LayoutMetrics::default());
        assert_eq!(packed.lines.len(), 1);
        assert_eq!(packed.lines[0].content_width(), 50);
    }

    #[test]
    fn test_over_width_word_after_content_wraps() {
        let packed = pack_lines(vec![word(5), word(50), word(5)], 20, &LayoutMetrics::default());
        assert_eq!(widths(&packed), vec![5, 50, 8]);
        assert_eq!(packed.widest, 53);
    }

    #[test]
    fn test_no_words_gives_one_empty_line() {
        let packed = pack_lines(Vec::new(), 80, &LayoutMetrics::default());
        assert_eq!(packed.lines.len(), 1);
        assert!(packed.lines[0].is_empty());
        assert_eq!(packed.widest, 0);
    }

    #[test]
    fn test_zero_width_words_dropped() {
        let packed = pack_lines(vec![word(0), word(4), word(0)], 80, &LayoutMetrics::default());
        assert_eq!(packed.lines.len(), 1);
        assert_eq!(packed.lines[0].words().count(), 1);
        assert_eq!(packed.widest, 7);
    }

    #[test]
    fn test_widest_tracks_longest_line() {
        let packed = pack_lines(
            vec![word(4), word(4), word(4), word(12)],
            20,
            &LayoutMetrics::default(),
        );
        // 4+3+4+3 = 14, adding 4 → 18 < 20 so third word fits: 21 running.
        assert_eq!(widths(&packed), vec![18, 15]);
        assert_eq!(packed.widest, 21);
    }
}
