//! pixeltext rendering backend
//!
//! Turns plain text into a bitmap page built from pre-rasterized glyph
//! images. Output is byte-identical for the same text, glyphs and width.
//!
//! # Pipeline
//!
//! - **Glyph table**: character to glyph file mapping, decoded on lookup
//! - **Word renderer**: glyphs joined with 1px gaps, none next to `l`
//! - **Line packer**: greedy wrapping with a 3px space after each word
//! - **Page compositor**: lines stacked with a 1px separator above each
//! - **Pixel counter**: number of pure black pixels on the page
//!
//! # Example
//!
//! ```no_run
//! use pixeltext_render::{render_text, GlyphTable, LayoutMetrics, PngConfig, DEFAULT_MAX_WIDTH};
//! use std::path::Path;
//!
//! let glyphs = GlyphTable::load(Path::new("mapping.json")).unwrap();
//! let result = render_text("hello world", &glyphs, &LayoutMetrics::default(), DEFAULT_MAX_WIDTH)
//!     .unwrap();
//! pixeltext_render::png::write_rgb(&result.image, Path::new("output.png"), &PngConfig::default())
//!     .unwrap();
//! println!("Total pixels required: {}", result.black_pixels);
//! ```

pub mod glyph;
pub mod line;
pub mod metrics;
pub mod page;
pub mod pixels;
pub mod png;
pub mod render;
pub mod text;
pub mod word;

// Re-export main types for convenience
pub use glyph::{GlyphError, GlyphSet, GlyphSource, GlyphTable};
pub use line::{pack_lines, Line, LineItem, PackedLines};
pub use metrics::{
    LayoutMetrics, DEFAULT_MAX_WIDTH, GLYPH_HEIGHT, GLYPH_PADDING, LINE_SEPARATOR, SPACE_WIDTH,
};
pub use page::compose_page;
pub use pixels::count_black_pixels;
pub use self::png::{PngConfig, PngError};
pub use render::{render_text, LineSummary, RenderError, RenderResult, SkippedChar};
pub use text::tokenize;
pub use word::{render_word, WordImage};
