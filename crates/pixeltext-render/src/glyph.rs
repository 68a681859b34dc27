//! Character to glyph bitmap lookup.
//!
//! A [`GlyphTable`] is built from a JSON object mapping single characters to
//! glyph image files. Files are decoded on first lookup and cached, so a
//! broken glyph is only an error when the text actually uses it. [`GlyphSet`] holds glyphs that
//! are already in memory.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use image::RgbImage;
use thiserror::Error;

/// Errors from loading the glyph mapping or decoding glyph files.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// Mapping file could not be read.
    #[error("Failed to read glyph mapping {path}: {source}")]
    MappingRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Mapping file is not a JSON object of strings.
    #[error("Invalid glyph mapping {path}: {source}")]
    MappingParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Mapping key is not exactly one character.
    #[error("Glyph mapping key {key:?} must be exactly one character")]
    InvalidKey { key: String },

    /// Glyph file is missing or not a decodable image.
    #[error("Failed to decode glyph {ch:?} from {path}: {source}")]
    Decode {
        ch: char,
        path: PathBuf,
        source: image::ImageError,
    },

    /// Glyph does not have the configured glyph height.
    #[error("Glyph {ch:?} is {actual}px tall, expected {expected}px")]
    HeightMismatch { ch: char, expected: u32, actual: u32 },
}

/// Something that can produce the bitmap for a character.
pub trait GlyphSource {
    /// Returns the glyph for `ch`, or `None` if the character is unmapped.
    fn glyph(&self, ch: char) -> Result<Option<RgbImage>, GlyphError>;
}

/// File-backed glyph table.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    entries: BTreeMap<char, PathBuf>,
    decoded: RefCell<HashMap<char, RgbImage>>,
}

impl GlyphTable {
    /// Loads a mapping JSON file such as `{"a": "glyphs/a.png"}`.
    ///
    /// Relative glyph paths are resolved against the mapping file's directory.
    pub fn load(path: &Path) -> Result<Self, GlyphError> {
        let content = std::fs::read_to_string(path).map_err(|source| GlyphError::MappingRead {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: BTreeMap<String, PathBuf> =
            serde_json::from_str(&content).map_err(|source| GlyphError::MappingParse {
                path: path.to_path_buf(),
                source,
            })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_mapping(raw, base_dir)
    }

    /// Builds a table from raw string keys.
    pub fn from_mapping(
        raw: BTreeMap<String, PathBuf>,
        base_dir: &Path,
    ) -> Result<Self, GlyphError> {
        let mut entries = BTreeMap::new();
        for (key, glyph_path) in raw {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(GlyphError::InvalidKey { key }),
            };
            entries.insert(ch, base_dir.join(glyph_path));
        }
        Ok(Self {
            entries,
            decoded: RefCell::default(),
        })
    }

    /// Path of the glyph file for `ch`, if mapped.
    pub fn path(&self, ch: char) -> Option<&Path> {
        self.entries.get(&ch).map(PathBuf::as_path)
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no characters are mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of glyphs decoded so far.
    pub fn decoded_count(&self) -> usize {
        self.decoded.borrow().len()
    }
}

impl GlyphSource for GlyphTable {
    fn glyph(&self, ch: char) -> Result<Option<RgbImage>, GlyphError> {
        let Some(path) = self.entries.get(&ch) else {
            return Ok(None);
        };
        if let Some(glyph) = self.decoded.borrow().get(&ch) {
            return Ok(Some(glyph.clone()));
        }

        let glyph = image::open(path)
            .map_err(|source| GlyphError::Decode {
                ch,
                path: path.clone(),
                source,
            })?
            .to_rgb8();
        self.decoded.borrow_mut().insert(ch, glyph.clone());
        Ok(Some(glyph))
    }
}

/// In-memory glyph set.
#[derive(Debug, Clone, Default)]
pub struct GlyphSet {
    glyphs: HashMap<char, RgbImage>,
}

impl GlyphSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the glyph for `ch`.
    pub fn insert(&mut self, ch: char, glyph: RgbImage) {
        self.glyphs.insert(ch, glyph);
    }

    /// Builder form of [`GlyphSet::insert`].
    pub fn with_glyph(mut self, ch: char, glyph: RgbImage) -> Self {
        self.insert(ch, glyph);
        self
    }
}

impl GlyphSource for GlyphSet {
    fn glyph(&self, ch: char) -> Result<Option<RgbImage>, GlyphError> {
        Ok(self.glyphs.get(&ch).cloned())
    }
}
