//! Loading the text to render.

use std::path::{Path, PathBuf};

/// Text read from the input file.
#[derive(Debug)]
pub struct LoadResult {
    /// File contents as read.
    pub text: String,
    /// Size of the file in bytes.
    pub size_bytes: usize,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while reading input text.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File is not valid UTF-8.
    NotUtf8 { path: PathBuf },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::NotUtf8 { path } => {
                write!(f, "file '{}' is not valid UTF-8", path.display())
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::NotUtf8 { .. } => None,
        }
    }
}

/// Reads a UTF-8 text file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use pixeltext_cli::input::load_text;
///
/// let input = load_text(Path::new("poem.txt")).unwrap();
/// println!("{} bytes", input.size_bytes);
/// ```
pub fn load_text(path: &Path) -> Result<LoadResult, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let size_bytes = bytes.len();
    let source_hash = blake3::hash(&bytes).to_hex().to_string();
    let text = String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    Ok(LoadResult {
        text,
        size_bytes,
        source_hash,
    })
}
