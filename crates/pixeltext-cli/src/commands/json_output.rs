//! JSON output types for the `--json` flag.

use pixeltext_render::LineSummary;
use serde::Serialize;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Input text could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Glyph mapping could not be loaded
    pub const MAPPING: &str = "CLI_002";
    /// A glyph file failed to decode or has the wrong size
    pub const GLYPH: &str = "CLI_003";
    /// Output image could not be written
    pub const OUTPUT_WRITE: &str = "CLI_004";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Character has no glyph and was skipped
    pub const UNMAPPED_CHARACTER: &str = "CLI_W001";
    /// Page has no area; no image was written
    pub const EMPTY_PAGE: &str = "CLI_W002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The written image file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutputFile {
    /// Path the PNG was written to
    pub path: String,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
    /// Size of the PNG in bytes
    pub size_bytes: usize,
}

/// Render details on success.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSummary {
    /// BLAKE3 hash of the input text file
    pub source_hash: String,
    /// Words the input was split into
    pub words: Vec<String>,
    /// Page lines from top to bottom
    pub lines: Vec<LineSummary>,
    /// Page width in pixels
    pub width: u32,
    /// Page height in pixels
    pub height: u32,
    /// Number of pure black pixels
    pub black_pixels: u64,
    /// Written image, absent for an empty page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFile>,
}

/// JSON output for a render run.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    /// Whether the render succeeded
    pub success: bool,
    /// Fatal errors
    pub errors: Vec<JsonError>,
    /// Non-fatal warnings
    pub warnings: Vec<JsonWarning>,
    /// Render details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderSummary>,
}

impl RenderOutput {
    /// Creates a successful render output.
    pub fn success(result: RenderSummary, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed render output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}
