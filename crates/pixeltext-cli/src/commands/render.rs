//! Render command implementation
//!
//! Reads a text file, lays it out with the glyph mapping and writes the page
//! as a PNG, then reports how many black pixels the page uses.

use anyhow::{Context, Result};
use colored::Colorize;
use pixeltext_render::png::write_rgb;
use pixeltext_render::{render_text, GlyphTable, LayoutMetrics, PngConfig, RenderResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};

use crate::input::{load_text, LoadResult};

use super::json_output::{
    error_codes, warning_codes, JsonError, JsonWarning, OutputFile, RenderOutput, RenderSummary,
};

/// Options for one render run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// UTF-8 text file to render
    pub path: PathBuf,
    /// Maximum line width in pixels
    pub width: u32,
    /// Character to glyph file mapping (JSON)
    pub mapping: PathBuf,
    /// Where the PNG is written
    pub output: PathBuf,
    /// Emit machine-readable JSON instead of colored text
    pub json: bool,
}

/// A finished render.
#[derive(Debug)]
pub struct RenderRun {
    /// The input text file
    pub input: LoadResult,
    /// Layout and page image
    pub result: RenderResult,
    /// Written file; `None` when the page was empty
    pub output: Option<OutputFile>,
    /// True if an empty page removed an image left by an earlier run
    pub removed_stale: bool,
}

/// A failed step of the render, tagged with its stable error code.
#[derive(Debug)]
pub struct CommandError {
    /// Stable error code from [`error_codes`]
    pub code: &'static str,
    /// File the failure refers to
    pub file: Option<PathBuf>,
    /// Underlying error
    pub error: anyhow::Error,
}

impl CommandError {
    fn new(code: &'static str, file: Option<&Path>, error: impl Into<anyhow::Error>) -> Self {
        Self {
            code,
            file: file.map(Path::to_path_buf),
            error: error.into(),
        }
    }

    fn to_json(&self) -> JsonError {
        let error = JsonError::new(self.code, format!("{:#}", self.error));
        match &self.file {
            Some(file) => error.with_file(file.display().to_string()),
            None => error,
        }
    }
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(options: &RenderOptions) -> Result<ExitCode> {
    if options.json {
        run_json(options)
    } else {
        run_human(options)
    }
}

/// Loads, lays out and writes the page.
///
/// Nothing is written when the page has no area, and any file already at the
/// output path is removed so it cannot be mistaken for this run's image.
pub fn execute(options: &RenderOptions) -> std::result::Result<RenderRun, CommandError> {
    let input = load_text(&options.path)
        .map_err(|e| CommandError::new(error_codes::FILE_READ, Some(&options.path), e))?;

    let glyphs = GlyphTable::load(&options.mapping)
        .map_err(|e| CommandError::new(error_codes::MAPPING, Some(&options.mapping), e))?;
    debug!(
        characters = glyphs.len(),
        mapping = %options.mapping.display(),
        "loaded glyph mapping"
    );
    if glyphs.is_empty() {
        warn!(mapping = %options.mapping.display(), "glyph mapping is empty");
    }

    let result = render_text(
        &input.text,
        &glyphs,
        &LayoutMetrics::default(),
        options.width,
    )
    .map_err(|e| CommandError::new(error_codes::GLYPH, None, e))?;
    debug!(decoded = glyphs.decoded_count(), "glyphs decoded");

    let output_error =
        |e: anyhow::Error| CommandError::new(error_codes::OUTPUT_WRITE, Some(&options.output), e);
    let (output, removed_stale) = if result.is_degenerate() {
        let removed = remove_stale_output(&options.output).map_err(output_error)?;
        (None, removed)
    } else {
        let file = write_output(&result, &options.output).map_err(output_error)?;
        (Some(file), false)
    };

    Ok(RenderRun {
        input,
        result,
        output,
        removed_stale,
    })
}

fn write_output(result: &RenderResult, path: &Path) -> Result<OutputFile> {
    let (size_bytes, hash) = write_rgb(&result.image, path, &PngConfig::default())
        .with_context(|| format!("Failed to write output image: {}", path.display()))?;

    Ok(OutputFile {
        path: path.display().to_string(),
        hash,
        size_bytes,
    })
}

/// Deletes a file at `path`; returns whether one was there.
fn remove_stale_output(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed stale output image");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e)
            .with_context(|| format!("Failed to remove stale output image: {}", path.display())),
    }
}

/// Run render with human-readable (colored) output
fn run_human(options: &RenderOptions) -> Result<ExitCode> {
    let run = execute(options).map_err(|e| e.error)?;
    let result = &run.result;

    println!("{}", "Pixelizing the following text:".cyan().bold());
    println!("{:?}", result.words);

    if !result.skipped.is_empty() {
        println!(
            "\n{} {} character(s) not in the glyph mapping were skipped:",
            "!".yellow(),
            result.skipped.len()
        );
        for skipped in &result.skipped {
            println!(
                "  {} {:?} in {:?}",
                "-".dimmed(),
                skipped.character,
                skipped.word
            );
        }
    }

    println!("\n{}", "Layout:".cyan().bold());
    println!("  {} {}", "Lines:".dimmed(), result.lines.len());
    println!(
        "  {} {}x{}",
        "Size:".dimmed(),
        result.width(),
        result.height()
    );

    match &run.output {
        Some(file) => println!(
            "  {} {} ({})",
            "Wrote:".dimmed(),
            file.path,
            &file.hash[..16]
        ),
        None => println!(
            "  {} {}",
            "!".yellow(),
            empty_page_message(run.removed_stale)
        ),
    }

    println!(
        "\n{} {}",
        "Total pixels required:".green().bold(),
        result.black_pixels
    );

    Ok(ExitCode::SUCCESS)
}

/// Run render with machine-readable JSON output
fn run_json(options: &RenderOptions) -> Result<ExitCode> {
    let output = json_report(options);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Builds the `--json` report for a render.
pub fn json_report(options: &RenderOptions) -> RenderOutput {
    match execute(options) {
        Ok(run) => RenderOutput::success(summarize(&run), warnings(&run)),
        Err(e) => RenderOutput::failure(vec![e.to_json()]),
    }
}

fn empty_page_message(removed_stale: bool) -> &'static str {
    if removed_stale {
        "Page is empty, no image written; removed the previous output image"
    } else {
        "Page is empty, no image written"
    }
}

/// Builds the JSON summary of a finished run.
pub fn summarize(run: &RenderRun) -> RenderSummary {
    RenderSummary {
        source_hash: run.input.source_hash.clone(),
        words: run.result.words.clone(),
        lines: run.result.lines.clone(),
        width: run.result.width(),
        height: run.result.height(),
        black_pixels: run.result.black_pixels,
        output: run.output.clone(),
    }
}

/// Non-fatal issues of a finished run.
pub fn warnings(run: &RenderRun) -> Vec<JsonWarning> {
    let mut warnings: Vec<JsonWarning> = run
        .result
        .skipped
        .iter()
        .map(|skipped| {
            JsonWarning::new(
                warning_codes::UNMAPPED_CHARACTER,
                format!(
                    "Character {:?} in word {:?} is not in the glyph mapping; skipped",
                    skipped.character, skipped.word
                ),
            )
        })
        .collect();

    if run.output.is_none() {
        warnings.push(JsonWarning::new(
            warning_codes::EMPTY_PAGE,
            empty_page_message(run.removed_stale),
        ));
    }

    warnings
}
