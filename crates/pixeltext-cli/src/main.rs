//! pixeltext CLI - Render text into a pixel-glyph image
//!
//! Each character of the input is replaced by a small pre-drawn glyph image,
//! and the words are wrapped into lines no wider than `--width` pixels.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use pixeltext_cli::commands::render::{self, RenderOptions};
use pixeltext_cli::logging::init_logging;
use pixeltext_render::DEFAULT_MAX_WIDTH;

/// Converts text into a pixel-text representation as an image.
#[derive(Parser)]
#[command(name = "pixeltext")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// A file path to a .txt file containing text to pixelize
    #[arg(short, long)]
    path: PathBuf,

    /// The max width in pixels as an integer
    #[arg(short, long, default_value_t = DEFAULT_MAX_WIDTH)]
    width: u32,

    /// JSON file mapping each character to its glyph image
    #[arg(short, long, default_value = "mapping.json")]
    mapping: PathBuf,

    /// Where to write the rendered PNG
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,

    /// Log layout decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            path: self.path.clone(),
            width: self.width,
            mapping: self.mapping.clone(),
            output: self.output.clone(),
            json: self.json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match render::run(&cli.options()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
