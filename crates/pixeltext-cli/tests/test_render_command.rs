//! End-to-end tests for the render command.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use image::{Rgb, RgbImage};
use pixeltext_cli::commands::json_output::{error_codes, warning_codes};
use pixeltext_cli::commands::render::{
    execute, json_report, run, summarize, warnings, RenderOptions,
};
use pretty_assertions::assert_eq;

/// A temporary project directory with glyphs, mapping and input text.
struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new(text: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let glyph_dir = dir.path().join("glyphs");
        std::fs::create_dir(&glyph_dir).unwrap();

        for (name, width) in [("a", 4), ("b", 4), ("l", 3)] {
            RgbImage::from_pixel(width, 8, Rgb([0, 0, 0]))
                .save(glyph_dir.join(format!("{}.png", name)))
                .unwrap();
        }
        std::fs::write(
            dir.path().join("mapping.json"),
            r#"{"a": "glyphs/a.png", "b": "glyphs/b.png", "l": "glyphs/l.png"}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("input.txt"), text).unwrap();

        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn options(&self, width: u32) -> RenderOptions {
        RenderOptions {
            path: self.path("input.txt"),
            width,
            mapping: self.path("mapping.json"),
            output: self.path("output.png"),
            json: false,
        }
    }
}

fn decode(path: &Path) -> RgbImage {
    image::open(path).unwrap().to_rgb8()
}

#[test]
fn test_render_writes_png() {
    let fixture = Fixture::new("ab\n");
    let run = execute(&fixture.options(80)).unwrap();

    let output = run.output.as_ref().expect("image should be written");
    assert_eq!(output.path, fixture.path("output.png").display().to_string());
    assert_eq!(output.hash.len(), 64);

    let image = decode(&fixture.path("output.png"));
    assert_eq!(image.dimensions(), (12, 9));
    assert_eq!(run.result.black_pixels, 64);
    assert_eq!(run.result.words, vec!["ab".to_string()]);
}

#[test]
fn test_render_wraps_lines() {
    let fixture = Fixture::new("abab abab abab");
    let run = execute(&fixture.options(25)).unwrap();

    // "abab" is 19px; 19 + 3 + 19 >= 25 so every word wraps.
    assert_eq!(run.result.lines.len(), 3);
    let image = decode(&fixture.path("output.png"));
    assert_eq!(image.height(), 3 * 9);
}

#[test]
fn test_render_is_deterministic() {
    let fixture = Fixture::new("ball lab\nab ba");
    let first = execute(&fixture.options(30)).unwrap();
    let first_bytes = std::fs::read(fixture.path("output.png")).unwrap();
    let second = execute(&fixture.options(30)).unwrap();
    let second_bytes = std::fs::read(fixture.path("output.png")).unwrap();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(
        first.output.unwrap().hash,
        second.output.unwrap().hash,
        "output hashes should match"
    );
}

#[test]
fn test_unknown_characters_become_warnings() {
    let fixture = Fixture::new("a?b zz");
    let run = execute(&fixture.options(80)).unwrap();

    let warnings = warnings(&run);
    assert_eq!(warnings.len(), 3);
    assert!(warnings
        .iter()
        .all(|w| w.code == warning_codes::UNMAPPED_CHARACTER));
    assert!(run.output.is_some());
}

#[test]
fn test_empty_text_writes_nothing() {
    let fixture = Fixture::new("\n");
    let run = execute(&fixture.options(80)).unwrap();

    assert!(run.output.is_none());
    assert!(!fixture.path("output.png").exists());
    let warnings = warnings(&run);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, warning_codes::EMPTY_PAGE);

    let summary = summarize(&run);
    assert_eq!(summary.width, 0);
    assert_eq!(summary.height, 9);
}

#[test]
fn test_empty_text_removes_previous_image() {
    let fixture = Fixture::new("ab");
    execute(&fixture.options(80)).unwrap();
    assert!(fixture.path("output.png").exists());

    std::fs::write(fixture.path("input.txt"), "??\n").unwrap();
    let run = execute(&fixture.options(80)).unwrap();

    assert!(run.output.is_none());
    assert!(run.removed_stale);
    assert!(
        !fixture.path("output.png").exists(),
        "an empty page must not leave the previous image behind"
    );
    let warnings = warnings(&run);
    let empty = warnings
        .iter()
        .find(|w| w.code == warning_codes::EMPTY_PAGE)
        .expect("empty page warning");
    assert!(empty.message.contains("removed the previous output image"));
}

#[test]
fn test_missing_mapping_is_fatal() {
    let fixture = Fixture::new("ab");
    let mut options = fixture.options(80);
    options.mapping = fixture.path("nope.json");

    let err = execute(&options).unwrap_err();
    assert_eq!(err.code, error_codes::MAPPING);
    assert!(!fixture.path("output.png").exists());
    assert!(run(&options).is_err(), "human mode surfaces the error");
}

#[test]
fn test_missing_glyph_file_is_fatal() {
    let fixture = Fixture::new("ab");
    std::fs::remove_file(fixture.path("glyphs/b.png")).unwrap();

    let err = execute(&fixture.options(80)).unwrap_err();
    assert_eq!(err.code, error_codes::GLYPH);
    assert!(!fixture.path("output.png").exists(), "no partial output");
}

#[test]
fn test_missing_input_is_fatal() {
    let fixture = Fixture::new("ab");
    let mut options = fixture.options(80);
    options.path = fixture.path("missing.txt");

    let err = execute(&options).unwrap_err();
    assert_eq!(err.code, error_codes::FILE_READ);
    assert_eq!(err.file, Some(fixture.path("missing.txt")));
}

#[test]
fn test_json_mode_reports_failure_as_output() {
    let fixture = Fixture::new("ab");
    let mut options = fixture.options(80);
    options.json = true;
    options.mapping = fixture.path("nope.json");

    let report = serde_json::to_value(json_report(&options)).unwrap();
    assert_eq!(report["success"], false);
    assert_eq!(report["errors"][0]["code"], error_codes::MAPPING);
    assert_eq!(
        report["errors"][0]["file"],
        fixture.path("nope.json").display().to_string()
    );
    assert!(report.get("result").is_none());

    // Failures are printed as JSON and turned into an exit code, not an Err.
    assert_eq!(run(&options).unwrap(), ExitCode::from(1));
}

#[test]
fn test_json_mode_success_payload() {
    let fixture = Fixture::new("a?b lab");
    let mut options = fixture.options(80);
    options.json = true;

    let report = serde_json::to_value(json_report(&options)).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["errors"], serde_json::json!([]));

    let warnings = report["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], warning_codes::UNMAPPED_CHARACTER);

    let result = &report["result"];
    assert_eq!(result["words"], serde_json::json!(["a?b", "lab"]));
    assert_eq!(result["lines"].as_array().unwrap().len(), 1);
    assert_eq!(result["height"], 9);
    assert_eq!(
        result["output"]["path"],
        fixture.path("output.png").display().to_string()
    );
    assert_eq!(result["output"]["hash"].as_str().unwrap().len(), 64);

    assert_eq!(run(&options).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_summary_serializes() {
    let fixture = Fixture::new("ab lab");
    let run = execute(&fixture.options(80)).unwrap();

    let json = serde_json::to_value(summarize(&run)).unwrap();
    assert_eq!(json["words"], serde_json::json!(["ab", "lab"]));
    assert_eq!(json["lines"][0]["words"], serde_json::json!(["ab", "lab"]));
    assert_eq!(json["height"], 9);
    assert_eq!(json["source_hash"].as_str().unwrap().len(), 64);
}
