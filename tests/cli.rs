//! End-to-end tests driving the compiled binary.

mod common;

use std::path::Path;
use std::process::Command;

fn numgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_numgen"))
}

fn png_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "png"))
        .count()
}

#[test]
fn sequence_command_writes_digit_named_file() {
    let data_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    common::write_glyph_source(data_dir.path(), 1);

    let status = numgen()
        .args(["sequence", "--sequence", "123"])
        .args(["--min-space", "2", "--max-space", "4", "--image-width", "60"])
        .arg("--output-path")
        .arg(out_dir.path())
        .arg("--data-path")
        .arg(data_dir.path())
        .args(["--seed", "7"])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_dir.path().join("123.png").exists());
}

#[test]
fn phone_numbers_command_generates_requested_count() {
    let data_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    common::write_glyph_source(data_dir.path(), 1);

    let status = numgen()
        .args(["phone-numbers", "--num-images", "5"])
        .args(["--min-space", "2", "--max-space", "4", "--image-width", "100"])
        .arg("--output-path")
        .arg(out_dir.path())
        .arg("--data-path")
        .arg(data_dir.path())
        .args(["--seed", "7"])
        .status()
        .unwrap();

    assert!(status.success());
    // Distinct seeded draws may collide on the same number, so at least
    // one file per distinct draw and never more than requested.
    let count = png_count(out_dir.path());
    assert!((1..=5).contains(&count));
}

#[test]
fn zero_image_count_exits_non_zero_without_outputs() {
    let data_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    common::write_glyph_source(data_dir.path(), 1);

    let status = numgen()
        .args(["phone-numbers", "--num-images", "0"])
        .args(["--min-space", "2", "--max-space", "4", "--image-width", "100"])
        .arg("--output-path")
        .arg(out_dir.path())
        .arg("--data-path")
        .arg(data_dir.path())
        .status()
        .unwrap();

    assert!(!status.success());
    assert_eq!(png_count(out_dir.path()), 0);
}

#[test]
fn invalid_sequence_exits_non_zero() {
    let data_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    common::write_glyph_source(data_dir.path(), 1);

    let status = numgen()
        .args(["sequence", "--sequence", "12a"])
        .args(["--min-space", "2", "--max-space", "4", "--image-width", "60"])
        .arg("--output-path")
        .arg(out_dir.path())
        .arg("--data-path")
        .arg(data_dir.path())
        .status()
        .unwrap();

    assert!(!status.success());
    assert_eq!(png_count(out_dir.path()), 0);
}

#[test]
fn missing_glyph_source_exits_non_zero() {
    let out_dir = tempfile::tempdir().unwrap();

    let status = numgen()
        .args(["sequence", "--sequence", "123"])
        .args(["--min-space", "2", "--max-space", "4", "--image-width", "60"])
        .arg("--output-path")
        .arg(out_dir.path())
        .args(["--data-path", "/nonexistent/mnist"])
        .status()
        .unwrap();

    assert!(!status.success());
}
