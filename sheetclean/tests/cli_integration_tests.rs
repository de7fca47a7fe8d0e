// sheetclean/tests/cli_integration_tests.rs
//! Command-line integration tests for the `sheetclean` binary.
//!
//! Each test builds a small tree of exported HTML under a `tempfile`
//! directory, runs the binary through `assert_cmd`, and checks both the files
//! written and the log lines on stderr.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const EXPORT: &str = "<p>Do<span\nstyle='mso-spacerun:yes'>&nbsp;</span>re<o:p></o:p></p>";
const CLEANED: &str = "<p>Do<span style='color:white;'>&nbsp;</span>re</p>";

fn sheetclean() -> Command {
    let mut cmd = Command::cargo_bin("sheetclean").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("SHEETCLEAN_CODE_MAP");
    cmd
}

fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[test]
fn cleans_single_file_to_default_destination() -> Result<()> {
    let dir = tempdir()?;
    let src = dir.path().join("report.html");
    write(&src, EXPORT)?;

    sheetclean()
        .arg("--src-file")
        .arg(&src)
        .assert()
        .success()
        .stderr(predicate::str::contains("src file:"))
        .stderr(predicate::str::contains("report-new.html"));

    assert_eq!(fs::read_to_string(dir.path().join("report-new.html"))?, CLEANED);
    Ok(())
}

#[test]
fn cleans_single_file_to_explicit_destination() -> Result<()> {
    let dir = tempdir()?;
    let src = dir.path().join("archive");
    let dst = dir.path().join("cleaned.htm");
    write(&src, EXPORT)?;

    sheetclean()
        .arg("--src_file")
        .arg(&src)
        .arg("--dst_file")
        .arg(&dst)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&dst)?, CLEANED);
    assert!(!dir.path().join("archive-new").exists());
    Ok(())
}

#[test]
fn cleans_tree_to_default_destination() -> Result<()> {
    let dir = tempdir()?;
    let src = dir.path().join("a");
    write(&src.join("report.html"), EXPORT)?;
    write(&src.join("b").join("notes.htm"), "<o:p></o:p>notes")?;
    write(&src.join("b").join("image.png"), "png")?;

    sheetclean()
        .arg("--src-dir")
        .arg(&src)
        .assert()
        .success()
        .stderr(predicate::str::contains("dst dir:"));

    let dst = dir.path().join("a-new");
    assert_eq!(fs::read_to_string(dst.join("report.html"))?, CLEANED);
    assert_eq!(fs::read_to_string(dst.join("b").join("notes.htm"))?, "notes");
    assert!(!dst.join("b").join("image.png").exists());
    Ok(())
}

#[test]
fn file_and_tree_modes_run_in_one_invocation() -> Result<()> {
    let dir = tempdir()?;
    let src_file = dir.path().join("single.html");
    let src_dir = dir.path().join("tree");
    let dst_dir = dir.path().join("mirror");
    write(&src_file, EXPORT)?;
    write(&src_dir.join("page.HTML"), EXPORT)?;

    sheetclean()
        .args(["--src-file", src_file.to_str().unwrap()])
        .args(["--src-dir", src_dir.to_str().unwrap()])
        .args(["--dst-dir", dst_dir.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("single-new.html"))?, CLEANED);
    assert_eq!(fs::read_to_string(dst_dir.join("page.HTML"))?, CLEANED);
    Ok(())
}

#[test]
fn code_map_is_applied() -> Result<()> {
    let dir = tempdir()?;
    let src = dir.path().join("song.html");
    let map = dir.path().join("code_conv_map.json");
    write(&src, "&#150;&#151;<o:p></o:p>")?;
    write(&map, r#"{"150": 9833, "151": null}"#)?;

    sheetclean()
        .arg("--src-file")
        .arg(&src)
        .arg("--code-map")
        .arg(&map)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("song-new.html"))?, "&#9833;&#151;");
    Ok(())
}

// The default destination for the current directory, `-new`, lies inside it.
#[test]
fn cleans_current_directory_to_default_destination() -> Result<()> {
    let dir = tempdir()?;
    write(&dir.path().join("index.html"), EXPORT)?;
    write(&dir.path().join("songs").join("hymn.htm"), "<o:p></o:p>hymn")?;

    sheetclean()
        .current_dir(dir.path())
        .args(["--src-dir", "."])
        .assert()
        .success();

    let dst = dir.path().join("-new");
    assert_eq!(fs::read_to_string(dst.join("index.html"))?, CLEANED);
    assert_eq!(fs::read_to_string(dst.join("songs").join("hymn.htm"))?, "hymn");
    assert!(!dst.join("-new").exists());
    Ok(())
}

// No source flags is treated as a successful no-op rather than a usage error.
#[test]
fn no_source_is_a_no_op() -> Result<()> {
    let dir = tempdir()?;

    sheetclean()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing to clean"));

    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn missing_source_file_is_a_usage_error() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.html");

    sheetclean()
        .arg("--src-file")
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!dir.path().join("missing-new.html").exists());
    Ok(())
}

#[test]
fn directory_as_source_file_is_a_usage_error() -> Result<()> {
    let dir = tempdir()?;

    sheetclean()
        .arg("--src-file")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a file"));
    Ok(())
}

#[test]
fn file_as_destination_dir_is_a_usage_error() -> Result<()> {
    let dir = tempdir()?;
    let src = dir.path().join("tree");
    let taken = dir.path().join("taken");
    write(&src.join("page.html"), EXPORT)?;
    write(&taken, "x")?;

    sheetclean()
        .arg("--src-dir")
        .arg(&src)
        .arg("--dst-dir")
        .arg(&taken)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));
    Ok(())
}

#[test]
fn unwritable_destination_fails_the_run() -> Result<()> {
    let dir = tempdir()?;
    let src = dir.path().join("report.html");
    let dst = dir.path().join("no").join("such").join("dir").join("out.html");
    write(&src, EXPORT)?;

    sheetclean()
        .arg("--src-file")
        .arg(&src)
        .arg("--dst-file")
        .arg(&dst)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to clean file"));

    assert!(!dst.exists());
    Ok(())
}

#[test]
fn quiet_suppresses_logging() -> Result<()> {
    let dir = tempdir()?;
    let src = dir.path().join("report.html");
    write(&src, EXPORT)?;

    sheetclean()
        .arg("-q")
        .arg("--src-file")
        .arg(&src)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}
