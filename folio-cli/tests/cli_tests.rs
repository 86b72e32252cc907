//! Integration tests for the Folio CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Create a text file for testing
fn create_test_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Run `folio split --json` on `content` and return the page list file
fn split_to_pages(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let input = create_test_file(dir, "chapter.txt", content);
    let output = Command::cargo_bin("folio")
        .unwrap()
        .args(["split", "--json", input.to_str().unwrap()])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    create_test_file(dir, "pages.json", &stdout)
}

fn parse_pages(stdout: &[u8]) -> Vec<serde_json::Value> {
    let json: serde_json::Value =
        serde_json::from_slice(stdout).expect("Output should be valid JSON");
    json.as_array().expect("Output should be a page list").clone()
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("reflow"))
        .stdout(predicate::str::contains("compact"))
        .stdout(predicate::str::contains("batch"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_reflow_help() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["reflow", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replace one page"))
        .stdout(predicate::str::contains("--page"))
        .stdout(predicate::str::contains("--paper"));
}

#[test]
fn test_papers() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("papers")
        .assert()
        .success()
        .stdout(predicate::str::contains("a4"))
        .stdout(predicate::str::contains("1400"))
        .stdout(predicate::str::contains("novel"));
}

#[test]
fn test_unknown_paper() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "page.txt", "content");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["overflow", input.to_str().unwrap(), "--paper", "tabloid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown paper size"));
}

#[test]
fn test_split_start_past_last_page_number() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "chapter.txt", "one---pagebreak---two");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["split", input.to_str().unwrap(), "--start", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot number 2 pages"));
}

#[test]
fn test_measure() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "page.txt", "안녕하 hello");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["measure", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:  4"));
}

#[test]
fn test_measure_strip_markup_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "page.html", "<p>안녕하 <em>hello</em></p>");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    let output = cmd
        .args(["measure", "--strip-markup", "--json", input.to_str().unwrap()])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["words"], 4);
    assert_eq!(json["status"], "draft");
}

#[test]
fn test_measure_stdin() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["measure", "-"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:  2"));
}

#[test]
fn test_split_manual_breaks() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(
        &temp_dir,
        "chapter.txt",
        "페이지1---pagebreak---페이지2---pagebreak---페이지3",
    );

    let mut cmd = Command::cargo_bin("folio").unwrap();
    let output = cmd
        .args(["split", "--json", "--start", "3", input.to_str().unwrap()])
        .assert()
        .success();

    let pages = parse_pages(&output.get_output().stdout);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0]["content"], "페이지1");
    assert_eq!(pages[0]["page_number"], 3);
    assert_eq!(pages[2]["page_number"], 5);
}

#[test]
fn test_split_rejects_page_zero() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "chapter.txt", "text");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["split", "--start", "0", input.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_split_nonexistent_file() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["split", "/nonexistent/chapter.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_split_then_merge() {
    let temp_dir = TempDir::new().unwrap();
    let text = "First paragraph.\n\nSecond paragraph.";
    let pages = split_to_pages(&temp_dir, text);
    let merged = temp_dir.path().join("merged.txt");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args([
        "merge",
        pages.to_str().unwrap(),
        "--output",
        merged.to_str().unwrap(),
    ])
    .assert()
    .success();

    assert_eq!(fs::read_to_string(&merged).unwrap(), text);
}

#[test]
fn test_merge_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let pages = create_test_file(&temp_dir, "pages.json", "not json");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["merge", pages.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse page list"));
}

#[test]
fn test_overflow_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "page.txt", &"가".repeat(1500));

    let mut cmd = Command::cargo_bin("folio").unwrap();
    let output = cmd
        .args(["overflow", "--json", "--paper", "a4", input.to_str().unwrap()])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["paper"], "a4");
    assert_eq!(json["is_overflow"], true);
    assert_eq!(json["overflow_amount"], 100);
    assert_eq!(json["blocks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_reflow_splits_overflowing_page() {
    let temp_dir = TempDir::new().unwrap();
    let pages = split_to_pages(&temp_dir, "one---pagebreak---two---pagebreak---three");
    let para = "나".repeat(500);
    let content = create_test_file(&temp_dir, "edit.txt", &format!("{para}\n\n{para}"));

    let mut cmd = Command::cargo_bin("folio").unwrap();
    let output = cmd
        .args([
            "reflow",
            pages.to_str().unwrap(),
            "--page",
            "2",
            "--content",
            content.to_str().unwrap(),
            "--paper",
            "novel",
            "--chapter-id",
            "12345678-1234-1234-1234-123456789abc",
        ])
        .assert()
        .success();

    let pages = parse_pages(&output.get_output().stdout);
    let numbers: Vec<u64> = pages
        .iter()
        .map(|p| p["page_number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert_eq!(pages[3]["content"], "three");
    assert_eq!(pages[0]["chapter_id"], "12345678-1234-1234-1234-123456789abc");
}

#[test]
fn test_reflow_out_of_range() {
    let temp_dir = TempDir::new().unwrap();
    let pages = split_to_pages(&temp_dir, "one---pagebreak---two");
    let content = create_test_file(&temp_dir, "edit.txt", "x");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args([
        "reflow",
        pages.to_str().unwrap(),
        "--page",
        "9",
        "--content",
        content.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_compact() {
    let temp_dir = TempDir::new().unwrap();
    let pages = split_to_pages(
        &temp_dir,
        "짧은 내용 1---pagebreak------pagebreak---짧은 내용 2",
    );

    let mut cmd = Command::cargo_bin("folio").unwrap();
    let output = cmd
        .args(["compact", pages.to_str().unwrap(), "--paper", "a4"])
        .assert()
        .success();

    let pages = parse_pages(&output.get_output().stdout);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0]["content"], "짧은 내용 1\n\n짧은 내용 2");
}

#[test]
fn test_stats_json() {
    let temp_dir = TempDir::new().unwrap();
    let pages = split_to_pages(&temp_dir, "hello world---pagebreak---");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    let output = cmd
        .args(["stats", "--json", pages.to_str().unwrap()])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["page_count"], 2);
    assert_eq!(json["total_words"], 2);
    assert_eq!(json["empty_pages"], 1);
}

#[test]
fn test_batch_missing_output_dir() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["batch", "/some/input/dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output-dir"));
}

#[test]
fn test_batch_invalid_jobs() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args([
        "batch",
        "/some/input/dir",
        "--output-dir",
        "/some/output/dir",
        "--jobs",
        "0",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_batch_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("input");
    let output_dir = temp_dir.path().join("output");

    fs::create_dir_all(&input_dir).unwrap();

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args([
        "batch",
        input_dir.to_str().unwrap(),
        "--output-dir",
        output_dir.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("No chapter files"));
}

#[test]
fn test_batch_with_files() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("input");
    let output_dir = temp_dir.path().join("output");

    fs::create_dir_all(&input_dir).unwrap();

    fs::write(input_dir.join("ch1.txt"), "Chapter one.\n\nMore text.").unwrap();
    fs::write(input_dir.join("ch2.md"), "a---pagebreak---b").unwrap();
    fs::write(input_dir.join("cover.png"), [0u8, 1, 2]).unwrap();

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args([
        "batch",
        input_dir.to_str().unwrap(),
        "--output-dir",
        output_dir.to_str().unwrap(),
        "--jobs",
        "2",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Chapters: 2"))
    .stdout(predicate::str::contains("Pages:    3"));

    let ch2 = fs::read_to_string(output_dir.join("ch2.pages.json")).unwrap();
    assert_eq!(parse_pages(ch2.as_bytes()).len(), 2);
    assert!(!output_dir.join("cover.pages.json").exists());
}

#[test]
fn test_verbose_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "chapter.txt", "Content");

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["--verbose", "split", input.to_str().unwrap()])
        .assert()
        .success();
}
