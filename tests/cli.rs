//! End-to-end tests for the selpg binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[allow(deprecated)]
fn selpg() -> Command {
    let mut cmd = Command::cargo_bin("selpg").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("SELPG_PRINT_COMMAND");
    cmd
}

fn numbered_lines(range: std::ops::RangeInclusive<usize>) -> String {
    range.map(|i| format!("line {}\n", i)).collect()
}

fn write_input(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_selects_pages_from_file() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "in.txt", &numbered_lines(1..=100));

    selpg()
        .args(["-s", "2", "-e", "3", "-l", "10", input.as_str()])
        .assert()
        .success()
        .stdout(numbered_lines(11..=30))
        .stderr("");
}

#[test]
fn test_reads_stdin_with_default_page_length() {
    selpg()
        .args(["-s2", "-e2"])
        .write_stdin(numbered_lines(1..=100))
        .assert()
        .success()
        .stdout(numbered_lines(41..=80));
}

#[test]
fn test_single_partial_page() {
    selpg()
        .args(["-s", "1", "-e", "1", "-l", "10"])
        .write_stdin(numbered_lines(1..=5))
        .assert()
        .success()
        .stdout(numbered_lines(1..=5))
        .stderr("");
}

#[test]
fn test_start_page_past_input() {
    selpg()
        .args(["-s", "4", "-e", "5", "-l", "10"])
        .write_stdin(numbered_lines(1..=25))
        .assert()
        .success()
        .stdout("")
        .stderr(
            predicate::str::contains(
                "selpg: startPage (4) greater than total pages (3), no output written",
            )
            .and(predicate::str::contains("selpg:").count(1)),
        );
}

#[test]
fn test_end_page_past_input() {
    selpg()
        .args(["-s", "3", "-e", "5", "-l", "10"])
        .write_stdin(numbered_lines(1..=25))
        .assert()
        .success()
        .stdout(numbered_lines(21..=25))
        .stderr(
            predicate::str::contains(
                "endPage (5) greater than total pages (3), less output than expected",
            )
            .and(predicate::str::contains("selpg:").count(1)),
        );
}

#[test]
fn test_form_feed_pages() {
    selpg()
        .args(["-s", "1", "-e", "5", "-f"])
        .write_stdin("one\n\x0ctwo\n\x0cthree\n\x0c")
        .assert()
        .success()
        .stdout("one\n\x0ctwo\n\x0cthree\n\x0c")
        .stderr(predicate::str::contains(
            "endPage (5) greater than total pages (3)",
        ));
}

#[test]
fn test_form_feed_single_page() {
    selpg()
        .args(["-s", "2", "-e", "2", "-f"])
        .write_stdin("one\n\x0ctwo\nstill two\n\x0cthree")
        .assert()
        .success()
        .stdout("two\nstill two\n\x0c")
        .stderr("");
}

#[test]
fn test_output_is_repeatable() {
    let input = numbered_lines(1..=57);
    let first = selpg()
        .args(["-s2", "-e4", "-l7"])
        .write_stdin(input.clone())
        .output()
        .unwrap();
    let second = selpg()
        .args(["-s2", "-e4", "-l7"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert!(!first.stdout.is_empty());
}

#[test]
fn test_destination_receives_output() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("printer.out");

    selpg()
        .args(["-s", "1", "-e", "1", "-l", "3", "-d"])
        .arg(&dest)
        .write_stdin(numbered_lines(1..=9))
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&dest).unwrap(), numbered_lines(1..=3));
}

#[test]
fn test_unusable_print_command() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("printer.out");

    selpg()
        .env("SELPG_PRINT_COMMAND", "selpg-no-such-print-command")
        .args(["-s", "1", "-e", "1", "-d"])
        .arg(&dest)
        .write_stdin("a\n")
        .assert()
        .code(8)
        .stderr(predicate::str::contains("can't open pipe"));
}

#[test]
fn test_not_enough_arguments() {
    selpg()
        .arg("-s1")
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            predicate::str::contains("not enough arguments")
                .and(predicate::str::contains("USAGE")),
        );
}

#[test]
fn test_start_page_must_be_first() {
    selpg()
        .args(["-e", "2", "-s", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("1st arg should be -s startPage"));
}

#[test]
fn test_invalid_start_page() {
    selpg()
        .args(["-s", "0", "-e", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid start page 0"));
}

#[test]
fn test_end_page_must_be_second() {
    selpg()
        .args(["-s", "1", "-l", "5", "-e", "2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("2nd arg should be -e endPage"));
}

#[test]
fn test_end_before_start() {
    selpg()
        .args(["-s", "3", "-e", "2"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("invalid end page 2"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    selpg()
        .args(["-s", "1", "-e", "1"])
        .arg(&missing)
        .assert()
        .code(6)
        .stdout("")
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_unparsable_page_number() {
    selpg()
        .args(["-s", "one", "-e", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid value 'one'"));
}

#[test]
fn test_help() {
    selpg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
