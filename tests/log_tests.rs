//! Integration tests for logging and browsing entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{init_journal, log_mood, moodlog_cmd};

#[test]
fn test_log_and_show() {
    let temp = init_journal();
    log_mood(&temp, &["4", "--date", "2024-03-15", "--note", "long walk"]);

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["show", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-15"))
        .stdout(predicate::str::contains("4 🙂 Good"))
        .stdout(predicate::str::contains("\"long walk\""));
}

#[test]
fn test_log_same_day_updates() {
    let temp = init_journal();
    log_mood(&temp, &["2", "--date", "2024-03-15"]);

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "5", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Updated"));

    let stored = fs::read_to_string(temp.path().join(".moodlog/entries.json")).unwrap();
    assert_eq!(stored.matches("2024-03-15").count(), 1);
    assert!(stored.contains("\"rating\": 5"));
}

#[test]
fn test_log_today_and_today_command() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mood logged today"));

    log_mood(&temp, &["3"]);

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 😐 Okay"));
}

#[test]
fn test_log_invalid_rating() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "7"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Ratings go from 1 to 5"));
}

#[test]
fn test_log_future_date_rejected() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "3", "--date", "tomorrow"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("in the future"));
}

#[test]
fn test_log_invalid_color() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "3", "--color", "blue"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("#RRGGBB"));
}

#[test]
fn test_list_newest_first() {
    let temp = init_journal();
    log_mood(&temp, &["2", "--date", "2024-03-01"]);
    log_mood(&temp, &["5", "--date", "2024-03-09"]);
    log_mood(&temp, &["3", "--date", "2024-03-05"]);

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .args(["list", "-n", "2"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2024-03-09"));
    assert!(lines[1].starts_with("2024-03-05"));
}

#[test]
fn test_list_empty() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mood entries found"));
}

#[test]
fn test_delete() {
    let temp = init_journal();
    log_mood(&temp, &["4", "--date", "2024-03-15"]);

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["delete", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry for 2024-03-15"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["show", "2024-03-15"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No mood entry for 2024-03-15"));
}

#[test]
fn test_invalid_date_reference() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["show", "someday"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
