//! Integration tests for period summaries

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::{init_journal, log_mood, moodlog_cmd};

#[test]
fn test_month_summary() {
    let temp = init_journal();
    log_mood(&temp, &["5", "--date", "2024-01-01", "--note", "new year"]);
    log_mood(&temp, &["1", "--date", "2024-01-08"]);

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["summary", "month", "--date", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("January 2024\n"))
        .stdout(predicate::str::contains("Week 1  █████  5 😄 Great  \"new year\""))
        .stdout(predicate::str::contains("Week 2  █░░░░  1 😞 Terrible"))
        .stdout(predicate::str::contains("Week 3  ░░░░░  -"))
        .stdout(predicate::str::contains("Week 5"))
        .stdout(predicate::str::contains("Average: 3.0/5  Highest: 5  Lowest: 1  Rated: 2"))
        .stdout(predicate::str::contains("Logged 2 of 31 days (6%)"))
        .stdout(predicate::str::contains("previous: 2023-12-15"))
        .stdout(predicate::str::contains("next:     2024-02-15"));
}

#[test]
fn test_week_summary_lists_every_day() {
    let temp = init_journal();
    log_mood(&temp, &["4", "--date", "2024-03-13"]);

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .args(["summary", "week", "--date", "2024-03-15"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("Mar 10 - Mar 16, 2024\n"));
    for day in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        assert!(stdout.contains(&format!("{}  ", day)), "missing {}", day);
    }
    assert!(stdout.contains("Wed  ████░  4 🙂 Good"));
}

#[test]
fn test_year_summary_back() {
    let temp = init_journal();
    log_mood(&temp, &["2", "--date", "2023-02-01"]);
    log_mood(&temp, &["5", "--date", "2023-02-20"]);

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["summary", "year", "--date", "2024-07-01", "--back", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2023\n"))
        .stdout(predicate::str::contains("Feb  ████░  4 🙂 Good"))
        .stdout(predicate::str::contains("Dec  ░░░░░  -"));
}

#[test]
fn test_summary_current_week_has_no_next() {
    let temp = init_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("(current)"))
        .stdout(predicate::str::contains("No moods logged in this period"))
        .stdout(predicate::str::contains("next:").not());
}

#[test]
fn test_summary_invalid_period() {
    let temp = init_journal();

    for period in ["fortnight", "day"] {
        moodlog_cmd()
            .current_dir(temp.path())
            .args(["summary", period])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Valid periods: week, month, year"));
    }
}

#[test]
fn test_summary_too_far_back() {
    let temp = init_journal();

    for (period, back) in [("year", "400000000"), ("week", "20000000")] {
        moodlog_cmd()
            .current_dir(temp.path())
            .args(["summary", period, "--date", "2024-03-15", "--back", back])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Out of range"))
            .stderr(predicate::str::contains("--back"));
    }
}
