use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::path::Path;

fn readplan(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("readplan").unwrap();
    cmd.env("READPLAN_HOME", home)
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--today")
        .arg("2026-01-02");
    cmd
}

#[test]
fn test_today_shows_the_day() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Your word is a lamp to my feet"))
        .stdout(predicates::str::contains("Friday, January 2, 2026"))
        .stdout(predicates::str::contains("Day 2 of 90"))
        .stdout(predicates::str::contains("Genesis 3-4"))
        .stdout(predicates::str::contains("○ Chapter 3"))
        .stdout(predicates::str::contains("○ Chapter 4"));
}

#[test]
fn test_mark_persists_across_runs() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .args(["mark", "genesis", "3"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Genesis 3 marked as read"));

    readplan(temp_dir.path())
        .arg("today")
        .assert()
        .success()
        .stdout(predicates::str::contains("✓ Chapter 3"))
        .stdout(predicates::str::contains("○ Chapter 4"));

    readplan(temp_dir.path())
        .arg("progress")
        .assert()
        .success()
        .stdout(predicates::str::contains("1/4 chapters"));

    // Same chapter again flips it back
    readplan(temp_dir.path())
        .args(["mark", "Genesis", "3"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Genesis 3 marked as unread"));
}

#[test]
fn test_mark_on_another_day() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .args(["mark", "Genesis", "1", "--date", "2026-01-01"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Genesis 1 marked as read"));

    // Today's Genesis chapters are untouched
    readplan(temp_dir.path())
        .arg("progress")
        .assert()
        .success()
        .stdout(predicates::str::contains("0/4 chapters"))
        .stdout(predicates::str::contains("1/"));
}

#[test]
fn test_mark_outside_the_day_is_refused() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .args(["mark", "Exodus", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("is not part of the reading"));

    readplan(temp_dir.path())
        .args(["mark", "Genesis"])
        .assert()
        .failure();
}

#[test]
fn test_schedule_and_rest_day() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .arg("schedule")
        .assert()
        .success()
        .stdout(predicates::str::contains("Reading Schedule (90 days)"))
        .stdout(predicates::str::contains("▸ Fri, Jan 2"))
        .stdout(predicates::str::contains("Sun, Jan 4"))
        .stdout(predicates::str::contains("Sunday - Rest & Worship"));

    readplan(temp_dir.path())
        .args(["day", "2026-01-04"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Sunday School at 9am"))
        .stdout(predicates::str::contains("Chapter").not());
}

#[test]
fn test_day_by_position_and_unknown_date() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .args(["day", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Thursday, January 1, 2026"));

    readplan(temp_dir.path())
        .args(["day", "2027-06-01"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No reading for 2027-06-01 in the plan"))
        .stdout(predicates::str::contains("Friday, January 2, 2026"));

    readplan(temp_dir.path())
        .args(["day", "0"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Day numbers start at 1"));
}

#[test]
fn test_next_and_prev() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicates::str::contains("Saturday, January 3, 2026"));

    readplan(temp_dir.path())
        .arg("prev")
        .assert()
        .success()
        .stdout(predicates::str::contains("Thursday, January 1, 2026"));
}

#[test]
fn test_read_prints_locator() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .args(["read", "1", "John", "3"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "https://read.lsbible.org/?q=1%20John+3",
        ))
        .stdout(predicates::str::contains("--open"));
}

#[test]
fn test_theme_set_and_reload() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Theme set to dark"));

    readplan(temp_dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicates::str::contains("Theme: dark"));

    readplan(temp_dir.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Theme set to light"));
}

#[test]
fn test_config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .args(["config", "reader-url", "https://example.org/bible"])
        .assert()
        .success()
        .stdout(predicates::str::contains("reader-url set to https://example.org/bible"));

    readplan(temp_dir.path())
        .args(["config", "reader-url"])
        .assert()
        .success()
        .stdout(predicates::str::contains("https://example.org/bible"));

    readplan(temp_dir.path())
        .args(["read", "Ruth", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("https://example.org/bible?q=Ruth+1"));

    readplan(temp_dir.path())
        .args(["config", "reader-url", "ftp://nope"])
        .assert()
        .success()
        .stdout(predicates::str::contains("must be an http(s) URL"));

    readplan(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("reader-url = https://example.org/bible"))
        .stdout(predicates::str::contains("plan-dir = "));
}

#[test]
fn test_shell_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .arg("shell")
        .write_stdin("next\nmark Genesis 5\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Saturday, January 3, 2026"))
        .stdout(predicates::str::contains("Genesis 5 marked as read"));

    readplan(temp_dir.path())
        .args(["day", "2026-01-03"])
        .assert()
        .success()
        .stdout(predicates::str::contains("✓ Chapter 5"));
}

#[test]
fn test_help_and_about() {
    let temp_dir = tempfile::tempdir().unwrap();

    readplan(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Reading Commands:"))
        .stdout(predicates::str::contains("Progress Commands:"));

    readplan(temp_dir.path())
        .arg("about")
        .assert()
        .success()
        .stdout(predicates::str::contains("Unity Bible Church"))
        .stdout(predicates::str::contains("Legacy Standard Bible"));
}
