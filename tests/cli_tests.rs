#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.env_remove("SPRINT_CALENDAR_START")
        .env_remove("SPRINT_CALENDAR_LENGTH")
        .env_remove("SPRINT_CALENDAR_ITERATIONS")
        .env_remove("SPRINT_CALENDAR_MODE")
        .write_stdin(script.to_string())
        .assert()
}

#[test]
fn cli_generates_default_schedule_on_start() {
    run_cli("quit\n")
        .success()
        .stdout(str_contains("Generated 147 events."));
}

#[test]
fn cli_shows_single_sprint() {
    run_cli("sprint 5\nquit\n")
        .success()
        .stdout(str_contains("Sprint 5 (code)"))
        .stdout(str_contains("2024-03-20 10:00:00"));
}

#[test]
fn cli_rejects_malformed_start_date() {
    run_cli("start 2024-13-01\nconfig\nquit\n")
        .success()
        .stdout(str_contains("malformed input"))
        .stdout(str_contains("Start date         : 2024-02-29"));
}

#[test]
fn cli_count_and_csv_export() {
    run_cli("count 1\ncsv\nquit\n")
        .success()
        .stdout(str_contains("Generated 3 events."))
        .stdout(str_contains("title,color,kind,start,end,all_day"));
}

#[test]
fn cli_keeps_previous_length_on_zero() {
    run_cli("length 0\nconfig\nquit\n")
        .success()
        .stdout(str_contains("invalid cadence"))
        .stdout(str_contains("Sprint length days : 14"));
}

#[test]
fn cli_prints_options_for_mode() {
    run_cli("options multimonth\nquit\n")
        .success()
        .stdout(str_contains("multiMonthYear"));
}
