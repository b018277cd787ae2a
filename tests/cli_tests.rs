use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rdc, setup_test_config, write_test_config};

#[test]
fn test_check_full_day_is_normal() {
    let cfg = setup_test_config("check_full_day");

    rdc()
        .args(["--config", &cfg, "check", "--in", "09:00", "--out", "18:00"])
        .assert()
        .success()
        .stdout(contains("480.0 min"))
        .stdout(contains("Attendance complete"))
        .stdout(contains("abnormal").not());
}

#[test]
fn test_check_reports_missing_ranges() {
    let cfg = setup_test_config("check_missing_ranges");

    rdc()
        .args([
            "--config",
            &cfg,
            "check",
            "--in",
            "09:15",
            "--out",
            "15:15",
            "--leave-start",
            "15:30",
            "--leave-end",
            "18:30",
        ])
        .assert()
        .success()
        .stdout(contains("465.0 min"))
        .stdout(contains("15.0 min"))
        .stdout(contains("abnormal"))
        .stdout(contains("15:15~15:30 (15分)"));
}

#[test]
fn test_check_accepts_fullwidth_colon() {
    let cfg = setup_test_config("check_fullwidth");

    rdc()
        .args(["--config", &cfg, "check", "--in", "09：45", "--out", "18：45"])
        .assert()
        .success()
        .stdout(contains("09:30~09:45 (15分)"));
}

#[test]
fn test_check_blank_input_warns() {
    let cfg = setup_test_config("check_blank");

    rdc()
        .args(["--config", &cfg, "check"])
        .assert()
        .success()
        .stdout(contains("Please enter at least one pair of times"));
}

#[test]
fn test_check_blank_input_json_is_warning_object() {
    let cfg = setup_test_config("check_blank_json");

    let out = rdc()
        .args(["--config", &cfg, "check", "--json"])
        .output()
        .expect("failed to run check --json");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(v["outcome"]["kind"], "warning");
    assert_eq!(v["missing_minutes"], 0.0);
    assert_eq!(v["missing_segments"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_check_abnormal_result_stays_on_stdout() {
    let cfg = setup_test_config("check_abnormal_stdout");

    rdc()
        .args(["--config", &cfg, "check", "--in", "09:45", "--out", "18:45"])
        .assert()
        .success()
        .stdout(contains("Attendance incomplete"))
        .stdout(contains("09:30~09:45 (15分)"))
        .stderr(predicates::str::is_empty());
}

#[test]
fn test_check_oversized_duty_length_is_config_error() {
    let cfg = write_test_config("check_huge_duty", "duty_length: 1000000000000h\n");

    rdc()
        .args(["--config", &cfg, "check", "--in", "09:00", "--out", "18:00"])
        .assert()
        .failure()
        .stderr(contains("duty_length"));
}

#[test]
fn test_check_single_sided_pair_warns() {
    let cfg = setup_test_config("check_single_sided");

    rdc()
        .args(["--config", &cfg, "check", "--in", "09:00"])
        .assert()
        .success()
        .stdout(contains("No valid time entered"));
}

#[test]
fn test_check_json_output() {
    let cfg = setup_test_config("check_json");

    let out = rdc()
        .args([
            "--config",
            &cfg,
            "check",
            "--in",
            "09:45",
            "--out",
            "18:45",
            "--date",
            "2025-10-01",
            "--json",
        ])
        .output()
        .expect("failed to run check --json");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(v["outcome"]["kind"], "duty_minutes");
    assert_eq!(v["outcome"]["value"], 465.0);
    assert_eq!(v["missing_minutes"], 15.0);
    assert_eq!(v["missing_segments"][0]["label"], "09:30~09:45 (15分)");
    assert_eq!(v["status"], "Abnormal");
    assert_eq!(v["window"]["start"], "2025-10-01T09:30:00");
}

#[test]
fn test_policy_flag_overrides_config() {
    let cfg = setup_test_config("check_policy_flag");

    rdc()
        .args([
            "--config",
            &cfg,
            "--policy",
            "strict-leave",
            "check",
            "--in",
            "09:15",
            "--out",
            "15:15",
            "--leave-start",
            "15:30",
            "--leave-end",
            "18:30",
        ])
        .assert()
        .success()
        .stdout(contains("450.0 min"))
        .stdout(contains("09:00~09:15 (15分)"));
}

#[test]
fn test_policy_from_config_file() {
    let cfg = write_test_config("check_policy_file", "policy: strict-leave\n");

    rdc()
        .args([
            "--config",
            &cfg,
            "check",
            "--in",
            "09:15",
            "--out",
            "15:15",
            "--leave-start",
            "15:30",
            "--leave-end",
            "18:30",
        ])
        .assert()
        .success()
        .stdout(contains("30.0 min"));
}

#[test]
fn test_verbose_prints_window() {
    let cfg = setup_test_config("check_verbose");

    rdc()
        .args([
            "--config", &cfg, "--verbose", "check", "--in", "09:15", "--out", "18:15",
        ])
        .assert()
        .success()
        .stdout(contains("Duty window: 09:15~18:15"))
        .stdout(contains("Coverage #1: 09:15~18:15"));
}

#[test]
fn test_invalid_date_fails() {
    let cfg = setup_test_config("check_bad_date");

    rdc()
        .args([
            "--config", &cfg, "check", "--in", "09:00", "--out", "18:00", "--date", "2025-13-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_broken_config_fails_check() {
    let cfg = write_test_config("check_broken_config", "policy: [unterminated\n");

    rdc()
        .args(["--config", &cfg, "check", "--in", "09:00", "--out", "18:00"])
        .assert()
        .failure()
        .stderr(contains("YAML error"));
}

#[test]
fn test_invalid_config_value_fails_check() {
    let cfg = write_test_config("check_bad_lunch", "lunch_window: 13:00-12:00\n");

    rdc()
        .args(["--config", &cfg, "check", "--in", "09:00", "--out", "18:00"])
        .assert()
        .failure()
        .stderr(contains("lunch_window"));
}

#[test]
fn test_policy_command_lists_presets() {
    let cfg = setup_test_config("policy_command");

    rdc()
        .args(["--config", &cfg, "policy"])
        .assert()
        .success()
        .stdout(contains("12:00-13:00"))
        .stdout(contains("09:30"))
        .stdout(contains("canonical"))
        .stdout(contains("strict-leave"));
}

#[test]
fn test_config_init_and_print() {
    let cfg = setup_test_config("config_init_print");

    rdc()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    assert!(std::path::Path::new(&cfg).exists());

    rdc()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("lunch_window"))
        .stdout(contains("policy: canonical"));
}

#[test]
fn test_config_init_repairs_broken_file() {
    let cfg = write_test_config("config_init_broken", "policy: [unterminated\n");

    rdc()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .success();

    rdc()
        .args(["--config", &cfg, "check", "--in", "09:00", "--out", "18:00"])
        .assert()
        .success()
        .stdout(contains("480.0 min"));
}
