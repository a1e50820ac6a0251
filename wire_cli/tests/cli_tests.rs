//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Build command for the wire-calc binary.
fn wire_calc() -> Command {
    cargo_bin_cmd!("wire-calc")
}

fn forty_amp_load(cmd: &mut Command) -> &mut Command {
    cmd.arg("load")
        .args(["--description", "Subpanel feed"])
        .args(["--amps", "40"])
        .args(["--voltage", "240"])
        .args(["--length", "120"])
        .args(["--temp", "86"])
}

#[test]
fn test_cli_help() {
    let mut cmd = wire_calc();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("voltage-drop"));
}

#[test]
fn test_cli_version() {
    let mut cmd = wire_calc();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_load_report() {
    let mut cmd = wire_calc();
    forty_amp_load(&mut cmd);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#8 AWG Copper, THWN-2"))
        .stdout(predicate::str::contains("1-inch (Schedule 40 PVC or EMT)"))
        .stdout(predicate::str::contains("50A"))
        .stdout(predicate::str::contains("3.12%"));
}

#[test]
fn test_cli_load_json() {
    let mut cmd = wire_calc();
    forty_amp_load(&mut cmd).args(["--format", "json"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tool"], "wire_cli");
    assert!(json["generated_at"].is_string());
    assert_eq!(json["complete"], true);
    assert_eq!(json["result"]["type"], "Load");
    assert_eq!(json["result"]["min_ampacity_a"], 50.0);
    assert_eq!(json["result"]["breaker_a"], 50);
    assert_eq!(json["result"]["run"]["gauge"], "8");
}

#[test]
fn test_cli_horsepower_three_phase() {
    let mut cmd = wire_calc();

    cmd.arg("load")
        .args(["--description", "Compressor"])
        .args(["--hp", "7.5"])
        .args(["--voltage", "240"])
        .args(["--phase", "three"])
        .args(["--length", "50"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("25.91 A"))
        .stdout(predicate::str::contains("5 Total (3 Hots, 1 Neutral, 1 Ground)"));
}

#[test]
fn test_cli_dc_load() {
    let mut cmd = wire_calc();

    cmd.arg("load")
        .args(["--description", "Battery inverter"])
        .args(["--kw", "2.4"])
        .args(["--voltage", "48"])
        .arg("--dc")
        .args(["--length", "10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 Total (1 Hot, 1 Ground)"));
}

#[test]
fn test_cli_load_requires_one_quantity() {
    let mut cmd = wire_calc();

    cmd.arg("load")
        .args(["--description", "Heater"])
        .args(["--amps", "10"])
        .args(["--kw", "2"])
        .args(["--voltage", "240"])
        .args(["--length", "20"]);

    cmd.assert().failure();
}

#[test]
fn test_cli_invalid_input_lists_every_error() {
    let mut cmd = wire_calc();

    cmd.arg("load")
        .args(["--description", ""])
        .args(["--amps", "-5"])
        .args(["--voltage", "240"])
        .args(["--length", "20"])
        .args(["--temp", "150"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("description"))
        .stderr(predicate::str::contains("Value must be positive"))
        .stderr(predicate::str::contains("60–140°F"));
}

#[test]
fn test_cli_invalid_input_json() {
    let mut cmd = wire_calc();

    cmd.arg("pv")
        .args(["--system-watts", "10000"])
        .args(["--panel-watts", "400"])
        .args(["--strings", "0"])
        .args(["--combiner-to-inverter", "50"])
        .args(["--inverter-to-panel", "100"])
        .args(["--ac-voltage", "240"])
        .args(["--format", "json"]);

    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["errors"][0]["type"], "InvalidInput");
    assert_eq!(json["errors"][0]["details"]["field"], "num_strings");
}

#[test]
fn test_cli_pv_report() {
    let mut cmd = wire_calc();

    cmd.arg("pv")
        .args(["--system-watts", "10000"])
        .args(["--panel-watts", "400"])
        .args(["--strings", "2"])
        .args(["--combiner-to-inverter", "50"])
        .args(["--inverter-to-panel", "100"])
        .args(["--ac-voltage", "240"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Panels per string       = 13"))
        .stdout(predicate::str::contains("11.76 A"))
        .stdout(predicate::str::contains("60A 2-Pole"));
}

#[test]
fn test_cli_out_of_range_still_succeeds() {
    let mut cmd = wire_calc();

    cmd.arg("load")
        .args(["--description", "Service"])
        .args(["--amps", "400"])
        .args(["--voltage", "480"])
        .args(["--phase", "three"])
        .args(["--length", "100"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn test_cli_tables() {
    let mut cmd = wire_calc();

    cmd.arg("tables");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4/0"))
        .stdout(predicate::str::contains("NEC Table 310.16"))
        .stdout(predicate::str::contains("≤  500 A   2 AWG"))
        .stdout(predicate::str::contains(">  500 A   1/0 AWG"));
}

#[test]
fn test_cli_tables_json() {
    let mut cmd = wire_calc();

    cmd.args(["tables", "--format", "json"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["gauges"].as_array().unwrap().len(), 13);
    assert_eq!(json["breakers"][0], 15);
    assert_eq!(json["ground_fallback"], "1/0");
}

#[test]
fn test_cli_pv_rejects_too_many_strings() {
    let mut cmd = wire_calc();

    cmd.arg("pv")
        .args(["--system-watts", "1000000000000"])
        .args(["--panel-watts", "1"])
        .args(["--strings", "4294967295"])
        .args(["--combiner-to-inverter", "50"])
        .args(["--inverter-to-panel", "100"])
        .args(["--ac-voltage", "240"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("num_strings"));
}

#[test]
fn test_cli_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "output": "Json", "voltage_drop_limit_percent": 5.0 }}"#).unwrap();

    let mut cmd = wire_calc();
    forty_amp_load(&mut cmd).arg("--settings").arg(file.path());

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["voltage_drop_limit_percent"], 5.0);
    assert_eq!(json["voltage_drop_ok"], true);
}

#[test]
fn test_cli_missing_settings_file() {
    let mut cmd = wire_calc();
    forty_amp_load(&mut cmd).args(["--settings", "/nonexistent/wire-calc.json"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("File error"));
}
