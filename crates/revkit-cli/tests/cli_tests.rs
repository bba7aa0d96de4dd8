//! End-to-end tests for the `revkit` binary.
//!
//! Each test spawns the compiled binary and inspects its exit status,
//! stdout and any written output file.

use std::path::Path;
use std::process::{Command, Output};

fn revkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_revkit"))
        .args(args)
        .env_remove("REVKIT_FORMAT")
        .env_remove("REVKIT_STG_KIND")
        .output()
        .expect("failed to spawn revkit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ============================================================================
// Text output
// ============================================================================

#[test]
fn test_tbs_text_output() {
    let output = revkit(&["tbs", "1", "0", "2", "3"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("// tbs: 2 qubits, 2 gates"), "got: {text}");
    assert!(text.contains("cx "));
    assert!(text.contains("x "));
}

#[test]
fn test_parity_accepts_pi_angles() {
    let output = revkit(&["parity", "01:pi/4", "10:pi/4", "11:-pi/4"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("// parity: 2 qubits"));
}

#[test]
fn test_diagonal_accepts_negative_angles() {
    let output = revkit(&["diagonal", "-0.5", "0", "pi"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("// diagonal: 2 qubits"));
}

#[test]
fn test_tbs_inverse_reverses_gates() {
    let output = revkit(&["tbs", "1", "0", "2", "3", "--inverse"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "// tbs_inverse: 2 qubits, 2 gates");
    assert_eq!(lines[1], "x q0;");
    assert_eq!(lines[2], "cx q1, q0;");
}

#[test]
fn test_version() {
    let output = revkit(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_oracle_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("and.json");

    let output = revkit(&[
        "oracle",
        "1000",
        "--kind",
        "pkrm",
        "--format",
        "json",
        "-o",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let json = read_json(&path);
    assert_eq!(json["netlist"]["name"], "oracle");
    assert_eq!(json["netlist"]["qubits"].as_array().unwrap().len(), 3);
    assert_eq!(json["gate_counts"]["ccx"], 1);
    assert_eq!(json["classical"], true);
    assert_eq!(json["phase_gates"], 0);
    assert!(json.get("stats").is_none());
}

#[test]
fn test_dbs_json_on_stdout() {
    let output = revkit(&["dbs", "0", "1", "3", "2", "--kind", "pprm", "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["netlist"]["name"], "dbs");
    assert!(json["gate_counts"].is_object());
}

#[test]
fn test_lhrs_reports_stats() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("half_adder.v");
    std::fs::write(
        &source,
        "module half_adder(a, b, s, c);
           input a, b;
           output s, c;
           assign s = a ^ b;
           assign c = a & b;
         endmodule",
    )
    .unwrap();
    let out = dir.path().join("half_adder.json");

    let output = revkit(&[
        "lhrs",
        source.to_str().unwrap(),
        "--format",
        "json",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json = read_json(&out);
    assert_eq!(json["netlist"]["name"], "lhrs");
    assert_eq!(json["stats"]["input_indexes"], serde_json::json!([0, 1]));
    assert_eq!(json["stats"]["output_indexes"].as_array().unwrap().len(), 2);
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn test_non_bijective_permutation_fails() {
    let output = revkit(&["tbs", "0", "0", "1", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn test_bad_diagonal_length_fails() {
    let output = revkit(&["diagonal", "0.1", "0.2"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_malformed_parity_term_fails() {
    let output = revkit(&["parity", "01=0.5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("BITS:ANGLE"));
}

#[test]
fn test_missing_verilog_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.v");
    let output = revkit(&["lhrs", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("File not found"));
}

#[test]
fn test_pprm_above_polarity_bound_fails() {
    let zeros = "0".repeat(1 << 13);
    let output = revkit(&["oracle", &zeros, "--kind", "pprm"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("pprm supports at most 12 variables"));
}

#[test]
fn test_unknown_kind_is_usage_error() {
    let output = revkit(&["oracle", "0110", "--kind", "esop"]);
    assert_eq!(output.status.code(), Some(2));
}
