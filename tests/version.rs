//! Integration test: Verify binary prints correct version and fails fast on bad input

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_histr"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn binary_exits_with_error_for_missing_history_file() {
    let missing = std::env::temp_dir().join("histr_version_test_missing_history");
    let _ = std::fs::remove_file(&missing);
    let log_dir = std::env::temp_dir().join("histr_version_test_logs");

    let config = std::env::temp_dir().join("histr_version_test_config.toml");
    std::fs::write(
        &config,
        format!(
            "log_file_path = {:?}\n",
            log_dir.join("histr.log").display().to_string()
        ),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_histr"))
        .arg("--config")
        .arg(&config)
        .arg("--history")
        .arg(&missing)
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("FileNotFound"),
        "Expected a file-not-found message, got: {}",
        stderr
    );

    let _ = std::fs::remove_file(&config);
    let _ = std::fs::remove_dir_all(&log_dir);
}
