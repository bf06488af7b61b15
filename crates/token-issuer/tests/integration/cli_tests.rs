//! End-to-end tests of the `gov-bot-token` binary
//!
//! Each test runs the compiled binary in a scratch working directory so the
//! relative `private.pem` lookup is exercised for real.

use std::path::Path;
use std::process::{Command, Output};
use token_test_utils::{test_signing_key, truncate_pem, TokenAssertions};

fn run_in(dir: &Path) -> Result<Output, anyhow::Error> {
    let output = Command::new(env!("CARGO_BIN_EXE_gov-bot-token"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_prints_label_and_token() -> Result<(), anyhow::Error> {
    let (public_pem, private_pem) = test_signing_key(1)?;
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("private.pem"), &private_pem)?;

    let output = run_in(dir.path())?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Generated JWT:\neyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9."));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout should be exactly two lines: {:?}", lines);
    assert_eq!(lines.first().copied(), Some("Generated JWT:"));

    let token = lines
        .get(1)
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("missing token line"))?;
    token
        .assert_valid_jwt()
        .assert_for_subject("test")
        .assert_audience("governance-backend")
        .assert_issuer("gov-bot")
        .assert_lifetime(300)
        .assert_jti_is_uuid_v4()
        .assert_verifies_with(&public_pem);

    Ok(())
}

#[test]
fn test_missing_key_file_exits_nonzero() -> Result<(), anyhow::Error> {
    let dir = tempfile::tempdir()?;

    let output = run_in(dir.path())?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "No token may be printed on failure");

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("Failed to read private key file"),
        "stderr should name the failed step: {}",
        stderr
    );
    assert_eq!(
        stderr.matches("Failed to read private key file").count(),
        1,
        "the failure should be reported once: {}",
        stderr
    );
    Ok(())
}

#[test]
fn test_malformed_key_exits_nonzero() -> Result<(), anyhow::Error> {
    let (_, private_pem) = test_signing_key(1)?;
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("private.pem"), truncate_pem(&private_pem, 6))?;

    let output = run_in(dir.path())?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "No token may be printed on failure");

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(
        stderr.matches("Invalid private key format").count(),
        1,
        "the failure should be reported once: {}",
        stderr
    );
    assert!(stderr.lines().any(|line| line.starts_with("Error: Invalid private key format")));
    Ok(())
}

#[test]
fn test_arguments_do_not_change_output_shape() -> Result<(), anyhow::Error> {
    let (_, private_pem) = test_signing_key(1)?;
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("private.pem"), &private_pem)?;

    let output = Command::new(env!("CARGO_BIN_EXE_gov-bot-token"))
        .current_dir(dir.path())
        .arg("--ignored-flag")
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?.lines().count(), 2);
    Ok(())
}
