//! Deterministic cryptographic fixtures for testing
//!
//! Provides fixed RSA keypairs and deliberately broken key files.
//! The same seed always yields the same keypair.

use base64::engine::general_purpose;
use base64::Engine;
use thiserror::Error;

const SEED1_PRIVATE_PKCS1: &str = include_str!("fixtures/rsa_2048_seed1_pkcs1.pem");
const SEED1_PRIVATE_PKCS8: &str = include_str!("fixtures/rsa_2048_seed1_pkcs8.pem");
const SEED1_PUBLIC: &str = include_str!("fixtures/rsa_2048_seed1_public.pem");
const SEED2_PRIVATE_PKCS1: &str = include_str!("fixtures/rsa_2048_seed2_pkcs1.pem");
const SEED2_PUBLIC: &str = include_str!("fixtures/rsa_2048_seed2_public.pem");
const UNDERSIZED_RSA_PKCS1: &str = include_str!("fixtures/rsa_1024_pkcs1.pem");
const EC_P256_PKCS8: &str = include_str!("fixtures/ec_p256_pkcs8.pem");

/// Test fixture error type
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("No RSA fixture for seed {0} (available: 1, 2)")]
    UnknownSeed(u8),
}

/// Get a deterministic 2048-bit RSA signing key for testing.
///
/// # Arguments
/// * `seed` - Fixture selector (1 or 2); different seeds are different keypairs
///
/// # Returns
/// * `Ok((public_key_pem, private_key_pem))` - SPKI public key, PKCS#1 private key
///
/// # Example
/// ```rust,ignore
/// let (public_pem, private_pem) = test_signing_key(1)?;
/// let (other_public_pem, _) = test_signing_key(2)?;
/// assert_ne!(public_pem, other_public_pem);
/// ```
pub fn test_signing_key(seed: u8) -> Result<(String, String), FixtureError> {
    match seed {
        1 => Ok((SEED1_PUBLIC.to_string(), SEED1_PRIVATE_PKCS1.to_string())),
        2 => Ok((SEED2_PUBLIC.to_string(), SEED2_PRIVATE_PKCS1.to_string())),
        other => Err(FixtureError::UnknownSeed(other)),
    }
}

/// Seed 1 keypair with the private key in PKCS#8 (`BEGIN PRIVATE KEY`) form.
pub fn test_signing_key_pkcs8() -> (String, String) {
    (SEED1_PUBLIC.to_string(), SEED1_PRIVATE_PKCS8.to_string())
}

/// A 1024-bit RSA key, below the 2048-bit minimum.
pub fn test_undersized_rsa_key_pem() -> String {
    UNDERSIZED_RSA_PKCS1.to_string()
}

/// A P-256 EC private key in PKCS#8 form: valid PEM, wrong algorithm.
pub fn test_ec_private_key_pem() -> String {
    EC_P256_PKCS8.to_string()
}

/// Keep only the first `keep_lines` lines, dropping the END marker.
pub fn truncate_pem(pem: &str, keep_lines: usize) -> String {
    let mut out: String = pem
        .lines()
        .take(keep_lines)
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

/// Keep the BEGIN/END markers but only `keep_body_lines` lines of base64.
///
/// Every full PEM body line is 64 characters, so the result still decodes as
/// base64; only the DER inside is cut short.
pub fn truncate_pem_body(pem: &str, keep_body_lines: usize) -> String {
    let lines: Vec<&str> = pem.lines().collect();
    let begin = lines.first().copied().unwrap_or_default();
    let end = lines
        .iter()
        .rev()
        .find(|l| l.starts_with("-----END "))
        .copied()
        .unwrap_or_default();
    let body: Vec<&str> = lines
        .iter()
        .skip(1)
        .take_while(|l| !l.starts_with("-----END "))
        .take(keep_body_lines)
        .copied()
        .collect();

    format!("{}\n{}\n{}\n", begin, body.join("\n"), end)
}

/// Well-formed PEM armor with the given label around bytes that are not a key.
pub fn garbage_body_pem(label: &str) -> String {
    let body = general_purpose::STANDARD
        .encode(b"this is definitely not DER encoded RSA key material, just filler");
    format!("-----BEGIN {label}-----\n{body}\n-----END {label}-----\n")
}
