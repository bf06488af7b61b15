//! Expiry behaviour checked with an injected clock
//!
//! Tokens are issued "in the past" through `FixedClock` and then checked by a
//! standard verifier running on the real wall clock.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use token_issuer::clock::FixedClock;
use token_issuer::config::IssuerConfig;
use token_issuer::crypto::Claims;
use token_issuer::issue_token;
use token_test_utils::{test_signing_key, verify_token};

fn issue_at(seconds_ago: i64) -> Result<(String, String), anyhow::Error> {
    let (public_pem, private_pem) = test_signing_key(1)?;
    let clock = FixedClock::new(Utc::now() - Duration::seconds(seconds_ago));
    let token = issue_token(&IssuerConfig::default(), private_pem.as_bytes(), &clock)?;
    Ok((token, public_pem))
}

/// A token issued more than 300 seconds ago is expired.
#[test]
fn test_token_older_than_lifetime_is_expired() -> Result<(), anyhow::Error> {
    let (token, public_pem) = issue_at(301)?;

    let result = verify_token::<Claims>(&token, &public_pem, "governance-backend");
    assert!(
        matches!(result.map_err(|e| e.into_kind()), Err(ErrorKind::ExpiredSignature)),
        "Token issued 301 seconds ago should be rejected as expired"
    );

    Ok(())
}

/// Well past the lifetime the verdict does not change.
#[test]
fn test_token_issued_an_hour_ago_is_expired() -> Result<(), anyhow::Error> {
    let (token, public_pem) = issue_at(3600)?;

    let result = verify_token::<Claims>(&token, &public_pem, "governance-backend");
    assert!(matches!(
        result.map_err(|e| e.into_kind()),
        Err(ErrorKind::ExpiredSignature)
    ));

    Ok(())
}

/// A token still inside its 5 minute window verifies.
#[test]
fn test_token_within_lifetime_is_accepted() -> Result<(), anyhow::Error> {
    let (token, public_pem) = issue_at(250)?;

    let claims: Claims = verify_token(&token, &public_pem, "governance-backend")?;
    assert_eq!(claims.exp - claims.iat, 300);

    Ok(())
}

/// A shorter configured lifetime expires sooner.
#[test]
fn test_short_lifetime_expires_sooner() -> Result<(), anyhow::Error> {
    let (public_pem, private_pem) = test_signing_key(1)?;
    let clock = FixedClock::new(Utc::now() - Duration::seconds(120));
    let config = IssuerConfig::default().with_token_lifetime_seconds(60);

    let token = issue_token(&config, private_pem.as_bytes(), &clock)?;

    let result = verify_token::<Claims>(&token, &public_pem, "governance-backend");
    assert!(matches!(
        result.map_err(|e| e.into_kind()),
        Err(ErrorKind::ExpiredSignature)
    ));

    Ok(())
}
