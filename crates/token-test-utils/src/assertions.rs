//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions for issued tokens and a standard RS256
//! verifier to check them against a public key.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// JWT header structure
#[derive(Debug, Deserialize)]
struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

/// JWT claims structure
#[derive(Debug, Deserialize)]
struct JwtClaims {
    pub sub: String,
    pub aud: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

fn decode_part<T: DeserializeOwned>(token: &str, index: usize, what: &str) -> T {
    let part = token
        .split('.')
        .nth(index)
        .unwrap_or_else(|| panic!("JWT is missing its {}", what));
    let bytes = URL_SAFE_NO_PAD
        .decode(part)
        .unwrap_or_else(|e| panic!("Failed to base64 decode JWT {}: {:?}", what, e));
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("Failed to parse JWT {} JSON: {:?}", what, e))
}

fn claims_of(token: &str) -> JwtClaims {
    decode_part(token, 1, "payload")
}

/// Verify an RS256 token the way a relying party would.
///
/// Signature, `exp` (with zero leeway) and `aud` are checked.
pub fn verify_token<T: DeserializeOwned>(
    token: &str,
    public_key_pem: &str,
    audience: &str,
) -> Result<T, jsonwebtoken::errors::Error> {
    let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.leeway = 0;
    validation.set_audience(&[audience]);
    validation.set_required_spec_claims(&["exp", "iat", "aud", "iss", "sub"]);

    decode::<T>(token, &decoding_key, &validation).map(|data| data.claims)
}

/// Decode the payload without verifying the signature.
pub fn decode_payload(token: &str) -> serde_json::Value {
    decode_part(token, 1, "payload")
}

/// Custom assertions for issued tokens
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_jwt()
///     .assert_for_subject("test")
///     .assert_lifetime(300)
///     .assert_verifies_with(&public_pem);
/// ```
pub trait TokenAssertions {
    /// Assert that the token is a three-part RS256 JWT with all claims present
    fn assert_valid_jwt(&self) -> &Self;

    /// Assert that the token is for the specified subject
    fn assert_for_subject(&self, subject: &str) -> &Self;

    /// Assert the `aud` claim
    fn assert_audience(&self, audience: &str) -> &Self;

    /// Assert the `iss` claim
    fn assert_issuer(&self, issuer: &str) -> &Self;

    /// Assert that `exp - iat` equals the given number of seconds
    fn assert_lifetime(&self, seconds: i64) -> &Self;

    /// Assert that the token was issued at the given Unix time
    fn assert_issued_at(&self, iat: i64) -> &Self;

    /// Assert that `jti` is a canonical lowercase hyphenated UUID v4
    fn assert_jti_is_uuid_v4(&self) -> &Self;

    /// Assert that the signature verifies against the public key
    fn assert_verifies_with(&self, public_key_pem: &str) -> &Self;
}

impl TokenAssertions for String {
    fn assert_valid_jwt(&self) -> &Self {
        let parts: Vec<_> = self.split('.').collect();
        assert_eq!(
            parts.len(),
            3,
            "JWT must have 3 parts (header.payload.signature), got {}",
            parts.len()
        );
        assert!(!parts[2].is_empty(), "JWT signature must not be empty");

        let header: JwtHeader = decode_part(self, 0, "header");
        assert_eq!(header.alg, "RS256", "Expected RS256 algorithm");
        assert_eq!(header.typ, "JWT", "Expected JWT type");

        let _claims = claims_of(self);

        self
    }

    fn assert_for_subject(&self, subject: &str) -> &Self {
        let claims = claims_of(self);
        assert_eq!(
            claims.sub, subject,
            "Expected subject '{}', got '{}'",
            subject, claims.sub
        );
        self
    }

    fn assert_audience(&self, audience: &str) -> &Self {
        let claims = claims_of(self);
        assert_eq!(
            claims.aud, audience,
            "Expected audience '{}', got '{}'",
            audience, claims.aud
        );
        self
    }

    fn assert_issuer(&self, issuer: &str) -> &Self {
        let claims = claims_of(self);
        assert_eq!(
            claims.iss, issuer,
            "Expected issuer '{}', got '{}'",
            issuer, claims.iss
        );
        self
    }

    fn assert_lifetime(&self, seconds: i64) -> &Self {
        let claims = claims_of(self);
        assert_eq!(
            claims.exp - claims.iat,
            seconds,
            "Expected exp - iat == {}, got exp={} iat={}",
            seconds,
            claims.exp,
            claims.iat
        );
        self
    }

    fn assert_issued_at(&self, iat: i64) -> &Self {
        let claims = claims_of(self);
        assert_eq!(claims.iat, iat, "Expected iat {}, got {}", iat, claims.iat);
        self
    }

    fn assert_jti_is_uuid_v4(&self) -> &Self {
        let claims = claims_of(self);
        let parsed = uuid::Uuid::parse_str(&claims.jti)
            .unwrap_or_else(|e| panic!("jti '{}' is not a UUID: {}", claims.jti, e));
        assert_eq!(
            parsed.get_version_num(),
            4,
            "jti '{}' is not a version 4 UUID",
            claims.jti
        );
        assert_eq!(
            claims.jti,
            parsed.hyphenated().to_string(),
            "jti must be canonical lowercase hyphenated form"
        );
        self
    }

    fn assert_verifies_with(&self, public_key_pem: &str) -> &Self {
        let claims = claims_of(self);
        let result = verify_token::<serde_json::Value>(self, public_key_pem, &claims.aud);
        assert!(
            result.is_ok(),
            "Token failed RS256 verification: {:?}",
            result.err()
        );
        self
    }
}
