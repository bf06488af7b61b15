use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, IssuerConfig};
use crate::crypto::{self, Claims, RsaSigningKey};
use crate::errors::IssuerError;
use secrecy::ExposeSecret;
use tracing::instrument;
use uuid::Uuid;

/// Build a fresh claims set stamped with the clock's current time.
///
/// `exp` is always `iat + config.token_lifetime_seconds` and `jti` is a new
/// random UUID v4 on every call.
///
/// # Errors
///
/// Returns `IssuerError::Config` if `exp` does not fit in an `i64`.
pub fn build_claims<C: Clock>(config: &IssuerConfig, clock: &C) -> Result<Claims, IssuerError> {
    let now = clock.unix_timestamp();
    let exp = now.checked_add(config.token_lifetime_seconds).ok_or_else(|| {
        ConfigError::InvalidLifetime(format!(
            "{} seconds overflows the expiry timestamp",
            config.token_lifetime_seconds
        ))
    })?;

    Ok(Claims {
        sub: config.subject.clone(),
        aud: config.audience.clone(),
        iss: config.issuer.clone(),
        iat: now,
        exp,
        jti: Uuid::new_v4().to_string(),
    })
}

/// Issue a signed RS256 token from in-memory key material.
///
/// Performs no I/O: the key bytes and time source are supplied by the caller.
#[instrument(skip_all)]
pub fn issue_token<C: Clock>(
    config: &IssuerConfig,
    private_key_pem: &[u8],
    clock: &C,
) -> Result<String, IssuerError> {
    config.validate()?;
    sign_with_validated_config(config, private_key_pem, clock)
}

fn sign_with_validated_config<C: Clock>(
    config: &IssuerConfig,
    private_key_pem: &[u8],
    clock: &C,
) -> Result<String, IssuerError> {
    let signing_key = RsaSigningKey::from_pem(private_key_pem)?;
    let claims = build_claims(config, clock)?;

    let token = crypto::sign_jwt(&claims, &signing_key)?;

    tracing::info!(
        target: "token_service",
        jti = %claims.jti,
        iat = claims.iat,
        exp = claims.exp,
        lifetime_seconds = config.token_lifetime_seconds,
        "Issued token"
    );

    Ok(token)
}

/// Read the key file named by `config` and issue a token.
#[instrument(skip_all, fields(key_path = %config.key_path.display()))]
pub fn generate_jwt_with<C: Clock>(config: &IssuerConfig, clock: &C) -> Result<String, IssuerError> {
    config.validate()?;

    let private_key = crypto::read_private_key_file(&config.key_path)?;
    sign_with_validated_config(config, private_key.expose_secret(), clock)
}

/// Issue a token with the default configuration: key from `private.pem` in the
/// working directory, `sub = "test"`, `aud = "governance-backend"`,
/// `iss = "gov-bot"`, valid for 300 seconds from now.
pub fn generate_jwt() -> Result<String, IssuerError> {
    generate_jwt_with(&IssuerConfig::default(), &SystemClock)
}
