use std::path::PathBuf;
use thiserror::Error;

/// Key file read when no other path is configured, relative to the working directory.
pub const DEFAULT_KEY_PATH: &str = "private.pem";

pub const DEFAULT_SUBJECT: &str = "test";

pub const DEFAULT_AUDIENCE: &str = "governance-backend";

pub const DEFAULT_ISSUER: &str = "gov-bot";

/// Default token lifetime in seconds (5 minutes).
///
/// The backend tracks `jti` values for the same window to reject replays, so
/// the two must stay aligned.
pub const DEFAULT_TOKEN_LIFETIME_SECONDS: i64 = 300;

pub const MIN_TOKEN_LIFETIME_SECONDS: i64 = 1;

/// Upper bound on the token lifetime (1 hour).
pub const MAX_TOKEN_LIFETIME_SECONDS: i64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerConfig {
    pub key_path: PathBuf,
    pub subject: String,
    pub audience: String,
    pub issuer: String,
    pub token_lifetime_seconds: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Claim value must not be empty: {0}")]
    EmptyValue(String),

    #[error("Invalid token lifetime: {0}")]
    InvalidLifetime(String),
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            key_path: PathBuf::from(DEFAULT_KEY_PATH),
            subject: DEFAULT_SUBJECT.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            issuer: DEFAULT_ISSUER.to_string(),
            token_lifetime_seconds: DEFAULT_TOKEN_LIFETIME_SECONDS,
        }
    }
}

impl IssuerConfig {
    pub fn with_key_path(mut self, key_path: impl Into<PathBuf>) -> Self {
        self.key_path = key_path.into();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    pub fn with_token_lifetime_seconds(mut self, seconds: i64) -> Self {
        self.token_lifetime_seconds = seconds;
        self
    }

    /// Check claim values and lifetime before anything is signed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (claim, value) in [
            ("sub", &self.subject),
            ("aud", &self.audience),
            ("iss", &self.issuer),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue(claim.to_string()));
            }
        }

        if !(MIN_TOKEN_LIFETIME_SECONDS..=MAX_TOKEN_LIFETIME_SECONDS)
            .contains(&self.token_lifetime_seconds)
        {
            return Err(ConfigError::InvalidLifetime(format!(
                "{} seconds (must be {}-{})",
                self.token_lifetime_seconds, MIN_TOKEN_LIFETIME_SECONDS, MAX_TOKEN_LIFETIME_SECONDS
            )));
        }

        Ok(())
    }
}
