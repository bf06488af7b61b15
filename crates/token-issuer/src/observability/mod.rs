//! Logging setup for the issuer binary.
//!
//! # Privacy by Default
//!
//! Crypto and service functions use `#[instrument(skip_all)]` and record only
//! allow-listed fields:
//! - **SAFE**: claim lifetime, `jti`, key encoding, modulus size
//! - **NEVER**: `sub`, key bytes, the signed token
//!
//! All output goes to stderr. stdout is reserved for the token itself.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_DIRECTIVES: &str = "token_issuer=info,gov_bot_token=info";

/// Build the log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_DIRECTIVES`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVES.into())
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
