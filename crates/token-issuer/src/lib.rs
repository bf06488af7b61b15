//! Governance bot token issuer library
//!
//! Issues short-lived RS256 JWTs that the `gov-bot` client presents to the
//! `governance-backend` service.
//!
//! # Modules
//!
//! - `clock` - Time source used to stamp `iat`/`exp`
//! - `config` - Issuer configuration (key path, claim values, lifetime)
//! - `crypto` - Claims, private key loading and JWT signing
//! - `errors` - Error types
//! - `observability` - Logging setup
//! - `services` - Token issuance

pub mod clock;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod observability;
pub mod services;

pub use errors::IssuerError;
pub use services::token_service::{generate_jwt, generate_jwt_with, issue_token};
