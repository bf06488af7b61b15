//! # Token Test Utilities
//!
//! Shared test utilities for the governance bot token issuer.
//!
//! This crate provides:
//! - Deterministic RSA key fixtures (fixed keys for reproducible tests)
//! - PEM corruption helpers for key-format error paths
//! - Custom assertions (TokenAssertions trait) and an RS256 verifier
//!
//! ## Usage
//!
//! ```rust,ignore
//! use token_test_utils::*;
//!
//! #[test]
//! fn test_example() {
//!     let (public_pem, private_pem) = test_signing_key(1)?;
//!
//!     let token = issue_token(&config, private_pem.as_bytes(), &clock)?;
//!
//!     token
//!         .assert_valid_jwt()
//!         .assert_for_subject("test")
//!         .assert_lifetime(300)
//!         .assert_verifies_with(&public_pem);
//! }
//! ```

pub mod assertions;
pub mod crypto_fixtures;

// Re-export commonly used items
pub use assertions::*;
pub use crypto_fixtures::*;
