//! # tkn - Mint and Verify JSON Web Tokens
//!
//! > Build, sign and verify JWTs from a YAML or JSON description.
//!
//! **tkn** turns a small description of a token (headers and payload) into a
//! signed JWT in compact JWS serialization, and verifies such tokens again.
//! It is meant for development and testing: creating tokens for a local API,
//! reproducing a token from a bug report, or checking what a service accepts.
//!
//! ## Overview
//!
//! Minting a token runs through four steps, each with its own error:
//!
//! ```text
//! validate_params(alg, secret, key_path, description_path)
//!     │                           ──► UnknownAlgorithm / InvalidPath /
//!     ▼                               MissingSecret / MissingKeyPath
//! Token::new(options) / TokenBuilder
//!     │                           ──► ConstructionRejected
//!     ▼
//! Token::sign(key, alg)           ──► SignFailed
//!     │
//!     ▼
//! SignedToken ── parse(token, key, alg) ──► VerificationFailed
//! ```
//!
//! Parameter validation never touches the filesystem, so a request can be
//! rejected before any file is read or key is parsed. Verification reports a
//! single [`Error::VerificationFailed`] for every failure: a wrong key, a
//! different algorithm and a corrupted segment look the same to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use tkn::*;
//!
//! validate_params("HS256", "s3cr3t-value", "", "token.yaml")?;
//!
//! let token = Token::new([
//!     with_claims([("iss", "admin"), ("sub", "1337")]),
//!     with_headers([("kid", "1234")]),
//! ])?;
//!
//! let key = Key::symmetric("s3cr3t-value");
//! let signed = token.sign(&key, AlgorithmId::HS256)?;
//!
//! let verified = parse(&signed, &key, AlgorithmId::HS256)?;
//! assert_eq!(verified.claims(), token.claims());
//! # Ok::<(), tkn::Error>(())
//! ```
//!
//! ## Algorithm Support
//!
//! All algorithms implement a common `Algorithm` trait:
//!
//! - **HMAC** (shared secret): HS256, HS384, HS512
//! - **RSASSA-PKCS1-v1_5**: RS256, RS384, RS512
//! - **RSASSA-PSS**: PS256, PS384, PS512
//! - **ECDSA**: ES256 (P-256), ES384 (P-384), ES512 (P-521)
//!
//! Use [`needs_secret`] or [`AlgorithmId::key_class`] to tell which kind of
//! key material an algorithm signs with.
//!
//! ## Keys
//!
//! ```ignore
//! // HMAC
//! Key::symmetric(b"your-256-bit-secret")
//!
//! // RSA / ECDSA private keys from PEM files
//! keys::pem::load_private_key("private.pem", AlgorithmId::RS256)?
//!
//! // Public half for verification, as SPKI PEM
//! keys::pem::public_key_pem(&key)?
//! ```
//!
//! ## Registered Names
//!
//! Registered claims and headers must carry the type RFC 7519 and RFC 7515
//! give them (`sub` is a string, `exp` a number, `crit` an array of strings,
//! and so on). A description with `sub: 1337` is rejected at construction.
//! Temporal claims are carried as given and are not checked against a clock.
//!
//! ## Security
//!
//! ### Algorithm Confusion Prevention
//!
//! Verification takes the expected algorithm from the caller. A token whose
//! `alg` header names another algorithm (including `"none"`) is rejected.
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)

// Core modules
pub mod error;
mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Parameter validation
pub mod validate;

// Token types
pub mod description;
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

// Minting and verification flow
pub use description::TokenDescription;
pub use token::{parse, with_claims, with_headers, SignedToken, Token, TokenBuilder, TokenOption};
pub use validate::validate_params;

// Supporting types
pub use algorithm::{needs_secret, AlgorithmId, KeyClass};
pub use error::{Error, Result};
pub use keys::{EcdsaCurve, Key};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use rsa::pkcs8::EncodePrivateKey;

    fn rsa_key() -> Key {
        let mut rng = rand::thread_rng();
        let private = rsa::RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate RSA key");
        let der = private.to_pkcs8_der().expect("Failed to encode PKCS#8");
        Key::rsa_pkcs8(der.as_bytes()).expect("Failed to load key")
    }

    fn public_of(key: &Key) -> Key {
        Key::rsa_public(key.rsa_public_der().unwrap().to_vec())
    }

    fn scenario_token() -> Token {
        Token::new([
            with_claims([("iss", "admin"), ("sub", "1337")]),
            with_headers([("kid", "1234")]),
        ])
        .expect("Construction failed")
    }

    #[test]
    fn test_full_flow_hmac() {
        validate_params("HS256", "s3cr3t-value", "", "token.yaml").expect("Validation failed");

        let token = scenario_token();
        let key = Key::symmetric("s3cr3t-value");
        let signed = token.sign(&key, AlgorithmId::HS256).expect("Sign failed");

        let parsed = parse(&signed, &key, AlgorithmId::HS256).expect("Parse failed");
        assert_eq!(parsed.claims(), token.claims());
        assert_eq!(parsed.key_id(), Some("1234"));

        let wrong = Key::symmetric("wrong");
        assert_eq!(
            parse(&signed, &wrong, AlgorithmId::HS256),
            Err(Error::VerificationFailed)
        );
    }

    #[test]
    fn test_full_flow_rsa() {
        validate_params("RS256", "", "private.pem", "token.yaml").expect("Validation failed");

        let token = scenario_token();
        let key = rsa_key();
        let signed = token.sign(&key, AlgorithmId::RS256).expect("Sign failed");

        let parsed = signed
            .verify(&public_of(&key), AlgorithmId::RS256)
            .expect("Verification failed");
        assert_eq!(parsed.claims(), token.claims());

        let unrelated = public_of(&rsa_key());
        assert_eq!(
            signed.verify(&unrelated, AlgorithmId::RS256),
            Err(Error::VerificationFailed)
        );
    }

    #[test]
    fn test_description_flow() {
        let description = TokenDescription::from_yaml(
            "headers:\n  kid: \"1234\"\npayload:\n  iss: admin\n  sub: \"1337\"\n",
        )
        .unwrap();

        let token = description.into_token().unwrap();
        assert_eq!(token, scenario_token());
    }

    #[test]
    fn test_rejected_token_is_never_signed() {
        let result = Token::new([with_claims([("sub", 1337)])]);
        assert!(matches!(result, Err(Error::ConstructionRejected(_))));
    }
}
