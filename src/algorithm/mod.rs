//! Signing algorithms and their classification
mod traits;

pub mod ecdsa;
pub mod hmac;
pub mod rsa;

pub use traits::{get_algorithm, Algorithm, SignatureAlgorithm};

use crate::error::{Error, Result};

/// Kind of key material an algorithm needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Shared secret bytes (HMAC)
    Secret,

    /// Private/public key pair (RSA, ECDSA)
    Asymmetric,
}

/// Algorithm identifier as written in the `alg` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,

    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,

    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,

    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,

    /// RSASSA-PSS with SHA-256
    PS256,

    /// RSASSA-PSS with SHA-384
    PS384,

    /// RSASSA-PSS with SHA-512
    PS512,

    /// ECDSA with P-256 and SHA-256
    ES256,

    /// ECDSA with P-384 and SHA-384
    ES384,

    /// ECDSA with P-521 and SHA-512
    ES512,
}

impl AlgorithmId {
    /// Every supported algorithm, symmetric ones first
    pub const ALL: [AlgorithmId; 12] = [
        AlgorithmId::HS256,
        AlgorithmId::HS384,
        AlgorithmId::HS512,
        AlgorithmId::RS256,
        AlgorithmId::RS384,
        AlgorithmId::RS512,
        AlgorithmId::PS256,
        AlgorithmId::PS384,
        AlgorithmId::PS512,
        AlgorithmId::ES256,
        AlgorithmId::ES384,
        AlgorithmId::ES512,
    ];

    /// Parse an algorithm name
    ///
    /// Matching is exact and case-sensitive; uppercase user input first.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",
            AlgorithmId::RS256 => "RS256",
            AlgorithmId::RS384 => "RS384",
            AlgorithmId::RS512 => "RS512",
            AlgorithmId::PS256 => "PS256",
            AlgorithmId::PS384 => "PS384",
            AlgorithmId::PS512 => "PS512",
            AlgorithmId::ES256 => "ES256",
            AlgorithmId::ES384 => "ES384",
            AlgorithmId::ES512 => "ES512",
        }
    }

    /// Key material this algorithm signs with
    pub const fn key_class(&self) -> KeyClass {
        match self {
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512 => KeyClass::Secret,
            _ => KeyClass::Asymmetric,
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub const fn is_symmetric(&self) -> bool {
        matches!(self.key_class(), KeyClass::Secret)
    }

    /// Check if algorithm is asymmetric (RSA/ECDSA)
    pub const fn is_asymmetric(&self) -> bool {
        !self.is_symmetric()
    }
}

impl std::str::FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AlgorithmId::from_str(s)
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Evaluate if a given algorithm name requires a secret string
///
/// Unknown names are not secret algorithms.
pub fn needs_secret(algorithm: &str) -> bool {
    AlgorithmId::from_str(algorithm).is_ok_and(|alg| alg.is_symmetric())
}
