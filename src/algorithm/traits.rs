use crate::error::Result;
use crate::keys::Key;

/// Core algorithm trait that all JWT signature algorithms implement
///
/// Implementations check that the key variant fits the algorithm and report
/// [`Error::KeyTypeMismatch`](crate::Error::KeyTypeMismatch) otherwise.
pub trait Algorithm {
    /// The algorithm identifier (e.g., "HS256", "PS256")
    fn name(&self) -> &'static str;

    /// Sign the signing input (header.payload) and return the raw signature
    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>>;

    /// Verify a raw signature over the signing input
    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()>;
}

/// Type alias for boxed algorithm trait objects
pub type SignatureAlgorithm = Box<dyn Algorithm + Send + Sync>;

/// Get the signature algorithm for the given algorithm ID
pub fn get_algorithm(algorithm: &super::AlgorithmId) -> SignatureAlgorithm {
    match algorithm {
        super::AlgorithmId::HS256 => Box::new(super::hmac::HS256),
        super::AlgorithmId::HS384 => Box::new(super::hmac::HS384),
        super::AlgorithmId::HS512 => Box::new(super::hmac::HS512),

        super::AlgorithmId::RS256 => Box::new(super::rsa::RS256),
        super::AlgorithmId::RS384 => Box::new(super::rsa::RS384),
        super::AlgorithmId::RS512 => Box::new(super::rsa::RS512),

        super::AlgorithmId::PS256 => Box::new(super::rsa::PS256),
        super::AlgorithmId::PS384 => Box::new(super::rsa::PS384),
        super::AlgorithmId::PS512 => Box::new(super::rsa::PS512),

        super::AlgorithmId::ES256 => Box::new(super::ecdsa::ES256),
        super::AlgorithmId::ES384 => Box::new(super::ecdsa::ES384),
        super::AlgorithmId::ES512 => Box::new(super::ecdsa::ES512),
    }
}
