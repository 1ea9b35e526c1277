//! Key material for signing and verification
//!
//! A [`Key`] is either a shared secret (HMAC) or an asymmetric key (RSA,
//! ECDSA). Private key pairs sign and verify; public keys only verify. The
//! variant is matched against the algorithm when signing or verifying.

pub mod pem;

use std::sync::Arc;

use aws_lc_rs::signature::{
    EcdsaKeyPair, EcdsaSigningAlgorithm, KeyPair, RsaKeyPair, ECDSA_P256_SHA256_FIXED_SIGNING,
    ECDSA_P384_SHA384_FIXED_SIGNING, ECDSA_P521_SHA512_FIXED_SIGNING,
};

use crate::algorithm::{AlgorithmId, KeyClass};
use crate::error::{Error, Result};

/// A key that can be used to sign or verify a token
#[derive(Debug, Clone)]
pub enum Key {
    /// Symmetric key for HMAC algorithms
    Symmetric(SymmetricKey),

    /// Asymmetric key for RSA/ECDSA algorithms
    Asymmetric(AsymmetricKey),
}

impl Key {
    /// Create a symmetric key from bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.into()))
    }

    /// Create an RSA key pair from a DER-encoded PKCS#8 document
    pub fn rsa_pkcs8(der: &[u8]) -> Result<Self> {
        let pair = RsaKeyPair::from_pkcs8(der)
            .map_err(|e| Error::KeyRejected(format!("RSA PKCS#8 key: {e}")))?;
        Ok(Key::Asymmetric(AsymmetricKey::RsaPrivate(
            RsaPrivateKey::new(pair),
        )))
    }

    /// Create an RSA key pair from a DER-encoded PKCS#1 `RSAPrivateKey`
    pub fn rsa_pkcs1(der: &[u8]) -> Result<Self> {
        let pair = RsaKeyPair::from_der(der)
            .map_err(|e| Error::KeyRejected(format!("RSA PKCS#1 key: {e}")))?;
        Ok(Key::Asymmetric(AsymmetricKey::RsaPrivate(
            RsaPrivateKey::new(pair),
        )))
    }

    /// Create an RSA public key from a DER-encoded PKCS#1 `RSAPublicKey`
    pub fn rsa_public(der: impl Into<Vec<u8>>) -> Self {
        Key::Asymmetric(AsymmetricKey::RsaPublic(RsaPublicKey::new(der.into())))
    }

    /// Create an ECDSA key pair on `curve` from a DER-encoded PKCS#8 document
    pub fn ecdsa_pkcs8(der: &[u8], curve: EcdsaCurve) -> Result<Self> {
        let pair = EcdsaKeyPair::from_pkcs8(curve.signing_algorithm(), der)
            .map_err(|e| Error::KeyRejected(format!("ECDSA {curve} PKCS#8 key: {e}")))?;
        Ok(Key::Asymmetric(AsymmetricKey::EcdsaPrivate(
            EcdsaPrivateKey::new(pair, curve),
        )))
    }

    /// Create an ECDSA public key from an uncompressed SEC1 point
    pub fn ecdsa_public(point: impl Into<Vec<u8>>, curve: EcdsaCurve) -> Self {
        Key::Asymmetric(AsymmetricKey::EcdsaPublic(EcdsaPublicKey::new(
            point.into(),
            curve,
        )))
    }

    /// Key class of this key
    pub fn key_class(&self) -> KeyClass {
        match self {
            Key::Symmetric(_) => KeyClass::Secret,
            Key::Asymmetric(_) => KeyClass::Asymmetric,
        }
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "Symmetric",
            Key::Asymmetric(AsymmetricKey::RsaPrivate(_)) => "RSA private",
            Key::Asymmetric(AsymmetricKey::RsaPublic(_)) => "RSA public",
            Key::Asymmetric(AsymmetricKey::EcdsaPrivate(_)) => "ECDSA private",
            Key::Asymmetric(AsymmetricKey::EcdsaPublic(_)) => "ECDSA public",
        }
    }

    fn mismatch(&self, algorithm: &str, expected: &str) -> Error {
        Error::KeyTypeMismatch {
            algorithm: algorithm.to_string(),
            expected_key_type: expected.to_string(),
            actual_key_type: self.key_type().to_string(),
        }
    }

    /// Get as symmetric key or return error
    pub fn as_symmetric(&self) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            _ => Err(self.mismatch("HMAC", "Symmetric")),
        }
    }

    /// Get as RSA private key or return error
    pub fn as_rsa_private(&self) -> Result<&RsaPrivateKey> {
        match self {
            Key::Asymmetric(AsymmetricKey::RsaPrivate(key)) => Ok(key),
            _ => Err(self.mismatch("RSA", "RSA private")),
        }
    }

    /// Get the RSA public key (PKCS#1 DER) of a private or public RSA key
    pub fn rsa_public_der(&self) -> Result<&[u8]> {
        match self {
            Key::Asymmetric(AsymmetricKey::RsaPrivate(key)) => Ok(key.public_der()),
            Key::Asymmetric(AsymmetricKey::RsaPublic(key)) => Ok(key.as_der()),
            _ => Err(self.mismatch("RSA", "RSA")),
        }
    }

    /// Get as ECDSA private key on `curve` or return error
    pub fn as_ecdsa_private(&self, curve: EcdsaCurve) -> Result<&EcdsaPrivateKey> {
        match self {
            Key::Asymmetric(AsymmetricKey::EcdsaPrivate(key)) if key.curve() == curve => Ok(key),
            _ => Err(self.mismatch(
                curve.algorithm().as_str(),
                &format!("ECDSA {curve} private"),
            )),
        }
    }

    /// Get the ECDSA public point of a private or public key on `curve`
    pub fn ecdsa_public_point(&self, curve: EcdsaCurve) -> Result<&[u8]> {
        match self {
            Key::Asymmetric(AsymmetricKey::EcdsaPrivate(key)) if key.curve() == curve => {
                Ok(key.public_point())
            }
            Key::Asymmetric(AsymmetricKey::EcdsaPublic(key)) if key.curve() == curve => {
                Ok(key.as_point())
            }
            _ => Err(self.mismatch(curve.algorithm().as_str(), &format!("ECDSA {curve}"))),
        }
    }
}

/// Symmetric key for HMAC algorithms
#[derive(Clone)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for SymmetricKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SymmetricKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<String> for SymmetricKey {
    fn from(secret: String) -> Self {
        Self::new(secret.into_bytes())
    }
}

impl From<&str> for SymmetricKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

/// Asymmetric key for RSA/ECDSA algorithms
#[derive(Debug, Clone)]
pub enum AsymmetricKey {
    /// RSA key pair
    RsaPrivate(RsaPrivateKey),

    /// RSA public key
    RsaPublic(RsaPublicKey),

    /// ECDSA key pair
    EcdsaPrivate(EcdsaPrivateKey),

    /// ECDSA public key
    EcdsaPublic(EcdsaPublicKey),
}

/// RSA key pair
#[derive(Clone)]
pub struct RsaPrivateKey {
    pair: Arc<RsaKeyPair>,
    public_der: Vec<u8>,
}

impl RsaPrivateKey {
    fn new(pair: RsaKeyPair) -> Self {
        let public_der = pair.public_key().as_ref().to_vec();
        Self {
            pair: Arc::new(pair),
            public_der,
        }
    }

    /// Get the key pair
    pub fn key_pair(&self) -> &RsaKeyPair {
        &self.pair
    }

    /// Get the DER-encoded PKCS#1 public key
    pub fn public_der(&self) -> &[u8] {
        &self.public_der
    }

    /// Modulus length in bytes (the signature length)
    pub fn modulus_len(&self) -> usize {
        self.pair.public_modulus_len()
    }
}

impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("bits", &(self.modulus_len() * 8))
            .finish_non_exhaustive()
    }
}

/// RSA public key (DER-encoded PKCS#1 `RSAPublicKey`)
#[derive(Debug, Clone)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

impl RsaPublicKey {
    /// Create a new RSA public key from DER bytes
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

/// ECDSA curve identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaCurve {
    /// P-256 (secp256r1) curve
    P256,
    /// P-384 (secp384r1) curve
    P384,
    /// P-521 (secp521r1) curve
    P521,
}

impl EcdsaCurve {
    /// Curve an ECDSA algorithm signs on, `None` for other algorithms
    pub fn for_algorithm(algorithm: AlgorithmId) -> Option<Self> {
        match algorithm {
            AlgorithmId::ES256 => Some(EcdsaCurve::P256),
            AlgorithmId::ES384 => Some(EcdsaCurve::P384),
            AlgorithmId::ES512 => Some(EcdsaCurve::P521),
            _ => None,
        }
    }

    /// The ECDSA algorithm bound to this curve
    pub fn algorithm(&self) -> AlgorithmId {
        match self {
            EcdsaCurve::P256 => AlgorithmId::ES256,
            EcdsaCurve::P384 => AlgorithmId::ES384,
            EcdsaCurve::P521 => AlgorithmId::ES512,
        }
    }

    pub(crate) fn signing_algorithm(&self) -> &'static EcdsaSigningAlgorithm {
        match self {
            EcdsaCurve::P256 => &ECDSA_P256_SHA256_FIXED_SIGNING,
            EcdsaCurve::P384 => &ECDSA_P384_SHA384_FIXED_SIGNING,
            EcdsaCurve::P521 => &ECDSA_P521_SHA512_FIXED_SIGNING,
        }
    }
}

impl std::fmt::Display for EcdsaCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EcdsaCurve::P256 => write!(f, "P-256"),
            EcdsaCurve::P384 => write!(f, "P-384"),
            EcdsaCurve::P521 => write!(f, "P-521"),
        }
    }
}

/// ECDSA key pair
#[derive(Clone)]
pub struct EcdsaPrivateKey {
    pair: Arc<EcdsaKeyPair>,
    curve: EcdsaCurve,
    public_point: Vec<u8>,
}

impl EcdsaPrivateKey {
    fn new(pair: EcdsaKeyPair, curve: EcdsaCurve) -> Self {
        let public_point = pair.public_key().as_ref().to_vec();
        Self {
            pair: Arc::new(pair),
            curve,
            public_point,
        }
    }

    /// Get the key pair
    pub fn key_pair(&self) -> &EcdsaKeyPair {
        &self.pair
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }

    /// Get the uncompressed public point
    pub fn public_point(&self) -> &[u8] {
        &self.public_point
    }
}

impl std::fmt::Debug for EcdsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcdsaPrivateKey")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

/// ECDSA public key (uncompressed SEC1 point)
#[derive(Debug, Clone)]
pub struct EcdsaPublicKey {
    point: Vec<u8>,
    curve: EcdsaCurve,
}

impl EcdsaPublicKey {
    /// Create a new ECDSA public key from point bytes
    pub fn new(point: Vec<u8>, curve: EcdsaCurve) -> Self {
        Self { point, curve }
    }

    /// Get the point bytes
    pub fn as_point(&self) -> &[u8] {
        &self.point
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }
}
