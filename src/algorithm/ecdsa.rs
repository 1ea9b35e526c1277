use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::{EcdsaCurve, Key};

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, UnparsedPublicKey, VerificationAlgorithm};

/// ES256 algorithm (ECDSA with P-256 and SHA-256)
pub struct ES256;

/// ES384 algorithm (ECDSA with P-384 and SHA-384)
pub struct ES384;

/// ES512 algorithm (ECDSA with P-521 and SHA-512)
pub struct ES512;

impl Algorithm for ES256 {
    fn name(&self) -> &'static str {
        "ES256"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(signing_input, key, EcdsaCurve::P256)
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_ecdsa(
            signing_input,
            signature,
            key,
            EcdsaCurve::P256,
            &signature::ECDSA_P256_SHA256_FIXED,
        )
    }
}

impl Algorithm for ES384 {
    fn name(&self) -> &'static str {
        "ES384"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(signing_input, key, EcdsaCurve::P384)
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_ecdsa(
            signing_input,
            signature,
            key,
            EcdsaCurve::P384,
            &signature::ECDSA_P384_SHA384_FIXED,
        )
    }
}

impl Algorithm for ES512 {
    fn name(&self) -> &'static str {
        "ES512"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(signing_input, key, EcdsaCurve::P521)
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_ecdsa(
            signing_input,
            signature,
            key,
            EcdsaCurve::P521,
            &signature::ECDSA_P521_SHA512_FIXED,
        )
    }
}

/// ECDSA signing in the fixed-length `r || s` format
fn sign_ecdsa(signing_input: &str, key: &Key, curve: EcdsaCurve) -> Result<Vec<u8>> {
    let ecdsa_key = key.as_ecdsa_private(curve)?;

    let signature = ecdsa_key
        .key_pair()
        .sign(&SystemRandom::new(), signing_input.as_bytes())
        .map_err(|_| Error::SignFailed(format!("ECDSA {curve} signing failed")))?;

    Ok(signature.as_ref().to_vec())
}

/// Generic ECDSA signature verification
fn verify_ecdsa(
    signing_input: &str,
    signature: &[u8],
    key: &Key,
    curve: EcdsaCurve,
    algorithm: &'static dyn VerificationAlgorithm,
) -> Result<()> {
    let public_point = key.ecdsa_public_point(curve)?;

    UnparsedPublicKey::new(algorithm, public_point)
        .verify(signing_input.as_bytes(), signature)
        .map_err(|_| Error::VerificationFailed)
}
