use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, RsaEncoding, UnparsedPublicKey, VerificationAlgorithm};

/// RS256 algorithm (RSA with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSA with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSA with SHA-512)
pub struct RS512;

/// PS256 algorithm (RSA-PSS with SHA-256)
pub struct PS256;

/// PS384 algorithm (RSA-PSS with SHA-384)
pub struct PS384;

/// PS512 algorithm (RSA-PSS with SHA-512)
pub struct PS512;

macro_rules! rsa_algorithm {
    ($name:ident, $encoding:expr, $verification:expr) => {
        impl Algorithm for $name {
            fn name(&self) -> &'static str {
                stringify!($name)
            }

            fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
                sign_rsa(signing_input, key, $encoding)
            }

            fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
                verify_rsa(signing_input, signature, key, $verification)
            }
        }
    };
}

rsa_algorithm!(RS256, &signature::RSA_PKCS1_SHA256, &signature::RSA_PKCS1_2048_8192_SHA256);
rsa_algorithm!(RS384, &signature::RSA_PKCS1_SHA384, &signature::RSA_PKCS1_2048_8192_SHA384);
rsa_algorithm!(RS512, &signature::RSA_PKCS1_SHA512, &signature::RSA_PKCS1_2048_8192_SHA512);
rsa_algorithm!(PS256, &signature::RSA_PSS_SHA256, &signature::RSA_PSS_2048_8192_SHA256);
rsa_algorithm!(PS384, &signature::RSA_PSS_SHA384, &signature::RSA_PSS_2048_8192_SHA384);
rsa_algorithm!(PS512, &signature::RSA_PSS_SHA512, &signature::RSA_PSS_2048_8192_SHA512);

/// Generic RSA signing with the private key pair
fn sign_rsa(signing_input: &str, key: &Key, encoding: &'static dyn RsaEncoding) -> Result<Vec<u8>> {
    let rsa_key = key.as_rsa_private()?;

    let mut signature = vec![0u8; rsa_key.modulus_len()];
    rsa_key
        .key_pair()
        .sign(
            encoding,
            &SystemRandom::new(),
            signing_input.as_bytes(),
            &mut signature,
        )
        .map_err(|_| Error::SignFailed("RSA signing failed".to_string()))?;

    Ok(signature)
}

/// Generic RSA signature verification
fn verify_rsa(
    signing_input: &str,
    signature: &[u8],
    key: &Key,
    algorithm: &'static dyn VerificationAlgorithm,
) -> Result<()> {
    let public_key_der = key.rsa_public_der()?;

    // Create an unparsed public key from DER
    let public_key = UnparsedPublicKey::new(algorithm, public_key_der);

    public_key
        .verify(signing_input.as_bytes(), signature)
        .map_err(|_| Error::VerificationFailed)
}
