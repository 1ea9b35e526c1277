use serde_json::Value;

use crate::algorithm::{get_algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::token::{parsed, Token};
use crate::utils::base64url;

/// A signed token in JWS compact serialization
///
/// `base64url(header).base64url(payload).base64url(signature)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedToken(String);

impl SignedToken {
    /// Get the compact serialization
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the compact serialization as bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consume into the compact serialization
    pub fn into_string(self) -> String {
        self.0
    }

    /// Verify the token with `key` and return its headers and claims
    pub fn verify(&self, key: &Key, algorithm: AlgorithmId) -> Result<Token> {
        parsed::parse(self.as_bytes(), key, algorithm)
    }
}

impl std::fmt::Display for SignedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SignedToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for SignedToken {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<SignedToken> for String {
    fn from(token: SignedToken) -> Self {
        token.0
    }
}

/// Serialize and sign a token
///
/// Segments larger than the verifier accepts are refused, so every signed
/// token parses back with the same key.
pub(crate) fn sign(token: &Token, key: &Key, algorithm: AlgorithmId) -> Result<SignedToken> {
    let mut header = token.headers().clone();
    header.insert("alg".to_string(), Value::from(algorithm.as_str()));
    header
        .entry("typ")
        .or_insert_with(|| Value::from("JWT"));

    let header_json = serde_json::to_vec(&header)
        .map_err(|e| Error::SignFailed(format!("failed to serialize header: {e}")))?;
    let payload_json = serde_json::to_vec(token.claims())
        .map_err(|e| Error::SignFailed(format!("failed to serialize payload: {e}")))?;

    if header_json.len() > MAX_DECODED_HEADER_SIZE {
        return Err(Error::SignFailed(format!(
            "header is {} bytes, limit is {MAX_DECODED_HEADER_SIZE}",
            header_json.len()
        )));
    }
    if payload_json.len() > MAX_DECODED_PAYLOAD_SIZE {
        return Err(Error::SignFailed(format!(
            "payload is {} bytes, limit is {MAX_DECODED_PAYLOAD_SIZE}",
            payload_json.len()
        )));
    }

    let signing_input = format!(
        "{}.{}",
        base64url::encode_bytes(&header_json),
        base64url::encode_bytes(&payload_json)
    );

    let signer = get_algorithm(&algorithm);
    let signature = signer
        .sign(&signing_input, key)
        .map_err(|e| match e {
            Error::SignFailed(_) => e,
            other => Error::SignFailed(format!("{}: {other}", signer.name())),
        })?;

    let compact = format!("{signing_input}.{}", base64url::encode_bytes(&signature));
    if compact.len() > MAX_TOKEN_LENGTH {
        return Err(Error::SignFailed(format!(
            "token is {} bytes, limit is {MAX_TOKEN_LENGTH}",
            compact.len()
        )));
    }

    Ok(SignedToken(compact))
}
