use serde_json::{Map, Value};

use crate::algorithm::{get_algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::limits::{
    MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_TOKEN_LENGTH,
};
use crate::token::registered::{check_claims, check_headers};
use crate::token::Token;
use crate::utils::base64url;

/// Verify a compact JWS token and return its headers and claims
///
/// The `alg` header must name `algorithm` and the signature must verify with
/// `key`. Every failure, from a malformed segment to a wrong key, is
/// [`Error::VerificationFailed`].
///
/// ```
/// use tkn::{parse, AlgorithmId, Error, Key, Token};
///
/// let key = Key::symmetric("s3cr3t-value");
/// let signed = Token::builder().claim("sub", "1337").build()?.sign(&key, AlgorithmId::HS256)?;
///
/// let token = parse(&signed, &key, AlgorithmId::HS256)?;
/// assert_eq!(token.subject(), Some("1337"));
///
/// let wrong = Key::symmetric("wrong");
/// assert_eq!(parse(&signed, &wrong, AlgorithmId::HS256), Err(Error::VerificationFailed));
/// # Ok::<(), tkn::Error>(())
/// ```
pub fn parse(token: impl AsRef<[u8]>, key: &Key, algorithm: AlgorithmId) -> Result<Token> {
    let bytes = token.as_ref();
    if bytes.len() > MAX_TOKEN_LENGTH {
        return Err(Error::VerificationFailed);
    }

    let token = std::str::from_utf8(bytes)
        .map_err(|_| Error::VerificationFailed)?
        .trim();

    // Split into three parts
    let mut parts = token.split('.');
    let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::VerificationFailed);
    };

    let headers = decode_object(header_b64, MAX_DECODED_HEADER_SIZE)?;
    match headers.get("alg") {
        Some(Value::String(alg)) if alg == algorithm.as_str() => {}
        _ => return Err(Error::VerificationFailed),
    }

    let signature = base64url::decode_bytes(signature_b64, MAX_DECODED_SIGNATURE_SIZE)?;
    let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];

    get_algorithm(&algorithm)
        .verify(signing_input, &signature, key)
        .map_err(|_| Error::VerificationFailed)?;

    let claims = decode_object(payload_b64, MAX_DECODED_PAYLOAD_SIZE)?;

    check_headers(&headers)
        .and_then(|_| check_claims(&claims))
        .map_err(|_| Error::VerificationFailed)?;

    Ok(Token::from_parts(headers, claims))
}

/// Decode a segment into a JSON object
fn decode_object(segment: &str, max_size: usize) -> Result<Map<String, Value>> {
    let bytes = base64url::decode_bytes(segment, max_size)?;
    serde_json::from_slice(&bytes).map_err(|_| Error::VerificationFailed)
}
