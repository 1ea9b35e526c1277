//! Base64URL encoding/decoding per RFC 4648
//!
//! Thin wrapper around the `base64` crate: no padding, URL-safe alphabet,
//! and a size limit on everything decoded.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes with maximum size limit
///
/// Decoding failures are reported as [`Error::VerificationFailed`]; this is
/// only ever used on untrusted token segments.
pub(crate) fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    // 4 characters carry 3 bytes; reject before allocating
    if input.len() / 4 * 3 > max_size {
        return Err(Error::VerificationFailed);
    }

    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| Error::VerificationFailed)?;

    if result.len() > max_size {
        return Err(Error::VerificationFailed);
    }

    Ok(result)
}
